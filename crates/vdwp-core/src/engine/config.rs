use crate::core::forcefield::params::DEFAULT_SPECIES;
use crate::core::models::crystal::{CS1, CS2};
use thiserror::Error;

/// Samples per simplex edge when the caller does not choose a resolution.
pub const DEFAULT_RESOLUTION: usize = 60;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for {name}: {value} ({reason})")]
    InvalidValue {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("The two compared structures must differ, got '{0}' twice")]
    SameStructure(String),
}

/// Operating conditions of one surface evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Conditions {
    pub pressure_bar: f64,
    pub temperature_k: f64,
}

/// Fully validated input of a surface run.
///
/// `species` are the requested names in slot order; unknown names are replaced by
/// [`DEFAULT_SPECIES`] of the same slot when the run resolves them.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceConfig {
    pub species: [String; 3],
    pub conditions: Conditions,
    pub resolution: usize,
    pub structure_a: String,
    pub structure_b: String,
}

#[derive(Default)]
pub struct SurfaceConfigBuilder {
    species: [Option<String>; 3],
    pressure_bar: Option<f64>,
    temperature_k: Option<f64>,
    resolution: Option<usize>,
    structure_a: Option<String>,
    structure_b: Option<String>,
}

impl SurfaceConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn species(mut self, a: &str, b: &str, c: &str) -> Self {
        self.species = [Some(a.to_string()), Some(b.to_string()), Some(c.to_string())];
        self
    }
    pub fn species_a(mut self, name: &str) -> Self {
        self.species[0] = Some(name.to_string());
        self
    }
    pub fn species_b(mut self, name: &str) -> Self {
        self.species[1] = Some(name.to_string());
        self
    }
    pub fn species_c(mut self, name: &str) -> Self {
        self.species[2] = Some(name.to_string());
        self
    }
    pub fn pressure_bar(mut self, pressure: f64) -> Self {
        self.pressure_bar = Some(pressure);
        self
    }
    pub fn temperature_k(mut self, temperature: f64) -> Self {
        self.temperature_k = Some(temperature);
        self
    }
    pub fn resolution(mut self, resolution: usize) -> Self {
        self.resolution = Some(resolution);
        self
    }
    pub fn structures(mut self, a: &str, b: &str) -> Self {
        self.structure_a = Some(a.to_string());
        self.structure_b = Some(b.to_string());
        self
    }

    /// Unset species fall back to the slot defaults, unset structures to CS1 vs CS2 and an
    /// unset resolution to [`DEFAULT_RESOLUTION`]. Pressure and temperature are required.
    pub fn build(self) -> Result<SurfaceConfig, ConfigError> {
        let pressure_bar = self
            .pressure_bar
            .ok_or(ConfigError::MissingParameter("pressure_bar"))?;
        let temperature_k = self
            .temperature_k
            .ok_or(ConfigError::MissingParameter("temperature_k"))?;
        let resolution = self.resolution.unwrap_or(DEFAULT_RESOLUTION);

        if !pressure_bar.is_finite() || pressure_bar < 0.0 {
            return Err(ConfigError::InvalidValue {
                name: "pressure_bar",
                value: pressure_bar,
                reason: "must be finite and non-negative",
            });
        }
        if !temperature_k.is_finite() || temperature_k <= 0.0 {
            return Err(ConfigError::InvalidValue {
                name: "temperature_k",
                value: temperature_k,
                reason: "must be finite and positive",
            });
        }
        if resolution == 0 {
            return Err(ConfigError::InvalidValue {
                name: "resolution",
                value: 0.0,
                reason: "must be at least 1",
            });
        }

        let structure_a = self.structure_a.unwrap_or_else(|| CS1.to_string());
        let structure_b = self.structure_b.unwrap_or_else(|| CS2.to_string());
        if structure_a == structure_b {
            return Err(ConfigError::SameStructure(structure_a));
        }

        let [a, b, c] = self.species;
        let species = [
            a.unwrap_or_else(|| DEFAULT_SPECIES[0].to_string()),
            b.unwrap_or_else(|| DEFAULT_SPECIES[1].to_string()),
            c.unwrap_or_else(|| DEFAULT_SPECIES[2].to_string()),
        ];

        Ok(SurfaceConfig {
            species,
            conditions: Conditions {
                pressure_bar,
                temperature_k,
            },
            resolution,
            structure_a,
            structure_b,
        })
    }
}
