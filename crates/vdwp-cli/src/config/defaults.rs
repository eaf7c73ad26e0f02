use vdwp::core::forcefield::params::DEFAULT_SPECIES;
use vdwp::core::models::crystal::{CS1, CS2};
use vdwp::engine::config::DEFAULT_RESOLUTION;

pub struct DefaultsConfig {
    pub species: [String; 3],
    pub pressure_bar: f64,
    pub temperature_k: f64,
    pub resolution: usize,
    pub structure_a: String,
    pub structure_b: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            species: DEFAULT_SPECIES.map(String::from),
            pressure_bar: 10.0,
            temperature_k: 273.15,
            resolution: DEFAULT_RESOLUTION,
            structure_a: CS1.to_string(),
            structure_b: CS2.to_string(),
        }
    }
}
