use super::config::SurfaceConfig;
use super::error::EngineError;
use super::progress::ProgressReporter;
use crate::core::constants::PASCALS_PER_BAR;
use crate::core::forcefield::params::{DEFAULT_SPECIES, EffectiveInteraction, InteractionTable};
use crate::core::models::crystal::{CrystalDataset, CrystalStructure};
use tracing::debug;

/// A requested species after lookup in the interaction table.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSpecies {
    pub requested: String,
    pub name: String,
    pub interaction: EffectiveInteraction,
}

impl ResolvedSpecies {
    pub fn is_fallback(&self) -> bool {
        self.requested != self.name
    }
}

/// Everything a surface run reads, resolved and validated once up front.
pub struct SurfaceContext<'a> {
    pub dataset: &'a CrystalDataset,
    pub reporter: &'a ProgressReporter<'a>,
    pub config: &'a SurfaceConfig,
    pub species: [ResolvedSpecies; 3],
    pub structure_a: &'a CrystalStructure,
    pub structure_b: &'a CrystalStructure,
    /// Cage types present in either compared structure.
    pub cage_types: Vec<String>,
}

impl<'a> SurfaceContext<'a> {
    pub fn new(
        table: &InteractionTable,
        dataset: &'a CrystalDataset,
        reporter: &'a ProgressReporter<'a>,
        config: &'a SurfaceConfig,
    ) -> Result<Self, EngineError> {
        dataset.validate()?;
        let structure_a = dataset.structure(&config.structure_a)?;
        let structure_b = dataset.structure(&config.structure_b)?;
        let cage_types =
            dataset.cage_types_of(&[config.structure_a.as_str(), config.structure_b.as_str()])?;

        let species = [
            resolve_slot(table, &config.species[0], DEFAULT_SPECIES[0])?,
            resolve_slot(table, &config.species[1], DEFAULT_SPECIES[1])?,
            resolve_slot(table, &config.species[2], DEFAULT_SPECIES[2])?,
        ];
        debug!(
            a = %species[0].name,
            b = %species[1].name,
            c = %species[2].name,
            cages = ?cage_types,
            "Surface context resolved."
        );

        Ok(Self {
            dataset,
            reporter,
            config,
            species,
            structure_a,
            structure_b,
            cage_types,
        })
    }

    pub fn pressure_pa(&self) -> f64 {
        self.config.conditions.pressure_bar * PASCALS_PER_BAR
    }

    pub fn temperature(&self) -> f64 {
        self.config.conditions.temperature_k
    }
}

fn resolve_slot(
    table: &InteractionTable,
    requested: &str,
    fallback: &str,
) -> Result<ResolvedSpecies, EngineError> {
    let (name, interaction) = table.resolve(requested, fallback).ok_or_else(|| {
        EngineError::UnknownSpecies {
            requested: requested.to_string(),
            fallback: fallback.to_string(),
        }
    })?;
    Ok(ResolvedSpecies {
        requested: requested.to_string(),
        name: name.to_string(),
        interaction,
    })
}
