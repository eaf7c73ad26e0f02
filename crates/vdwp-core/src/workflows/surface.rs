use crate::core::forcefield::params::InteractionTable;
use crate::core::models::crystal::CrystalDataset;
use crate::engine::cache::LangmuirCache;
use crate::engine::config::{SurfaceConfig, SurfaceConfigBuilder};
use crate::engine::context::SurfaceContext;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::surface::EnergySurface;
use crate::engine::tasks::{langmuir_table, sweep};
use tracing::{info, instrument};

/// Langmuir constants of one run, labelled for reporting.
#[derive(Debug, Clone)]
pub struct LangmuirTable {
    /// Species actually used for each slot, after fallback.
    pub species: [String; 3],
    pub cage_types: Vec<String>,
    pub constants: LangmuirCache,
}

/// Computes the surface for three species with the built-in interaction table and crystal
/// dataset, comparing CS1 against CS2.
///
/// Unknown species names are replaced by the slot defaults `Methane`, `Ethane` and `CF4`.
/// Pressure is in bar, temperature in K; `resolution` is the number of grid intervals per
/// simplex edge ([`crate::engine::config::DEFAULT_RESOLUTION`] is the usual choice).
pub fn generate(
    species_a: &str,
    species_b: &str,
    species_c: &str,
    pressure_bar: f64,
    temperature_k: f64,
    resolution: usize,
) -> Result<EnergySurface, EngineError> {
    let config = SurfaceConfigBuilder::new()
        .species(species_a, species_b, species_c)
        .pressure_bar(pressure_bar)
        .temperature_k(temperature_k)
        .resolution(resolution)
        .build()?;
    let table = InteractionTable::default();
    let dataset = CrystalDataset::default();
    run(&table, &dataset, &config, &ProgressReporter::new())
}

#[instrument(skip_all, name = "surface_workflow")]
pub fn run(
    table: &InteractionTable,
    dataset: &CrystalDataset,
    config: &SurfaceConfig,
    reporter: &ProgressReporter,
) -> Result<EnergySurface, EngineError> {
    reporter.report(Progress::StageStart {
        name: "Preparation",
    });
    let context = SurfaceContext::new(table, dataset, reporter, config)?;
    announce_fallbacks(&context);
    info!(
        species = ?config.species,
        pressure_bar = config.conditions.pressure_bar,
        temperature_k = config.conditions.temperature_k,
        structure_a = %config.structure_a,
        structure_b = %config.structure_b,
        "Starting surface workflow."
    );
    reporter.report(Progress::StageFinish);

    let cache = langmuir_table::run(&context)?;
    let rows = sweep::run(&context, &cache)?;

    let species = context.species.clone().map(|s| s.name);
    let surface = EnergySurface::from_rows(species, config.resolution, rows);

    info!(points = surface.flat.z.len(), "Surface workflow complete.");
    Ok(surface)
}

/// Langmuir constants only, for the species and temperature of `config`.
#[instrument(skip_all, name = "langmuir_workflow")]
pub fn langmuir_constants(
    table: &InteractionTable,
    dataset: &CrystalDataset,
    config: &SurfaceConfig,
    reporter: &ProgressReporter,
) -> Result<LangmuirTable, EngineError> {
    let context = SurfaceContext::new(table, dataset, reporter, config)?;
    announce_fallbacks(&context);
    let constants = langmuir_table::run(&context)?;
    Ok(LangmuirTable {
        species: context.species.clone().map(|s| s.name),
        cage_types: context.cage_types.clone(),
        constants,
    })
}

fn announce_fallbacks(context: &SurfaceContext) {
    for species in context.species.iter().filter(|s| s.is_fallback()) {
        context.reporter.report(Progress::Note(format!(
            "Unknown species '{}' replaced by '{}'.",
            species.requested, species.name
        )));
    }
}
