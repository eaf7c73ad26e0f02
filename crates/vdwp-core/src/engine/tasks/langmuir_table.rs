use crate::core::forcefield::langmuir::langmuir_constant;
use crate::core::models::crystal::DatasetError;
use crate::engine::cache::LangmuirCache;
use crate::engine::context::SurfaceContext;
use crate::engine::error::EngineError;
use crate::engine::progress::Progress;
use tracing::{debug, info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug)]
struct WorkUnit<'a> {
    cage_type: &'a str,
    slot: usize,
}

/// Computes the Langmuir constant of every cage type of the compared structures for each
/// of the three species slots. This is the only place the integrator runs, so the cost is
/// independent of the grid resolution.
#[instrument(skip_all, name = "langmuir_table_task")]
pub fn run(context: &SurfaceContext) -> Result<LangmuirCache, EngineError> {
    context.reporter.report(Progress::StageStart {
        name: "Langmuir constants",
    });

    let work_list: Vec<WorkUnit> = context
        .cage_types
        .iter()
        .flat_map(|cage_type| {
            (0..context.species.len()).map(move |slot| WorkUnit {
                cage_type: cage_type.as_str(),
                slot,
            })
        })
        .collect();

    #[cfg(not(feature = "parallel"))]
    let iterator = work_list.iter();

    #[cfg(feature = "parallel")]
    let iterator = work_list.par_iter();

    let results: Vec<Result<(&WorkUnit, f64), EngineError>> = iterator
        .map(|unit| compute_unit(unit, context).map(|value| (unit, value)))
        .collect();

    let mut cache = LangmuirCache::new();
    for result in results {
        let (unit, value) = result?;
        debug!(
            cage = unit.cage_type,
            species = %context.species[unit.slot].name,
            langmuir_pa_inv = value,
            "Langmuir constant."
        );
        cache.insert(unit.cage_type, unit.slot, value);
    }

    info!(
        cached_pairs = cache.len(),
        temperature_k = context.temperature(),
        "Langmuir constants computed."
    );
    context.reporter.report(Progress::StageFinish);
    Ok(cache)
}

fn compute_unit(unit: &WorkUnit, context: &SurfaceContext) -> Result<f64, EngineError> {
    let geometry = context.dataset.cage(unit.cage_type).ok_or_else(|| {
        DatasetError::MissingCageGeometry {
            structure: format!(
                "{}/{}",
                context.config.structure_a, context.config.structure_b
            ),
            cage: unit.cage_type.to_string(),
        }
    })?;
    let lj = context.species[unit.slot].interaction;
    Ok(langmuir_constant(
        context.temperature(),
        geometry.radius,
        geometry.coordination,
        lj.sigma,
        lj.eps_over_k,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forcefield::params::InteractionTable;
    use crate::core::models::crystal::CrystalDataset;
    use crate::engine::config::SurfaceConfigBuilder;
    use crate::engine::progress::ProgressReporter;

    #[test]
    fn table_holds_every_cage_and_slot() {
        let table = InteractionTable::default();
        let dataset = CrystalDataset::default();
        let reporter = ProgressReporter::new();
        let config = SurfaceConfigBuilder::new()
            .species("Methane", "Ethane", "CF4")
            .pressure_bar(10.0)
            .temperature_k(273.15)
            .build()
            .unwrap();
        let context = SurfaceContext::new(&table, &dataset, &reporter, &config).unwrap();

        let cache = run(&context).unwrap();
        assert_eq!(cache.len(), 9);
        for cage in ["12", "14", "16"] {
            for slot in 0..3 {
                let c = cache.get(cage, slot).unwrap();
                assert!(c > 0.0 && c.is_finite());
            }
        }
        let methane_small = cache.get("12", 0).unwrap();
        assert!((methane_small - 7.895384875174607e-7).abs() < 1e-15);
    }

    #[test]
    fn repeated_species_get_identical_constants() {
        let table = InteractionTable::default();
        let dataset = CrystalDataset::default();
        let reporter = ProgressReporter::new();
        let config = SurfaceConfigBuilder::new()
            .species("Xe", "Xe", "N2")
            .pressure_bar(1.0)
            .temperature_k(260.0)
            .build()
            .unwrap();
        let context = SurfaceContext::new(&table, &dataset, &reporter, &config).unwrap();

        let cache = run(&context).unwrap();
        assert_eq!(cache.get("14", 0), cache.get("14", 1));
    }
}
