use super::chemical_potential::chemical_potential_difference;
use crate::core::models::grid::{GridIndex, GridPoint, grid_cell, project, simplex_point_count};
use crate::engine::cache::LangmuirCache;
use crate::engine::context::SurfaceContext;
use crate::engine::error::EngineError;
use crate::engine::progress::Progress;
use crate::engine::surface::SurfaceRow;
use tracing::{info, instrument, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Evaluates every cell of the `(n+1)×(n+1)` index square, row `i` by column `j`.
#[instrument(skip_all, name = "simplex_sweep_task")]
pub fn run(
    context: &SurfaceContext,
    cache: &LangmuirCache,
) -> Result<Vec<SurfaceRow>, EngineError> {
    let resolution = context.config.resolution;
    info!(
        resolution,
        points = simplex_point_count(resolution),
        "Sweeping the composition simplex."
    );
    context.reporter.report(Progress::SweepStart {
        rows: resolution as u64 + 1,
    });

    #[cfg(not(feature = "parallel"))]
    let rows_iter = 0..=resolution;

    #[cfg(feature = "parallel")]
    let rows_iter = (0..=resolution).into_par_iter();

    let rows: Vec<Result<SurfaceRow, EngineError>> = rows_iter
        .map(|i| {
            let row = evaluate_row(i, context, cache);
            context.reporter.report(Progress::RowDone);
            row
        })
        .collect();

    let rows = rows.into_iter().collect::<Result<Vec<_>, _>>()?;
    context.reporter.report(Progress::SweepFinish);
    Ok(rows)
}

fn evaluate_row(
    i: usize,
    context: &SurfaceContext,
    cache: &LangmuirCache,
) -> Result<SurfaceRow, EngineError> {
    let resolution = context.config.resolution;
    (0..=resolution)
        .map(|j| {
            grid_cell(i, j, resolution)
                .map(|index| evaluate_point(index, context, cache))
                .transpose()
        })
        .collect()
}

fn evaluate_point(
    index: GridIndex,
    context: &SurfaceContext,
    cache: &LangmuirCache,
) -> Result<GridPoint, EngineError> {
    let fractions = index.fractions(context.config.resolution);
    let delta_mu = chemical_potential_difference(
        context.structure_a,
        context.structure_b,
        cache,
        &fractions,
        context.pressure_pa(),
        context.temperature(),
    )?;
    let (x, y) = project(&fractions);
    trace!(i = index.i, j = index.j, k = index.k, delta_mu, "Grid point.");

    Ok(GridPoint {
        index,
        fractions,
        delta_mu,
        x,
        y,
    })
}
