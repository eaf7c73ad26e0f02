use crate::cli::SurfaceArgs;
use crate::config::build_config;
use crate::data::ModelData;
use crate::error::Result;
use crate::output;
use crate::utils::progress::CliProgressHandler;
use tracing::{info, warn};
use vdwp::{engine::progress::ProgressReporter, workflows};

pub fn run(args: SurfaceArgs, quiet: bool) -> Result<()> {
    info!("Merging configuration from defaults, file and CLI arguments...");
    let app_config = build_config(&args.model, args.resolution)?;
    let data = ModelData::load(
        app_config.gas_table_path.as_deref(),
        app_config.crystals_path.as_deref(),
    )?;

    let progress_handler = if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let config = &app_config.core_config;
    if !quiet {
        eprintln!(
            "Computing {} - {} surface for {} / {} / {} at {} bar, {} K ({} intervals)...",
            config.structure_a,
            config.structure_b,
            config.species[0],
            config.species[1],
            config.species[2],
            config.conditions.pressure_bar,
            config.conditions.temperature_k,
            config.resolution
        );
    }
    info!("Invoking the core surface workflow...");
    let surface = workflows::surface::run(&data.table, &data.dataset, config, &reporter)?;

    match surface.z_range() {
        Some((min, max)) => info!(
            points = surface.flat.z.len(),
            "Surface spans {:.6} to {:.6} kJ/mol.", min, max
        ),
        None => warn!("Surface has no valid points."),
    }

    output::write_surface(&surface, args.format, args.pretty, args.output.as_deref())?;

    if let Some(path) = &args.output {
        if !quiet {
            eprintln!(
                "✓ Surface ({} points) written to: {}",
                surface.flat.z.len(),
                path.display()
            );
        }
    }
    Ok(())
}
