use crate::cli::LangmuirArgs;
use crate::config::build_config;
use crate::data::ModelData;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use std::io::{self, Write};
use tracing::info;
use vdwp::{
    engine::progress::ProgressReporter,
    workflows::{self, surface::LangmuirTable},
};

pub fn run(args: LangmuirArgs, quiet: bool) -> Result<()> {
    let app_config = build_config(&args.model, None)?;
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

    info!("Computing Langmuir constants...");
    let table = workflows::surface::langmuir_constants(
        &data.table,
        &data.dataset,
        &app_config.core_config,
        &reporter,
    )?;

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    writeln!(
        writer,
        "# T = {} K, C in Pa^-1",
        app_config.core_config.conditions.temperature_k
    )?;
    write_table(&table, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// One line per cage type, one column per guest slot.
pub fn write_table<W: Write>(table: &LangmuirTable, writer: &mut W) -> Result<()> {
    writeln!(
        writer,
        "{:<8}{:>16}{:>16}{:>16}",
        "cage", table.species[0], table.species[1], table.species[2]
    )?;
    for cage_type in &table.cage_types {
        if let Some([a, b, c]) = table.constants.row(cage_type) {
            writeln!(writer, "{:<8}{:>16.6e}{:>16.6e}{:>16.6e}", cage_type, a, b, c)?;
        }
    }
    Ok(())
}
