use crate::cli::SpeciesArgs;
use crate::data::load_gas_table;
use crate::error::Result;
use std::io::{self, Write};
use vdwp::core::forcefield::params::InteractionTable;

pub fn run(args: SpeciesArgs) -> Result<()> {
    let table = match &args.gas_table {
        Some(path) => load_gas_table(path)?,
        None => InteractionTable::default(),
    };

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    write_species(&table, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Guest/host parameters after combination with the host water model.
pub fn write_species<W: Write>(table: &InteractionTable, writer: &mut W) -> Result<()> {
    let host = table.host();
    writeln!(
        writer,
        "# combined with host sigma = {} A, eps/k = {} K",
        host.sigma, host.eps_over_k
    )?;
    writeln!(writer, "{:<16}{:>12}{:>12}", "species", "sigma", "eps/k")?;
    for (name, lj) in table.iter() {
        writeln!(
            writer,
            "{:<16}{:>12.4}{:>12.4}",
            name, lj.sigma, lj.eps_over_k
        )?;
    }
    Ok(())
}
