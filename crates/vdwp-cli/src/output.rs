use crate::cli::OutputFormat;
use crate::error::{CliError, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;
use vdwp::engine::surface::EnergySurface;

const CSV_HEADER: [&str; 6] = ["x", "y", "z", "frac_a", "frac_b", "frac_c"];

/// Writes `surface` to `path`, or to stdout when no path is given.
pub fn write_surface(
    surface: &EnergySurface,
    format: OutputFormat,
    pretty: bool,
    path: Option<&Path>,
) -> Result<()> {
    match path {
        Some(path) => {
            info!("Writing surface ({:?}) to {:?}", format, path);
            let file = File::create(path).map_err(|e| CliError::FileWrite {
                path: path.to_path_buf(),
                source: e,
            })?;
            let mut writer = BufWriter::new(file);
            write_to(surface, format, pretty, &mut writer)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_to(surface, format, pretty, &mut writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}

pub fn write_to<W: Write>(
    surface: &EnergySurface,
    format: OutputFormat,
    pretty: bool,
    writer: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(surface, pretty, writer),
        OutputFormat::Csv => write_csv(surface, writer),
    }
}

fn write_json<W: Write>(surface: &EnergySurface, pretty: bool, writer: &mut W) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, surface)?;
    } else {
        serde_json::to_writer(&mut *writer, surface)?;
    }
    writeln!(writer)?;
    Ok(())
}

/// One row per valid point in sweep order; absent cells never appear.
fn write_csv<W: Write>(surface: &EnergySurface, writer: &mut W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for point in surface.points() {
        let [frac_a, frac_b, frac_c] = point.fractions;
        wtr.write_record(&[
            point.x.to_string(),
            point.y.to_string(),
            point.delta_mu.to_string(),
            frac_a.to_string(),
            frac_b.to_string(),
            frac_c.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
