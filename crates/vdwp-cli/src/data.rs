use crate::error::{CliError, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};
use vdwp::core::forcefield::params::InteractionTable;
use vdwp::core::models::crystal::CrystalDataset;

/// The interaction table and crystal dataset a command evaluates the model with.
#[derive(Debug, Clone)]
pub struct ModelData {
    pub table: InteractionTable,
    pub dataset: CrystalDataset,
}

impl ModelData {
    /// Built-in data, replaced piecewise by the files given.
    pub fn load(gas_table: Option<&Path>, crystals: Option<&Path>) -> Result<Self> {
        let table = match gas_table {
            Some(path) => load_gas_table(path)?,
            None => {
                debug!("Using the built-in guest species table.");
                InteractionTable::default()
            }
        };
        let dataset = match crystals {
            Some(path) => load_crystals(path)?,
            None => {
                debug!("Using the built-in CS1/CS2 crystal dataset.");
                CrystalDataset::default()
            }
        };
        Ok(Self { table, dataset })
    }
}

pub fn load_gas_table(path: &Path) -> Result<InteractionTable> {
    info!("Loading guest species table from {:?}", path);
    let raw = read(path)?;
    let table = InteractionTable::parse(&raw);
    if table.is_empty() {
        warn!(
            "No usable species rows in {:?}; every lookup will fail.",
            path
        );
    } else {
        info!("Loaded {} guest species.", table.len());
    }
    Ok(table)
}

pub fn load_crystals(path: &Path) -> Result<CrystalDataset> {
    info!("Loading crystal dataset from {:?}", path);
    let raw = read(path)?;
    let dataset: CrystalDataset = toml::from_str(&raw).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    dataset.validate().map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    debug!(
        structures = dataset.structures.len(),
        cages = dataset.cages.len(),
        "Crystal dataset loaded."
    );
    Ok(dataset)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| CliError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}
