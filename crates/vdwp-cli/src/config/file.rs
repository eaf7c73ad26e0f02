use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileSpeciesConfig {
    pub a: Option<String>,
    pub b: Option<String>,
    pub c: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConditionsConfig {
    pub pressure_bar: Option<f64>,
    pub temperature_k: Option<f64>,
    pub resolution: Option<usize>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileStructuresConfig {
    pub a: Option<String>,
    pub b: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileDataConfig {
    pub gas_table: Option<PathBuf>,
    pub crystals: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub species: Option<FileSpeciesConfig>,
    pub conditions: Option<FileConditionsConfig>,
    pub structures: Option<FileStructuresConfig>,
    pub data: Option<FileDataConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| CliError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        config.resolve_data_paths(path.parent().unwrap_or_else(|| Path::new("")));
        Ok(config)
    }

    /// Relative data paths in a config file are taken relative to that file.
    fn resolve_data_paths(&mut self, base: &Path) {
        if let Some(data) = self.data.as_mut() {
            for path in [data.gas_table.as_mut(), data.crystals.as_mut()]
                .into_iter()
                .flatten()
            {
                if path.is_relative() {
                    *path = base.join(&*path);
                }
            }
        }
    }
}
