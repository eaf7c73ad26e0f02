use super::config::ConfigError;
use crate::core::models::crystal::DatasetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Crystal dataset error: {source}")]
    Dataset {
        #[from]
        source: DatasetError,
    },

    #[error("Species '{requested}' is unknown and its fallback '{fallback}' is not in the table")]
    UnknownSpecies { requested: String, fallback: String },

    #[error("No Langmuir constants cached for cage type '{cage}'")]
    MissingLangmuirConstant { cage: String },
}
