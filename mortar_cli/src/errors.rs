use mortar_engine::logging::{codes, Code};
use mortar_engine::config::ConfigError;
use mortar_engine::ConversionError;
use mortar_host::{api::ApiError, HostError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Conversion of '{}' failed: {source}", .path.display())]
    Conversion {
        path: PathBuf,
        #[source]
        source: ConversionError,
    },

    #[error("Input path does not exist: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk '{}': {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CliError {
    pub fn code(&self) -> Code {
        match self {
            CliError::Host(e) => e.code(),
            CliError::Api(e) => e.code(),
            CliError::Conversion { source, .. } => source.code(),
            _ => codes::system::INTERNAL_ERROR,
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
