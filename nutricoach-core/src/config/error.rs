use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("failed to read config from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("field 'model' must not be empty")]
    EmptyModel,

    #[error("[{section}] temperature {value} is outside 0.0..=2.0")]
    InvalidTemperature { section: &'static str, value: f32 },

    #[error("[server] addr '{addr}' is not a socket address")]
    InvalidAddress { addr: String },
}
