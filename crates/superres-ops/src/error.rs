//! Error types for degradation operators.

use std::path::PathBuf;
use superres_core::{Error, ErrorKind};
use thiserror::Error;

/// Error type for operator and model operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Failure reported by the image container.
    #[error(transparent)]
    Image(#[from] Error),

    /// Invalid operator parameter (kernel size, sigma, scale...).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Vector or matrix dimensions do not agree.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Model configuration file does not exist.
    #[error("config file not found: {path}")]
    ConfigNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// I/O error reading a config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl OpsError {
    /// Maps this error onto the image error taxonomy, where it fits.
    ///
    /// Configuration and I/O failures have no counterpart and return `None`.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Image(e) => Some(e.kind()),
            Self::InvalidParameter(_) => Some(ErrorKind::InvalidArgument),
            Self::DimensionMismatch(_) => Some(ErrorKind::SizeMismatch),
            Self::ConfigNotFound { .. } | Self::Yaml(_) | Self::Io(_) => None,
        }
    }
}

/// Result type for operator and model operations.
pub type OpsResult<T> = Result<T, OpsError>;
