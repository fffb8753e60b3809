//! Error types for Folio
//!
//! Uses `thiserror` for library errors. The stage/visibility core is
//! infallible; errors only come from configuration, the contact hand-off and I/O.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::ContactError;

/// Result type alias for Folio operations
pub type FolioResult<T> = Result<T, FolioError>;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Config value is out of range
    #[error("invalid setting '{key}': {message}")]
    InvalidSetting { key: String, message: String },

    /// Explicitly requested config file does not exist
    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Contact form rejected
    #[error(transparent)]
    Contact(#[from] ContactError),

    /// Mail client could not be launched
    #[error("could not open '{link}': {message}")]
    OpenLink { link: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FolioError {
    pub(crate) fn setting(key: &str, message: impl Into<String>) -> Self {
        FolioError::InvalidSetting {
            key: key.to_string(),
            message: message.into(),
        }
    }
}
