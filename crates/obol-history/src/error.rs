//! History error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("Invalid base path '{base}': {reason}")]
    InvalidBase { base: String, reason: String },

    #[error("Location '{location}' is outside base '{base}'")]
    OutsideBase { location: String, base: String },

    #[error("Invalid location: {0}")]
    InvalidLocation(String),
}
