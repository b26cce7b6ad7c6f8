//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Router error: {0}")]
    Router(#[from] obol_router::RouterError),

    #[error("History error: {0}")]
    History(#[from] obol_history::HistoryError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Generated path did not resolve: {0}")]
    UnresolvedPath(String),
}
