//! Router error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouterError {
    #[error("Invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Duplicate route name: {0}")]
    DuplicateName(String),

    #[error("Route patterns collide: '{first}' and '{second}'")]
    PatternCollision { first: String, second: String },

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Missing parameter '{param}' for route '{route}'")]
    MissingParam { route: String, param: String },

    #[error("Empty value for parameter '{param}' of route '{route}'")]
    EmptyParam { route: String, param: String },
}
