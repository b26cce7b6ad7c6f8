//! Obol Core
//!
//! Coordination layer for the donation app's client-side navigation:
//! the navigator owns the immutable route table and a history-mode
//! provider, and is the sole mechanism for declarative (by path) and
//! programmatic (by name) navigation.

mod config;
mod error;
mod navigator;
mod page;

pub use config::{Config, BASE_URL_VAR};
pub use error::CoreError;
pub use navigator::{Destination, Navigator, Outcome, Routes};
pub use page::{Page, PageProps, View};

// Re-export the building blocks
pub use obol_history::{HistoryError, HistoryMode, MemoryHistory, Visit};
pub use obol_router::{
    PathPattern, RouteEntry, RouteMatch, RouteTable, RouteTableBuilder, RouterError, Segment,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
