//! History-mode abstraction
//!
//! The strategy by which the navigation runtime represents and mutates
//! the current path in the hosting environment. The router never touches
//! history directly; it consumes whichever provider the host supplies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Result;

/// A single recorded visit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Visit {
    /// App-relative path (base prefix already stripped)
    pub path: String,
    /// When the visit was recorded
    pub visited_at: DateTime<Utc>,
}

impl Visit {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            visited_at: Utc::now(),
        }
    }
}

/// Abstraction over the host's navigation state.
///
/// Paths handed to and returned from a provider are app-relative; the
/// base prefix only appears in `href_for` output.
pub trait HistoryMode: Send + Sync {
    /// The current app-relative path.
    fn current(&self) -> &str;

    /// Record a new visit, discarding any forward entries.
    fn push(&mut self, path: &str);

    /// Replace the current visit without growing the stack.
    fn replace(&mut self, path: &str);

    /// Move one visit back, if any. Returns the new current path.
    fn back(&mut self) -> Option<&str>;

    /// Move one visit forward, if any. Returns the new current path.
    fn forward(&mut self) -> Option<&str>;

    fn can_go_back(&self) -> bool;

    fn can_go_forward(&self) -> bool;

    /// The full href for an app-relative path, base prefix included.
    fn href_for(&self, path: &str) -> String;

    /// Reduce a location (a full URL or a raw path) to the app-relative
    /// path this provider tracks.
    fn strip_location(&self, location: &str) -> Result<String>;

    /// The recorded visits, oldest first. Providers that cannot
    /// enumerate the host's history return an empty list.
    fn visits(&self) -> Vec<Visit> {
        Vec::new()
    }
}
