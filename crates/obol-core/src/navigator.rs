//! Navigator: the single source of truth for navigation
//!
//! Composes the immutable route table with a history-mode provider.
//! The table never changes after construction; only the history moves.
//! Components that need to resolve or generate paths receive the
//! navigator by reference.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use obol_history::{HistoryMode, MemoryHistory, Visit};
use obol_router::RouteTable;

use crate::config::Config;
use crate::error::CoreError;
use crate::page::{Page, PageProps, View};
use crate::Result;

/// What a route resolves to at the application level.
pub type Destination = Arc<dyn Page>;

/// The application's route table.
pub type Routes = RouteTable<Destination>;

/// Result of activating a path: either a rendered view or the
/// distinguished no-match case, which is not fatal. Deciding what to
/// show for `NotFound` is the caller's business.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Outcome {
    Rendered(View),
    NotFound(String),
}

pub struct Navigator {
    /// Immutable route table, shared by reference
    table: Arc<Routes>,
    /// History-mode provider supplied by the host
    history: Arc<RwLock<Box<dyn HistoryMode>>>,
}

impl Navigator {
    pub fn new(table: Routes, history: impl HistoryMode + 'static) -> Self {
        Self {
            table: Arc::new(table),
            history: Arc::new(RwLock::new(Box::new(history))),
        }
    }

    /// Navigator backed by an in-memory history mounted under the
    /// configured base path.
    pub fn with_config(table: Routes, config: &Config) -> Result<Self> {
        let history = MemoryHistory::with_base(&config.base_path)?;
        Ok(Self::new(table, history))
    }

    pub fn table(&self) -> &Routes {
        &self.table
    }

    /// Resolve and activate an app-relative path. On a match the visit
    /// is pushed onto history and the destination renders; captured
    /// params reach the page only when the route forwards them.
    pub fn navigate(&self, path: &str) -> Outcome {
        match self.render_path(path) {
            Outcome::Rendered(view) => {
                self.history.write().push(&view.path);
                tracing::info!(route = %view.route, path = %view.path, "Navigated");
                Outcome::Rendered(view)
            }
            Outcome::NotFound(path) => {
                tracing::warn!(path = %path, "No route matched");
                Outcome::NotFound(path)
            }
        }
    }

    /// Like `navigate`, but replaces the current history entry.
    pub fn replace(&self, path: &str) -> Outcome {
        match self.render_path(path) {
            Outcome::Rendered(view) => {
                self.history.write().replace(&view.path);
                tracing::info!(route = %view.route, path = %view.path, "Replaced");
                Outcome::Rendered(view)
            }
            outcome => outcome,
        }
    }

    /// Activate a location as supplied by the host (full URL or raw
    /// path, base prefix included).
    pub fn navigate_location(&self, location: &str) -> Result<Outcome> {
        let path = self.history.read().strip_location(location)?;
        Ok(self.navigate(&path))
    }

    /// Programmatic navigation by route name. Unknown names and missing
    /// or empty params are hard errors; a generated path always
    /// resolves back to its route.
    pub fn navigate_named(&self, name: &str, params: &PageProps) -> Result<View> {
        let path = self.table.path_for(name, params)?;
        match self.navigate(&path) {
            Outcome::Rendered(view) => Ok(view),
            Outcome::NotFound(path) => Err(CoreError::UnresolvedPath(path)),
        }
    }

    /// Move one visit back and re-render, if there is anywhere to go.
    pub fn back(&self) -> Option<Outcome> {
        let path = self.history.write().back().map(str::to_string)?;
        Some(self.render_path(&path))
    }

    /// Move one visit forward and re-render, if there is anywhere to go.
    pub fn forward(&self) -> Option<Outcome> {
        let path = self.history.write().forward().map(str::to_string)?;
        Some(self.render_path(&path))
    }

    /// Re-render whatever the current path resolves to.
    pub fn current(&self) -> Outcome {
        let path = self.history.read().current().to_string();
        self.render_path(&path)
    }

    pub fn current_path(&self) -> String {
        self.history.read().current().to_string()
    }

    pub fn can_go_back(&self) -> bool {
        self.history.read().can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.history.read().can_go_forward()
    }

    /// Full href for an app-relative path, base prefix included.
    pub fn href_for(&self, path: &str) -> String {
        self.history.read().href_for(path)
    }

    pub fn visits(&self) -> Vec<Visit> {
        self.history.read().visits()
    }

    /// Pure resolution plus rendering; no history side effects.
    fn render_path(&self, path: &str) -> Outcome {
        match self.table.resolve(path) {
            Some(m) => {
                let props = if m.entry.forward_params() {
                    m.params
                } else {
                    PageProps::new()
                };
                let body = m.entry.destination().render(&props);
                Outcome::Rendered(View {
                    route: m.entry.name().to_string(),
                    path: path.to_string(),
                    props,
                    body,
                })
            }
            None => Outcome::NotFound(path.to_string()),
        }
    }
}

impl Clone for Navigator {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
            history: Arc::clone(&self.history),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo(&'static str);

    impl Page for Echo {
        fn render(&self, props: &PageProps) -> String {
            let mut pairs: Vec<String> =
                props.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
            pairs.sort();
            format!("{}[{}]", self.0, pairs.join(","))
        }
    }

    fn navigator() -> Navigator {
        let table = Routes::builder()
            .route(
                "/donate/:eventId",
                "DonationPage",
                Arc::new(Echo("donation")) as Destination,
                true,
            )
            .unwrap()
            .route(
                "/thank-you",
                "ThankYouPage",
                Arc::new(Echo("thanks")) as Destination,
                false,
            )
            .unwrap()
            .build()
            .unwrap();

        Navigator::new(table, MemoryHistory::new())
    }

    #[test]
    fn test_navigate_forwards_params() {
        let nav = navigator();

        match nav.navigate("/donate/123") {
            Outcome::Rendered(view) => {
                assert_eq!(view.route, "DonationPage");
                assert_eq!(view.props.get("eventId").map(String::as_str), Some("123"));
                assert_eq!(view.body, "donation[eventId=123]");
            }
            other => panic!("Expected Rendered, got {:?}", other),
        }
    }

    #[test]
    fn test_navigate_withholds_params() {
        let nav = navigator();

        match nav.navigate("/thank-you") {
            Outcome::Rendered(view) => {
                assert_eq!(view.route, "ThankYouPage");
                assert!(view.props.is_empty());
                assert_eq!(view.body, "thanks[]");
            }
            other => panic!("Expected Rendered, got {:?}", other),
        }
    }

    #[test]
    fn test_navigate_not_found() {
        let nav = navigator();

        match nav.navigate("/unknown") {
            Outcome::NotFound(path) => assert_eq!(path, "/unknown"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
        // A miss leaves history where it was
        assert_eq!(nav.current_path(), "/");
    }

    #[test]
    fn test_navigate_named_round_trip() {
        let nav = navigator();

        let mut params = PageProps::new();
        params.insert("eventId".to_string(), "gala".to_string());
        let view = nav.navigate_named("DonationPage", &params).unwrap();
        assert_eq!(view.path, "/donate/gala");
        assert_eq!(view.props, params);

        assert!(nav.navigate_named("Missing", &PageProps::new()).is_err());
        assert!(nav.navigate_named("DonationPage", &PageProps::new()).is_err());
    }

    #[test]
    fn test_back_and_forward_re_render() {
        let nav = navigator();
        nav.navigate("/donate/1");
        nav.navigate("/thank-you");

        match nav.back() {
            Some(Outcome::Rendered(view)) => assert_eq!(view.path, "/donate/1"),
            other => panic!("Expected Rendered, got {:?}", other),
        }
        match nav.forward() {
            Some(Outcome::Rendered(view)) => assert_eq!(view.route, "ThankYouPage"),
            other => panic!("Expected Rendered, got {:?}", other),
        }
        assert!(nav.forward().is_none());
    }

    #[test]
    fn test_replace_keeps_depth() {
        let nav = navigator();
        nav.navigate("/donate/1");
        nav.replace("/donate/2");

        assert_eq!(nav.current_path(), "/donate/2");
        // One step back lands on the initial (unrouted) root, not /donate/1
        match nav.back() {
            Some(Outcome::NotFound(path)) => assert_eq!(path, "/"),
            other => panic!("Expected the unrouted root, got {:?}", other),
        }
    }

    #[test]
    fn test_location_with_base() {
        let table = Routes::builder()
            .route(
                "/donate/:eventId",
                "DonationPage",
                Arc::new(Echo("donation")) as Destination,
                true,
            )
            .unwrap()
            .build()
            .unwrap();
        let config = Config::new("/app");
        let nav = Navigator::with_config(table, &config).unwrap();

        match nav
            .navigate_location("https://give.example.org/app/donate/77")
            .unwrap()
        {
            Outcome::Rendered(view) => assert_eq!(view.path, "/donate/77"),
            other => panic!("Expected Rendered, got {:?}", other),
        }
        assert_eq!(nav.href_for("/donate/77"), "/app/donate/77");
    }
}
