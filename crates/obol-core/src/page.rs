//! Destination handlers
//!
//! A page is opaque to the navigation layer: all it promises is to
//! produce a view from the props handed to it. Routes declared without
//! param forwarding hand their page an empty prop map regardless of
//! what the pattern captured.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Path-derived input to a page: dynamic-segment name to captured value.
pub type PageProps = HashMap<String, String>;

/// A page-level destination handler.
pub trait Page: Send + Sync {
    /// Render the page body for the given props.
    fn render(&self, props: &PageProps) -> String;
}

/// The rendered result of activating a route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct View {
    /// Route name that produced this view
    pub route: String,
    /// App-relative path that was resolved
    pub path: String,
    /// Props the page actually received (empty when not forwarded)
    pub props: PageProps,
    /// Rendered page body
    pub body: String,
}
