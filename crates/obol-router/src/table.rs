//! Route table construction and resolution
//!
//! The table is built once at application start and never mutated; only
//! the externally-owned current path changes as the user navigates.
//! Resolution is a pure function of the table and an input path.

use std::collections::HashMap;

use crate::error::RouterError;
use crate::pattern::PathPattern;
use crate::Result;

/// One navigable destination.
///
/// `destination` is opaque to the router: the application decides what a
/// destination is (a page handler, a component reference). When
/// `forward_params` is false, captured path parameters are withheld from
/// the destination even though resolution still reports them.
#[derive(Debug, Clone)]
pub struct RouteEntry<D> {
    name: String,
    pattern: PathPattern,
    destination: D,
    forward_params: bool,
}

impl<D> RouteEntry<D> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn destination(&self) -> &D {
        &self.destination
    }

    pub fn forward_params(&self) -> bool {
        self.forward_params
    }
}

/// A successful resolution: the matched entry and the captured params.
#[derive(Debug)]
pub struct RouteMatch<'a, D> {
    pub entry: &'a RouteEntry<D>,
    pub params: HashMap<String, String>,
}

/// Builder enforcing the construction-time invariants: unique names,
/// no structurally colliding patterns. Declaration order is preserved
/// and significant (first match wins).
pub struct RouteTableBuilder<D> {
    entries: Vec<RouteEntry<D>>,
}

impl<D> RouteTableBuilder<D> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Declare a route. Pattern syntax errors surface here; uniqueness
    /// is checked at `build`.
    pub fn route(
        mut self,
        path: &str,
        name: &str,
        destination: D,
        forward_params: bool,
    ) -> Result<Self> {
        let pattern = PathPattern::parse(path)?;
        self.entries.push(RouteEntry {
            name: name.to_string(),
            pattern,
            destination,
            forward_params,
        });
        Ok(self)
    }

    /// Validate the declared entries and freeze them into a table.
    pub fn build(self) -> Result<RouteTable<D>> {
        for (i, entry) in self.entries.iter().enumerate() {
            for earlier in &self.entries[..i] {
                if earlier.name == entry.name {
                    return Err(RouterError::DuplicateName(entry.name.clone()));
                }
                if earlier.pattern.collides_with(&entry.pattern) {
                    return Err(RouterError::PatternCollision {
                        first: earlier.pattern.as_str().to_string(),
                        second: entry.pattern.as_str().to_string(),
                    });
                }
            }
        }

        tracing::debug!(routes = self.entries.len(), "Route table constructed");

        Ok(RouteTable {
            entries: self.entries,
        })
    }
}

impl<D> Default for RouteTableBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// The immutable route table: the single source of truth for declarative
/// (by path) and programmatic (by name) navigation.
pub struct RouteTable<D> {
    entries: Vec<RouteEntry<D>>,
}

impl<D> RouteTable<D> {
    pub fn builder() -> RouteTableBuilder<D> {
        RouteTableBuilder::new()
    }

    /// Resolve an input path to a route entry and its captured params.
    /// Entries are tried in declaration order; the first structural
    /// match wins. `None` means no entry matches.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_, D>> {
        for entry in &self.entries {
            if let Some(params) = entry.pattern.match_path(path) {
                tracing::trace!(path = %path, route = %entry.name, "Resolved path");
                return Some(RouteMatch { entry, params });
            }
        }
        None
    }

    /// Look up an entry by its unique name.
    pub fn entry(&self, name: &str) -> Option<&RouteEntry<D>> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Build a concrete path for a named route, substituting `params`
    /// into its dynamic segments. The result always re-resolves to the
    /// same entry with the same params.
    pub fn path_for(&self, name: &str, params: &HashMap<String, String>) -> Result<String> {
        let entry = self
            .entry(name)
            .ok_or_else(|| RouterError::UnknownRoute(name.to_string()))?;
        entry.pattern.build_path(name, params)
    }

    pub fn entries(&self) -> &[RouteEntry<D>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
