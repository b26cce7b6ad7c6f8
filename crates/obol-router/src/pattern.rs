//! Path pattern parsing and structural matching
//!
//! A pattern is a `/`-separated sequence of segments. A segment starting
//! with `:` is dynamic and captures any non-empty input segment under the
//! name that follows the colon; every other segment must compare equal
//! literally. Segment counts must match exactly, so `/donate/:eventId`
//! matches `/donate/123` but neither `/donate/` nor `/donate/123/extra`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::RouterError;
use crate::Result;

/// One segment of a parsed path pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    /// Must equal the input segment exactly
    Literal(String),
    /// Matches any non-empty input segment and binds it under this name
    Param(String),
}

/// A path pattern parsed once at table construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a pattern string.
    ///
    /// Patterns must start with `/`. `/` alone is the empty-segment root
    /// pattern. Dynamic segment names must be non-empty and unique within
    /// the pattern.
    pub fn parse(pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Err(RouterError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: "pattern cannot be empty".to_string(),
            });
        }
        if !pattern.starts_with('/') {
            return Err(RouterError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: "pattern must start with '/'".to_string(),
            });
        }

        let mut segments = Vec::new();
        let mut seen_params: Vec<&str> = Vec::new();

        for part in split_segments(pattern) {
            if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(RouterError::InvalidPattern {
                        pattern: pattern.to_string(),
                        reason: "dynamic segment has no name".to_string(),
                    });
                }
                if seen_params.contains(&name) {
                    return Err(RouterError::InvalidPattern {
                        pattern: pattern.to_string(),
                        reason: format!("duplicate parameter name '{}'", name),
                    });
                }
                seen_params.push(name);
                segments.push(Segment::Param(name.to_string()));
            } else {
                segments.push(Segment::Literal(part.to_string()));
            }
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    /// The pattern string as declared.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of the dynamic segments, in declaration order.
    pub fn param_names(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Param(name) => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// Attempt a structural match against an input path.
    ///
    /// Returns the captured parameters on success (empty map when the
    /// pattern has no dynamic segments), `None` on any mismatch. An empty
    /// input segment never satisfies a dynamic segment.
    pub fn match_path(&self, path: &str) -> Option<HashMap<String, String>> {
        if !path.starts_with('/') {
            return None;
        }

        let input: Vec<&str> = split_segments(path).collect();
        if input.len() != self.segments.len() {
            return None;
        }

        let mut params = HashMap::new();
        for (segment, value) in self.segments.iter().zip(input) {
            match segment {
                Segment::Literal(literal) => {
                    if literal != value {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if value.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), value.to_string());
                }
            }
        }

        Some(params)
    }

    /// Substitute parameter values into the pattern to build a concrete
    /// path. Every dynamic segment must be supplied a non-empty value.
    pub fn build_path(&self, route: &str, params: &HashMap<String, String>) -> Result<String> {
        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Literal(literal) => path.push_str(literal),
                Segment::Param(name) => {
                    let value = params.get(name).ok_or_else(|| RouterError::MissingParam {
                        route: route.to_string(),
                        param: name.clone(),
                    })?;
                    if value.is_empty() {
                        return Err(RouterError::EmptyParam {
                            route: route.to_string(),
                            param: name.clone(),
                        });
                    }
                    path.push_str(value);
                }
            }
        }

        if path.is_empty() {
            path.push('/');
        }

        Ok(path)
    }

    /// Whether two patterns can match the same input. Same segment count
    /// where every position is either literal-equal or dynamic on at
    /// least one side.
    pub fn collides_with(&self, other: &PathPattern) -> bool {
        if self.segments.len() != other.segments.len() {
            return false;
        }

        self.segments
            .iter()
            .zip(&other.segments)
            .all(|(a, b)| match (a, b) {
                (Segment::Literal(x), Segment::Literal(y)) => x == y,
                _ => true,
            })
    }
}

impl std::fmt::Display for PathPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Split a leading-slash path into its segments. `/` yields no segments;
/// a trailing slash yields a final empty segment, which dynamic segments
/// refuse to capture.
fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    // Empty segments are kept so that `/donate/` hits the non-empty
    // capture rule; only the root path itself has zero segments.
    trimmed
        .split('/')
        .filter(move |s| !(trimmed.is_empty() && s.is_empty()))
}
