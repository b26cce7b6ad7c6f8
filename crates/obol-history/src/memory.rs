//! In-memory history provider
//!
//! A visit stack with a cursor, parameterized by a base path prefix.
//! `push` drops the forward slice, mirroring how browser history behaves
//! after navigating away from a mid-stack position.

use url::Url;

use crate::error::HistoryError;
use crate::mode::{HistoryMode, Visit};
use crate::Result;

pub struct MemoryHistory {
    /// Normalized base prefix, empty for the root base
    base: String,
    /// Visit stack, oldest first; never empty
    stack: Vec<Visit>,
    /// Index of the current visit
    cursor: usize,
}

impl MemoryHistory {
    /// History rooted at `/`, starting on the root path.
    pub fn new() -> Self {
        Self {
            base: String::new(),
            stack: vec![Visit::new("/")],
            cursor: 0,
        }
    }

    /// History mounted under a base prefix (e.g. `/app`).
    ///
    /// The base must start with `/` and carry no query or fragment; a
    /// trailing slash is trimmed, and `/` itself means the root base.
    pub fn with_base(base: &str) -> Result<Self> {
        let base = normalize_base(base)?;
        Ok(Self {
            base,
            stack: vec![Visit::new("/")],
            cursor: 0,
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// The recorded visits, oldest first. Entries past the cursor are
    /// the forward slice.
    pub fn visits(&self) -> &[Visit] {
        &self.stack
    }

}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryMode for MemoryHistory {
    fn current(&self) -> &str {
        &self.stack[self.cursor].path
    }

    fn push(&mut self, path: &str) {
        self.stack.truncate(self.cursor + 1);
        self.stack.push(Visit::new(path));
        self.cursor = self.stack.len() - 1;
        tracing::debug!(path = %path, depth = self.stack.len(), "History push");
    }

    fn replace(&mut self, path: &str) {
        self.stack[self.cursor] = Visit::new(path);
        tracing::debug!(path = %path, "History replace");
    }

    fn back(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    fn forward(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.stack.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.stack.len()
    }

    fn href_for(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Scheme/host and any query or fragment are dropped, the base
    /// prefix is stripped.
    fn strip_location(&self, location: &str) -> Result<String> {
        let path = if location.contains("://") {
            let url = Url::parse(location)
                .map_err(|e| HistoryError::InvalidLocation(format!("{}: {}", location, e)))?;
            url.path().to_string()
        } else {
            let cut = location.find(['?', '#']).unwrap_or(location.len());
            location[..cut].to_string()
        };

        if !path.starts_with('/') {
            return Err(HistoryError::InvalidLocation(location.to_string()));
        }

        if self.base.is_empty() {
            return Ok(path);
        }

        match path.strip_prefix(&self.base) {
            Some("") => Ok("/".to_string()),
            Some(rest) if rest.starts_with('/') => Ok(rest.to_string()),
            _ => Err(HistoryError::OutsideBase {
                location: location.to_string(),
                base: self.base.clone(),
            }),
        }
    }

    fn visits(&self) -> Vec<Visit> {
        self.stack.clone()
    }
}

fn normalize_base(base: &str) -> Result<String> {
    if base.is_empty() || base == "/" {
        return Ok(String::new());
    }
    if !base.starts_with('/') {
        return Err(HistoryError::InvalidBase {
            base: base.to_string(),
            reason: "must start with '/'".to_string(),
        });
    }
    if base.contains('?') || base.contains('#') {
        return Err(HistoryError::InvalidBase {
            base: base.to_string(),
            reason: "must not contain a query or fragment".to_string(),
        });
    }

    Ok(base.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_back_forward() {
        let mut history = MemoryHistory::new();
        assert_eq!(history.current(), "/");
        assert!(!history.can_go_back());

        history.push("/donate/123");
        history.push("/thank-you");
        assert_eq!(history.current(), "/thank-you");

        assert_eq!(history.back(), Some("/donate/123"));
        assert_eq!(history.back(), Some("/"));
        assert_eq!(history.back(), None);

        assert_eq!(history.forward(), Some("/donate/123"));
        assert!(history.can_go_forward());
        assert_eq!(history.forward(), Some("/thank-you"));
        assert_eq!(history.forward(), None);
    }

    #[test]
    fn test_push_truncates_forward_slice() {
        let mut history = MemoryHistory::new();
        history.push("/donate/1");
        history.push("/donate/2");
        history.back();

        history.push("/thank-you");
        assert_eq!(history.current(), "/thank-you");
        assert!(!history.can_go_forward());

        let paths: Vec<&str> = history.visits().iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/donate/1", "/thank-you"]);
    }

    #[test]
    fn test_replace_keeps_depth() {
        let mut history = MemoryHistory::new();
        history.push("/donate/1");
        history.replace("/donate/2");

        assert_eq!(history.current(), "/donate/2");
        assert_eq!(history.visits().len(), 2);
        assert_eq!(history.back(), Some("/"));
    }

    #[test]
    fn test_base_normalization() {
        assert_eq!(MemoryHistory::with_base("/").unwrap().base(), "");
        assert_eq!(MemoryHistory::with_base("/app/").unwrap().base(), "/app");
        assert!(MemoryHistory::with_base("app").is_err());
        assert!(MemoryHistory::with_base("/app?x=1").is_err());
    }

    #[test]
    fn test_strip_location() {
        let history = MemoryHistory::with_base("/app").unwrap();

        assert_eq!(
            history
                .strip_location("https://give.example.org/app/donate/123")
                .unwrap(),
            "/donate/123"
        );
        assert_eq!(history.strip_location("/app/thank-you?src=mail").unwrap(), "/thank-you");
        assert_eq!(history.strip_location("/app").unwrap(), "/");
        assert!(matches!(
            history.strip_location("/other/donate/123"),
            Err(HistoryError::OutsideBase { .. })
        ));

        let rooted = MemoryHistory::new();
        assert_eq!(rooted.strip_location("/donate/123#top").unwrap(), "/donate/123");
    }

    #[test]
    fn test_href_includes_base() {
        let history = MemoryHistory::with_base("/app").unwrap();
        assert_eq!(history.href_for("/donate/123"), "/app/donate/123");

        let rooted = MemoryHistory::new();
        assert_eq!(rooted.href_for("/thank-you"), "/thank-you");
    }
}
