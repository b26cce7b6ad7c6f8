//! Obol Route Table Resolver
//!
//! Maps incoming path strings to named destinations:
//! - Patterns are matched segment by segment; `:name` segments capture
//!   any non-empty value under `name`.
//! - The table is immutable after construction; duplicate names and
//!   colliding patterns are rejected at build time.
//! - `path_for` is the inverse: a concrete path from a route name and
//!   its parameter values.

mod error;
mod pattern;
mod table;

pub use error::RouterError;
pub use pattern::{PathPattern, Segment};
pub use table::{RouteEntry, RouteMatch, RouteTable, RouteTableBuilder};

pub type Result<T> = std::result::Result<T, RouterError>;
