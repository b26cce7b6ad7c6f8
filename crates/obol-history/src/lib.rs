//! Obol History
//!
//! History-mode providers: the abstraction over the hosting
//! environment's navigation state, parameterized by a base path prefix.
//! `MemoryHistory` is the in-process provider; hosts with native
//! navigation state supply their own `HistoryMode` implementation.

mod error;
mod memory;
mod mode;

pub use error::HistoryError;
pub use memory::MemoryHistory;
pub use mode::{HistoryMode, Visit};

pub type Result<T> = std::result::Result<T, HistoryError>;
