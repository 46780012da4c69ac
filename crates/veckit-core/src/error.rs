//! Error handling for Veckit core types.
//!
//! The geometric functions in this crate are total: edge cases degrade
//! to well-defined values rather than failing. Errors only arise at the
//! boundary where external data (handle identifiers, axis names coming
//! from the UI or serialized documents) is parsed into core types.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Core error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A string did not name one of the eight cardinal directions.
    #[error("unknown cardinal direction: {0:?}")]
    UnknownDirection(String),

    /// A string did not name a canvas axis (`x` or `y`).
    #[error("unknown axis: {0:?}")]
    UnknownAxis(String),
}

/// Result alias using the core [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
