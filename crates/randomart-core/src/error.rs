//! Errors produced while configuring or feeding the randomart generator

use thiserror::Error;

/// An error from the randomart core.
///
/// Walking and rendering never fail, only the construction of their inputs can.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RandomartError {
    #[error(
        "Invalid board bounds (width: {width}, height: {height}), both must be positive and cover at most {} cells",
        crate::bounds::MAX_AREA
    )]
    InvalidBounds { width: usize, height: usize },
    #[error("Value {value} at index {index} is not an unsigned 8-bit integer")]
    InvalidByte { index: usize, value: i64 },
    #[error("Invalid hex digest: {0}")]
    InvalidHex(String),
    #[error("Invalid symbol table: {0}")]
    InvalidSymbols(String),
}

/// Result type used throughout the randomart core
pub type Result<T> = std::result::Result<T, RandomartError>;
