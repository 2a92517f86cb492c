//! Drunken bishop randomart for fingerprints.
//!
//! A walk over a small board is driven by the bits of the input, and the
//! number of times each cell was visited is drawn with a symbol. Two
//! different digests almost always give visibly different pictures.
//!
//! ```text
//! bytes → Board::generate → Board → render → String
//! ```
//!
//! # Example
//! ```
//! use randomart_core::{fingerprint, Options};
//!
//! let digest = [
//!     0x48, 0x22, 0x9d, 0xe1, 0xe5, 0x13, 0x76, 0xc7,
//!     0x76, 0x12, 0xb8, 0xac, 0xbe, 0x89, 0x7d, 0x6a,
//! ];
//! let art = fingerprint(&digest, &Options::default());
//! assert_eq!(art.lines().nth(4), Some("      ..S        "));
//! ```

pub mod board;
pub mod bounds;
pub mod bytes;
pub mod error;
pub mod fingerprint;
pub mod render;
pub mod symbols;

pub use board::Board;
pub use bounds::Bounds;
pub use error::{RandomartError, Result};
pub use fingerprint::{fingerprint, Options};
pub use render::{render, render_framed, Frame};
pub use symbols::SymbolTable;

pub mod prelude {
    pub use crate::board::{Board, Cell, EMPTY, END, START};
    pub use crate::bounds::Bounds;
    pub use crate::fingerprint::{fingerprint, Options};
    pub use crate::render::{render, render_framed, Frame};
    pub use crate::symbols::SymbolTable;
}
