//! The entry point, rendering data straight into randomart

use crate::board::Board;
use crate::bounds::Bounds;
use crate::render::{render, render_framed, Frame};
use crate::symbols::SymbolTable;
use serde::{Deserialize, Serialize};

/// The number of bytes drawn when no data is given, the size of a 128-bit digest
pub const DEFAULT_DATA_LEN: usize = 16;

/// How a fingerprint is drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub bounds: Bounds,
    pub symbols: SymbolTable,
}

impl Options {
    /// Creates options from bounds and symbols
    pub fn new(bounds: Bounds, symbols: SymbolTable) -> Self {
        Self { bounds, symbols }
    }

    /// Replaces the bounds
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Replaces the symbols
    pub fn with_symbols(mut self, symbols: SymbolTable) -> Self {
        self.symbols = symbols;
        self
    }

    /// Renders the fingerprint of some data with these options
    pub fn fingerprint(&self, data: &[u8]) -> String {
        render(&Board::generate(data, self.bounds), &self.symbols)
    }

    /// Renders the fingerprint of some data inside a frame
    pub fn framed(&self, data: &[u8], frame: &Frame) -> String {
        render_framed(&Board::generate(data, self.bounds), &self.symbols, frame)
    }
}

/// Renders the randomart of some data.
///
/// The same data and options always produce the same art.
///
/// # Example
/// ```
/// # use randomart_core::fingerprint::{fingerprint, Options};
/// let art = fingerprint(&[0x48, 0x22, 0x9d, 0xe1], &Options::default());
/// assert_eq!(art.lines().count(), 9);
/// assert_eq!(art.matches('E').count(), 1);
/// ```
pub fn fingerprint(data: &[u8], options: &Options) -> String {
    options.fingerprint(data)
}

/// Draws `len` bytes from the operating system's secure random source
#[cfg(feature = "random")]
pub fn random_bytes(len: usize) -> Vec<u8> {
    use rand::rngs::OsRng;
    use rand::RngCore;

    let mut bytes = vec![0_u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Renders the randomart of [`DEFAULT_DATA_LEN`] random bytes, returning the bytes used too.
#[cfg(feature = "random")]
pub fn random_fingerprint(options: &Options) -> (Vec<u8>, String) {
    let data = random_bytes(DEFAULT_DATA_LEN);
    let art = options.fingerprint(&data);
    (data, art)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_from_toml() {
        let options: Options = toml::from_str(
            r#"
            symbols = " .oSE"

            [bounds]
            width = 5
            height = 3
            "#,
        )
        .unwrap();
        assert_eq!(options.bounds, Bounds::new(5, 3).unwrap());
        assert_eq!(options.symbols.symbol(2), 'o');

        let defaults: Options = toml::from_str("").unwrap();
        assert_eq!(defaults, Options::default());
    }

    #[cfg(feature = "random")]
    #[test]
    fn random_fingerprint_matches_its_bytes() {
        let options = Options::default();
        let (data, art) = random_fingerprint(&options);
        assert_eq!(data.len(), DEFAULT_DATA_LEN);
        assert_eq!(art, fingerprint(&data, &options));
    }
}
