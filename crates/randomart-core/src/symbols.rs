//! Maps board cells to the characters they are drawn with.

use crate::board::{Cell, EMPTY, END, START};
use crate::error::{RandomartError, Result};
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The default symbols for visit counts, starting at zero
pub const DEFAULT_LEVELS: &str = " .o+=*BOX@%&#/^";
/// The default symbols in the compact layout: counts from zero, then start and end.
pub const DEFAULT_SYMBOLS: &str = " .o+=*BOX@%&#/^SE";

/// Drawn when neither a value nor [`EMPTY`] has a symbol
const FALLBACK: char = ' ';

/// A mapping from cell value to display character.
///
/// Values without a symbol are drawn with the symbol for [`EMPTY`].
///
/// # Example
/// ```
/// # use randomart_core::symbols::SymbolTable;
/// let symbols = SymbolTable::default();
/// assert_eq!(symbols.symbol(-1), 'S');
/// assert_eq!(symbols.symbol(3), '+');
/// assert_eq!(symbols.symbol(1000), ' ');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: BTreeMap<Cell, char>,
}

impl SymbolTable {
    /// Creates a table with no symbols at all.
    pub fn empty() -> Self {
        Self {
            symbols: BTreeMap::new(),
        }
    }

    /// Creates a table from level symbols, starting at a count of zero, and the start and end symbols.
    pub fn from_levels<S: AsRef<str>>(levels: S, start: char, end: char) -> Self {
        let mut table = Self::empty();
        for (count, symbol) in levels.as_ref().chars().enumerate() {
            table.symbols.insert(EMPTY + count as Cell, symbol);
        }
        table.with(START, start).with(END, end)
    }

    /// Sets the symbol for a value
    pub fn with(mut self, value: Cell, symbol: char) -> Self {
        self.insert(value, symbol);
        self
    }

    /// Sets the symbol for a value, returning the previous one
    pub fn insert(&mut self, value: Cell, symbol: char) -> Option<char> {
        self.symbols.insert(value, symbol)
    }

    /// Gets the symbol for a value, if it has one
    pub fn get(&self, value: Cell) -> Option<char> {
        self.symbols.get(&value).copied()
    }

    /// Gets the symbol a value is drawn with.
    pub fn symbol(&self, value: Cell) -> char {
        self.get(value)
            .or_else(|| self.get(EMPTY))
            .unwrap_or(FALLBACK)
    }

    /// The number of mapped values
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The highest visit count with its own symbol, counting up from zero without gaps
    pub fn max_level(&self) -> Option<Cell> {
        (EMPTY..)
            .take_while(|level| self.symbols.contains_key(level))
            .last()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::from_levels(DEFAULT_LEVELS, 'S', 'E')
    }
}

/// Parses the compact layout: level symbols from zero, then the start and end symbols.
impl FromStr for SymbolTable {
    type Err = RandomartError;

    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() < 3 {
            return Err(RandomartError::InvalidSymbols(format!(
                "expected at least 3 symbols (empty, start, end), found {}",
                chars.len()
            )));
        }
        let (levels, markers) = chars.split_at(chars.len() - 2);
        Ok(Self::from_levels(
            levels.iter().collect::<String>(),
            markers[0],
            markers[1],
        ))
    }
}

/// Writes the compact layout, only the levels counting up from zero are written.
impl Display for SymbolTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(max) = self.max_level() {
            for level in EMPTY..=max {
                write!(f, "{}", self.symbol(level))?;
            }
        }
        write!(f, "{}{}", self.symbol(START), self.symbol(END))
    }
}

impl Serialize for SymbolTable {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SymbolTable {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        SymbolTable::from_str(&string).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table() {
        let symbols = SymbolTable::default();
        assert_eq!(symbols.len(), 17);
        assert_eq!(symbols.get(END), Some('E'));
        assert_eq!(symbols.get(START), Some('S'));
        assert_eq!(symbols.get(EMPTY), Some(' '));
        assert_eq!(symbols.get(14), Some('^'));
        assert_eq!(symbols.get(15), None);
        assert_eq!(symbols.max_level(), Some(14));
    }

    #[test]
    fn unknown_values_use_empty_symbol() {
        let symbols = SymbolTable::from_levels("_ab", '<', '>');
        assert_eq!(symbols.symbol(2), 'b');
        assert_eq!(symbols.symbol(3), '_');
        assert_eq!(symbols.symbol(-7), '_');
    }

    #[test]
    fn no_empty_symbol_falls_back_to_space() {
        let symbols = SymbolTable::empty().with(1, '#');
        assert_eq!(symbols.symbol(1), '#');
        assert_eq!(symbols.symbol(EMPTY), ' ');
        assert_eq!(symbols.symbol(START), ' ');
    }

    #[test]
    fn compact_layout_round_trips() {
        let symbols = SymbolTable::default();
        assert_eq!(symbols.to_string(), DEFAULT_SYMBOLS);
        let custom: SymbolTable = " 123@<>".parse().unwrap();
        assert_eq!(custom.symbol(START), '<');
        assert_eq!(custom.symbol(END), '>');
        assert_eq!(custom.symbol(4), '@');
        assert_eq!(custom.to_string(), " 123@<>");
    }

    #[test]
    fn too_few_symbols() {
        assert!(matches!(
            "SE".parse::<SymbolTable>(),
            Err(RandomartError::InvalidSymbols(_))
        ));
    }

    #[test]
    fn deserialize_from_string() {
        #[derive(Deserialize)]
        struct Holder {
            symbols: SymbolTable,
        }

        let holder: Holder = toml::from_str(r#"symbols = " .:SE""#).unwrap();
        assert_eq!(holder.symbols.symbol(2), ':');
        assert!(toml::from_str::<Holder>(r#"symbols = "x""#).is_err());
    }
}
