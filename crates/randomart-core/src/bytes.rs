//! Helpers for turning outside input into the bytes a board is walked with

use crate::error::{RandomartError, Result};

/// Checks that every value fits in an unsigned byte.
///
/// # Error
/// Errors with the first value outside of `0..=255`.
///
/// # Example
/// ```
/// # use randomart_core::bytes::from_values;
/// assert_eq!(from_values([72, 34, 157]).unwrap(), vec![0x48, 0x22, 0x9d]);
/// assert!(from_values([0, 256]).is_err());
/// assert!(from_values([-1]).is_err());
/// ```
pub fn from_values<I: IntoIterator<Item = i64>>(values: I) -> Result<Vec<u8>> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            u8::try_from(value).map_err(|_| RandomartError::InvalidByte { index, value })
        })
        .collect()
}

/// Parses a digest written as hex.
///
/// Accepts the notation key tools print fingerprints in: an optional algorithm
/// prefix such as `MD5:`, then pairs of hex digits, optionally separated by `:`.
/// Whitespace is ignored.
///
/// # Example
/// ```
/// # use randomart_core::bytes::parse_hex;
/// let expected = vec![0x48, 0x22, 0x9d, 0xe1];
/// assert_eq!(parse_hex("48229de1").unwrap(), expected);
/// assert_eq!(parse_hex("MD5:48:22:9D:e1").unwrap(), expected);
/// assert!(parse_hex("4822f").is_err());
/// ```
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let digest = strip_algorithm(s.trim());
    let digits: Vec<char> = digest
        .chars()
        .filter(|c| *c != ':' && !c.is_whitespace())
        .collect();

    if digits.len() % 2 != 0 {
        return Err(RandomartError::InvalidHex(format!(
            "expected an even number of hex digits (found {})",
            digits.len()
        )));
    }

    digits
        .chunks(2)
        .map(|pair| {
            let byte_str: String = pair.iter().collect();
            if !pair.iter().all(|c| c.is_ascii_hexdigit()) {
                return Err(RandomartError::InvalidHex(format!(
                    "{:?} is not a hex byte",
                    byte_str
                )));
            }
            u8::from_str_radix(&byte_str, 16)
                .map_err(|_| RandomartError::InvalidHex(format!("{:?} is not a hex byte", byte_str)))
        })
        .collect()
}

/// Removes a leading `ALGO:` label, labels are recognised by containing a non hex character.
fn strip_algorithm(s: &str) -> &str {
    match s.split_once(':') {
        Some((label, rest))
            if !label.is_empty() && !label.chars().all(|c| c.is_ascii_hexdigit()) =>
        {
            rest
        }
        _ => s,
    }
}

/// Writes bytes as lowercase hex pairs separated by `:`
pub fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(":")
}
