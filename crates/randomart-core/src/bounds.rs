//! The dimensions of the board the walk happens on.

use crate::error::{RandomartError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The default width of the board, the X axis
pub const DEFAULT_WIDTH: usize = 17;
/// The default height of the board, the Y axis
pub const DEFAULT_HEIGHT: usize = 9;
/// The most cells a board may have
pub const MAX_AREA: usize = 1 << 20;

/// Immutable board dimensions.
///
/// The width is the X axis and the height is the Y axis. The walk starts at
/// ([`half_width`](Bounds::half_width), [`half_height`](Bounds::half_height)).
///
/// # Example
/// ```
/// # use randomart_core::bounds::Bounds;
/// let bounds = Bounds::default();
/// assert_eq!((bounds.width(), bounds.height()), (17, 9));
/// assert_eq!((bounds.half_width(), bounds.half_height()), (8, 4));
/// assert!(Bounds::new(0, 9).is_err());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBounds", into = "RawBounds")]
pub struct Bounds {
    width: usize,
    height: usize,
}

impl Bounds {
    /// Create new bounds.
    ///
    /// # Error
    /// Errors if either dimension is zero, or the board would have more than [`MAX_AREA`] cells.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let area = width.checked_mul(height).unwrap_or(usize::MAX);
        if width == 0 || height == 0 || area > MAX_AREA {
            return Err(RandomartError::InvalidBounds { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The largest valid x coordinate
    pub fn max_width(&self) -> usize {
        self.width - 1
    }

    /// The largest valid y coordinate
    pub fn max_height(&self) -> usize {
        self.height - 1
    }

    /// The x coordinate the walk starts at
    pub fn half_width(&self) -> usize {
        self.width / 2
    }

    /// The y coordinate the walk starts at
    pub fn half_height(&self) -> usize {
        self.height / 2
    }

    /// The number of cells on the board
    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl Display for Bounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Serialize, Deserialize)]
struct RawBounds {
    width: usize,
    height: usize,
}

impl TryFrom<RawBounds> for Bounds {
    type Error = RandomartError;

    fn try_from(value: RawBounds) -> Result<Self> {
        Bounds::new(value.width, value.height)
    }
}

impl From<Bounds> for RawBounds {
    fn from(value: Bounds) -> Self {
        Self {
            width: value.width,
            height: value.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_values() {
        let bounds = Bounds::new(4, 1).unwrap();
        assert_eq!(bounds.max_width(), 3);
        assert_eq!(bounds.max_height(), 0);
        assert_eq!(bounds.half_width(), 2);
        assert_eq!(bounds.half_height(), 0);
    }

    #[test]
    fn start_is_always_on_board() {
        for width in 1..20 {
            for height in 1..20 {
                let bounds = Bounds::new(width, height).unwrap();
                assert!(bounds.half_width() <= bounds.max_width());
                assert!(bounds.half_height() <= bounds.max_height());
            }
        }
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert_eq!(
            Bounds::new(0, 0),
            Err(RandomartError::InvalidBounds {
                width: 0,
                height: 0
            })
        );
        assert!(Bounds::new(17, 0).is_err());
    }

    #[test]
    fn huge_dimensions_rejected() {
        let max = u32::MAX as usize;
        assert_eq!(
            Bounds::new(max, max),
            Err(RandomartError::InvalidBounds {
                width: max,
                height: max
            })
        );
        assert!(Bounds::new(usize::MAX, 2).is_err());
        assert!(Bounds::new(MAX_AREA, 1).is_ok());
        assert!(Bounds::new(MAX_AREA + 1, 1).is_err());
    }

    #[test]
    fn deserialize_validates() {
        let bounds: Bounds = toml::from_str("width = 11\nheight = 5").unwrap();
        assert_eq!(bounds, Bounds::new(11, 5).unwrap());
        assert!(toml::from_str::<Bounds>("width = 0\nheight = 5").is_err());
    }
}
