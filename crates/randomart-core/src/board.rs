//! The board and the walk that fills it.
//!
//! The board is stored as `[x][y]`, the X axis first. Rendering transposes it
//! so rows in the output are the Y axis.

use crate::bounds::Bounds;
use array2d::Array2D;
use log::{debug, trace};
use std::ops::Index;

/// The value of one cell on the board.
///
/// Non-negative values are visit counts, the negative values are markers.
pub type Cell = i64;

/// Marks where the walk ended
pub const END: Cell = -2;
/// Marks where the walk started
pub const START: Cell = -1;
/// A cell that was never visited
pub const EMPTY: Cell = 0;

/// A populated board, the result of walking over some data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Array2D<Cell>,
    bounds: Bounds,
    end: (usize, usize),
}

/// The vertical half of a step
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Vertical {
    Up,
    Down,
}

/// The horizontal half of a step
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Horizontal {
    Left,
    Right,
}

fn vertical(step: u8) -> Vertical {
    match step {
        0 | 1 => Vertical::Up,
        _ => Vertical::Down,
    }
}

fn horizontal(step: u8) -> Horizontal {
    match step {
        0 | 2 => Horizontal::Left,
        _ => Horizontal::Right,
    }
}

/// Splits a byte into its four 2-bit steps, least significant pair first.
fn steps(byte: u8) -> impl Iterator<Item = u8> {
    (0..8).step_by(2).map(move |shift| (byte >> shift) & 3)
}

impl Board {
    /// Walks the board using the given data.
    ///
    /// Every byte moves the cursor four times. Moves into an edge leave the
    /// cursor on the edge. Any amount of data is accepted, with no data only
    /// the end marker is placed, in the center.
    ///
    /// # Example
    /// ```
    /// # use randomart_core::board::{Board, END, EMPTY};
    /// # use randomart_core::bounds::Bounds;
    /// let board = Board::generate(&[], Bounds::default());
    /// assert_eq!(board.get(8, 4), Some(END));
    /// assert_eq!(board.get(0, 0), Some(EMPTY));
    /// ```
    pub fn generate(data: &[u8], bounds: Bounds) -> Self {
        let mut cells = Array2D::filled_with(EMPTY, bounds.width(), bounds.height());
        let mut x = bounds.half_width();
        let mut y = bounds.half_height();

        cells[(x, y)] = START;

        for &byte in data {
            for step in steps(byte) {
                match vertical(step) {
                    Vertical::Up => {
                        if y > 0 {
                            y -= 1;
                        }
                    }
                    Vertical::Down => {
                        if y < bounds.max_height() {
                            y += 1;
                        }
                    }
                }
                match horizontal(step) {
                    Horizontal::Left => {
                        if x > 0 {
                            x -= 1;
                        }
                    }
                    Horizontal::Right => {
                        if x < bounds.max_width() {
                            x += 1;
                        }
                    }
                }

                // only counts grow, markers stay until the end marker is written
                let cell = &mut cells[(x, y)];
                if *cell >= EMPTY {
                    *cell += 1;
                }
                trace!("byte {:#04x} step {} -> ({}, {}) = {}", byte, step, x, y, *cell);
            }
        }

        cells[(x, y)] = END;
        debug!(
            "walked {} bytes on a {} board, ended at ({}, {})",
            data.len(),
            bounds,
            x,
            y
        );

        Self {
            cells,
            bounds,
            end: (x, y),
        }
    }

    /// The bounds this board was generated with
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Gets the cell at `(x, y)`, if it's on the board
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.cells.get(x, y).copied()
    }

    /// The position the walk ended at
    pub fn end(&self) -> (usize, usize) {
        self.end
    }

    /// The position the walk started at
    pub fn start(&self) -> (usize, usize) {
        (self.bounds.half_width(), self.bounds.half_height())
    }

    /// Iterates over the cells of row `y`, from left to right.
    pub fn row(&self, y: usize) -> impl Iterator<Item = Cell> + '_ {
        (0..self.bounds.width()).map(move |x| self.cells[(x, y)])
    }
}

impl Index<(usize, usize)> for Board {
    type Output = Cell;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.cells[index]
    }
}
