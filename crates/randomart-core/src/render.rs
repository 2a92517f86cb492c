//! Turns a board into text.

use crate::board::Board;
use crate::symbols::SymbolTable;
use itertools::Itertools;

/// Renders a board as `height` lines of `width` symbols.
///
/// Lines are the Y axis and the characters within a line are the X axis. Lines
/// are separated by `\n`, with no trailing newline.
///
/// # Example
/// ```
/// # use randomart_core::board::Board;
/// # use randomart_core::bounds::Bounds;
/// # use randomart_core::render::render;
/// # use randomart_core::symbols::SymbolTable;
/// let board = Board::generate(&[], Bounds::new(3, 3).unwrap());
/// assert_eq!(render(&board, &SymbolTable::default()), "   \n E \n   ");
/// ```
pub fn render(board: &Board, symbols: &SymbolTable) -> String {
    lines(board, symbols).join("\n")
}

fn lines<'a>(board: &'a Board, symbols: &'a SymbolTable) -> impl Iterator<Item = String> + 'a {
    (0..board.bounds().height()).map(move |y| {
        board
            .row(y)
            .map(|cell| symbols.symbol(cell))
            .collect::<String>()
    })
}

/// The border drawn around a board by [`render_framed`].
///
/// Labels are centered in the top and bottom borders, the way `ssh-keygen`
/// prints key types and digest names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    header: Option<String>,
    footer: Option<String>,
}

impl Frame {
    /// A frame without labels
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label of the top border
    pub fn header(mut self, label: impl Into<String>) -> Self {
        self.header = Some(label.into());
        self
    }

    /// Sets the label of the bottom border
    pub fn footer(mut self, label: impl Into<String>) -> Self {
        self.footer = Some(label.into());
        self
    }

    /// Draws a border line of `width` dashes between two corners, with a label
    /// starting at `(width - label length) / 2`. Labels wider than the border are cut.
    fn border(label: Option<&str>, width: usize) -> String {
        let label: String = label.unwrap_or_default().chars().take(width).collect();
        let label_len = label.chars().count();
        let before = (width - label_len) / 2;
        let after = width - label_len - before;
        format!("+{}{}{}+", "-".repeat(before), label, "-".repeat(after))
    }
}

/// Renders a board inside a border.
///
/// # Example
/// ```
/// # use randomart_core::board::Board;
/// # use randomart_core::bounds::Bounds;
/// # use randomart_core::render::{render_framed, Frame};
/// # use randomart_core::symbols::SymbolTable;
/// let board = Board::generate(&[], Bounds::new(3, 1).unwrap());
/// let framed = render_framed(&board, &SymbolTable::default(), &Frame::new().header("ab"));
/// assert_eq!(framed, "+ab-+\n| E |\n+---+");
/// ```
pub fn render_framed(board: &Board, symbols: &SymbolTable, frame: &Frame) -> String {
    let width = board.bounds().width();
    let top = Frame::border(frame.header.as_deref(), width);
    let bottom = Frame::border(frame.footer.as_deref(), width);
    std::iter::once(top)
        .chain(lines(board, symbols).map(|line| format!("|{}|", line)))
        .chain(std::iter::once(bottom))
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{EMPTY, START};
    use crate::bounds::Bounds;

    #[test]
    fn shape_matches_bounds() {
        let bounds = Bounds::new(5, 3).unwrap();
        let board = Board::generate(&[0x1b, 0xe4], bounds);
        let rendered = render(&board, &SymbolTable::default());
        let lines: Vec<&str> = rendered.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| line.chars().count() == 5));
        assert!(!rendered.ends_with('\n'));
    }

    #[test]
    fn rows_are_the_y_axis() {
        // down-right into the corner of a 4x3 board
        let bounds = Bounds::new(4, 3).unwrap();
        let board = Board::generate(&[0xff], bounds);
        assert_eq!(board.end(), (3, 2));
        let rendered = render(&board, &SymbolTable::default());
        assert_eq!(rendered, "    \n  S \n   E");
    }

    #[test]
    fn unmapped_values_render_as_empty() {
        let symbols = SymbolTable::empty().with(EMPTY, '_').with(START, 'S');
        let board = Board::generate(&[0x00], Bounds::new(3, 3).unwrap());
        // the walk visited (0, 0) last and the end marker has no symbol
        assert_eq!(render(&board, &symbols), "___\n_S_\n___");
    }

    #[test]
    fn border_labels() {
        assert_eq!(Frame::border(Some("[DSA 1024]"), 17), "+---[DSA 1024]----+");
        assert_eq!(Frame::border(Some("[MD5]"), 17), "+------[MD5]------+");
        assert_eq!(Frame::border(None, 4), "+----+");
        assert_eq!(Frame::border(Some("toolong"), 4), "+tool+");
    }
}
