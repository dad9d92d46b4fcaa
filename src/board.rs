//! Live board state.
//!
//! The board is the mutable grid a game session plays on. It is created by
//! deep-copying a [`Layout`] and is mutated only by committed moves or by a
//! full reset (which re-copies the layout). Cells are stored in a flat vector
//! indexed row-major.

use std::fmt;

use crate::layout::{Cell, Color, Layout, Pos};

/// The live, mutable grid of cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board by copying a layout.
    pub fn new(layout: &Layout) -> Self {
        let mut cells = Vec::with_capacity(layout.width() * layout.height());
        for row in layout.rows() {
            cells.extend_from_slice(row);
        }
        Self {
            width: layout.width(),
            height: layout.height(),
            cells,
        }
    }

    fn idx(&self, r: usize, c: usize) -> usize {
        r * self.width + c
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The cell at (r, c), or `None` out of bounds. Move generation probes
    /// neighbours near the edges through this.
    pub fn get(&self, r: usize, c: usize) -> Option<Cell> {
        if r >= self.height || c >= self.width {
            return None;
        }
        Some(self.cells[self.idx(r, c)])
    }

    /// Overwrite a cell. Callers guarantee (r, c) is in bounds.
    pub fn set(&mut self, r: usize, c: usize, cell: Cell) {
        let i = self.idx(r, c);
        self.cells[i] = cell;
    }

    /// Discard all moves and restore the layout's starting position.
    pub fn reset(&mut self, layout: &Layout) {
        *self = Board::new(layout);
    }

    /// All positions currently holding a knight of `color`, row-major.
    pub fn positions_of(&self, color: Color) -> Vec<Pos> {
        let mut out = Vec::new();
        for r in 0..self.height {
            for c in 0..self.width {
                if self.cells[self.idx(r, c)] == Cell::Knight(color) {
                    out.push((r, c));
                }
            }
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.height {
            for c in 0..self.width {
                let ch = match self.cells[self.idx(r, c)] {
                    Cell::Void => ' ',
                    Cell::Empty => '.',
                    Cell::Knight(Color::White) => 'N',
                    Cell::Knight(Color::Black) => 'n',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_copies_layout() {
        let layout = Layout::default();
        let board = Board::new(&layout);
        for r in 0..layout.height() {
            for c in 0..layout.width() {
                assert_eq!(board.get(r, c), layout.get(r, c));
            }
        }
    }

    #[test]
    fn test_set_does_not_touch_layout() {
        let layout = Layout::default();
        let mut board = Board::new(&layout);
        board.set(1, 1, Cell::Knight(Color::White));
        assert_eq!(board.get(1, 1), Some(Cell::Knight(Color::White)));
        assert_eq!(layout.get(1, 1), Some(Cell::Empty));
    }

    #[test]
    fn test_reset_restores_layout() {
        let layout = Layout::default();
        let mut board = Board::new(&layout);
        board.set(0, 1, Cell::Empty);
        board.set(1, 2, Cell::Knight(Color::White));
        board.reset(&layout);
        assert_eq!(board, Board::new(&layout));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::new(&Layout::default());
        assert_eq!(board.get(4, 0), None);
        assert_eq!(board.get(0, 4), None);
        assert_eq!(board.get(100, 100), None);
    }

    #[test]
    fn test_positions_of() {
        let board = Board::new(&Layout::default());
        assert_eq!(board.positions_of(Color::White), vec![(0, 1), (2, 2)]);
        assert_eq!(board.positions_of(Color::Black), vec![(3, 0), (3, 2)]);
    }
}
