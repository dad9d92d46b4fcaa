//! Game session: selection handling, move commission and win detection.
//!
//! A [`Game`] owns everything one puzzle needs: the immutable layout it was
//! created from, the live board, the current selection, the move counter and
//! the goal configuration. Clicks drive a two-state machine (idle / piece
//! selected); every invalid interaction is a silent no-op, reported as
//! [`ClickOutcome::Ignored`] so callers can tell nothing changed.
//!
//! The win condition is the full swap: each color must occupy exactly the
//! cells the other color started on. Both colors are checked independently
//! and the puzzle is only won when both match at once.

use crate::board::Board;
use crate::layout::{Cell, Color, Layout, Pos};
use crate::moves::{is_knight_shape, is_occupiable, legal_destinations};

/// Message shown when the puzzle is solved.
pub const WIN_MESSAGE: &str = "Success! All knights have swapped places.";

/// What a click did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing changed (void cell, out of bounds, illegal shape, idle click
    /// on an empty cell).
    Ignored,
    /// A knight became the current selection.
    Selected(Pos),
    /// The selected knight was clicked again and deselected.
    Deselected,
    /// A move was committed. The moved knight is now selected at `to`.
    Moved { from: Pos, to: Pos, won: bool },
}

/// One interactive puzzle session.
pub struct Game {
    layout: Layout,
    board: Board,
    selected: Option<Pos>,
    move_count: u32,
    won: bool,
    /// White's target cells: black's starting positions, sorted. Fixed at
    /// creation, never recomputed.
    white_goal: Vec<Pos>,
    /// Black's target cells: white's starting positions, sorted.
    black_goal: Vec<Pos>,
}

impl Game {
    /// Start a session from a layout.
    pub fn new(layout: Layout) -> Self {
        let board = Board::new(&layout);
        let mut white_goal = layout.positions_of(Color::Black);
        let mut black_goal = layout.positions_of(Color::White);
        white_goal.sort_unstable();
        black_goal.sort_unstable();
        Self {
            layout,
            board,
            selected: None,
            move_count: 0,
            won: false,
            white_goal,
            black_goal,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn selected(&self) -> Option<Pos> {
        self.selected
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn won(&self) -> bool {
        self.won
    }

    /// The status message, if any. Only ever the success message; invalid
    /// moves produce no message at all.
    pub fn message(&self) -> Option<&'static str> {
        if self.won { Some(WIN_MESSAGE) } else { None }
    }

    /// Legal destinations for the current selection; empty when idle.
    pub fn targets(&self) -> Vec<Pos> {
        match self.selected {
            Some(src) => legal_destinations(&self.board, src),
            None => Vec::new(),
        }
    }

    /// Handle a click on cell (r, c).
    ///
    /// Clicking a knight selects it, or deselects it if it was already the
    /// selection; clicking a different knight retargets the selection without
    /// attempting a move. Clicking an empty cell commits a move when a knight
    /// is selected and the hop has the right shape; the moved knight stays
    /// selected so it can be hopped again immediately.
    pub fn click(&mut self, r: usize, c: usize) -> ClickOutcome {
        let cell = match self.board.get(r, c) {
            Some(cell) => cell,
            None => return ClickOutcome::Ignored,
        };

        match cell {
            Cell::Void => ClickOutcome::Ignored,
            Cell::Knight(_) => {
                if self.selected == Some((r, c)) {
                    self.selected = None;
                    ClickOutcome::Deselected
                } else {
                    self.selected = Some((r, c));
                    ClickOutcome::Selected((r, c))
                }
            }
            Cell::Empty => {
                let src = match self.selected {
                    Some(src) => src,
                    None => return ClickOutcome::Ignored,
                };
                let dst = (r, c);
                // Shape and occupancy are separate rules; the destination is
                // already known to be empty here.
                if !is_knight_shape(src, dst) || !is_occupiable(&self.board, dst) {
                    return ClickOutcome::Ignored;
                }
                let knight = self.board.get(src.0, src.1).unwrap_or(Cell::Empty);
                self.board.set(r, c, knight);
                self.board.set(src.0, src.1, Cell::Empty);
                self.selected = Some(dst);
                self.move_count += 1;
                if self.check_win() {
                    self.won = true;
                }
                ClickOutcome::Moved { from: src, to: dst, won: self.won }
            }
        }
    }

    /// True iff both colors currently occupy exactly the other color's
    /// starting cells. Purely observational; never mutates the board.
    pub fn check_win(&self) -> bool {
        let mut white_now = self.board.positions_of(Color::White);
        let mut black_now = self.board.positions_of(Color::Black);
        white_now.sort_unstable();
        black_now.sort_unstable();
        white_now == self.white_goal && black_now == self.black_goal
    }

    /// Restore the starting position: board re-cloned from the layout,
    /// selection cleared, counter zeroed, message gone.
    pub fn reset(&mut self) {
        self.board.reset(&self.layout);
        self.selected = None;
        self.move_count = 0;
        self.won = false;
    }
}
