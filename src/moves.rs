//! Knight move generation and validation.
//!
//! Two predicates are deliberately kept separate:
//!
//! - [`is_knight_shape`] checks only the L-shaped displacement and knows
//!   nothing about the board.
//! - [`is_occupiable`] checks only that a position is an empty playable cell.
//!
//! The click handler applies them independently, so "the move has the right
//! shape" and "the destination can be entered" stay separately testable
//! rules.

use crate::board::Board;
use crate::layout::{Cell, Pos};

/// The eight knight offsets, in the fixed order destinations are enumerated.
pub const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// True iff `src` to `dst` is an L-shaped knight displacement.
///
/// Occupancy of `dst` is not checked here.
pub fn is_knight_shape(src: Pos, dst: Pos) -> bool {
    let dr = src.0.abs_diff(dst.0);
    let dc = src.1.abs_diff(dst.1);
    (dr == 2 && dc == 1) || (dr == 1 && dc == 2)
}

/// True iff `pos` is in bounds and an empty playable cell.
pub fn is_occupiable(board: &Board, pos: Pos) -> bool {
    board.get(pos.0, pos.1) == Some(Cell::Empty)
}

/// All empty cells a knight on `src` can hop to, in [`KNIGHT_DELTAS`] order.
///
/// Recomputed from the live board on every call; the board mutates between
/// selections, so the result is never cached.
pub fn legal_destinations(board: &Board, src: Pos) -> Vec<Pos> {
    let mut out = Vec::with_capacity(8);
    for (dr, dc) in KNIGHT_DELTAS {
        let r = src.0 as isize + dr;
        let c = src.1 as isize + dc;
        if r < 0 || c < 0 {
            continue;
        }
        let dst = (r as usize, c as usize);
        if is_occupiable(board, dst) {
            out.push(dst);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Layout;

    #[test]
    fn test_knight_shape() {
        assert!(is_knight_shape((0, 0), (2, 1)));
        assert!(is_knight_shape((0, 0), (1, 2)));
        assert!(is_knight_shape((3, 3), (1, 2)));
        assert!(is_knight_shape((2, 1), (0, 0)));

        // Straight or diagonal steps are not knight moves
        assert!(!is_knight_shape((2, 2), (2, 3)));
        assert!(!is_knight_shape((2, 2), (3, 3)));
        assert!(!is_knight_shape((2, 2), (2, 2)));
        assert!(!is_knight_shape((0, 0), (2, 2)));
    }

    #[test]
    fn test_occupiable_only_empty_cells() {
        let board = Board::new(&Layout::default());
        assert!(is_occupiable(&board, (1, 1)));
        assert!(!is_occupiable(&board, (0, 0))); // void
        assert!(!is_occupiable(&board, (0, 1))); // white knight
        assert!(!is_occupiable(&board, (3, 0))); // black knight
        assert!(!is_occupiable(&board, (9, 9))); // out of bounds
    }

    #[test]
    fn test_legal_destinations_default_layout() {
        let board = Board::new(&Layout::default());
        // White knight at (0,1): every in-bounds candidate is void or holds
        // the other white knight.
        assert_eq!(legal_destinations(&board, (0, 1)), Vec::<Pos>::new());

        // Black knight at (3,0): (1,1) is empty, (2,2) is occupied.
        assert_eq!(legal_destinations(&board, (3, 0)), vec![(1, 1)]);

        // White knight at (2,2) is fully blocked at the start.
        assert_eq!(legal_destinations(&board, (2, 2)), Vec::<Pos>::new());

        // Both black knights funnel through (1,1).
        assert_eq!(legal_destinations(&board, (3, 2)), vec![(1, 1)]);
    }

    #[test]
    fn test_legal_destinations_follow_delta_order() {
        let layout = Layout::parse(&["00000", "00000", "00100", "00000", "00000"]).unwrap();
        let board = Board::new(&layout);
        let dests = legal_destinations(&board, (2, 2));
        let expected: Vec<Pos> = KNIGHT_DELTAS
            .iter()
            .map(|&(dr, dc)| ((2 + dr) as usize, (2 + dc) as usize))
            .collect();
        assert_eq!(dests, expected);
    }

    #[test]
    fn test_legal_destinations_all_sound() {
        let board = Board::new(&Layout::default());
        for src in [(0, 1), (2, 2), (3, 0), (3, 2)] {
            for dst in legal_destinations(&board, src) {
                assert!(is_knight_shape(src, dst));
                assert!(is_occupiable(&board, dst));
            }
        }
    }
}
