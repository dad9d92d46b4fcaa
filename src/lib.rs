//! Knight-Swap: a single-board knight exchange puzzle.
//!
//! Two groups of knights stand on an irregular grid and must trade places
//! using ordinary knight hops through the empty cells, one piece at a time.
//! The crate provides the whole game: layout parsing, the live board, move
//! legality, the click-driven selection machine, win detection and two
//! renderer implementations, plus an interactive text shell.
//!
//! ## Modules
//!
//! - [`layout`] - layout parsing, cell tags and the built-in puzzle
//! - [`board`] - the live, mutable grid
//! - [`moves`] - knight-shape and destination predicates, move generation
//! - [`game`] - the session: selection, move commission, win detection
//! - [`render`] - render contract, text and persistent-piece renderers
//! - [`shell`] - interactive stdin/stdout binding
//!
//! ## Example
//!
//! ```
//! use knight_swap::game::{ClickOutcome, Game};
//! use knight_swap::layout::Layout;
//!
//! let mut game = Game::new(Layout::default());
//!
//! // Select the black knight in the bottom-left corner, then hop it.
//! game.click(3, 0);
//! let outcome = game.click(1, 1);
//! assert!(matches!(outcome, ClickOutcome::Moved { .. }));
//! assert_eq!(game.move_count(), 1);
//! ```

pub mod board;
pub mod game;
pub mod layout;
pub mod moves;
pub mod render;
pub mod shell;
