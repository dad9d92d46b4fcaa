//! Board layouts: parsing, validation and the built-in default puzzle.
//!
//! A layout is the immutable template a game session is created from. It
//! encodes the board as equal-length rows of single-character tags:
//!
//! - `.` - void (not part of the board)
//! - `0` - empty playable cell
//! - `1` - white knight
//! - `2` - black knight
//!
//! The layout doubles as the source of the goal configuration: the puzzle is
//! solved when each color occupies exactly the other color's starting cells.

use std::fmt;

/// The two knight colors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Contents of a single grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Not part of the board; never enterable.
    Void,
    /// Playable and unoccupied.
    Empty,
    /// Occupied by a knight of the given color.
    Knight(Color),
}

impl Cell {
    /// Parse a single layout tag character.
    pub fn from_tag(tag: char) -> Option<Cell> {
        match tag {
            '.' => Some(Cell::Void),
            '0' => Some(Cell::Empty),
            '1' => Some(Cell::Knight(Color::White)),
            '2' => Some(Cell::Knight(Color::Black)),
            _ => None,
        }
    }

    /// The tag character this cell is written as in a layout.
    pub fn tag(self) -> char {
        match self {
            Cell::Void => '.',
            Cell::Empty => '0',
            Cell::Knight(Color::White) => '1',
            Cell::Knight(Color::Black) => '2',
        }
    }

    pub fn is_knight(self) -> bool {
        matches!(self, Cell::Knight(_))
    }
}

/// A position on the grid as (row, column).
pub type Pos = (usize, usize);

/// Result of attempting to parse a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// No rows were supplied
    NoRows,
    /// A row's length differs from the first row's
    RaggedRow { row: usize, expected: usize, found: usize },
    /// A character outside the tag alphabet
    BadTag { row: usize, col: usize, tag: char },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::NoRows => write!(f, "layout has no rows"),
            LayoutError::RaggedRow { row, expected, found } => {
                write!(f, "row {row} has {found} cells, expected {expected}")
            }
            LayoutError::BadTag { row, col, tag } => {
                write!(f, "unknown tag {tag:?} at row {row}, column {col}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// An immutable, validated board template.
///
/// Rows are guaranteed non-empty and rectangular. A `Layout` is never mutated
/// after parsing; game sessions clone it into a live [`Board`] and re-clone it
/// on reset.
///
/// [`Board`]: crate::board::Board
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    rows: Vec<Vec<Cell>>,
}

impl Layout {
    /// Parse a layout from row strings.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Layout, LayoutError> {
        if rows.is_empty() {
            return Err(LayoutError::NoRows);
        }
        let width = rows[0].as_ref().chars().count();
        if width == 0 {
            return Err(LayoutError::NoRows);
        }
        let mut parsed = Vec::with_capacity(rows.len());
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != width {
                return Err(LayoutError::RaggedRow { row: r, expected: width, found });
            }
            let mut cells = Vec::with_capacity(width);
            for (c, tag) in row.chars().enumerate() {
                match Cell::from_tag(tag) {
                    Some(cell) => cells.push(cell),
                    None => return Err(LayoutError::BadTag { row: r, col: c, tag }),
                }
            }
            parsed.push(cells);
        }
        Ok(Layout { rows: parsed })
    }

    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn get(&self, r: usize, c: usize) -> Option<Cell> {
        self.rows.get(r).and_then(|row| row.get(c)).copied()
    }

    /// All positions holding a knight of `color`, in row-major order.
    pub fn positions_of(&self, color: Color) -> Vec<Pos> {
        let mut out = Vec::new();
        for (r, row) in self.rows.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                if cell == Cell::Knight(color) {
                    out.push((r, c));
                }
            }
        }
        out
    }
}

/// The built-in 4x4 puzzle: two knights a side on an irregular board.
impl Default for Layout {
    fn default() -> Self {
        Layout::parse(&[".1..", ".00.", ".010", "2020"])
            .expect("built-in layout is well-formed")
    }
}
