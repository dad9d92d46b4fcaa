//! Rendering: turning a game session into something displayable.
//!
//! The core never talks to a display directly; it exposes state and the
//! [`Render`] trait turns that state into output. Two interchangeable
//! implementations are provided:
//!
//! - [`GridRenderer`] rebuilds a whole text frame from scratch on every
//!   update. Simple, stateless between frames.
//! - [`PieceRenderer`] keeps one long-lived [`Piece`] per knight and
//!   repositions it in pixel space, the shape an animating surface needs.
//!   Pixel geometry is derived from cell size, gap and padding, and is
//!   refreshed through [`GeometrySync`] when the container resizes.
//!
//! Both clear stale selection and target markers on every update and reapply
//! them from the current state, so a frame never shows leftovers from a
//! previous selection.

use crate::game::Game;
use crate::layout::{Cell, Color, Layout, Pos};

/// Gap between adjacent cells, in pixels.
pub const CELL_GAP: f32 = 4.0;

/// Padding between the container edge and the first cell, in pixels.
pub const BOARD_PADDING: f32 = 8.0;

/// Scale factor applied to the selected piece.
pub const SELECTED_SCALE: f32 = 1.15;

/// A render target for game state.
///
/// `render_full` redraws everything; `render_incremental` is given the
/// positions that changed since the last frame and may redraw less. An
/// implementation is free to treat the two identically.
pub trait Render {
    fn render_full(&mut self, game: &Game);
    fn render_incremental(&mut self, game: &Game, changed: &[Pos]);
}

fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Void => ' ',
        Cell::Empty => '.',
        Cell::Knight(Color::White) => 'N',
        Cell::Knight(Color::Black) => 'n',
    }
}

/// Rebuild-per-update renderer producing a plain text frame.
///
/// Each cell renders as three characters: the middle one is the cell glyph,
/// the outer two mark state (`[N]` selected, `>.<` legal target).
#[derive(Default)]
pub struct GridRenderer {
    frame: String,
}

impl GridRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently rendered frame.
    pub fn frame(&self) -> &str {
        &self.frame
    }

    fn rebuild(&mut self, game: &Game) {
        let board = game.board();
        let targets = game.targets();
        let mut frame = String::new();
        for r in 0..board.height() {
            for c in 0..board.width() {
                let cell = board.get(r, c).unwrap_or(Cell::Void);
                let (open, close) = if game.selected() == Some((r, c)) {
                    ('[', ']')
                } else if targets.contains(&(r, c)) {
                    ('>', '<')
                } else {
                    (' ', ' ')
                };
                frame.push(open);
                frame.push(glyph(cell));
                frame.push(close);
            }
            frame.push('\n');
        }
        self.frame = frame;
    }
}

impl Render for GridRenderer {
    fn render_full(&mut self, game: &Game) {
        self.rebuild(game);
    }

    /// A rebuild is already cheap at this board size.
    fn render_incremental(&mut self, game: &Game, _changed: &[Pos]) {
        self.rebuild(game);
    }
}

/// Pixel geometry for the persistent-piece renderer.
///
/// All offsets derive from one cell size plus the fixed gap and padding
/// constants, so a resize only needs to supply the new cell size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Geometry {
    pub cell_px: f32,
}

impl Geometry {
    pub fn new(cell_px: f32) -> Self {
        Self { cell_px }
    }

    /// Top-left pixel corner of a grid cell.
    pub fn origin_of(&self, pos: Pos) -> (f32, f32) {
        let step = self.cell_px + CELL_GAP;
        (
            BOARD_PADDING + pos.1 as f32 * step,
            BOARD_PADDING + pos.0 as f32 * step,
        )
    }
}

/// A long-lived on-screen knight.
///
/// The id is stable for the lifetime of the renderer; a piece is repositioned
/// when its knight moves, never destroyed and recreated.
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    pub id: usize,
    pub color: Color,
    pub pos: Pos,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

/// Persistent-piece renderer.
///
/// Keeps one [`Piece`] per knight, bound to its current board position, and
/// translates board coordinates into pixel offsets. The selected piece gets
/// a scale emphasis on top of its translation.
pub struct PieceRenderer {
    geometry: Geometry,
    pieces: Vec<Piece>,
}

impl PieceRenderer {
    /// Create pieces for every knight on the game's board.
    pub fn new(game: &Game, cell_px: f32) -> Self {
        let geometry = Geometry::new(cell_px);
        let board = game.board();
        let mut pieces = Vec::new();
        for r in 0..board.height() {
            for c in 0..board.width() {
                if let Some(Cell::Knight(color)) = board.get(r, c) {
                    let (x, y) = geometry.origin_of((r, c));
                    pieces.push(Piece {
                        id: pieces.len(),
                        color,
                        pos: (r, c),
                        x,
                        y,
                        scale: 1.0,
                    });
                }
            }
        }
        Self { geometry, pieces }
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn piece_at(&self, pos: Pos) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.pos == pos)
    }

    /// Recompute every piece's pixel offset from the current geometry.
    fn resync_pixels(&mut self) {
        for piece in &mut self.pieces {
            let (x, y) = self.geometry.origin_of(piece.pos);
            piece.x = x;
            piece.y = y;
        }
    }

    /// Reapply selection emphasis from the current state.
    fn resync_emphasis(&mut self, game: &Game) {
        let selected = game.selected();
        for piece in &mut self.pieces {
            piece.scale = if selected == Some(piece.pos) {
                SELECTED_SCALE
            } else {
                1.0
            };
        }
    }

    /// Rebind every piece to the knight positions on the board.
    ///
    /// Knights of one color are interchangeable, so pieces keep their ids and
    /// are matched to positions color by color in board order.
    fn rebind(&mut self, game: &Game) {
        for color in [Color::White, Color::Black] {
            let now = game.board().positions_of(color);
            let mut it = now.into_iter();
            for piece in self.pieces.iter_mut().filter(|p| p.color == color) {
                if let Some(pos) = it.next() {
                    piece.pos = pos;
                }
            }
        }
    }

    /// Called by [`GeometrySync`] when the container size changed.
    fn geometry_changed(&mut self, cell_px: f32) {
        self.geometry = Geometry::new(cell_px);
        self.resync_pixels();
    }
}

impl Render for PieceRenderer {
    fn render_full(&mut self, game: &Game) {
        self.rebind(game);
        self.resync_pixels();
        self.resync_emphasis(game);
    }

    /// Reposition only the pieces involved in the change; emphasis is still
    /// refreshed globally so no stale markers survive.
    fn render_incremental(&mut self, game: &Game, changed: &[Pos]) {
        for &from in changed {
            // A changed position matters when the piece bound there no
            // longer matches the board, i.e. its knight hopped away.
            let moved = self.pieces.iter().position(|p| {
                p.pos == from && game.board().get(from.0, from.1) != Some(Cell::Knight(p.color))
            });
            let Some(i) = moved else { continue };
            let color = self.pieces[i].color;
            let taken: Vec<Pos> = self
                .pieces
                .iter()
                .enumerate()
                .filter(|&(j, p)| j != i && p.color == color)
                .map(|(_, p)| p.pos)
                .collect();
            let dest = game
                .board()
                .positions_of(color)
                .into_iter()
                .find(|p| !taken.contains(p));
            if let Some(dest) = dest {
                let (x, y) = self.geometry.origin_of(dest);
                let piece = &mut self.pieces[i];
                piece.pos = dest;
                piece.x = x;
                piece.y = y;
            }
        }
        self.resync_emphasis(game);
    }
}

/// Resize notifications for pixel geometry.
///
/// This sits apart from the gameplay path on purpose: a resize refreshes
/// rendering output only and never touches the board, the selection or the
/// move counter.
pub struct GeometrySync {
    cell_px: f32,
}

impl GeometrySync {
    pub fn new(cell_px: f32) -> Self {
        Self { cell_px }
    }

    pub fn cell_px(&self) -> f32 {
        self.cell_px
    }

    /// Record a new container-derived cell size. Returns whether it changed.
    pub fn resize(&mut self, cell_px: f32) -> bool {
        if self.cell_px == cell_px {
            return false;
        }
        self.cell_px = cell_px;
        true
    }

    /// Push the current geometry into a renderer.
    pub fn sync(&self, renderer: &mut PieceRenderer) {
        renderer.geometry_changed(self.cell_px);
    }
}

/// Render a static snapshot of a layout's starting position.
///
/// This is the non-interactive preview board: it draws the layout, not the
/// live board, carries no selection or target markers and is rendered once.
pub fn render_preview(layout: &Layout) -> String {
    let mut out = String::new();
    for row in layout.rows() {
        for &cell in row {
            out.push(' ');
            out.push(glyph(cell));
            out.push(' ');
        }
        out.push('\n');
    }
    out
}
