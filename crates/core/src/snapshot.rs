//! Render snapshot - a read-only copy of the game for drawing

use crate::game_state::Tetromino;
use crate::pieces::{get_shape, MinoOffset};
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: usize,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    /// Absolute board coordinates of the piece's cells, including rows above the top.
    pub fn cells(&self) -> impl Iterator<Item = MinoOffset> + '_ {
        get_shape(self.kind, self.rotation)
            .cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

/// Read-only view of a game for renderers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Row-major locked cells, `width * height` long
    pub board: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub next: PieceKind,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
    pub paused: bool,
    pub game_over: bool,
    pub episode_id: u32,
    pub piece_id: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            board: vec![None; BOARD_WIDTH as usize * BOARD_HEIGHT as usize],
            active: None,
            next: PieceKind::I,
            score: 0,
            lines: 0,
            level: 1,
            drop_interval_ms: 0,
            paused: false,
            game_over: false,
            episode_id: 0,
            piece_id: 0,
        }
    }
}

impl GameSnapshot {
    /// Locked cell at (x, y); `None` when empty or out of range
    pub fn cell(&self, x: u8, y: u8) -> Cell {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.board[y as usize * self.width as usize + x as usize]
    }
}
