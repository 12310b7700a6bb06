//! Shared types and constants
//!
//! Plain data used by every layer of the game: the engine in `blockfall-core`,
//! the key mapping in `blockfall-input` and the renderer in `blockfall-term`.
//! Nothing here has dependencies, so it can be used from any context.
//!
//! # Board Dimensions
//!
//! The default playfield is 10 columns by 20 rows. Rows are numbered top (0)
//! to bottom (19). Other sizes are allowed by the engine configuration within
//! [`MIN_BOARD_WIDTH`]..=[`MAX_BOARD_WIDTH`] and
//! [`MIN_BOARD_HEIGHT`]..=[`MAX_BOARD_HEIGHT`].
//!
//! # Drop Speed
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_DROP_MS` | 1000 | Gravity interval at level 1 |
//! | `DROP_STEP_MS` | 100 | Interval reduction per level |
//! | `MIN_DROP_MS` | 100 | Interval floor |
//! | `LINES_PER_LEVEL` | 10 | Lines needed to gain a level |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//! assert_eq!(PieceKind::T.color_hex(), 0x87CEEB);
//!
//! let action = GameAction::from_str("hardDrop").unwrap();
//! assert_eq!(action, GameAction::HardDrop);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Default board width in cells
pub const BOARD_WIDTH: u8 = 10;

/// Default board height in cells
pub const BOARD_HEIGHT: u8 = 20;

pub const MIN_BOARD_WIDTH: u8 = 4;
pub const MAX_BOARD_WIDTH: u8 = 40;
pub const MIN_BOARD_HEIGHT: u8 = 4;
pub const MAX_BOARD_HEIGHT: u8 = 60;

/// Gravity interval at level 1 (one row per second)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity interval reduction per level gained
pub const DROP_STEP_MS: u32 = 100;

/// Fastest gravity interval
pub const MIN_DROP_MS: u32 = 100;

/// Cumulative lines per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Base points for one cleared line
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Default host frame interval (~60 FPS)
pub const DEFAULT_FRAME_MS: u32 = 16;

/// The seven piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Display color as `0xRRGGBB`.
    pub fn color_hex(&self) -> u32 {
        match self {
            PieceKind::I => 0xFF9900,
            PieceKind::O => 0xFFD700,
            PieceKind::T => 0x87CEEB,
            PieceKind::S => 0x90EE90,
            PieceKind::Z => 0xFF6B6B,
            PieceKind::J => 0x9370DB,
            PieceKind::L => 0xFFA500,
        }
    }
}

/// Commands accepted by the engine
///
/// The input adapter is the only place that maps raw keys onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Rotate to the next rotation state, with kicks
    Rotate,
    /// Drop to the lowest reachable row and lock
    HardDrop,
    /// Toggle pause
    Pause,
    /// Leave pause (no-op when not paused)
    Resume,
    /// Reset everything and start a new session
    Restart,
}

impl GameAction {
    /// Parse an action from its camelCase name (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            "harddrop" => Some(GameAction::HardDrop),
            "pause" => Some(GameAction::Pause),
            "resume" => Some(GameAction::Resume),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::HardDrop => "hardDrop",
            GameAction::Pause => "pause",
            GameAction::Resume => "resume",
            GameAction::Restart => "restart",
        }
    }
}

/// A board cell: empty, or holding the kind of the piece that was locked there.
pub type Cell = Option<PieceKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_drop_curve_constants() {
        assert_eq!(BASE_DROP_MS, 1000);
        assert_eq!(DROP_STEP_MS, 100);
        assert_eq!(MIN_DROP_MS, 100);
        assert!(MIN_DROP_MS <= BASE_DROP_MS);
        assert_eq!(LINES_PER_LEVEL, 10);
    }

    #[test]
    fn piece_kind_names_round_trip() {
        for kind in PieceKind::ALL.iter() {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(*kind));
        }
    }

    #[test]
    fn game_action_names_round_trip() {
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::Rotate,
            GameAction::HardDrop,
            GameAction::Pause,
            GameAction::Resume,
            GameAction::Restart,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }
}
