//! Core game logic - pure, deterministic, and testable
//!
//! All game rules, state management and simulation live here. Nothing in this
//! crate touches the terminal or the clock: the host feeds elapsed time and
//! commands in, and reads snapshots out. The same seed always produces the
//! same game.
//!
//! # Module Structure
//!
//! - [`board`]: configurable grid of locked cells and line clearing
//! - [`collision`]: placement checks against walls, floor and stack
//! - [`config`]: engine configuration and validation
//! - [`game_state`]: the engine state machine (spawn, move, rotate, lock, gravity)
//! - [`pieces`]: shape tables, spawn position and the simple kick rotation
//! - [`rng`]: seeded 7-bag piece generation
//! - [`scoring`]: line clear points, levels and the drop interval curve
//! - [`snapshot`]: read-only view for renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::{EngineConfig, GameState};
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::init(EngineConfig::default(), 12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.board().filled_count(), 4);
//! assert_eq!(game.piece_id(), 2);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed milliseconds. Gravity moves the piece one row whenever the
//! accumulated time reaches the current drop interval (1000ms at level 1,
//! 100ms less per level, never below 100ms).

pub mod board;
pub mod collision;
pub mod config;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

pub use board::{Board, ClearedRows};
pub use collision::collides;
pub use config::{ConfigError, EngineConfig, LineScoreRule};
pub use game_state::{GameState, LockEvent, Phase, Tetromino};
pub use pieces::{get_shape, try_rotate, Shape};
pub use rng::PieceQueue;
pub use scoring::{calculate_drop_score, drop_interval_ms, level_for_lines, line_clear_points};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
