//! Terminal game renderer.
//!
//! A small, game-oriented rendering layer: [`GameView`] paints a
//! [`core::GameSnapshot`] into a [`FrameBuffer`] (pure, testable), and
//! [`TerminalRenderer`] flushes framebuffers to the terminal, emitting only
//! the cells that changed since the last frame.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
