//! Game state module - the engine
//!
//! Ties together the board, shape tables, bag and scoring. Owns every piece of
//! mutable game state and exposes a small command surface (move, rotate, hard
//! drop, tick, pause, restart) plus read accessors for rendering.
//!
//! Lifecycle: `Ready -> Running`, `Running <-> Paused`, `Running -> GameOver`.
//! `restart()` is the only way out of `GameOver`. Commands issued in any other
//! phase than `Running` are no-ops.

use tracing::{debug, info};

use crate::board::{Board, ClearedRows};
use crate::collision::collides;
use crate::config::{ConfigError, EngineConfig};
use crate::pieces::{get_shape, spawn_column, try_rotate, Shape, SPAWN_ROW};
use crate::rng::PieceQueue;
use crate::scoring::{calculate_drop_score, drop_interval_ms, level_for_lines, line_clear_points};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, PieceKind};

/// Active falling piece
///
/// `(x, y)` is the top-left of the shape's bounding box in board coordinates;
/// `y` may be negative while part of the piece is above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: usize,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// A piece at rotation 0, horizontally centered on a board `width` wide
    pub fn spawn(kind: PieceKind, width: u8) -> Self {
        Self {
            kind,
            rotation: 0,
            x: spawn_column(kind, width),
            y: SPAWN_ROW,
        }
    }

    /// Shape for the current rotation
    pub fn shape(&self) -> &'static Shape {
        get_shape(self.kind, self.rotation)
    }

    pub fn collides(&self, board: &Board) -> bool {
        collides(self.kind, self.rotation, self.x, self.y, board)
    }
}

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Constructed, no piece spawned yet
    Ready,
    Running,
    Paused,
    /// Terminal until `restart()`
    GameOver,
}

/// What happened when the last piece locked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    /// Cleared row indices, bottom to top, in pre-clear coordinates
    pub cleared_rows: ClearedRows,
    /// Line clear points awarded by this lock
    pub points: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: EngineConfig,
    board: Board,
    active: Option<Tetromino>,
    next: PieceKind,
    piece_queue: PieceQueue,
    phase: Phase,
    score: u32,
    lines: u32,
    level: u32,
    drop_timer_ms: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Monotonic id for spawned pieces within an episode.
    piece_id: u32,
    /// Last lock/line-clear event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a game in the `Ready` phase
    ///
    /// `config` must already be valid; use [`GameState::try_new`] for
    /// unchecked input.
    pub fn new(config: EngineConfig, seed: u64) -> Self {
        let mut piece_queue = PieceQueue::new(seed);
        let next = piece_queue.draw();

        Self {
            board: Board::with_size(config.width, config.height),
            config,
            active: None,
            next,
            piece_queue,
            phase: Phase::Ready,
            score: 0,
            lines: 0,
            level: 1,
            drop_timer_ms: 0,
            episode_id: 0,
            piece_id: 0,
            last_event: None,
        }
    }

    /// Validate `config`, then create a game in the `Ready` phase
    pub fn try_new(config: EngineConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, seed))
    }

    /// Create a game and start it immediately
    ///
    /// Same precondition as [`GameState::new`]: `config` must already be valid.
    pub fn init(config: EngineConfig, seed: u64) -> Self {
        let mut state = Self::new(config, seed);
        state.start();
        state
    }

    /// Spawn the first piece and start running
    pub fn start(&mut self) {
        if self.phase != Phase::Ready {
            return;
        }
        self.phase = Phase::Running;
        self.spawn_piece();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    /// Kind that spawns after the active piece locks
    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current gravity interval
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.level, &self.config)
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.active = self.active.map(ActiveSnapshot::from);
        out.next = self.next;
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.drop_interval_ms = self.drop_interval_ms();
        out.paused = self.is_paused();
        out.game_over = self.is_game_over();
        out.episode_id = self.episode_id;
        out.piece_id = self.piece_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Promote the next piece to active and queue a new next piece
    ///
    /// Returns false (and ends the game) if the spawned piece collides.
    fn spawn_piece(&mut self) -> bool {
        let kind = self.next;
        self.next = self.piece_queue.draw();

        let piece = Tetromino::spawn(kind, self.board.width());
        self.active = Some(piece);
        self.piece_id = self.piece_id.wrapping_add(1);
        self.drop_timer_ms = 0;

        if piece.collides(&self.board) {
            self.phase = Phase::GameOver;
            info!(
                score = self.score,
                lines = self.lines,
                level = self.level,
                kind = kind.as_str(),
                "game over: spawn blocked"
            );
            return false;
        }

        debug!(kind = kind.as_str(), x = piece.x, next = self.next.as_str(), "spawned piece");
        true
    }

    /// Move the active piece by (dx, dy) if the target does not collide
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let moved = Tetromino {
            x: active.x + dx,
            y: active.y + dy,
            ..active
        };
        if moved.collides(&self.board) {
            return false;
        }

        self.active = Some(moved);
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// Manual one-row drop; awards `soft_drop_points` when it moves
    pub fn soft_drop(&mut self) -> bool {
        let moved = self.try_move(0, 1);
        if moved {
            self.score = self
                .score
                .saturating_add(calculate_drop_score(1, self.config.soft_drop_points));
        }
        moved
    }

    /// Rotate clockwise, trying the kick list when the in-place rotation collides
    pub fn rotate(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let board = &self.board;
        let result = try_rotate(active.kind, active.rotation, active.x, active.y, |r, x, y| {
            collides(active.kind, r, x, y, board)
        });

        match result {
            Some((rotation, (dx, dy))) => {
                self.active = Some(Tetromino {
                    rotation,
                    x: active.x + dx,
                    y: active.y + dy,
                    ..active
                });
                true
            }
            None => false,
        }
    }

    /// Drop the active piece as far as it goes and lock it
    ///
    /// Returns the number of rows travelled.
    pub fn hard_drop(&mut self) -> u32 {
        if self.phase != Phase::Running || self.active.is_none() {
            return 0;
        }

        let mut rows = 0;
        while self.try_move(0, 1) {
            rows += 1;
        }
        self.score = self
            .score
            .saturating_add(calculate_drop_score(rows, self.config.hard_drop_points));

        self.lock_piece();
        rows
    }

    /// Lock the active piece onto the board, clear lines, score, and spawn
    pub fn lock_piece(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        let Some(active) = self.active.take() else {
            return;
        };

        // Cells above row 0 are dropped by the board.
        self.board
            .lock_cells(active.shape().cells(), active.x, active.y, active.kind);

        let cleared_rows = self.board.clear_full_rows();
        let lines_cleared = cleared_rows.len() as u32;

        let mut points = 0;
        if lines_cleared > 0 {
            points = line_clear_points(lines_cleared, self.level, self.config.line_score);
            self.score = self.score.saturating_add(points);
            self.lines += lines_cleared;

            let level = level_for_lines(self.lines, self.config.lines_per_level);
            if level != self.level {
                self.level = level;
                info!(level, drop_ms = self.drop_interval_ms(), "level up");
            }
            debug!(lines_cleared, points, total = self.lines, "cleared lines");
        }

        debug!(kind = active.kind.as_str(), x = active.x, y = active.y, "locked piece");
        self.last_event = Some(LockEvent {
            kind: active.kind,
            lines_cleared,
            cleared_rows,
            points,
        });

        self.spawn_piece();
    }

    /// Advance gravity by `elapsed_ms`
    ///
    /// Once the accumulated time reaches the drop interval the piece moves
    /// down one row, or locks if it cannot. Returns true when a gravity step
    /// happened.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms < self.drop_interval_ms() {
            return false;
        }

        if !self.try_move(0, 1) {
            self.lock_piece();
        }
        self.drop_timer_ms = 0;
        true
    }

    pub fn pause(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.phase = Phase::Paused;
        info!("paused");
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.phase != Phase::Paused {
            return false;
        }
        self.phase = Phase::Running;
        info!("resumed");
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            Phase::Running => self.pause(),
            Phase::Paused => self.resume(),
            Phase::Ready | Phase::GameOver => false,
        }
    }

    /// Reset board, score and bag, then start a new session
    pub fn restart(&mut self) {
        self.board.clear();
        self.piece_queue.reset();
        self.next = self.piece_queue.draw();
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.drop_timer_ms = 0;
        self.piece_id = 0;
        self.last_event = None;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.phase = Phase::Running;

        info!(episode = self.episode_id, "restarted");
        self.spawn_piece();
    }

    /// Apply a command; returns whether it changed anything
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::HardDrop => {
                let running = self.phase == Phase::Running;
                self.hard_drop();
                running
            }
            GameAction::Pause => self.toggle_pause(),
            GameAction::Resume => self.resume(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(EngineConfig::default(), 1)
    }
}
