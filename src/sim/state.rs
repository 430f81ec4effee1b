//! Game state and core simulation types
//!
//! Everything a frame reads or mutates lives in [`GameState`]; nothing is
//! held in globals or captured by closures.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::layout;
use crate::consts::*;
use crate::tuning::Tuning;

/// Coarse game flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for confirm
    #[default]
    Start,
    /// Active gameplay
    Playing,
    /// Every ball fell off the bottom
    GameOver,
    /// Every normal block destroyed
    Clear,
}

impl GamePhase {
    /// Whether the confirm key starts a fresh game from this phase
    pub fn accepts_confirm(self) -> bool {
        !matches!(self, GamePhase::Playing)
    }

    /// Overlay text shown instead of the world, if any
    pub fn overlay_text(self) -> Option<&'static str> {
        match self {
            GamePhase::Start => Some("PRESS ENTER TO START"),
            GamePhase::Playing => None,
            GamePhase::GameOver => Some("GAME OVER - PRESS ENTER"),
            GamePhase::Clear => Some("CLEAR! PRESS ENTER"),
        }
    }
}

/// A ball entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center, in canvas coordinates
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Whether the ball has fully passed the bottom edge
    #[inline]
    pub fn is_below(&self, height: f32) -> bool {
        self.pos.y - BALL_RADIUS > height
    }
}

/// Block types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlockKind {
    #[default]
    Normal,
    /// Bounces balls, never destroyed, doesn't count for clear
    Steel,
}

/// A block in the grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Top-left corner
    pub pos: Vec2,
    pub alive: bool,
    pub kind: BlockKind,
}

impl Block {
    /// Returns true if this block must be destroyed to clear the grid
    pub fn counts_for_clear(&self) -> bool {
        self.kind == BlockKind::Normal
    }

    /// Mark a normal block destroyed. Returns true only on the alive -> destroyed
    /// transition; steel blocks are left untouched.
    pub fn hit(&mut self) -> bool {
        if self.kind == BlockKind::Steel || !self.alive {
            return false;
        }
        self.alive = false;
        true
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: (CANVAS_WIDTH - PADDLE_WIDTH) / 2.0,
        }
    }
}

impl Paddle {
    /// Move by `dx` and keep the paddle fully on the canvas
    pub fn shift(&mut self, dx: f32) {
        self.x = (self.x + dx).clamp(0.0, CANVAS_WIDTH - PADDLE_WIDTH);
    }

    /// Whether `x` lies strictly inside the paddle's horizontal span
    #[inline]
    pub fn spans(&self, x: f32) -> bool {
        x > self.x && x < self.x + PADDLE_WIDTH
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// Player paddle
    pub paddle: Paddle,
    /// Live balls, in spawn order
    pub balls: Vec<Ball>,
    /// Block grid, column-major (see [`layout::block_index`])
    pub blocks: Vec<Block>,
    /// Balance values for this session
    pub tuning: Tuning,
    /// Ticks simulated since the last reset
    pub time_ticks: u64,
}

impl GameState {
    /// A fresh session on the title screen; the world is empty until reset
    pub fn new(tuning: Tuning) -> Self {
        Self {
            phase: GamePhase::Start,
            paddle: Paddle::default(),
            balls: Vec::new(),
            blocks: Vec::new(),
            tuning,
            time_ticks: 0,
        }
    }

    /// Discard the world and start a new run: one ball above the paddle, the
    /// paddle centered, every block rebuilt from the map.
    pub fn reset(&mut self) {
        let start = Vec2::new(
            CANVAS_WIDTH / 2.0,
            CANVAS_HEIGHT - self.tuning.ball_start_offset_bottom,
        );
        self.balls = vec![Ball::new(start, self.tuning.ball_start_velocity)];
        self.paddle = Paddle::default();
        self.blocks = layout::build_blocks();
        self.time_ticks = 0;
        self.phase = GamePhase::Playing;
    }

    /// Number of normal blocks still standing
    pub fn remaining_blocks(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| b.alive && b.counts_for_clear())
            .count()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}
