//! Split Breakout - a single-screen breakout game with splitting balls
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game flow)
//! - `input`: Keyboard state tracking
//! - `renderer`: 2D surface drawing
//! - `platform`: Browser glue (canvas lookup, 2D context)
//! - `tuning`: Data-driven game balance

pub mod input;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use input::{InputTracker, Key};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one display frame at 60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per display frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Drawing surface, in logical units
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;

    /// Paddle geometry
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 12.0;
    pub const PADDLE_MARGIN_BOTTOM: f32 = 45.0;
    /// Top edge of the paddle
    pub const PADDLE_Y: f32 = CANVAS_HEIGHT - PADDLE_HEIGHT - PADDLE_MARGIN_BOTTOM;

    /// Block grid
    pub const BLOCK_COLS: usize = 12;
    pub const BLOCK_ROWS: usize = 8;
    pub const BLOCK_WIDTH: f32 = 50.0;
    pub const BLOCK_HEIGHT: f32 = 25.0;
    pub const BLOCK_PADDING: f32 = 4.0;
    /// Empty lane kept on each side of the block band
    pub const SIDE_LANE_WIDTH: f32 = 80.0;
    pub const BLOCK_OFFSET_TOP: f32 = 80.0;
}
