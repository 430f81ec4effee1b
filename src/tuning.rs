//! Data-driven game balance
//!
//! Geometry is fixed (see [`crate::consts`]); these are the values that shape
//! how the game feels. Any field left out of a tuning file keeps its default.

use anyhow::{Context, Result, bail};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::CANVAS_HEIGHT;

/// Gameplay balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Chance (0-1) that destroying a normal block spawns an extra ball
    pub split_rate: f32,
    /// Half-width of the uniform jitter added to a split ball's dx
    pub split_jitter: f32,
    /// Paddle displacement per tick while a direction key is held
    pub paddle_speed: f32,
    /// dx range of a paddle bounce, from the left edge to the right edge
    pub paddle_deflection: f32,
    /// Velocity of the ball created by a reset
    pub ball_start_velocity: Vec2,
    /// Distance from the bottom of the canvas to the starting ball
    pub ball_start_offset_bottom: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            split_rate: 0.3,
            split_jitter: 1.0,
            paddle_speed: 7.0,
            paddle_deflection: 10.0,
            ball_start_velocity: Vec2::new(4.0, -4.0),
            ball_start_offset_bottom: 80.0,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning =
            serde_json::from_str(json).context("Tuning is not valid JSON for this game")?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.split_rate) {
            bail!("split_rate must be within [0, 1], got {}", self.split_rate);
        }
        if self.split_jitter.is_nan() || self.split_jitter < 0.0 {
            bail!("split_jitter must be non-negative, got {}", self.split_jitter);
        }
        if !self.paddle_speed.is_finite() || self.paddle_speed <= 0.0 {
            bail!("paddle_speed must be positive, got {}", self.paddle_speed);
        }
        if self.paddle_deflection.is_nan() || self.paddle_deflection < 0.0 {
            bail!(
                "paddle_deflection must be non-negative, got {}",
                self.paddle_deflection
            );
        }
        if !self.ball_start_velocity.is_finite() || self.ball_start_velocity == Vec2::ZERO {
            bail!(
                "ball_start_velocity must be finite and non-zero, got {:?}",
                self.ball_start_velocity
            );
        }
        let offset = self.ball_start_offset_bottom;
        if offset.is_nan() || offset <= 0.0 || offset >= CANVAS_HEIGHT {
            bail!(
                "ball_start_offset_bottom must be inside the canvas, got {}",
                self.ball_start_offset_bottom
            );
        }
        Ok(())
    }
}
