//! Per-frame simulation tick
//!
//! Advances the game by exactly one frame. Velocities are displacements per
//! tick, so the caller is responsible for running ticks at a fixed rate.

use glam::Vec2;

use super::collision::{overlaps_block, paddle_redirect, reflect_walls, resolve_block};
use super::rng::RandomSource;
use super::state::{Ball, BlockKind, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left arrow held
    pub left: bool,
    /// Right arrow held
    pub right: bool,
    /// Confirm pressed since the last tick (one-shot)
    pub confirm: bool,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A ball bounced off a steel block (index into `blocks`)
    SteelHit { block: usize },
    /// A normal block was destroyed (index into `blocks`)
    BlockDestroyed { block: usize },
    /// A new ball was spawned from a destroyed block
    BallSplit { pos: Vec2, vel: Vec2 },
    /// A ball fell past the bottom edge
    BallLost,
    /// The coarse game phase changed
    PhaseChanged { from: GamePhase, to: GamePhase },
}

/// Advance the game state by one frame
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    rng: &mut dyn RandomSource,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.confirm && state.phase.accepts_confirm() {
        let from = state.phase;
        state.reset();
        log::info!("New game started (from {:?})", from);
        events.push(GameEvent::PhaseChanged {
            from,
            to: GamePhase::Playing,
        });
    }

    if state.phase != GamePhase::Playing {
        return events;
    }

    state.time_ticks += 1;

    // --- BLOCKS ---
    // Split balls join the list but are not visited by this pass
    let ball_count = state.balls.len();
    for i in 0..ball_count {
        collide_blocks(state, i, rng, &mut events);
    }

    // --- WALLS, PADDLE, MOVEMENT ---
    let deflection = state.tuning.paddle_deflection;
    for ball in &mut state.balls {
        reflect_walls(ball);
        paddle_redirect(ball, &state.paddle, deflection);
        ball.pos += ball.vel;
    }

    // --- FALLING OFF ---
    let before = state.balls.len();
    state.balls.retain(|b| !b.is_below(CANVAS_HEIGHT));
    let lost = before - state.balls.len();
    if lost > 0 {
        log::debug!("{} ball(s) lost, {} remaining", lost, state.balls.len());
        events.extend(std::iter::repeat_n(GameEvent::BallLost, lost));
    }
    if state.balls.is_empty() {
        set_phase(state, GamePhase::GameOver, &mut events);
    }

    // --- PADDLE ---
    let speed = state.tuning.paddle_speed;
    if input.right {
        state.paddle.shift(speed);
    }
    if input.left {
        state.paddle.shift(-speed);
    }

    // Checked regardless of remaining balls, so it wins over GameOver
    if state.remaining_blocks() == 0 {
        set_phase(state, GamePhase::Clear, &mut events);
    }

    events
}

/// Resolve ball `i` against every living block in column-major order.
///
/// Each contact corrects the ball before the next block is tested, so one
/// ball can bounce off several blocks in a single frame.
fn collide_blocks(
    state: &mut GameState,
    i: usize,
    rng: &mut dyn RandomSource,
    events: &mut Vec<GameEvent>,
) {
    let split_rate = state.tuning.split_rate;
    let jitter = state.tuning.split_jitter;

    for (index, block) in state.blocks.iter_mut().enumerate() {
        if !block.alive {
            continue;
        }
        let ball = &mut state.balls[i];
        if !overlaps_block(ball.pos, block.pos) {
            continue;
        }

        let axis = resolve_block(ball, block.pos);

        if block.kind == BlockKind::Steel {
            events.push(GameEvent::SteelHit { block: index });
            continue;
        }

        if block.hit() {
            events.push(GameEvent::BlockDestroyed { block: index });

            if rng.next_unit() < split_rate {
                let dx = -ball.vel.x + (rng.next_unit() - 0.5) * 2.0 * jitter;
                let child = Ball::new(ball.pos, Vec2::new(dx, ball.vel.y));
                log::debug!(
                    "Ball split at ({:.1}, {:.1}) after {:?} bounce",
                    child.pos.x,
                    child.pos.y,
                    axis
                );
                events.push(GameEvent::BallSplit {
                    pos: child.pos,
                    vel: child.vel,
                });
                state.balls.push(child);
            }
        }
    }
}

fn set_phase(state: &mut GameState, to: GamePhase, events: &mut Vec<GameEvent>) {
    let from = state.phase;
    if from == to {
        return;
    }
    state.phase = to;
    log::info!("Phase {:?} -> {:?} after {} ticks", from, to, state.time_ticks);
    events.push(GameEvent::PhaseChanged { from, to });
}
