//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One call to [`tick`] is one frame
//! - Randomness only through an injected [`RandomSource`]
//! - Stable iteration order (balls by spawn order, blocks column-major)
//! - No rendering or platform dependencies

pub mod collision;
pub mod layout;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{Axis, overlaps_block, paddle_redirect, reflect_walls, resolve_block};
pub use layout::{BLOCK_MAP, block_index, block_origin, build_blocks};
pub use rng::{RandomSource, seeded};
pub use state::{Ball, Block, BlockKind, GamePhase, GameState, Paddle};
pub use tick::{GameEvent, TickInput, tick};
