//! Collision detection and response
//!
//! Balls are treated as axis-aligned boxes of side `2 * BALL_RADIUS` when
//! tested against blocks. Walls and the paddle are checked against the
//! projected position (`pos + vel`) before integration.

use glam::Vec2;

use super::state::{Ball, Paddle};
use crate::consts::*;

/// Axis along which a block contact was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Whether the ball's bounding box strictly overlaps the block at `block_pos`
pub fn overlaps_block(ball_pos: Vec2, block_pos: Vec2) -> bool {
    ball_pos.x + BALL_RADIUS > block_pos.x
        && ball_pos.x - BALL_RADIUS < block_pos.x + BLOCK_WIDTH
        && ball_pos.y + BALL_RADIUS > block_pos.y
        && ball_pos.y - BALL_RADIUS < block_pos.y + BLOCK_HEIGHT
}

/// Penetration depth along each axis (the shallower side of each)
pub fn penetration(ball_pos: Vec2, block_pos: Vec2) -> Vec2 {
    Vec2::new(
        (ball_pos.x + BALL_RADIUS - block_pos.x)
            .min(block_pos.x + BLOCK_WIDTH - (ball_pos.x - BALL_RADIUS)),
        (ball_pos.y + BALL_RADIUS - block_pos.y)
            .min(block_pos.y + BLOCK_HEIGHT - (ball_pos.y - BALL_RADIUS)),
    )
}

/// Bounce an overlapping ball off a block.
///
/// The axis with the smaller penetration wins (ties go to Y); that velocity
/// component is negated and the ball is snapped just outside the block edge
/// on the side its center lies.
pub fn resolve_block(ball: &mut Ball, block_pos: Vec2) -> Axis {
    let depth = penetration(ball.pos, block_pos);

    if depth.x < depth.y {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = if ball.pos.x < block_pos.x {
            block_pos.x - BALL_RADIUS
        } else {
            block_pos.x + BLOCK_WIDTH + BALL_RADIUS
        };
        Axis::X
    } else {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = if ball.pos.y < block_pos.y {
            block_pos.y - BALL_RADIUS
        } else {
            block_pos.y + BLOCK_HEIGHT + BALL_RADIUS
        };
        Axis::Y
    }
}

/// Reflect off the side and top walls if the next step would cross them.
/// Returns true if any component flipped.
pub fn reflect_walls(ball: &mut Ball) -> bool {
    let next = ball.pos + ball.vel;
    let mut hit = false;

    if next.x > CANVAS_WIDTH - BALL_RADIUS || next.x < BALL_RADIUS {
        ball.vel.x = -ball.vel.x;
        hit = true;
    }
    if next.y < BALL_RADIUS {
        ball.vel.y = -ball.vel.y;
        hit = true;
    }
    hit
}

/// Redirect a ball whose next step reaches the paddle's top edge.
///
/// The new dx depends only on where across the paddle the ball is, spanning
/// `[-deflection / 2, deflection / 2]`; dy always points up.
pub fn paddle_redirect(ball: &mut Ball, paddle: &Paddle, deflection: f32) -> bool {
    let next_y = ball.pos.y + ball.vel.y;
    if next_y > PADDLE_Y - BALL_RADIUS && paddle.spans(ball.pos.x) {
        let hit = (ball.pos.x - paddle.x) / PADDLE_WIDTH - 0.5;
        ball.vel.x = hit * deflection;
        ball.vel.y = -ball.vel.y.abs();
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball(x: f32, y: f32, dx: f32, dy: f32) -> Ball {
        Ball::new(Vec2::new(x, y), Vec2::new(dx, dy))
    }

    #[test]
    fn test_overlap_is_strict() {
        let block = Vec2::new(100.0, 100.0);
        // Touching the left edge exactly is not an overlap
        assert!(!overlaps_block(Vec2::new(92.0, 110.0), block));
        assert!(overlaps_block(Vec2::new(93.0, 110.0), block));
        assert!(!overlaps_block(Vec2::new(125.0, 133.0), block));
        assert!(overlaps_block(Vec2::new(125.0, 132.0), block));
    }

    #[test]
    fn test_resolve_from_below_flips_dy() {
        let block = Vec2::new(100.0, 100.0);
        // Ball center 3 units into the bottom edge, well inside horizontally
        let mut b = ball(125.0, 130.0, 2.0, -4.0);
        let axis = resolve_block(&mut b, block);

        assert_eq!(axis, Axis::Y);
        assert_eq!(b.vel, Vec2::new(2.0, 4.0));
        assert_eq!(b.pos, Vec2::new(125.0, 133.0));
        assert!(!overlaps_block(b.pos, block));
    }

    #[test]
    fn test_resolve_from_left_flips_dx() {
        let block = Vec2::new(100.0, 100.0);
        // Shallow horizontal penetration, deep vertical
        let mut b = ball(94.0, 112.0, 4.0, 1.0);
        let axis = resolve_block(&mut b, block);

        assert_eq!(axis, Axis::X);
        assert_eq!(b.vel, Vec2::new(-4.0, 1.0));
        assert_eq!(b.pos, Vec2::new(92.0, 112.0));
    }

    #[test]
    fn test_resolve_from_right_snaps_past_edge() {
        let block = Vec2::new(100.0, 100.0);
        let mut b = ball(156.0, 112.0, -4.0, 0.0);
        assert_eq!(resolve_block(&mut b, block), Axis::X);
        assert_eq!(b.pos.x, 158.0);
        assert_eq!(b.vel.x, 4.0);
    }

    #[test]
    fn test_penetration_tie_resolves_vertically() {
        let block = Vec2::new(100.0, 100.0);
        // Corner contact: 2 units deep on both axes
        let mut b = ball(94.0, 94.0, 3.0, 3.0);
        let depth = penetration(b.pos, block);
        assert_eq!(depth.x, depth.y);
        assert_eq!(resolve_block(&mut b, block), Axis::Y);
        assert_eq!(b.vel, Vec2::new(3.0, -3.0));
        assert_eq!(b.pos.y, 92.0);
    }

    #[test]
    fn test_right_wall_reflection() {
        let mut b = ball(CANVAS_WIDTH - BALL_RADIUS - 1.0, 300.0, 4.0, 0.0);
        assert!(reflect_walls(&mut b));
        assert_eq!(b.vel.x, -4.0);
    }

    #[test]
    fn test_top_wall_reflection() {
        let mut b = ball(300.0, 10.0, 0.0, -4.0);
        assert!(reflect_walls(&mut b));
        assert_eq!(b.vel.y, 4.0);
    }

    #[test]
    fn test_no_wall_in_open_space() {
        let mut b = ball(400.0, 300.0, 4.0, -4.0);
        assert!(!reflect_walls(&mut b));
        assert_eq!(b.vel, Vec2::new(4.0, -4.0));
    }

    #[test]
    fn test_paddle_center_bounces_straight_up() {
        let paddle = Paddle { x: 350.0 };
        let mut b = ball(400.0, 532.0, 3.0, 4.0);
        assert!(paddle_redirect(&mut b, &paddle, 10.0));
        assert_eq!(b.vel, Vec2::new(0.0, -4.0));
    }

    #[test]
    fn test_paddle_edges_deflect_outward() {
        let paddle = Paddle { x: 350.0 };
        let mut left = ball(360.0, 532.0, 0.0, 4.0);
        let mut right = ball(440.0, 532.0, 0.0, 4.0);
        paddle_redirect(&mut left, &paddle, 10.0);
        paddle_redirect(&mut right, &paddle, 10.0);
        assert!((left.vel.x - -4.0).abs() < 1e-5);
        assert!((right.vel.x - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_paddle_always_sends_ball_up() {
        let paddle = Paddle { x: 350.0 };
        // Already moving up but inside the band: dy stays negative
        let mut b = ball(400.0, 540.0, 0.0, -4.0);
        assert!(paddle_redirect(&mut b, &paddle, 10.0));
        assert_eq!(b.vel.y, -4.0);
    }

    #[test]
    fn test_paddle_missed_outside_span() {
        let paddle = Paddle { x: 350.0 };
        let mut b = ball(350.0, 532.0, 0.0, 4.0);
        assert!(!paddle_redirect(&mut b, &paddle, 10.0));
        assert_eq!(b.vel.y, 4.0);
    }
}
