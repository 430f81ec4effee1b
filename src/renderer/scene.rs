//! Frame drawing
//!
//! Outside of `Playing` only the status line is drawn; the world is hidden.

use super::{Surface, TextAlign};
use crate::consts::*;
use crate::sim::{BlockKind, GameState};

/// Fill colors
pub mod palette {
    pub const TEXT: &str = "#fff";
    pub const STEEL: &str = "#555";
    pub const NORMAL: &str = "#ff7a00";
    pub const PADDLE: &str = "#fff";
    pub const BALL: &str = "#00eaff";
}

const FONT: &str = "26px sans-serif";

/// Draw one frame of `state`
pub fn render(state: &GameState, surface: &mut dyn Surface) {
    surface.clear_rect(0.0, 0.0, CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64);

    if let Some(text) = state.phase.overlay_text() {
        draw_status(surface, text);
        return;
    }

    for block in state.blocks.iter().filter(|b| b.alive) {
        let color = match block.kind {
            BlockKind::Steel => palette::STEEL,
            BlockKind::Normal => palette::NORMAL,
        };
        surface.set_fill_color(color);
        surface.fill_rect(
            block.pos.x as f64,
            block.pos.y as f64,
            BLOCK_WIDTH as f64,
            BLOCK_HEIGHT as f64,
        );
    }

    surface.set_fill_color(palette::PADDLE);
    surface.fill_rect(
        state.paddle.x as f64,
        PADDLE_Y as f64,
        PADDLE_WIDTH as f64,
        PADDLE_HEIGHT as f64,
    );

    surface.set_fill_color(palette::BALL);
    for ball in &state.balls {
        surface.fill_circle(ball.pos.x as f64, ball.pos.y as f64, BALL_RADIUS as f64);
    }
}

fn draw_status(surface: &mut dyn Surface, text: &str) {
    surface.set_fill_color(palette::TEXT);
    surface.set_font(FONT);
    surface.set_text_align(TextAlign::Center);
    surface.fill_text(
        text,
        CANVAS_WIDTH as f64 / 2.0,
        CANVAS_HEIGHT as f64 / 2.0,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Clear,
        Fill(String),
        Rect(f64, f64, f64, f64),
        Circle(f64, f64, f64),
        Font(String),
        Align(TextAlign),
        Text(String, f64, f64),
    }

    /// Records every call in order
    #[derive(Default)]
    struct Recording {
        ops: Vec<Op>,
    }

    impl Surface for Recording {
        fn clear_rect(&mut self, _x: f64, _y: f64, _width: f64, _height: f64) {
            self.ops.push(Op::Clear);
        }
        fn set_fill_color(&mut self, color: &str) {
            self.ops.push(Op::Fill(color.to_string()));
        }
        fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
            self.ops.push(Op::Rect(x, y, width, height));
        }
        fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64) {
            self.ops.push(Op::Circle(cx, cy, radius));
        }
        fn set_font(&mut self, font: &str) {
            self.ops.push(Op::Font(font.to_string()));
        }
        fn set_text_align(&mut self, align: TextAlign) {
            self.ops.push(Op::Align(align));
        }
        fn fill_text(&mut self, text: &str, x: f64, y: f64) {
            self.ops.push(Op::Text(text.to_string(), x, y));
        }
    }

    fn draw(state: &GameState) -> Vec<Op> {
        let mut surface = Recording::default();
        render(state, &mut surface);
        surface.ops
    }

    #[test]
    fn test_title_screen_draws_only_text() {
        let ops = draw(&GameState::default());
        assert_eq!(
            ops,
            vec![
                Op::Clear,
                Op::Fill("#fff".into()),
                Op::Font("26px sans-serif".into()),
                Op::Align(TextAlign::Center),
                Op::Text("PRESS ENTER TO START".into(), 400.0, 300.0),
            ]
        );
    }

    #[test]
    fn test_end_screens_hide_world() {
        let mut state = GameState::default();
        state.reset();

        state.phase = GamePhase::GameOver;
        let ops = draw(&state);
        assert!(ops.contains(&Op::Text("GAME OVER - PRESS ENTER".into(), 400.0, 300.0)));
        assert!(!ops.iter().any(|op| matches!(op, Op::Rect(..) | Op::Circle(..))));

        state.phase = GamePhase::Clear;
        let ops = draw(&state);
        assert!(ops.contains(&Op::Text("CLEAR! PRESS ENTER".into(), 400.0, 300.0)));
    }

    #[test]
    fn test_playing_draws_world() {
        let mut state = GameState::default();
        state.reset();
        state.blocks[0].alive = false;

        let ops = draw(&state);
        assert_eq!(ops[0], Op::Clear);

        let rects = ops.iter().filter(|op| matches!(op, Op::Rect(..))).count();
        // 95 living blocks plus the paddle
        assert_eq!(rects, 96);
        assert!(ops.contains(&Op::Rect(350.0, 543.0, 100.0, 12.0)));
        assert!(ops.contains(&Op::Circle(400.0, 520.0, 8.0)));
        assert!(!ops.iter().any(|op| matches!(op, Op::Text(..))));
    }

    #[test]
    fn test_block_colors_follow_kind() {
        let mut state = GameState::default();
        state.reset();
        let ops = draw(&state);

        // First block drawn is (0, 0), a normal block; (0, 1) is steel
        let first_rect = ops.iter().position(|op| matches!(op, Op::Rect(..))).unwrap();
        assert_eq!(ops[first_rect - 1], Op::Fill(palette::NORMAL.into()));
        assert_eq!(ops[first_rect + 1], Op::Fill(palette::STEEL.into()));
    }
}
