//! Split Breakout entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use anyhow::Result;
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;

    use split_breakout::consts::*;
    use split_breakout::platform::{self, browser};
    use split_breakout::renderer::{CanvasSurface, render};
    use split_breakout::sim::{GameEvent, GameState, seeded, tick};
    use split_breakout::{InputTracker, Key};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        rng: Pcg32,
        input: InputTracker,
        surface: CanvasSurface,
        accumulator: f32,
        last_time: f64,
    }

    impl Game {
        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                // Confirm is consumed by the first tick that sees it
                let input = self.input.take();
                for event in tick(&mut self.state, &input, &mut self.rng) {
                    if let GameEvent::PhaseChanged { to, .. } = event {
                        log::info!("Now {:?}, {} ball(s)", to, self.state.balls.len());
                    }
                }
                self.accumulator -= SIM_DT;
                substeps += 1;
            }
            if substeps == MAX_SUBSTEPS {
                // Drop the backlog instead of spiralling
                self.accumulator = 0.0;
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            render(&self.state, &mut self.surface);
        }
    }

    pub fn run() -> Result<()> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger already set: {e}").into());
        }

        log::info!("Split Breakout starting...");

        let canvas = browser::canvas()?;
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);
        let context = browser::context(&canvas)?;

        let tuning = platform::tuning_or_default(
            browser::tuning_attribute(&canvas).as_deref(),
            "canvas data-tuning",
        );

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(tuning),
            rng: seeded(seed),
            input: InputTracker::new(),
            surface: CanvasSurface::new(context),
            accumulator: 0.0,
            last_time: 0.0,
        }));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone())?;

        // Start game loop
        request_animation_frame(game);

        log::info!("Split Breakout running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> Result<()> {
        let window = browser::window()?;

        // Key down: held flags and confirm
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(key) = Key::from_name(&event.key()) {
                    if key != Key::Confirm {
                        event.prevent_default();
                    }
                    game.borrow_mut().input.key_down(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up: release held flags
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                game.borrow_mut().input.key_up_named(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window gone, stopping game loop");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Split Breakout failed to start: {:#}", e);
        web_sys::console::error_1(&format!("Split Breakout failed to start: {e:#}").into());
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Split Breakout (native) starting...");
    log::info!("Native mode runs a headless autopilot - use `trunk serve` for the web version");

    let tuning = match split_breakout::platform::native::tuning_file()? {
        Some((path, json)) => split_breakout::platform::tuning_or_default(Some(&json), &path),
        None => split_breakout::platform::tuning_or_default(None, "defaults"),
    };

    let seed = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<u64>())
        .transpose()?
        .unwrap_or(12345);

    autopilot::run(tuning, seed);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use split_breakout::Tuning;
    use split_breakout::consts::*;
    use split_breakout::sim::{GameEvent, GamePhase, GameState, TickInput, seeded, tick};

    /// Ten minutes of play at 60 Hz
    const MAX_TICKS: u64 = 60 * 60 * 10;

    /// Play one game with the paddle chasing the lowest ball
    pub fn run(tuning: Tuning, seed: u64) {
        let mut state = GameState::new(tuning);
        let mut rng = seeded(seed);
        let mut splits = 0u32;
        let mut destroyed = 0u32;
        let mut peak_balls = 0usize;

        let start = TickInput {
            confirm: true,
            ..Default::default()
        };
        tick(&mut state, &start, &mut rng);

        while state.phase == GamePhase::Playing && state.time_ticks < MAX_TICKS {
            let input = steer(&state);
            for event in tick(&mut state, &input, &mut rng) {
                match event {
                    GameEvent::BallSplit { .. } => splits += 1,
                    GameEvent::BlockDestroyed { .. } => destroyed += 1,
                    _ => {}
                }
            }
            peak_balls = peak_balls.max(state.balls.len());
        }

        log::info!(
            "Seed {}: {:?} after {} ticks, {} blocks destroyed, {} splits, peak {} balls",
            seed,
            state.phase,
            state.time_ticks,
            destroyed,
            splits,
            peak_balls
        );
        println!(
            "{:?} after {} ticks ({} blocks left)",
            state.phase,
            state.time_ticks,
            state.remaining_blocks()
        );
    }

    /// Hold the key that moves the paddle center under the lowest ball
    fn steer(state: &GameState) -> TickInput {
        let Some(target) = state
            .balls
            .iter()
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map(|ball| ball.pos.x)
        else {
            return TickInput::default();
        };
        let center = state.paddle.x + PADDLE_WIDTH / 2.0;
        let dead_zone = state.tuning.paddle_speed;
        TickInput {
            left: target < center - dead_zone,
            right: target > center + dead_zone,
            confirm: false,
        }
    }
}
