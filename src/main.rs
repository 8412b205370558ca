//! Lane Runner entry point
//!
//! Owns the window, the input mapping, and the fixed-step loop; everything
//! gameplay-related happens inside `lane_runner::sim`.

use macroquad::prelude::{Conf, KeyCode, get_frame_time, is_key_pressed, next_frame};
use macroquad::input::{is_quit_requested, prevent_quit};

use lane_runner::consts::*;
use lane_runner::render;
use lane_runner::settings::DEFAULT_SETTINGS_FILE;
use lane_runner::sim::{GamePhase, GameState, TickInput, tick};
use lane_runner::{HighScore, Settings};

fn window_conf() -> Conf {
    Conf {
        window_title: "Lane Runner".to_string(),
        window_width: VIEW_WIDTH as i32,
        window_height: VIEW_HEIGHT as i32,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

fn seed_from_clock() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Fold this frame's key events into the pending tick input
fn poll_input(input: &mut TickInput) {
    if is_key_pressed(KeyCode::Left) {
        input.steer_left = true;
    }
    if is_key_pressed(KeyCode::Right) {
        input.steer_right = true;
    }
    if is_key_pressed(KeyCode::Up) {
        input.jump = true;
    }
    if is_key_pressed(KeyCode::P) {
        input.pause = true;
    }
    if is_key_pressed(KeyCode::R) {
        input.restart = true;
    }
    if is_key_pressed(KeyCode::Escape) || is_quit_requested() {
        input.quit = true;
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let settings = Settings::load(DEFAULT_SETTINGS_FILE);
    let mut highscore = HighScore::load(&settings.highscore_path);

    let seed = settings.seed.unwrap_or_else(seed_from_clock);
    log::info!("Starting run with seed {seed}");
    let mut state = GameState::new(seed);

    // Route the window close button through the quit input so the loop
    // always terminates via the Quit phase
    prevent_quit();

    let mut input = TickInput::default();
    let mut accumulator = 0.0f32;
    let mut last_phase = state.phase;

    loop {
        poll_input(&mut input);

        // Fixed-step catch-up, bounded to avoid the spiral of death
        accumulator += get_frame_time().min(0.25);
        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut state, &input);
            accumulator -= SIM_DT;
            substeps += 1;
            // One-shot inputs are consumed by the tick that saw them
            input = TickInput::default();
        }

        // Persist the high score the moment a run ends, before the
        // game-over screen is ever drawn
        if state.phase != last_phase {
            if state.phase == GamePhase::GameOver {
                log::info!("Run over with score {}", state.score);
                highscore.record(state.score);
            }
            last_phase = state.phase;
        }

        if state.phase == GamePhase::Quit {
            break;
        }

        render::draw(&state, &highscore, settings.show_fps);
        next_frame().await;
    }
}
