//! Drawing layer
//!
//! Reads the game state and draws it with macroquad. Nothing in here
//! mutates the simulation.

use macroquad::prelude::{
    BLACK, Color, GREEN, WHITE, YELLOW, clear_background, draw_circle, draw_circle_lines,
    draw_line, draw_rectangle, draw_text, get_fps, measure_text,
};

use crate::HighScore;
use crate::consts::*;
use crate::sim::{GamePhase, GameState, PowerUpKind};

const DAY_COLOR: Color = Color::new(0.78, 0.78, 0.78, 1.0);
const NIGHT_COLOR: Color = Color::new(0.16, 0.16, 0.24, 1.0);
const GROUND_COLOR: Color = Color::new(0.35, 0.35, 0.35, 1.0);
const BODY_COLOR: Color = Color::new(0.12, 0.56, 1.0, 1.0);
const HEAD_COLOR: Color = Color::new(0.31, 0.78, 1.0, 1.0);
const OBSTACLE_COLOR: Color = Color::new(0.78, 0.0, 0.0, 1.0);
const COIN_COLOR: Color = Color::new(1.0, 0.84, 0.0, 1.0);

/// Draw one frame of the current state
pub fn draw(state: &GameState, highscore: &HighScore, show_fps: bool) {
    clear_background(if state.is_day { DAY_COLOR } else { NIGHT_COLOR });
    draw_line(0.0, GROUND_Y, VIEW_WIDTH, GROUND_Y, 2.0, GROUND_COLOR);

    for obstacle in &state.obstacles {
        let aabb = obstacle.aabb();
        draw_rectangle(
            aabb.center.x - aabb.half.x,
            aabb.top(),
            OBSTACLE_WIDTH,
            OBSTACLE_HEIGHT,
            OBSTACLE_COLOR,
        );
    }

    for coin in &state.coins {
        draw_circle(coin.pos.x, coin.pos.y, COIN_DIAMETER / 2.0, COIN_COLOR);
    }

    for powerup in &state.powerups {
        let color = match powerup.kind {
            PowerUpKind::Shield => GREEN,
            PowerUpKind::Magnet => WHITE,
        };
        let aabb = powerup.aabb();
        draw_rectangle(
            aabb.center.x - aabb.half.x,
            aabb.top(),
            POWERUP_SIZE,
            POWERUP_SIZE,
            color,
        );
    }

    draw_player(state);
    draw_hud(state, highscore, show_fps);

    match state.phase {
        GamePhase::Paused => draw_centered("PAUSED", VIEW_HEIGHT / 2.0, 50.0, WHITE),
        GamePhase::GameOver => draw_game_over(state, highscore),
        GamePhase::Playing | GamePhase::Quit => {}
    }
}

fn draw_player(state: &GameState) {
    let player = &state.player;
    let x = player.pos.x;
    let top = player.aabb().top();

    // Body and head
    draw_rectangle(x - 20.0, top + 25.0, 40.0, 45.0, BODY_COLOR);
    draw_circle(x, top + 15.0, 18.0, HEAD_COLOR);
    draw_circle(x - 6.0, top + 13.0, 3.0, BLACK);
    draw_circle(x + 6.0, top + 13.0, 3.0, BLACK);

    // Two-phase leg swing driven by the simulation clock
    let swing = ((state.time_ticks / 7) % 2) as f32 * 6.0;
    draw_line(x - 10.0, top + 70.0, x - 10.0, top + 80.0 + swing, 4.0, BLACK);
    draw_line(x + 10.0, top + 70.0, x + 10.0, top + 80.0 - swing, 4.0, BLACK);

    if player.shield_active() {
        draw_circle_lines(x, top + 45.0, 45.0, 3.0, GREEN);
    }

    if player.magnet_active() {
        draw_magnet_arc(x, top - 5.0, 30.0);
    }
}

/// Upper-half arc over the player's head, built from short segments
fn draw_magnet_arc(cx: f32, cy: f32, radius: f32) {
    const SEGMENTS: u32 = 16;
    let mut prev = (cx - radius, cy);
    for i in 1..=SEGMENTS {
        let t = std::f32::consts::PI * (1.0 - i as f32 / SEGMENTS as f32);
        let next = (cx + radius * t.cos(), cy - radius * t.sin());
        draw_line(prev.0, prev.1, next.0, next.1, 4.0, WHITE);
        prev = next;
    }
}

fn draw_hud(state: &GameState, highscore: &HighScore, show_fps: bool) {
    let ink = if state.is_day { BLACK } else { WHITE };
    draw_text(&format!("Score: {}", state.score), 20.0, 38.0, 30.0, ink);
    draw_text(&format!("High: {}", highscore.best()), 20.0, 68.0, 30.0, ink);
    if show_fps {
        draw_text(&format!("FPS: {}", get_fps()), VIEW_WIDTH - 110.0, 38.0, 30.0, ink);
    }
}

fn draw_game_over(state: &GameState, highscore: &HighScore) {
    draw_rectangle(0.0, 0.0, VIEW_WIDTH, VIEW_HEIGHT, Color::new(0.0, 0.0, 0.0, 0.85));
    draw_centered("GAME OVER", 280.0, 50.0, WHITE);
    draw_centered(&format!("Score: {}", state.score), 330.0, 30.0, WHITE);
    draw_centered(&format!("High: {}", highscore.best()), 360.0, 30.0, YELLOW);
    draw_centered("Press R to Restart", 420.0, 30.0, WHITE);
}

fn draw_centered(text: &str, y: f32, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    draw_text(text, (VIEW_WIDTH - dims.width) / 2.0, y, font_size, color);
}
