//! Fixed timestep simulation tick
//!
//! The single authoritative transition function. One call advances exactly
//! one 60 Hz tick; all motion constants are per-tick, so there is no `dt`.

use super::state::{GamePhase, GameState, PowerUpKind};
use crate::consts::*;

/// Input commands for a single tick (one-shot flags, cleared by the caller
/// after the tick that consumed them)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub steer_left: bool,
    pub steer_right: bool,
    pub jump: bool,
    /// Pause toggle (same input pauses and unpauses)
    pub pause: bool,
    /// Restart, honored only in GameOver
    pub restart: bool,
    /// External close signal, honored in every phase
    pub quit: bool,
}

/// Advance the game state by one fixed timestep.
///
/// Resolution order within a tick: phase transitions, day/night counter,
/// steering, spawning, player integration, then obstacles, coins,
/// power-ups, and finally the difficulty ramp. Obstacles resolve first; a
/// fatal hit halts the frame at the point of detection, so no coin or
/// power-up is processed in that tick.
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Quit wins from any phase
    if input.quit {
        state.phase = GamePhase::Quit;
        return;
    }

    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => state.phase = GamePhase::Playing,
            _ => {}
        }
    }

    match state.phase {
        GamePhase::GameOver => {
            if input.restart {
                state.reset_run();
            }
            return;
        }
        GamePhase::Paused | GamePhase::Quit => return,
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;

    state.day_timer += 1;
    if state.day_timer >= DAY_NIGHT_TICKS {
        state.is_day = !state.is_day;
        state.day_timer = 0;
    }

    if input.steer_left {
        state.player.steer(-1);
    }
    if input.steer_right {
        state.player.steer(1);
    }
    if input.jump {
        state.player.jump();
    }

    state.spawner.advance(
        &mut state.rng,
        &mut state.obstacles,
        &mut state.coins,
        &mut state.powerups,
    );

    state.player.update();

    let speed = state.scroll_speed;
    let player_aabb = state.player.aabb();

    // --- Obstacles ---
    // Removal indices are collected during the pass and applied afterwards,
    // back to front, so the iteration never skips an element. A fatal hit
    // breaks out; an earlier shield absorption in the same pass stands.
    let mut removed: Vec<usize> = Vec::new();
    let mut fatal = false;
    for (i, obstacle) in state.obstacles.iter_mut().enumerate() {
        obstacle.pos.y += speed;
        if obstacle.aabb().overlaps(&player_aabb) {
            if state.player.shield_active() {
                state.player.consume_shield();
                removed.push(i);
            } else {
                fatal = true;
                break;
            }
        } else if obstacle.below_view() {
            removed.push(i);
        }
    }
    for i in removed.into_iter().rev() {
        state.obstacles.swap_remove(i);
    }
    if fatal {
        state.phase = GamePhase::GameOver;
        return;
    }

    // --- Coins ---
    let magnet = state.player.magnet_active();
    let player_pos = state.player.pos;
    let mut collected: u64 = 0;
    state.coins.retain_mut(|coin| {
        if magnet && (coin.pos.x - player_pos.x).abs() < MAGNET_RADIUS {
            coin.pos += (player_pos - coin.pos) * MAGNET_PULL;
        }
        coin.pos.y += speed;
        if coin.aabb().overlaps(&player_aabb) {
            collected += 1;
            return false;
        }
        !coin.below_view()
    });
    state.score += collected;

    // --- Power-ups ---
    // Picked kinds are collected during the retain pass and applied after,
    // mirroring the deferred-outcome pattern used for coins.
    let mut picked: Vec<PowerUpKind> = Vec::new();
    state.powerups.retain_mut(|p| {
        p.pos.y += speed;
        if p.aabb().overlaps(&player_aabb) {
            picked.push(p.kind);
            return false;
        }
        !p.below_view()
    });
    for kind in picked {
        // Re-pickup overwrites the remaining duration; effects never stack
        match kind {
            PowerUpKind::Magnet => state.player.magnet_ticks = MAGNET_DURATION_TICKS,
            PowerUpKind::Shield => state.player.shield_ticks = SHIELD_DURATION_TICKS,
        }
    }

    state.scroll_speed += SCROLL_SPEED_RAMP;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Coin, Obstacle, PLAYER_GROUND_CENTER_Y, PowerUp};
    use glam::Vec2;

    /// Tick with no input, clearing spawned obstacles afterwards so long
    /// scripted runs don't end in an incidental collision.
    fn safe_tick(state: &mut GameState) {
        tick(state, &TickInput::default());
        state.obstacles.clear();
    }

    fn obstacle_at(pos: Vec2) -> Obstacle {
        Obstacle { pos }
    }

    #[test]
    fn test_pause_freezes_simulation() {
        let mut state = GameState::new(1);
        state.obstacles.push(obstacle_at(Vec2::new(150.0, 100.0)));

        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Paused);

        for _ in 0..10 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.day_timer, 0);
        assert_eq!(state.obstacles[0].pos.y, 100.0);

        // Same input unpauses, and the unpausing tick runs the simulation
        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.time_ticks, 1);
        assert!(state.obstacles[0].pos.y > 100.0);
    }

    #[test]
    fn test_quit_from_every_phase() {
        let quit = TickInput {
            quit: true,
            ..Default::default()
        };
        for setup in [GamePhase::Playing, GamePhase::Paused, GamePhase::GameOver] {
            let mut state = GameState::new(2);
            state.phase = setup;
            tick(&mut state, &quit);
            assert_eq!(state.phase, GamePhase::Quit);
        }
    }

    #[test]
    fn test_unshielded_hit_ends_run_and_halts_frame() {
        let mut state = GameState::new(3);
        let player_pos = state.player.pos;
        state.obstacles.push(obstacle_at(player_pos));
        // A coin that would be collected the same frame, were it reached
        state.coins.push(Coin { pos: player_pos });

        tick(&mut state, &TickInput::default());

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.score, 0);
        // Frame halted before coin processing: the coin neither moved nor
        // got collected
        assert_eq!(state.coins.len(), 1);
        assert_eq!(state.coins[0].pos, player_pos);
    }

    #[test]
    fn test_shield_absorbs_exactly_one_obstacle() {
        let mut state = GameState::new(4);
        state.player.shield_ticks = SHIELD_DURATION_TICKS;
        state.obstacles.push(obstacle_at(state.player.pos));

        tick(&mut state, &TickInput::default());

        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.obstacles.is_empty());
        assert!(!state.player.shield_active());
    }

    #[test]
    fn test_second_hit_after_shield_spent_is_fatal() {
        let mut state = GameState::new(5);
        state.player.shield_ticks = SHIELD_DURATION_TICKS;
        let pos = state.player.pos;
        state.obstacles.push(obstacle_at(pos));
        state.obstacles.push(obstacle_at(pos + Vec2::new(0.0, 10.0)));

        tick(&mut state, &TickInput::default());

        // First obstacle absorbed and removed, second one ends the run
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(!state.player.shield_active());
        assert_eq!(state.obstacles.len(), 1);
    }

    #[test]
    fn test_offscreen_entities_are_pruned() {
        let mut state = GameState::new(6);
        state.obstacles.push(obstacle_at(Vec2::new(150.0, VIEW_HEIGHT + 50.0)));
        state.coins.push(Coin {
            pos: Vec2::new(450.0, VIEW_HEIGHT + 50.0),
        });
        state.powerups.push(PowerUp {
            kind: PowerUpKind::Shield,
            pos: Vec2::new(450.0, VIEW_HEIGHT + 50.0),
        });

        tick(&mut state, &TickInput::default());

        assert!(state.obstacles.is_empty());
        assert!(state.coins.is_empty());
        assert!(state.powerups.is_empty());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_coins_score_and_speed_ramps_independently() {
        let mut state = GameState::new(7);
        for tick_no in 1..=300u32 {
            if tick_no % 100 == 0 {
                // Planted on the player, collected within the same tick
                state.coins.push(Coin {
                    pos: state.player.pos,
                });
            }
            tick(&mut state, &TickInput::default());
            // Drop anything the spawner produced so exactly three coins
            // are ever collectible
            state.obstacles.clear();
            state.coins.clear();
            state.powerups.clear();
        }
        assert_eq!(state.score, 3);
        let expected = BASE_SCROLL_SPEED + SCROLL_SPEED_RAMP * 300.0;
        assert!((state.scroll_speed - expected).abs() < 1e-3);
    }

    #[test]
    fn test_score_never_decreases() {
        let mut state = GameState::new(8);
        let mut last = state.score;
        for _ in 0..600 {
            safe_tick(&mut state);
            assert!(state.score >= last);
            last = state.score;
        }
    }

    #[test]
    fn test_magnet_pulls_coin_strictly_closer() {
        let mut state = GameState::new(9);
        state.player.magnet_ticks = MAGNET_DURATION_TICKS;
        state.coins.push(Coin {
            pos: state.player.pos - Vec2::new(100.0, 300.0),
        });

        let mut last_dist = (state.coins[0].pos - state.player.pos).length();
        loop {
            safe_tick(&mut state);
            if state.score > 0 {
                break;
            }
            assert_eq!(state.coins.len(), 1, "coin lost without being collected");
            let dist = (state.coins[0].pos - state.player.pos).length();
            assert!(dist < last_dist);
            last_dist = dist;
        }
    }

    #[test]
    fn test_out_of_range_coin_is_not_pulled() {
        let mut state = GameState::new(10);
        state.player.magnet_ticks = MAGNET_DURATION_TICKS;
        // Horizontal gap beyond the attraction radius
        let start = Vec2::new(state.player.pos.x + MAGNET_RADIUS + 10.0, 100.0);
        state.coins.push(Coin { pos: start });

        let speed = state.scroll_speed;
        tick(&mut state, &TickInput::default());

        assert_eq!(state.coins[0].pos.x, start.x);
        assert_eq!(state.coins[0].pos.y, start.y + speed);
    }

    #[test]
    fn test_powerup_pickup_never_stacks() {
        let mut state = GameState::new(11);
        state.player.shield_ticks = 100;
        state.powerups.push(PowerUp {
            kind: PowerUpKind::Shield,
            pos: state.player.pos,
        });

        tick(&mut state, &TickInput::default());

        assert!(state.powerups.is_empty());
        assert_eq!(state.player.shield_ticks, SHIELD_DURATION_TICKS);

        // And magnet pickup arms the magnet for its full duration
        state.powerups.push(PowerUp {
            kind: PowerUpKind::Magnet,
            pos: state.player.pos,
        });
        tick(&mut state, &TickInput::default());
        assert_eq!(state.player.magnet_ticks, MAGNET_DURATION_TICKS);
    }

    #[test]
    fn test_day_night_flips_every_interval() {
        let mut state = GameState::new(12);
        assert!(state.is_day);

        for _ in 0..DAY_NIGHT_TICKS {
            safe_tick(&mut state);
        }
        assert!(!state.is_day);

        for _ in 0..DAY_NIGHT_TICKS {
            safe_tick(&mut state);
        }
        assert!(state.is_day);
    }

    #[test]
    fn test_restart_only_from_game_over() {
        let mut state = GameState::new(13);
        state.score = 5;
        let restart = TickInput {
            restart: true,
            ..Default::default()
        };

        // Ignored while playing
        tick(&mut state, &restart);
        assert_eq!(state.score, 5);
        assert_eq!(state.phase, GamePhase::Playing);

        state.phase = GamePhase::GameOver;
        state.scroll_speed = 11.5;
        state.obstacles.push(obstacle_at(Vec2::new(150.0, 100.0)));
        state.is_day = false;

        tick(&mut state, &restart);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.scroll_speed, BASE_SCROLL_SPEED);
        assert!(state.obstacles.is_empty());
        assert!(state.is_day);
        assert_eq!(state.player.pos.y, PLAYER_GROUND_CENTER_Y);
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(99999);
        let mut b = GameState::new(99999);

        for i in 0..500u32 {
            let input = TickInput {
                steer_left: i % 37 == 0,
                steer_right: i % 53 == 0,
                jump: i % 29 == 0,
                ..Default::default()
            };
            tick(&mut a, &input);
            tick(&mut b, &input);
        }

        assert_eq!(a.phase, b.phase);
        assert_eq!(a.score, b.score);
        assert_eq!(a.player.pos, b.player.pos);
        assert_eq!(a.scroll_speed, b.scroll_speed);
        assert_eq!(
            a.obstacles.iter().map(|o| o.pos).collect::<Vec<_>>(),
            b.obstacles.iter().map(|o| o.pos).collect::<Vec<_>>()
        );
        assert_eq!(
            a.coins.iter().map(|c| c.pos).collect::<Vec<_>>(),
            b.coins.iter().map(|c| c.pos).collect::<Vec<_>>()
        );
    }
}
