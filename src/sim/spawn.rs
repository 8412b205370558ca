//! Time-gated entity spawning
//!
//! Three independent counters tick with the simulation (never wall-clock).
//! Cadence is deterministic; only the lane (and power-up kind) is random,
//! drawn from the game's seeded RNG.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Coin, Obstacle, PowerUp, PowerUpKind};
use crate::consts::*;

/// Per-type spawn counters
#[derive(Debug, Clone, Default)]
pub struct Spawner {
    obstacle_timer: u32,
    coin_timer: u32,
    powerup_timer: u32,
}

impl Spawner {
    /// Advance all counters by one tick and push any due entities.
    /// Each counter resets when its entity spawns.
    pub fn advance(
        &mut self,
        rng: &mut Pcg32,
        obstacles: &mut Vec<Obstacle>,
        coins: &mut Vec<Coin>,
        powerups: &mut Vec<PowerUp>,
    ) {
        self.obstacle_timer += 1;
        self.coin_timer += 1;
        self.powerup_timer += 1;

        if self.obstacle_timer > OBSTACLE_SPAWN_INTERVAL {
            self.obstacle_timer = 0;
            obstacles.push(Obstacle::at_lane(random_lane(rng)));
        }

        if self.coin_timer > COIN_SPAWN_INTERVAL {
            self.coin_timer = 0;
            coins.push(Coin::at_lane(random_lane(rng)));
        }

        if self.powerup_timer > POWERUP_SPAWN_INTERVAL {
            self.powerup_timer = 0;
            let kind = if rng.random_bool(0.5) {
                PowerUpKind::Magnet
            } else {
                PowerUpKind::Shield
            };
            powerups.push(PowerUp::at_lane(kind, random_lane(rng)));
        }
    }
}

fn random_lane(rng: &mut Pcg32) -> usize {
    rng.random_range(0..=LANE_MAX)
}
