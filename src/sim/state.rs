//! Game state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Aabb;
use super::spawn::Spawner;
use crate::consts::*;
use crate::lane_center;

/// Player center y while standing on the ground line
pub const PLAYER_GROUND_CENTER_Y: f32 = GROUND_Y - PLAYER_HEIGHT / 2.0;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Simulation frozen, waiting for the pause toggle
    Paused,
    /// Run ended, waiting for restart
    GameOver,
    /// Close signal received; the outer loop terminates
    Quit,
}

/// The player avatar
///
/// Positions are box centers. Lane index is the discrete target; `pos.x`
/// eases toward that lane's center a little every tick.
#[derive(Debug, Clone)]
pub struct Player {
    /// Target lane index, always in `0..=LANE_MAX`
    pub lane: usize,
    pub pos: Vec2,
    pub vel_y: f32,
    pub jumping: bool,
    /// Remaining magnet ticks; the effect is active while > 0
    pub magnet_ticks: u32,
    /// Remaining shield ticks; the effect is active while > 0
    pub shield_ticks: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// Fresh player in the middle lane, standing on the ground
    pub fn new() -> Self {
        let lane = 1;
        Self {
            lane,
            pos: Vec2::new(lane_center(lane), PLAYER_GROUND_CENTER_Y),
            vel_y: 0.0,
            jumping: false,
            magnet_ticks: 0,
            shield_ticks: 0,
        }
    }

    /// Shift the target lane by one step, clamped to the lane range.
    /// The avatar does not teleport; `update` eases toward the new center.
    pub fn steer(&mut self, dir: i32) {
        self.lane = self
            .lane
            .saturating_add_signed(dir.signum() as isize)
            .min(LANE_MAX);
    }

    /// Start a jump. No-op while already airborne.
    pub fn jump(&mut self) {
        if !self.jumping {
            self.jumping = true;
            self.vel_y = JUMP_IMPULSE;
        }
    }

    /// Advance the avatar by one tick: lane easing, jump integration,
    /// effect timer decay.
    pub fn update(&mut self) {
        self.pos.x += (lane_center(self.lane) - self.pos.x) * LANE_EASING;

        if self.jumping {
            self.pos.y += self.vel_y;
            self.vel_y += GRAVITY;
            // Land when the box reaches the ground line on the way down
            if self.vel_y >= 0.0 && self.pos.y >= PLAYER_GROUND_CENTER_Y {
                self.pos.y = PLAYER_GROUND_CENTER_Y;
                self.vel_y = 0.0;
                self.jumping = false;
            }
        }

        self.magnet_ticks = self.magnet_ticks.saturating_sub(1);
        self.shield_ticks = self.shield_ticks.saturating_sub(1);
    }

    pub fn magnet_active(&self) -> bool {
        self.magnet_ticks > 0
    }

    pub fn shield_active(&self) -> bool {
        self.shield_ticks > 0
    }

    /// Spend the shield on an absorbed obstacle hit
    pub fn consume_shield(&mut self) {
        self.shield_ticks = 0;
    }

    /// Hit-test box
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, PLAYER_WIDTH, PLAYER_HEIGHT)
    }
}

/// A falling obstacle
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub pos: Vec2,
}

impl Obstacle {
    /// Spawn in the given lane, just above the top edge
    pub fn at_lane(lane: usize) -> Self {
        Self {
            pos: Vec2::new(lane_center(lane), -OBSTACLE_HEIGHT / 2.0),
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, OBSTACLE_WIDTH, OBSTACLE_HEIGHT)
    }

    /// Fully scrolled past the bottom of the view
    pub fn below_view(&self) -> bool {
        self.aabb().top() > VIEW_HEIGHT
    }
}

/// A collectible coin. Its position is additionally pulled toward the
/// player while a magnet is active.
#[derive(Debug, Clone)]
pub struct Coin {
    pub pos: Vec2,
}

impl Coin {
    pub fn at_lane(lane: usize) -> Self {
        Self {
            pos: Vec2::new(lane_center(lane), -COIN_DIAMETER / 2.0),
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, COIN_DIAMETER, COIN_DIAMETER)
    }

    pub fn below_view(&self) -> bool {
        self.aabb().top() > VIEW_HEIGHT
    }
}

/// Power-up kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    Magnet,
    Shield,
}

/// A falling power-up capsule
#[derive(Debug, Clone)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    pub pos: Vec2,
}

impl PowerUp {
    pub fn at_lane(kind: PowerUpKind, lane: usize) -> Self {
        Self {
            kind,
            pos: Vec2::new(lane_center(lane), -POWERUP_SIZE / 2.0),
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, POWERUP_SIZE, POWERUP_SIZE)
    }

    pub fn below_view(&self) -> bool {
        self.aabb().top() > VIEW_HEIGHT
    }
}

/// Complete game state, advanced exclusively by [`tick`](super::tick::tick)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub coins: Vec<Coin>,
    pub powerups: Vec<PowerUp>,
    /// Coins collected this run
    pub score: u64,
    /// Shared downward velocity of all spawned entities
    pub scroll_speed: f32,
    /// Background day/night flag
    pub is_day: bool,
    /// Ticks since the last day/night flip
    pub day_timer: u32,
    pub spawner: Spawner,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Fresh game in the Playing phase
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Playing,
            time_ticks: 0,
            player: Player::new(),
            obstacles: Vec::new(),
            coins: Vec::new(),
            powerups: Vec::new(),
            score: 0,
            scroll_speed: BASE_SCROLL_SPEED,
            is_day: true,
            day_timer: 0,
            spawner: Spawner::default(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Restart after game over: fresh run state, same RNG stream
    pub fn reset_run(&mut self) {
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
        self.player = Player::new();
        self.obstacles.clear();
        self.coins.clear();
        self.powerups.clear();
        self.score = 0;
        self.scroll_speed = BASE_SCROLL_SPEED;
        self.is_day = true;
        self.day_timer = 0;
        self.spawner = Spawner::default();
    }
}
