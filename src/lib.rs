//! Lane Runner - a lane-based endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, game state)
//! - `render`: macroquad drawing layer
//! - `highscores`: Single-integer high score persistence
//! - `settings`: Player preferences

pub mod highscores;
pub mod render;
pub mod settings;
pub mod sim;

pub use highscores::HighScore;
pub use settings::Settings;

/// Game configuration constants
///
/// All motion constants are in per-tick units at the fixed 60 Hz step, so a
/// value like `GRAVITY` is "pixels per tick per tick".
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per rendered frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions
    pub const VIEW_WIDTH: f32 = 600.0;
    pub const VIEW_HEIGHT: f32 = 700.0;

    /// Lane center x-positions, left to right
    pub const LANE_CENTERS: [f32; 3] = [150.0, 300.0, 450.0];
    /// Highest valid lane index
    pub const LANE_MAX: usize = LANE_CENTERS.len() - 1;

    /// Ground line the player stands on (feet level)
    pub const GROUND_Y: f32 = 580.0;

    /// Player bounding box
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;
    /// Horizontal easing toward the target lane center, per tick
    pub const LANE_EASING: f32 = 0.2;
    /// Upward impulse applied on jump (screen y grows downward)
    pub const JUMP_IMPULSE: f32 = -18.0;
    /// Downward acceleration while airborne
    pub const GRAVITY: f32 = 1.0;

    /// Obstacle bounding box
    pub const OBSTACLE_WIDTH: f32 = 50.0;
    pub const OBSTACLE_HEIGHT: f32 = 80.0;
    /// Coin diameter (square hitbox of the same size)
    pub const COIN_DIAMETER: f32 = 25.0;
    /// Power-up bounding box (square)
    pub const POWERUP_SIZE: f32 = 40.0;

    /// Spawn cadence in ticks, independent per entity type
    pub const OBSTACLE_SPAWN_INTERVAL: u32 = 70;
    pub const COIN_SPAWN_INTERVAL: u32 = 50;
    pub const POWERUP_SPAWN_INTERVAL: u32 = 400;

    /// Power-up effect durations in ticks (picking up again resets, never adds)
    pub const MAGNET_DURATION_TICKS: u32 = 300;
    pub const SHIELD_DURATION_TICKS: u32 = 300;
    /// Horizontal reach of the magnet's coin attraction
    pub const MAGNET_RADIUS: f32 = 150.0;
    /// Easing of attracted coins toward the player, per tick
    pub const MAGNET_PULL: f32 = 0.15;

    /// Initial downward scroll speed applied to all spawned entities
    pub const BASE_SCROLL_SPEED: f32 = 7.0;
    /// Scroll speed gain per tick; the sole difficulty ramp
    pub const SCROLL_SPEED_RAMP: f32 = 0.002;

    /// Ticks between day/night flips (30 seconds at 60 Hz)
    pub const DAY_NIGHT_TICKS: u32 = 30 * 60;
}

/// Center x-position of a lane. Lane indices are invariant-bounded to
/// `0..=LANE_MAX` by the player and spawner, so this never sees a bad index.
#[inline]
pub fn lane_center(lane: usize) -> f32 {
    consts::LANE_CENTERS[lane]
}
