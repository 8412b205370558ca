//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, input, or filesystem dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use spawn::Spawner;
pub use state::{Coin, GamePhase, GameState, Obstacle, Player, PowerUp, PowerUpKind};
pub use tick::{TickInput, tick};
