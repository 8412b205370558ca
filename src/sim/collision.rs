//! Rectangle collision testing
//!
//! Every hit test in the game is an axis-aligned rectangle overlap: the
//! player, obstacles, coins, and power-ups all carry fixed-size boxes
//! centered on their positions.

use glam::Vec2;

/// Axis-aligned bounding box stored as center + half-extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    /// Box of the given full width/height centered on `center`
    pub fn new(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            center,
            half: Vec2::new(width / 2.0, height / 2.0),
        }
    }

    /// True when the two boxes overlap. Edge-touching boxes do not count
    /// as overlapping.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let delta = (self.center - other.center).abs();
        let reach = self.half + other.half;
        delta.x < reach.x && delta.y < reach.y
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f32 {
        self.center.y + self.half.y
    }

    /// Top edge y-coordinate
    pub fn top(&self) -> f32 {
        self.center.y - self.half.y
    }
}
