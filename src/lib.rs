//! Merge Arena - an .io-style arena of merging chain bodies
//!
//! Core modules:
//! - `sim`: Deterministic simulation (steering, chain physics, merging, combat)
//! - `highscores`: Best-score record for the host to persist
//!
//! Rendering, camera, and input translation live outside this crate; the
//! simulation exposes a read-only [`sim::Snapshot`] each tick and accepts the
//! player's desired heading through [`sim::TickInput`].

pub mod highscores;
pub mod sim;

pub use highscores::BestScore;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// World half-extent; the arena is the square [-N, N] on both axes
    pub const WORLD_HALF_EXTENT: f32 = 2500.0;

    /// Maximum gap between a segment and its predecessor
    pub const FOLLOW_DISTANCE: f32 = 48.0;

    /// Movement speed per tick
    pub const PLAYER_SPEED: f32 = 5.5;
    pub const NPC_SPEED: f32 = 4.6;

    /// Radius within which an NPC reacts to a rival's head
    pub const SENSE_RADIUS: f32 = 350.0;
    /// Heading blend factor per tick when drifting toward food
    pub const FOOD_TURN_SMOOTHING: f32 = 0.1;

    /// Distance threshold for consuming (or dying to) food
    pub const PICKUP_RADIUS: f32 = 40.0;
    /// Distance threshold for theft/death between bodies
    pub const CONTACT_RADIUS: f32 = 42.0;

    /// Food population target, replenished every tick
    pub const FOOD_TARGET: usize = 250;
    pub const FOOD_COMMON_VALUE: u32 = 2;
    pub const FOOD_RARE_VALUE: u32 = 8;
    pub const FOOD_RARE_CHANCE: f64 = 0.1;

    /// NPC population target, replenished every tick
    pub const NPC_TARGET: usize = 15;
    /// NPCs respawn uniformly within this half-extent
    pub const NPC_SPAWN_HALF_EXTENT: f32 = 2000.0;
    pub const NPC_NAME: &str = "Elite_Bot";

    /// Starting head value for a fresh player body
    pub const PLAYER_START_VALUE: u32 = 2;
}

/// Normalize angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Angle of the vector from `from` to `to`, in radians
#[inline]
pub fn bearing(from: Vec2, to: Vec2) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Unit vector pointing along `angle`
#[inline]
pub fn heading_vec(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}
