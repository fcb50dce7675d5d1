//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick stepping only
//! - Seeded RNG only (owned by the `World`)
//! - Stable iteration order (player first, then NPCs in slot order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod merge;
pub mod physics;
pub mod state;
pub mod steering;
pub mod tick;

pub use collision::{TheftAction, resolve_collisions};
pub use merge::merge_body;
pub use physics::{constrain_chain, reflect_at_bounds};
pub use state::{Body, ControlMode, GameEvent, Segment, Snapshot, World};
pub use steering::{RivalHead, steer};
pub use tick::{TickInput, tick};
