//! World state and core simulation types
//!
//! The `World` is the single owner of all mutable game state; there is no
//! module-level state anywhere in the crate. Everything here is seeded-RNG
//! deterministic: two worlds built from the same seed and fed identical
//! inputs stay identical tick for tick.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A single valued unit: one link of a body's chain, or a free-lying
/// food item waiting to be eaten. Values are always powers of two ≥ 2.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub pos: Vec2,
    pub value: u32,
}

impl Segment {
    pub fn new(pos: Vec2, value: u32) -> Self {
        Self { pos, value }
    }
}

/// Who drives a body's heading each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlMode {
    /// Heading supplied externally through `TickInput`
    Player,
    /// Heading decided by `steering::steer` each tick
    Npc,
}

/// A chain of segments with a single heading. Index 0 is the head; the
/// list is kept sorted by value descending after every merge pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub segments: Vec<Segment>,
    pub name: String,
    pub control: ControlMode,
    /// Current heading angle (radians)
    pub heading: f32,
    /// Distance the head travels per tick
    pub speed: f32,
    pub dead: bool,
}

impl Body {
    fn new(pos: Vec2, name: String, control: ControlMode, value: u32, heading: f32) -> Self {
        let speed = match control {
            ControlMode::Player => PLAYER_SPEED,
            ControlMode::Npc => NPC_SPEED,
        };
        Self {
            segments: vec![Segment::new(pos, value)],
            name,
            control,
            heading,
            speed,
            dead: false,
        }
    }

    /// Fresh player body at the origin with the minimum value
    pub fn spawn_player(name: String, rng: &mut Pcg32) -> Self {
        let heading = rng.random_range(0.0..std::f32::consts::TAU);
        Self::new(
            Vec2::ZERO,
            name,
            ControlMode::Player,
            PLAYER_START_VALUE,
            heading,
        )
    }

    /// Fresh NPC body with a random starting value (2, 4, 8, or 16)
    pub fn spawn_npc(pos: Vec2, rng: &mut Pcg32) -> Self {
        let value = 2u32.pow(rng.random_range(1..5));
        let heading = rng.random_range(0.0..std::f32::consts::TAU);
        Self::new(pos, NPC_NAME.to_string(), ControlMode::Npc, value, heading)
    }

    /// Leading segment, if any remain
    #[inline]
    pub fn head(&self) -> Option<&Segment> {
        self.segments.first()
    }

    /// Head value, or 0 for a fully stripped body. The head value is the
    /// body's score and governs every combat/food comparison.
    #[inline]
    pub fn head_value(&self) -> u32 {
        self.segments.first().map(|s| s.value).unwrap_or(0)
    }

    #[inline]
    pub fn head_pos(&self) -> Option<Vec2> {
        self.segments.first().map(|s| s.pos)
    }
}

/// Event surfaced to the host after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The player body died this tick; `score` is its final head value
    /// (0 if the head itself was stolen away). The host owns best-score
    /// persistence and restarting.
    PlayerDied { score: u32 },
}

/// Read-only view handed to the renderer each tick. The renderer must not
/// mutate core state, so everything here borrows.
#[derive(Debug)]
pub struct Snapshot<'a> {
    /// Live bodies, player first, then NPCs in slot order
    pub bodies: Vec<&'a Body>,
    pub food: &'a [Segment],
    pub half_extent: f32,
}

/// Complete world state: the player, the NPC population, free food, and
/// the seeded RNG that all spawn randomness flows through.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Simulation tick counter
    pub ticks: u64,
    /// Lifecycle gate: ticking is a no-op while inactive
    pub active: bool,
    pub player: Body,
    pub npcs: Vec<Body>,
    pub food: Vec<Segment>,
}

impl World {
    /// Build an inactive world: player at the origin, NPC and food
    /// populations filled to target. Call [`World::start`] to begin ticking.
    pub fn new(seed: u64, player_name: &str) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let player = Body::spawn_player(player_name.to_string(), &mut rng);
        let mut world = Self {
            seed,
            rng,
            ticks: 0,
            active: false,
            player,
            npcs: Vec::new(),
            food: Vec::new(),
        };
        world.replenish_npcs();
        world.replenish_food();
        world
    }

    /// Activate ticking, optionally renaming the player (empty names are
    /// ignored, keeping the previous name)
    pub fn start(&mut self, name: Option<&str>) {
        if let Some(name) = name
            && !name.is_empty()
        {
            self.player.name = name.to_string();
        }
        self.active = true;
        log::info!("game started for {:?} (seed {})", self.player.name, self.seed);
    }

    /// Replace the player with a fresh body, preserving the chosen name
    pub fn respawn_player(&mut self) {
        let name = std::mem::take(&mut self.player.name);
        self.player = Body::spawn_player(name, &mut self.rng);
    }

    /// Top the food supply back up to target at uniform in-bounds positions
    pub fn replenish_food(&mut self) {
        while self.food.len() < FOOD_TARGET {
            let pos = self.random_pos(WORLD_HALF_EXTENT);
            let value = if self.rng.random_bool(FOOD_RARE_CHANCE) {
                FOOD_RARE_VALUE
            } else {
                FOOD_COMMON_VALUE
            };
            self.food.push(Segment::new(pos, value));
        }
    }

    /// Top the NPC population back up to target
    pub fn replenish_npcs(&mut self) {
        while self.npcs.len() < NPC_TARGET {
            let pos = self.random_pos(NPC_SPAWN_HALF_EXTENT);
            self.npcs.push(Body::spawn_npc(pos, &mut self.rng));
        }
    }

    fn random_pos(&mut self, half_extent: f32) -> Vec2 {
        Vec2::new(
            self.rng.random_range(-half_extent..half_extent),
            self.rng.random_range(-half_extent..half_extent),
        )
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> Snapshot<'_> {
        let bodies = std::iter::once(&self.player)
            .chain(self.npcs.iter())
            .filter(|b| !b.dead)
            .collect();
        Snapshot {
            bodies,
            food: &self.food,
            half_extent: WORLD_HALF_EXTENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_new_world_populations() {
        let world = World::new(7, "You");
        assert_eq!(world.npcs.len(), NPC_TARGET);
        assert_eq!(world.food.len(), FOOD_TARGET);
        assert!(!world.active);
        assert_eq!(world.player.head_value(), PLAYER_START_VALUE);
    }

    #[test]
    fn test_npc_spawn_values() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..100 {
            let npc = Body::spawn_npc(Vec2::ZERO, &mut rng);
            let v = npc.head_value();
            assert!(v.is_power_of_two());
            assert!((2..=16).contains(&v));
        }
    }

    #[test]
    fn test_food_in_bounds() {
        let world = World::new(3, "You");
        for f in &world.food {
            assert!(f.pos.x.abs() <= WORLD_HALF_EXTENT);
            assert!(f.pos.y.abs() <= WORLD_HALF_EXTENT);
            assert!(f.value == FOOD_COMMON_VALUE || f.value == FOOD_RARE_VALUE);
        }
    }

    #[test]
    fn test_start_keeps_name_when_empty() {
        let mut world = World::new(1, "You");
        world.start(Some(""));
        assert_eq!(world.player.name, "You");
        assert!(world.active);

        world.start(Some("Alice"));
        assert_eq!(world.player.name, "Alice");
    }

    #[test]
    fn test_respawn_preserves_name() {
        let mut world = World::new(1, "You");
        world.start(Some("Bob"));
        world.player.segments[0].value = 512;
        world.respawn_player();
        assert_eq!(world.player.name, "Bob");
        assert_eq!(world.player.head_value(), PLAYER_START_VALUE);
        assert!(!world.player.dead);
    }

    #[test]
    fn test_snapshot_excludes_dead() {
        let mut world = World::new(9, "You");
        world.npcs[0].dead = true;
        let snap = world.snapshot();
        assert_eq!(snap.bodies.len(), 1 + NPC_TARGET - 1);
        // Player first
        assert_eq!(snap.bodies[0].control, ControlMode::Player);
    }
}
