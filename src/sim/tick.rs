//! Per-tick simulation step
//!
//! The phase order is load-bearing: steer → advance → boundary → chain →
//! merge runs per body (player first, each body seeing its predecessors
//! already moved), then the two-phase collision resolver runs across all
//! bodies, then the dead are swept and the populations topped back up.
//! Later phases consume earlier phases' output within the same tick, so
//! the order must not be rearranged.

use super::collision::resolve_collisions;
use super::merge::merge_body;
use super::physics::{advance_head, constrain_chain};
use super::state::{Body, GameEvent, World};
use super::steering::{RivalHead, steer};

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Player's desired heading (radians), computed by the external input
    /// collaborator from pointer/world geometry. `None` keeps the current
    /// heading.
    pub player_heading: Option<f32>,
}

/// Advance the world by one tick. A no-op while the world is inactive.
///
/// Returns the events the host must react to (best-score persistence and
/// restart are the host's job).
pub fn tick(world: &mut World, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !world.active {
        return events;
    }
    world.ticks += 1;

    if let Some(heading) = input.player_heading {
        world.player.heading = heading;
    }

    let body_count = 1 + world.npcs.len();
    for idx in 0..body_count {
        // NPCs steer off the world as it stands mid-update: bodies earlier
        // in the order have already moved this tick.
        if idx > 0 {
            let rivals = rival_heads(world, idx);
            let npc = &world.npcs[idx - 1];
            if let Some(head) = npc.head() {
                let heading = steer(npc.heading, head, &rivals, &world.food);
                world.npcs[idx - 1].heading = heading;
            }
        }

        let body = body_mut(world, idx);
        advance_head(body);
        constrain_chain(&mut body.segments);
        merge_body(&mut body.segments);
    }

    let mut bodies: Vec<&mut Body> = std::iter::once(&mut world.player)
        .chain(world.npcs.iter_mut())
        .collect();
    resolve_collisions(&mut bodies, &mut world.food);

    if world.player.dead {
        let score = world.player.head_value();
        log::info!("player {:?} died with score {}", world.player.name, score);
        events.push(GameEvent::PlayerDied { score });
        world.active = false;
        world.respawn_player();
    }
    world.npcs.retain(|n| !n.dead);
    world.replenish_npcs();
    world.replenish_food();

    events
}

/// Heads of every live body except `idx`, in world iteration order
fn rival_heads(world: &World, idx: usize) -> Vec<RivalHead> {
    std::iter::once(&world.player)
        .chain(world.npcs.iter())
        .enumerate()
        .filter(|&(i, b)| i != idx && !b.dead)
        .filter_map(|(_, b)| {
            b.head().map(|h| RivalHead {
                pos: h.pos,
                value: h.value,
            })
        })
        .collect()
}

fn body_mut(world: &mut World, idx: usize) -> &mut Body {
    if idx == 0 {
        &mut world.player
    } else {
        &mut world.npcs[idx - 1]
    }
}
