//! Collision and combat resolution
//!
//! Two-phase per tick. Detection walks the frame's bodies in iteration
//! order: food pickups apply immediately (they only ever add to the acting
//! body, so no cross-body conflict is possible), while inter-body thefts
//! are recorded and deferred. The commit phase then applies the recorded
//! thefts, silently dropping any whose victim died or lost the indexed
//! segment to an earlier action in the same tick. Without the split, two
//! heads contacting the same segment would resolve differently depending
//! on scan order.

use super::state::{Body, Segment};
use crate::consts::{CONTACT_RADIUS, PICKUP_RADIUS};

/// A pending segment theft, recorded during detection. Indices refer to
/// the body slice handed to [`resolve_collisions`] (player first) and to
/// the victim's segment list as it stood at detection time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TheftAction {
    pub thief: usize,
    pub victim: usize,
    pub seg_index: usize,
    pub value: u32,
}

/// Run both phases over all bodies (player first, then NPCs in slot order)
pub fn resolve_collisions(bodies: &mut [&mut Body], food: &mut Vec<Segment>) {
    let actions = detect(bodies, food);
    commit(bodies, actions);
}

/// Phase 1: food pickups (applied in place) and contact detection
/// (recorded). A body marked dead mid-scan finishes its scan; its fate is
/// settled after the phase.
fn detect(bodies: &mut [&mut Body], food: &mut Vec<Segment>) -> Vec<TheftAction> {
    let mut actions = Vec::new();

    for p1 in 0..bodies.len() {
        if bodies[p1].dead {
            continue;
        }
        let Some(head) = bodies[p1].head().copied() else {
            continue;
        };

        // Food: eat anything at or below the head value, die to anything
        // above it. Highest index first so removals leave the list order
        // of the remaining items intact.
        let mut i = food.len();
        while i > 0 {
            i -= 1;
            if head.pos.distance(food[i].pos) < PICKUP_RADIUS {
                if head.value >= food[i].value {
                    let eaten = food.remove(i);
                    bodies[p1].segments.push(Segment::new(head.pos, eaten.value));
                } else {
                    bodies[p1].dead = true;
                }
            }
        }

        // Contacts: own head against every segment of every other body
        // that is still standing at this point in the scan.
        for p2 in 0..bodies.len() {
            if p2 == p1 || bodies[p2].dead {
                continue;
            }
            for j in 0..bodies[p2].segments.len() {
                let seg = bodies[p2].segments[j];
                if head.pos.distance(seg.pos) < CONTACT_RADIUS {
                    if head.value > seg.value {
                        actions.push(TheftAction {
                            thief: p1,
                            victim: p2,
                            seg_index: j,
                            value: seg.value,
                        });
                    } else if head.value < seg.value {
                        bodies[p1].dead = true;
                    }
                    // Equal values pass through with no effect.
                }
            }
        }
    }

    actions
}

/// Phase 2: apply recorded thefts in order. Stale actions - victim already
/// dead, or the indexed segment gone to an earlier commit - are dropped
/// without effect, as is a theft whose thief was stripped of its own head
/// in the meantime.
fn commit(bodies: &mut [&mut Body], actions: Vec<TheftAction>) {
    for a in actions {
        if bodies[a.victim].dead || a.seg_index >= bodies[a.victim].segments.len() {
            continue;
        }
        let Some(thief_head) = bodies[a.thief].head_pos() else {
            continue;
        };
        bodies[a.thief].segments.push(Segment::new(thief_head, a.value));
        bodies[a.victim].segments.remove(a.seg_index);
        if bodies[a.victim].segments.is_empty() {
            bodies[a.victim].dead = true;
        }
    }
}
