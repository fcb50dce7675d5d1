//! Movement and chain-follow physics
//!
//! Heads move along their heading; out-of-bounds heads get clamped and
//! reflected; trailing segments are pulled back within the follow distance
//! in a single head-to-tail pass. One pass per tick is the designed
//! behavior: corrections propagate down the chain, so long chains lag
//! slightly behind sharp turns.

use std::f32::consts::PI;

use super::state::{Body, Segment};
use crate::consts::{FOLLOW_DISTANCE, WORLD_HALF_EXTENT};
use crate::{bearing, heading_vec};

/// Move a body's head one tick along its heading, then reflect at the
/// world boundary
pub fn advance_head(body: &mut Body) {
    let step = heading_vec(body.heading) * body.speed;
    if let Some(head) = body.segments.first_mut() {
        head.pos += step;
    }
    reflect_at_bounds(body);
}

/// Clamp an out-of-range head to the boundary and mirror the heading
/// across the crossed axis (x overflow: θ → π − θ; y overflow: θ → −θ)
pub fn reflect_at_bounds(body: &mut Body) {
    let Some(head) = body.segments.first_mut() else {
        return;
    };
    if head.pos.x.abs() > WORLD_HALF_EXTENT {
        head.pos.x = WORLD_HALF_EXTENT.copysign(head.pos.x);
        body.heading = PI - body.heading;
    }
    if head.pos.y.abs() > WORLD_HALF_EXTENT {
        head.pos.y = WORLD_HALF_EXTENT.copysign(head.pos.y);
        body.heading = -body.heading;
    }
}

/// Pull each trailing segment back onto the line toward its predecessor
/// whenever the gap exceeds [`FOLLOW_DISTANCE`]. Runs head-to-tail once;
/// after the pass every gap is at most the follow distance.
pub fn constrain_chain(segments: &mut [Segment]) {
    for i in 1..segments.len() {
        let prev = segments[i - 1].pos;
        let cur = &mut segments[i];
        if cur.pos.distance(prev) > FOLLOW_DISTANCE {
            let toward_prev = bearing(cur.pos, prev);
            cur.pos = prev - heading_vec(toward_prev) * FOLLOW_DISTANCE;
        }
    }
}
