//! NPC steering
//!
//! Stateless per-tick decision keyed on the body's control tag: players get
//! their heading from `TickInput`, NPCs from [`steer`]. The rival scan takes
//! the FIRST body in iteration order inside the sensing radius, not the
//! nearest; threat response is reactive, not globally optimal. With no rival
//! in range the heading eases toward the first food item in list order
//! rather than snapping to it.

use std::f32::consts::PI;

use glam::Vec2;

use super::state::Segment;
use crate::bearing;
use crate::consts::{FOOD_TURN_SMOOTHING, SENSE_RADIUS};

/// Another live body's head, as seen by the steering scan
#[derive(Debug, Clone, Copy)]
pub struct RivalHead {
    pub pos: Vec2,
    pub value: u32,
}

/// Decide an NPC's heading for this tick.
///
/// `rivals` must be the other live bodies' heads in world iteration order
/// (player first, then NPC slots); the first one within [`SENSE_RADIUS`]
/// decides the whole tick: flee if its value is strictly greater, chase
/// otherwise.
pub fn steer(heading: f32, head: &Segment, rivals: &[RivalHead], food: &[Segment]) -> f32 {
    for rival in rivals {
        if head.pos.distance(rival.pos) < SENSE_RADIUS {
            let toward = bearing(head.pos, rival.pos);
            return if rival.value > head.value {
                toward + PI
            } else {
                toward
            };
        }
    }

    if let Some(f) = food.first() {
        heading + (bearing(head.pos, f.pos) - heading) * FOOD_TURN_SMOOTHING
    } else {
        heading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn head_at(x: f32, y: f32, value: u32) -> Segment {
        Segment::new(Vec2::new(x, y), value)
    }

    #[test]
    fn test_flees_stronger_rival() {
        let head = head_at(0.0, 0.0, 4);
        let rivals = [RivalHead {
            pos: Vec2::new(100.0, 0.0),
            value: 8,
        }];
        let h = steer(0.0, &head, &rivals, &[]);
        // Rival is due east; flee heading points west
        assert!((h - PI).abs() < 1e-5);
    }

    #[test]
    fn test_chases_weaker_rival() {
        let head = head_at(0.0, 0.0, 8);
        let rivals = [RivalHead {
            pos: Vec2::new(0.0, 100.0),
            value: 4,
        }];
        let h = steer(0.0, &head, &rivals, &[]);
        assert!((h - PI / 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_chases_equal_rival() {
        let head = head_at(0.0, 0.0, 8);
        let rivals = [RivalHead {
            pos: Vec2::new(100.0, 0.0),
            value: 8,
        }];
        let h = steer(1.0, &head, &rivals, &[]);
        assert!(h.abs() < 1e-5);
    }

    #[test]
    fn test_first_in_order_wins_over_nearer() {
        let head = head_at(0.0, 0.0, 4);
        let rivals = [
            RivalHead {
                pos: Vec2::new(300.0, 0.0),
                value: 2,
            },
            RivalHead {
                pos: Vec2::new(0.0, 50.0),
                value: 16,
            },
        ];
        // The farther-but-earlier rival is chased; the nearer threat is
        // never consulted.
        let h = steer(0.0, &head, &rivals, &[]);
        assert!(h.abs() < 1e-5);
    }

    #[test]
    fn test_out_of_range_rival_ignored() {
        let head = head_at(0.0, 0.0, 4);
        let rivals = [RivalHead {
            pos: Vec2::new(SENSE_RADIUS + 1.0, 0.0),
            value: 16,
        }];
        let food = [head_at(0.0, 200.0, 2)];
        let h = steer(0.0, &head, &rivals, &food);
        // Falls through to food drift
        assert!((h - PI / 2.0 * FOOD_TURN_SMOOTHING).abs() < 1e-5);
    }

    #[test]
    fn test_food_drift_is_gradual() {
        let head = head_at(0.0, 0.0, 4);
        let food = [head_at(0.0, 100.0, 2)];
        let h = steer(0.0, &head, &[], &food);
        let expected = (PI / 2.0) * FOOD_TURN_SMOOTHING;
        assert!((h - expected).abs() < 1e-5);
        // Repeated steering converges toward the food bearing
        let mut heading = 0.0;
        for _ in 0..200 {
            heading = steer(heading, &head, &[], &food);
        }
        assert!((heading - PI / 2.0).abs() < 1e-2);
    }

    #[test]
    fn test_no_food_keeps_heading() {
        let head = head_at(0.0, 0.0, 4);
        assert_eq!(steer(0.42, &head, &[], &[]), 0.42);
    }

    #[test]
    fn test_targets_first_food_not_nearest() {
        let head = head_at(0.0, 0.0, 4);
        let food = [head_at(0.0, 1000.0, 2), head_at(5.0, 0.0, 2)];
        let h = steer(0.0, &head, &[], &food);
        // Drifts toward the first (distant) item, ignoring the nearby one
        assert!(h > 0.0);
        assert!((h - (PI / 2.0) * FOOD_TURN_SMOOTHING).abs() < 1e-5);
    }
}
