//! Creature steering
//!
//! Each creature seeks the player's current position at its assigned speed,
//! never overshooting, and reports contact exactly once.

use glam::Vec3;

use super::state::Creature;
use crate::consts::{CAPTURE_RADIUS, PURSUIT_EPSILON};

/// Result of advancing one creature for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PursuitOutcome {
    /// Still closing in (or already sitting on the target)
    Chasing,
    /// Contact: fired at most once per creature, ever
    Contact,
}

/// Advance a creature toward `target` by one step of `dt` seconds
pub fn step(creature: &mut Creature, target: Vec3, dt: f32) -> PursuitOutcome {
    let delta = target - creature.pos;
    let dist = delta.length();

    if dist > PURSUIT_EPSILON {
        let dir = delta / dist;
        let step = creature.speed * dt;
        if step >= dist {
            creature.pos = target;
        } else {
            creature.pos += dir * step;
        }
        creature.yaw = dir.x.atan2(dir.z);
    }

    if !creature.captured && dist < CAPTURE_RADIUS {
        creature.captured = true;
        return PursuitOutcome::Contact;
    }

    PursuitOutcome::Chasing
}
