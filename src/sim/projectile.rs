//! Letter projectiles
//!
//! Spent eliminated letters fly straight, keep a short trail for rendering,
//! and knock out the first creature they pass close enough to. Matching is
//! first-match-wins in id order: one creature and one projectile per pair,
//! per tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::{
    HIT_RADIUS, PROJECTILE_LAUNCH_HEIGHT, PROJECTILE_MAX_RANGE, PROJECTILE_SPEED,
};

/// Maximum number of trail points to store
pub const TRAIL_LENGTH: usize = 20;

/// A thrown letter in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    /// The eliminated letter being spent
    pub letter: char,
    pub pos: Vec3,
    pub vel: Vec3,
    /// Trail history for rendering (newest first)
    #[serde(skip)]
    pub trail: Vec<Vec3>,
}

impl Projectile {
    /// Create a projectile leaving the player's hand: spawned above the
    /// player, flying level along the facing direction
    pub fn launch(id: u32, letter: char, player_pos: Vec3, facing: Vec3) -> Self {
        let level = Vec3::new(facing.x, 0.0, facing.z);
        let dir = if level.length_squared() > 1e-6 {
            level.normalize()
        } else {
            Vec3::NEG_Z
        };
        Self {
            id,
            letter,
            pos: player_pos + Vec3::Y * PROJECTILE_LAUNCH_HEIGHT,
            vel: dir * PROJECTILE_SPEED,
            trail: Vec::with_capacity(TRAIL_LENGTH),
        }
    }

    /// Record current position to trail (call each tick)
    pub fn record_trail(&mut self) {
        self.trail.insert(0, self.pos);
        if self.trail.len() > TRAIL_LENGTH {
            self.trail.pop();
        }
    }
}

/// Integrate all live projectiles by one step and cull any that left the arena
pub fn integrate(projectiles: &mut Vec<Projectile>, dt: f32) {
    for p in projectiles.iter_mut() {
        p.pos += p.vel * dt;
        p.record_trail();
    }
    projectiles.retain(|p| p.pos.length() <= PROJECTILE_MAX_RANGE);
}

/// Pair projectiles with creatures they hit this tick.
///
/// `creatures` is a read-only position snapshot `(id, pos)` taken after the
/// pursuit pass. Proximity is measured on the ground plane (projectiles fly
/// above creature root height). Iteration is in stable id order and
/// first-match-wins: each creature and each projectile appears in at most
/// one returned pair. The boundary is strict - a distance exactly equal to
/// `HIT_RADIUS` is a miss.
pub fn resolve_hits(projectiles: &[Projectile], creatures: &[(u32, Vec3)]) -> Vec<(u32, u32)> {
    let mut pairs = Vec::new();
    let mut creature_taken = vec![false; creatures.len()];

    for p in projectiles {
        for (ci, &(creature_id, creature_pos)) in creatures.iter().enumerate() {
            if creature_taken[ci] {
                continue;
            }
            if crate::flat_distance(creature_pos, p.pos) < HIT_RADIUS {
                creature_taken[ci] = true;
                pairs.push((creature_id, p.id));
                break;
            }
        }
    }

    pairs
}
