//! Fixed timestep simulation tick
//!
//! Single-threaded, one tick per rendered frame. Fixed per-tick ordering:
//! discrete inputs, pursuit movement, projectile integration and trails,
//! hit resolution against a frozen creature snapshot, removals.

use glam::Vec3;

use super::projectile;
use super::pursuit::{self, PursuitOutcome};
use super::state::{GameEvent, GamePhase, GameSession};

/// Input for a single tick: the player transform sampled this frame plus
/// the discrete triggers pressed since the last one
#[derive(Debug, Clone)]
pub struct TickInput {
    pub player_pos: Vec3,
    /// Unit facing direction (vertical component ignored by the engine)
    pub player_facing: Vec3,
    /// Context-sensitive pick-up/place/submit trigger
    pub act: bool,
    /// Throw the held letter
    pub throw: bool,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            player_pos: Vec3::new(0.0, 0.5, 4.0),
            player_facing: Vec3::NEG_Z,
            act: false,
            throw: false,
        }
    }
}

/// Advance the session by one fixed timestep
pub fn tick(session: &mut GameSession, input: &TickInput, dt: f32) {
    if session.phase.is_terminal() {
        return;
    }

    if input.act {
        session.perform_action(input.player_pos, input.player_facing);
    }
    if input.throw {
        session.throw_held_letter(input.player_pos, input.player_facing);
    }

    // A winning submit freezes the world immediately: no pursuit, no capture
    if session.phase.is_terminal() {
        return;
    }

    session.elapsed_secs += dt;

    // Pursuit movement; captures are one-shot per creature
    let mut caught = false;
    for creature in &mut session.creatures {
        if pursuit::step(creature, input.player_pos, dt) == PursuitOutcome::Contact {
            caught = true;
        }
    }
    if caught {
        session.phase = GamePhase::Lost;
        session.capture_result_time();
        let elapsed = session.elapsed_secs;
        session.events.push(GameEvent::Lost {
            elapsed_secs: elapsed,
        });
        log::info!("player caught after {:.3}s", elapsed);
        // The world freezes at the moment of capture: projectiles stop
        // mid-flight and no further kills resolve
        return;
    }

    // Projectiles integrate and cull before hit resolution so a projectile
    // and creature meeting mid-tick resolve in this same tick
    projectile::integrate(&mut session.projectiles, dt);

    let creature_snapshot: Vec<(u32, Vec3)> =
        session.creatures.iter().map(|c| (c.id, c.pos)).collect();
    let hits = projectile::resolve_hits(&session.projectiles, &creature_snapshot);

    for &(creature_id, projectile_id) in &hits {
        if let Some(creature) = session.creatures.iter().find(|c| c.id == creature_id) {
            session.events.push(GameEvent::CreatureSlain {
                id: creature.id,
                pos: creature.pos,
            });
        }
        log::debug!(
            "projectile {} downed creature {}",
            projectile_id,
            creature_id
        );
    }
    session
        .creatures
        .retain(|c| !hits.iter().any(|&(cid, _)| cid == c.id));
    session
        .projectiles
        .retain(|p| !hits.iter().any(|&(_, pid)| pid == p.id));
}
