//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod actions;
pub mod difficulty;
pub mod judge;
pub mod projectile;
pub mod pursuit;
pub mod state;
pub mod tick;

pub use difficulty::{CREATURE_PALETTE, DifficultyDirector, SpawnBatch, desired_population};
pub use judge::{Evaluation, LetterScore, evaluate};
pub use projectile::{Projectile, TRAIL_LENGTH, resolve_hits};
pub use pursuit::PursuitOutcome;
pub use state::{
    Creature, GameEvent, GamePhase, GameSession, GuessRecord, ProjectileView, SlotLetter, Snapshot,
    WorldLetter, nearest_within,
};
pub use tick::{TickInput, tick};
