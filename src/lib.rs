//! Word Chase - an arena word-hunt game engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (guess scoring, creature pursuit, projectiles, session state)
//! - `words`: Bundled 5-letter word list (target selection + guess membership)
//!
//! Rendering, camera, and input mapping live outside this crate; they consume
//! the session's snapshots and drained events and feed back discrete triggers
//! plus the player transform each tick.

pub mod sim;
pub mod words;

pub use words::WordList;

use glam::Vec3;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per rendered frame at 60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Word shape
    pub const WORD_LEN: usize = 5;
    pub const MAX_GUESSES: usize = 6;

    /// Alphabet ring: 26 infinite-supply letter sources around the arena
    pub const ALPHABET: [char; 26] = [
        'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
        'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
    ];
    pub const RING_RADIUS: f32 = 10.0;
    pub const RING_LETTER_HEIGHT: f32 = 0.6;

    /// Guess-construction slots and the submission point
    pub const SLOT_SPACING: f32 = 1.2;
    pub const SLOT_ROW_Z: f32 = -20.0;

    /// Interaction radii (measured on the ground plane)
    pub const SUBMIT_RADIUS: f32 = 1.2;
    pub const RING_INTERACT_RADIUS: f32 = 1.2;
    pub const WORLD_PICKUP_RADIUS: f32 = 1.0;
    pub const SLOT_PICKUP_RADIUS: f32 = 0.8;
    pub const SLOT_PLACE_RADIUS: f32 = 0.9;
    /// How far in front of the player a held letter lands when dropped
    pub const DROP_DISTANCE: f32 = 1.0;
    /// Letters rest slightly above the floor
    pub const LETTER_REST_HEIGHT: f32 = 0.5;

    /// Creature defaults
    pub const CREATURE_SPAWN_RADIUS: f32 = 15.0;
    pub const CREATURE_BASE_SPEED: f32 = 1.5;
    pub const CREATURE_SPEED_STEP: f32 = 0.7;
    pub const CREATURE_HEIGHT: f32 = 0.5;
    /// Below this distance the creature snaps onto its target instead of stepping
    pub const PURSUIT_EPSILON: f32 = 0.01;
    /// Contact distance that ends the run
    pub const CAPTURE_RADIUS: f32 = 0.9;

    /// Projectile defaults
    pub const PROJECTILE_SPEED: f32 = 18.0;
    pub const PROJECTILE_LAUNCH_HEIGHT: f32 = 1.2;
    /// Projectiles are culled once they leave this radius around the arena origin
    pub const PROJECTILE_MAX_RANGE: f32 = 60.0;
    /// Strict bound: a distance exactly equal to this is a miss
    pub const HIT_RADIUS: f32 = 1.0;
}

/// Distance between two points projected onto the ground (XZ) plane
#[inline]
pub fn flat_distance(a: Vec3, b: Vec3) -> f32 {
    let dx = a.x - b.x;
    let dz = a.z - b.z;
    (dx * dx + dz * dz).sqrt()
}

/// Position of the i-th alphabet ring source (0-based, counterclockwise)
#[inline]
pub fn ring_position(index: usize) -> Vec3 {
    let angle = (index as f32 / consts::ALPHABET.len() as f32) * std::f32::consts::TAU;
    Vec3::new(
        angle.cos() * consts::RING_RADIUS,
        consts::RING_LETTER_HEIGHT,
        angle.sin() * consts::RING_RADIUS,
    )
}

/// Position of the i-th guess slot (0-based, left to right)
#[inline]
pub fn slot_position(index: usize) -> Vec3 {
    Vec3::new(
        (index as f32 - 2.0) * consts::SLOT_SPACING,
        0.0,
        consts::SLOT_ROW_Z,
    )
}

/// The lock-in point where a filled slot row is submitted as a guess
#[inline]
pub fn submit_position() -> Vec3 {
    Vec3::new(0.0, 0.5, -22.0)
}

/// Format a run time as `m:ss.mmm` for end-of-round display
pub fn format_elapsed(secs: f32) -> String {
    let total_ms = (secs.max(0.0) * 1000.0) as u64;
    let m = total_ms / 60_000;
    let s = total_ms / 1000 % 60;
    let ms = total_ms % 1000;
    format!("{}:{:02}.{:03}", m, s, ms)
}
