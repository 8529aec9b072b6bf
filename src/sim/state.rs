//! Session state and core entity types
//!
//! One `GameSession` owns every entity collection. Nothing outside this
//! module mutates entities directly: collaborators call the session's
//! operations (`perform_action`, `throw_held_letter`, `tick`) and read
//! snapshots back out.

use std::collections::BTreeSet;

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::difficulty::DifficultyDirector;
use super::judge::LetterScore;
use super::projectile::Projectile;
use crate::consts::WORD_LEN;
use crate::flat_distance;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Accepting guesses, actions, and ticks
    Active,
    /// Target guessed - terminal
    Won,
    /// Caught by a creature - terminal
    Lost,
}

impl GamePhase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::Active)
    }
}

/// A letter sitting in a guess slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotLetter {
    pub id: u32,
    pub ch: char,
}

/// A free-standing letter dropped somewhere in the arena
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldLetter {
    pub id: u32,
    pub ch: char,
    pub pos: Vec3,
}

/// A pursuing creature
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub id: u32,
    /// Units per second, fixed at spawn
    pub speed: f32,
    pub pos: Vec3,
    /// Facing angle (radians around Y), follows travel direction
    pub yaw: f32,
    /// Index into the creature palette
    pub tier: u8,
    /// Contact already reported; never reports again
    pub captured: bool,
}

/// One scored guess in the session history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub word: String,
    pub scores: [LetterScore; WORD_LEN],
}

/// One-shot happenings for the presentation layer, drained per frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    CreatureSpawned { id: u32, tier: u8 },
    CreatureSlain { id: u32, pos: Vec3 },
    GuessScored { word: String, scores: [LetterScore; WORD_LEN] },
    Won { elapsed_secs: f32 },
    Lost { elapsed_secs: f32 },
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG (spawn angles)
    pub(crate) rng: Pcg32,
    /// The hidden target word; revealed only at a terminal phase
    target: String,
    pub(crate) phase: GamePhase,
    /// Seconds of simulation while Active
    pub(crate) elapsed_secs: f32,
    /// Elapsed time captured once at the terminal transition
    pub(crate) result_time: Option<f32>,
    /// Guess-construction slots, left to right
    pub(crate) slots: [Option<SlotLetter>; WORD_LEN],
    /// The letter the player is carrying, if any
    pub(crate) held: Option<char>,
    /// Free-standing dropped letters
    pub(crate) world_letters: Vec<WorldLetter>,
    /// Scored guess history, oldest first
    pub(crate) guesses: Vec<GuessRecord>,
    /// Letters confirmed absent from the target; grows, never shrinks
    pub(crate) eliminated: BTreeSet<char>,
    /// Live creatures (stable id order)
    pub(crate) creatures: Vec<Creature>,
    /// Live projectiles (stable id order)
    pub(crate) projectiles: Vec<Projectile>,
    pub(crate) director: DifficultyDirector,
    /// Pending one-shot events, drained by the presentation layer
    #[serde(skip)]
    pub(crate) events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameSession {
    /// Start a session against the given target word (uppercased here;
    /// chosen once by the word-source collaborator)
    pub fn new(seed: u64, target: &str) -> Self {
        let target = target.to_uppercase();
        debug_assert_eq!(target.chars().count(), WORD_LEN);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            target,
            phase: GamePhase::Active,
            elapsed_secs: 0.0,
            result_time: None,
            slots: [None; WORD_LEN],
            held: None,
            world_letters: Vec::new(),
            guesses: Vec::new(),
            eliminated: BTreeSet::new(),
            creatures: Vec::new(),
            projectiles: Vec::new(),
            director: DifficultyDirector::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub(crate) fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub(crate) fn target(&self) -> &str {
        &self.target
    }

    /// Current phase. Callers never set this directly; only the session's
    /// own operations transition it.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The letter the player is carrying, if any
    pub fn held(&self) -> Option<char> {
        self.held
    }

    /// Letters confirmed absent from the target, in alphabetical order
    pub fn eliminated(&self) -> impl Iterator<Item = char> + '_ {
        self.eliminated.iter().copied()
    }

    /// The target word, readable only once the session has ended
    pub fn revealed_target(&self) -> Option<&str> {
        self.phase.is_terminal().then_some(self.target.as_str())
    }

    pub fn guesses_taken(&self) -> usize {
        self.guesses.len()
    }

    /// All five slots hold a letter
    pub fn slots_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Freeze the clock; first terminal transition wins
    pub(crate) fn capture_result_time(&mut self) {
        if self.result_time.is_none() {
            self.result_time = Some(self.elapsed_secs);
        }
    }

    /// Drain pending one-shot events
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Read-only per-frame view for the renderer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            elapsed_secs: self.elapsed_secs,
            result_time: self.result_time,
            target: self.revealed_target().map(str::to_owned),
            held: self.held,
            slots: self.slots.map(|s| s.map(|l| l.ch)),
            world_letters: self.world_letters.clone(),
            guesses: self.guesses.clone(),
            eliminated: self.eliminated.iter().copied().collect(),
            creatures: self.creatures.clone(),
            projectiles: self
                .projectiles
                .iter()
                .map(|p| ProjectileView {
                    id: p.id,
                    letter: p.letter,
                    pos: p.pos,
                    trail: p.trail.clone(),
                })
                .collect(),
        }
    }
}

/// Projectile data as the renderer sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub letter: char,
    pub pos: Vec3,
    pub trail: Vec<Vec3>,
}

/// Everything the presentation layer needs for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub elapsed_secs: f32,
    pub result_time: Option<f32>,
    /// Present only once the session has ended
    pub target: Option<String>,
    pub held: Option<char>,
    pub slots: [Option<char>; WORD_LEN],
    pub world_letters: Vec<WorldLetter>,
    pub guesses: Vec<GuessRecord>,
    pub eliminated: Vec<char>,
    pub creatures: Vec<Creature>,
    pub projectiles: Vec<ProjectileView>,
}

/// Index of the nearest candidate within `radius` of `from`, measured on the
/// ground plane. One query for every proximity scan in the game: world
/// letters, occupied slots, empty slots, and the alphabet ring.
pub fn nearest_within(
    candidates: impl Iterator<Item = (usize, Vec3)>,
    from: Vec3,
    radius: f32,
) -> Option<usize> {
    let mut best: Option<usize> = None;
    let mut best_dist = radius;
    for (index, pos) in candidates {
        let d = flat_distance(pos, from);
        if d < best_dist {
            best_dist = d;
            best = Some(index);
        }
    }
    best
}
