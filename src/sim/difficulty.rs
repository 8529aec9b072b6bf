//! Escalating creature population
//!
//! Every letter a guess gets wrong makes the arena meaner. The director only
//! tracks totals and answers "how many should exist"; the session owns the
//! actual creature entities.

use serde::{Deserialize, Serialize};

use super::judge::LetterScore;
use crate::consts::{CREATURE_BASE_SPEED, CREATURE_SPEED_STEP, WORD_LEN};

/// Creature accent colors, ordered by lifetime spawn index.
/// Indices past the end clamp to the last entry.
pub const CREATURE_PALETTE: [&str; 5] = ["#ff4444", "#ff8844", "#ffcc44", "#ffee55", "#ffffff"];

/// Population policy: two creatures for every non-exact letter revealed.
///
/// Kept as a named function so difficulty tuning never touches the
/// orchestration code.
pub fn desired_population(cumulative_non_exact: u32) -> u32 {
    cumulative_non_exact * 2
}

/// A batch of creatures owed after scoring one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnBatch {
    /// Lifetime index (1-based) of the first creature in the batch
    pub first_index: u32,
    pub count: u32,
}

impl SpawnBatch {
    /// Lifetime indices of the creatures to spawn
    pub fn indices(self) -> impl Iterator<Item = u32> {
        self.first_index..self.first_index + self.count
    }
}

/// Tracks how badly the player is guessing and how many creatures that costs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DifficultyDirector {
    /// Running total of non-Exact labels across all scored guesses
    pub cumulative_non_exact: u32,
    /// Lifetime creature count (monotone, never decremented on kills)
    pub total_spawned: u32,
}

impl DifficultyDirector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one scored non-winning guess and return the batch of
    /// creatures owed to reach the desired population.
    ///
    /// `total_spawned` converges to `desired_population(cumulative_non_exact)`
    /// before this returns; the batch may be empty.
    pub fn record_guess(&mut self, scores: &[LetterScore; WORD_LEN]) -> SpawnBatch {
        let missed = scores.iter().filter(|s| **s != LetterScore::Exact).count() as u32;
        self.cumulative_non_exact += missed;

        let desired = desired_population(self.cumulative_non_exact);
        let count = desired.saturating_sub(self.total_spawned);
        let first_index = self.total_spawned + 1;
        self.total_spawned += count;

        SpawnBatch { first_index, count }
    }

    /// Speed for the creature with the given lifetime index (1-based)
    pub fn speed_for(index: u32) -> f32 {
        CREATURE_BASE_SPEED + index as f32 * CREATURE_SPEED_STEP
    }

    /// Color tier for the creature with the given lifetime index (1-based)
    pub fn tier_for(index: u32) -> u8 {
        (index.saturating_sub(1)).min(CREATURE_PALETTE.len() as u32 - 1) as u8
    }

    /// Palette color for a tier
    pub fn tier_color(tier: u8) -> &'static str {
        CREATURE_PALETTE[(tier as usize).min(CREATURE_PALETTE.len() - 1)]
    }
}
