//! Guess scoring
//!
//! Two-pass evaluation with standard duplicate-letter semantics: every target
//! letter instance is consumed by at most one guess position, exact matches
//! are claimed first.

use serde::{Deserialize, Serialize};

use crate::consts::WORD_LEN;

/// Per-position feedback for one guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterScore {
    /// Right letter, right position
    Exact,
    /// Letter occurs elsewhere in the target (and is not already claimed)
    Partial,
    /// Letter does not occur in any unclaimed target position
    Absent,
}

/// Outcome of scoring one guess against the target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub scores: [LetterScore; WORD_LEN],
    /// Distinct guessed letters that occur nowhere in the target,
    /// in guess order
    pub newly_absent: Vec<char>,
    pub is_win: bool,
}

/// Score a guess against the target word
///
/// Both inputs are well-formed 5-letter uppercase words by construction of
/// the submit path (slots only ever hold single uppercase letters).
pub fn evaluate(target: &str, guess: &str) -> Evaluation {
    debug_assert_eq!(target.chars().count(), WORD_LEN);
    debug_assert_eq!(guess.chars().count(), WORD_LEN);

    let t: Vec<char> = target.chars().collect();
    let g: Vec<char> = guess.chars().collect();

    let mut scores = [LetterScore::Absent; WORD_LEN];
    let mut used = [false; WORD_LEN];

    // Pass 1: exact matches claim their own target position
    for i in 0..WORD_LEN {
        if g[i] == t[i] {
            scores[i] = LetterScore::Exact;
            used[i] = true;
        }
    }

    // Pass 2: partials claim the first unused occurrence, skipping positions
    // that a later exact match will claim for itself
    for i in 0..WORD_LEN {
        if scores[i] == LetterScore::Exact {
            continue;
        }
        for j in 0..WORD_LEN {
            if !used[j] && t[j] == g[i] && g[j] != t[j] {
                scores[i] = LetterScore::Partial;
                used[j] = true;
                break;
            }
        }
    }

    let mut newly_absent = Vec::new();
    for &ch in &g {
        if !t.contains(&ch) && !newly_absent.contains(&ch) {
            newly_absent.push(ch);
        }
    }

    let is_win = scores.iter().all(|s| *s == LetterScore::Exact);

    Evaluation {
        scores,
        newly_absent,
        is_win,
    }
}
