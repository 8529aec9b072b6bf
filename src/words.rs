//! Word list: target selection and guess membership
//!
//! The engine never validates spelling itself; this is the word-source
//! collaborator handed to a session at construction and to input handling
//! for pre-submit checks.

use rand::Rng;

use crate::consts::WORD_LEN;

/// Word list bundled into the binary (one lowercase word per line)
static BUNDLED: &str = include_str!("../words.txt");

/// A pool of playable 5-letter words
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Load the bundled word list
    pub fn bundled() -> Self {
        Self::from_text(BUNDLED)
    }

    /// Parse a newline-separated list, keeping only well-formed 5-letter words
    pub fn from_text(text: &str) -> Self {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|w| w.len() == WORD_LEN && w.chars().all(|c| c.is_ascii_alphabetic()))
            .map(str::to_lowercase)
            .collect();
        Self { words }
    }

    /// Pick a target word uniformly at random (uppercase), if the list is non-empty
    pub fn choose(&self, rng: &mut impl Rng) -> Option<String> {
        if self.words.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.words.len());
        Some(self.words[idx].to_uppercase())
    }

    /// Membership check for guess validation (case-insensitive)
    pub fn is_allowed(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.words.iter().any(|w| *w == lower)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::bundled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_bundled_list_nonempty_and_well_formed() {
        let list = WordList::bundled();
        assert!(list.len() > 100);
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..8 {
            let word = list.choose(&mut rng).unwrap();
            assert_eq!(word.len(), WORD_LEN);
            assert!(word.chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_from_text_filters_malformed_lines() {
        let list = WordList::from_text("crane\ntoolong\nabc\ncr4ne\n TRACK \n");
        assert_eq!(list.len(), 2);
        assert!(list.is_allowed("CRANE"));
        assert!(list.is_allowed("track"));
        assert!(!list.is_allowed("cr4ne"));
    }

    #[test]
    fn test_choose_empty_list() {
        let list = WordList::from_text("");
        let mut rng = Pcg32::seed_from_u64(1);
        assert!(list.choose(&mut rng).is_none());
        assert!(list.is_empty());
    }
}
