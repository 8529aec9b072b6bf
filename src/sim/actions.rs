//! Discrete player operations
//!
//! The context-sensitive "act" button plus the throw. Every path is a total
//! function: premature or invalid requests leave the session untouched and
//! report nothing.

use glam::Vec3;
use rand::Rng;

use super::difficulty::DifficultyDirector;
use super::judge;
use super::projectile::Projectile;
use super::state::{
    Creature, GameEvent, GamePhase, GameSession, GuessRecord, SlotLetter, WorldLetter,
    nearest_within,
};
use crate::consts::*;
use crate::{flat_distance, ring_position, slot_position, submit_position};

impl GameSession {
    /// Context-sensitive pick-up/place/submit.
    ///
    /// Empty-handed priority: submit a full slot row at the lock-in point,
    /// then pick up the nearest world letter, then the nearest occupied
    /// slot, then a fresh letter from the alphabet ring. Holding a letter:
    /// discard at its own ring source, else place into the nearest empty
    /// slot, else drop it just in front of the player.
    pub fn perform_action(&mut self, player_pos: Vec3, facing: Vec3) {
        if self.phase.is_terminal() {
            return;
        }

        match self.held {
            Some(ch) => self.place_or_drop(ch, player_pos, facing),
            None => self.pick_or_submit(player_pos),
        }
    }

    fn place_or_drop(&mut self, ch: char, player_pos: Vec3, facing: Vec3) {
        // Back at its own ring source: return to the infinite supply
        if let Some(ring_idx) = ALPHABET.iter().position(|c| *c == ch)
            && flat_distance(ring_position(ring_idx), player_pos) < RING_INTERACT_RADIUS
        {
            self.held = None;
            return;
        }

        // Nearest empty slot within placement range
        let empty_slots = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_none())
            .map(|(i, _)| (i, slot_position(i)));
        if let Some(slot_idx) = nearest_within(empty_slots, player_pos, SLOT_PLACE_RADIUS) {
            let id = self.next_entity_id();
            self.slots[slot_idx] = Some(SlotLetter { id, ch });
            self.held = None;
            log::debug!("placed '{}' into slot {}", ch, slot_idx);
            return;
        }

        // Nothing nearby: drop it in front of the player, never lose it
        let level = Vec3::new(facing.x, 0.0, facing.z);
        let forward = if level.length_squared() > 1e-6 {
            level.normalize()
        } else {
            Vec3::NEG_Z
        };
        let drop = player_pos + forward * DROP_DISTANCE;
        let pos = Vec3::new(drop.x, drop.y.max(LETTER_REST_HEIGHT), drop.z);
        let id = self.next_entity_id();
        self.world_letters.push(WorldLetter { id, ch, pos });
        self.held = None;
        log::debug!("dropped '{}' at {:?}", ch, pos);
    }

    fn pick_or_submit(&mut self, player_pos: Vec3) {
        // Lock-in: full row at the submission point
        if flat_distance(submit_position(), player_pos) < SUBMIT_RADIUS
            && self.slots_full()
            && self.guesses_taken() < MAX_GUESSES
        {
            let guess: String = self.slots.iter().flatten().map(|s| s.ch).collect();
            self.slots = [None; WORD_LEN];
            self.submit_guess(&guess, player_pos);
            return;
        }

        // Nearest free-standing world letter
        let world = self
            .world_letters
            .iter()
            .enumerate()
            .map(|(i, l)| (i, l.pos));
        if let Some(idx) = nearest_within(world, player_pos, WORLD_PICKUP_RADIUS) {
            let letter = self.world_letters.remove(idx);
            self.held = Some(letter.ch);
            return;
        }

        // Nearest occupied slot
        let occupied = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_some())
            .map(|(i, _)| (i, slot_position(i)));
        if let Some(idx) = nearest_within(occupied, player_pos, SLOT_PICKUP_RADIUS) {
            if let Some(letter) = self.slots[idx].take() {
                self.held = Some(letter.ch);
            }
            return;
        }

        // Alphabet ring: infinite supply, never depletes
        let ring = (0..ALPHABET.len()).map(|i| (i, ring_position(i)));
        if let Some(idx) = nearest_within(ring, player_pos, RING_INTERACT_RADIUS) {
            self.held = Some(ALPHABET[idx]);
        }
    }

    /// Score a guess, grow the eliminated set, and spawn the creatures owed.
    ///
    /// Called from the submit path once preconditions hold; also the direct
    /// entry point for drivers that bypass slot construction.
    pub fn submit_guess(&mut self, guess: &str, player_pos: Vec3) {
        if self.phase.is_terminal() || self.guesses_taken() >= MAX_GUESSES {
            return;
        }

        let eval = judge::evaluate(self.target(), guess);
        self.eliminated.extend(eval.newly_absent.iter().copied());
        self.guesses.push(GuessRecord {
            word: guess.to_string(),
            scores: eval.scores,
        });
        self.events.push(GameEvent::GuessScored {
            word: guess.to_string(),
            scores: eval.scores,
        });
        log::info!(
            "guess {}/{}: {} -> {:?}",
            self.guesses_taken(),
            MAX_GUESSES,
            guess,
            eval.scores
        );

        if eval.is_win {
            self.phase = GamePhase::Won;
            self.capture_result_time();
            let elapsed = self.elapsed_secs;
            self.events.push(GameEvent::Won {
                elapsed_secs: elapsed,
            });
            log::info!("session won in {:.3}s", elapsed);
            return;
        }

        let batch = self.director.record_guess(&eval.scores);
        for index in batch.indices() {
            self.spawn_creature(index, player_pos);
        }
    }

    /// Throw the held letter, if it has been eliminated; otherwise a no-op
    /// that consumes nothing
    pub fn throw_held_letter(&mut self, player_pos: Vec3, facing: Vec3) {
        if self.phase.is_terminal() {
            return;
        }
        let Some(ch) = self.held else {
            return;
        };
        if !self.eliminated.contains(&ch) {
            return;
        }

        self.held = None;
        let id = self.next_entity_id();
        self.projectiles
            .push(Projectile::launch(id, ch, player_pos, facing));
        log::debug!("threw '{}' (projectile {})", ch, id);
    }

    fn spawn_creature(&mut self, lifetime_index: u32, around: Vec3) {
        let angle = self.rng.random::<f32>() * std::f32::consts::TAU;
        let pos = Vec3::new(
            around.x + angle.cos() * CREATURE_SPAWN_RADIUS,
            CREATURE_HEIGHT,
            around.z + angle.sin() * CREATURE_SPAWN_RADIUS,
        );
        let id = self.next_entity_id();
        let tier = DifficultyDirector::tier_for(lifetime_index);
        self.creatures.push(Creature {
            id,
            speed: DifficultyDirector::speed_for(lifetime_index),
            pos,
            yaw: 0.0,
            tier,
            captured: false,
        });
        self.events.push(GameEvent::CreatureSpawned { id, tier });
        log::debug!(
            "creature {} spawned (index {}, tier {}) at {:?}",
            id,
            lifetime_index,
            tier,
            pos
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::judge::LetterScore;

    fn facing_forward() -> Vec3 {
        Vec3::NEG_Z
    }

    fn at(p: Vec3) -> Vec3 {
        p
    }

    fn ring_pos_of(ch: char) -> Vec3 {
        let idx = ALPHABET.iter().position(|c| *c == ch).unwrap();
        ring_position(idx)
    }

    #[test]
    fn test_pick_from_ring_does_not_deplete() {
        let mut session = GameSession::new(1, "CRANE");
        let pos = ring_pos_of('A');

        session.perform_action(at(pos), facing_forward());
        assert_eq!(session.held, Some('A'));

        // Drop it far away, come back: the ring still supplies 'A'
        session.perform_action(Vec3::new(0.0, 0.5, 4.0), facing_forward());
        assert_eq!(session.held, None);
        session.perform_action(at(pos), facing_forward());
        assert_eq!(session.held, Some('A'));
    }

    #[test]
    fn test_discard_at_own_ring_source() {
        let mut session = GameSession::new(1, "CRANE");
        session.held = Some('B');
        session.perform_action(ring_pos_of('B'), facing_forward());
        assert_eq!(session.held, None);
        assert!(session.world_letters.is_empty());
    }

    #[test]
    fn test_place_and_retrieve_slot_letter() {
        let mut session = GameSession::new(1, "CRANE");
        session.held = Some('C');
        session.perform_action(slot_position(0), facing_forward());
        assert_eq!(session.held, None);
        assert_eq!(session.slots[0].map(|s| s.ch), Some('C'));

        session.perform_action(slot_position(0), facing_forward());
        assert_eq!(session.held, Some('C'));
        assert!(session.slots[0].is_none());
    }

    #[test]
    fn test_drop_when_slots_full_not_lost() {
        let mut session = GameSession::new(1, "CRANE");
        for (i, ch) in ['C', 'R', 'A', 'N', 'E'].into_iter().enumerate() {
            session.held = Some(ch);
            session.perform_action(slot_position(i), facing_forward());
        }
        assert!(session.slots_full());

        // Holding a sixth letter with nothing in range: it lands in the world
        session.held = Some('X');
        let spot = Vec3::new(5.0, 0.5, 5.0);
        session.perform_action(spot, facing_forward());
        assert_eq!(session.held, None);
        assert_eq!(session.world_letters.len(), 1);
        assert_eq!(session.world_letters[0].ch, 'X');
        assert!(flat_distance(session.world_letters[0].pos, spot) <= DROP_DISTANCE + 1e-4);
    }

    #[test]
    fn test_world_letter_pickup_nearest_wins() {
        let mut session = GameSession::new(1, "CRANE");
        session.held = Some('P');
        session.perform_action(Vec3::new(5.0, 0.5, 5.0), facing_forward());
        session.held = Some('Q');
        session.perform_action(Vec3::new(5.0, 0.5, 5.5), facing_forward());
        assert_eq!(session.world_letters.len(), 2);

        // Standing nearer the second drop
        session.perform_action(Vec3::new(5.0, 0.5, 4.7), facing_forward());
        assert_eq!(session.held, Some('Q'));
    }

    #[test]
    fn test_submit_full_row_at_lock_in() {
        let mut session = GameSession::new(1, "CRANE");
        for (i, ch) in ['T', 'R', 'A', 'C', 'E'].into_iter().enumerate() {
            session.held = Some(ch);
            session.perform_action(slot_position(i), facing_forward());
        }
        session.perform_action(submit_position(), facing_forward());

        assert_eq!(session.guesses_taken(), 1);
        assert_eq!(session.guesses[0].word, "TRACE");
        assert_eq!(
            session.guesses[0].scores,
            [
                LetterScore::Absent,
                LetterScore::Exact,
                LetterScore::Partial,
                LetterScore::Partial,
                LetterScore::Exact,
            ]
        );
        // Slots cleared after submission
        assert!(session.slots.iter().all(Option::is_none));
        // Three non-exact letters -> six creatures
        assert_eq!(session.creatures.len(), 6);
        assert!(session.eliminated.contains(&'T'));
    }

    #[test]
    fn test_submit_requires_full_row() {
        let mut session = GameSession::new(1, "CRANE");
        session.held = Some('T');
        session.perform_action(slot_position(0), facing_forward());
        session.perform_action(submit_position(), facing_forward());
        assert_eq!(session.guesses_taken(), 0);
        // Standing at the lock-in with a partial row picks nothing up either
        assert_eq!(session.held, None);
    }

    #[test]
    fn test_guess_limit_enforced() {
        let mut session = GameSession::new(1, "CRANE");
        for _ in 0..MAX_GUESSES {
            session.submit_guess("TRACE", Vec3::ZERO);
        }
        assert_eq!(session.guesses_taken(), MAX_GUESSES);
        session.submit_guess("TRACE", Vec3::ZERO);
        assert_eq!(session.guesses_taken(), MAX_GUESSES);
        // Guess limit alone does not end the session
        assert_eq!(session.phase, GamePhase::Active);
    }

    #[test]
    fn test_winning_guess_ends_session() {
        let mut session = GameSession::new(1, "CRANE");
        session.elapsed_secs = 12.25;
        session.submit_guess("CRANE", Vec3::ZERO);
        assert_eq!(session.phase, GamePhase::Won);
        assert_eq!(session.result_time, Some(12.25));
        assert!(session.creatures.is_empty());

        // Terminal: everything becomes a no-op
        session.submit_guess("TRACE", Vec3::ZERO);
        assert_eq!(session.guesses_taken(), 1);
        session.perform_action(ring_pos_of('A'), facing_forward());
        assert_eq!(session.held, None);
    }

    #[test]
    fn test_eliminated_set_monotonic() {
        let mut session = GameSession::new(1, "CRANE");
        session.submit_guess("TOTAL", Vec3::ZERO);
        let first: Vec<char> = session.eliminated.iter().copied().collect();
        session.submit_guess("SPEND", Vec3::ZERO);
        for ch in first {
            assert!(session.eliminated.contains(&ch));
        }
        assert!(session.eliminated.contains(&'T'));
        assert!(session.eliminated.contains(&'S'));
        // Letters in the target never show up
        assert!(!session.eliminated.contains(&'N'));
    }

    #[test]
    fn test_throw_requires_eliminated_letter() {
        let mut session = GameSession::new(1, "CRANE");
        session.held = Some('X');

        // 'X' not yet eliminated: rejected, letter kept
        session.throw_held_letter(Vec3::ZERO, facing_forward());
        assert_eq!(session.held, Some('X'));
        assert!(session.projectiles.is_empty());

        // Empty-handed: rejected
        session.held = None;
        session.throw_held_letter(Vec3::ZERO, facing_forward());
        assert!(session.projectiles.is_empty());

        // Eliminate 'T' via a guess, then throw it
        session.submit_guess("TRACE", Vec3::ZERO);
        session.held = Some('T');
        session.throw_held_letter(Vec3::ZERO, facing_forward());
        assert_eq!(session.held, None);
        assert_eq!(session.projectiles.len(), 1);
        assert_eq!(session.projectiles[0].letter, 'T');
    }

    #[test]
    fn test_throw_is_noop_once_terminal() {
        let mut session = GameSession::new(1, "CRANE");
        session.submit_guess("TRACE", Vec3::ZERO);
        assert!(session.eliminated.contains(&'T'));

        // Held and eliminated, but the session has ended: nothing launches
        // and the letter stays in hand
        session.held = Some('T');
        session.phase = GamePhase::Lost;
        session.throw_held_letter(Vec3::ZERO, facing_forward());
        assert_eq!(session.held, Some('T'));
        assert!(session.projectiles.is_empty());

        session.phase = GamePhase::Won;
        session.throw_held_letter(Vec3::ZERO, facing_forward());
        assert_eq!(session.held, Some('T'));
        assert!(session.projectiles.is_empty());
    }

    #[test]
    fn test_spawns_surround_player_at_spawn_radius() {
        let mut session = GameSession::new(9, "CRANE");
        let player = Vec3::new(3.0, 0.5, -4.0);
        session.submit_guess("TRACE", player);
        assert!(!session.creatures.is_empty());
        for c in &session.creatures {
            let d = flat_distance(c.pos, player);
            assert!((d - CREATURE_SPAWN_RADIUS).abs() < 1e-3);
            assert!((c.pos.y - CREATURE_HEIGHT).abs() < 1e-6);
        }
        // Speeds escalate with lifetime index
        let speeds: Vec<f32> = session.creatures.iter().map(|c| c.speed).collect();
        for pair in speeds.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }
}
