//! Word Chase headless demo
//!
//! Drives one scripted session end to end without a renderer: spells an
//! opening guess from the alphabet ring, spends an eliminated letter on the
//! horde it summoned, then locks in the winning word. Prints the final
//! snapshot as JSON.
//!
//! The demo chooses the target itself, so it is allowed to "know" the answer.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use word_chase::consts::{ALPHABET, SIM_DT};
use word_chase::sim::{GameEvent, GamePhase, GameSession, TickInput, tick};
use word_chase::{WordList, format_elapsed, ring_position, slot_position, submit_position};

fn act_at(session: &mut GameSession, pos: Vec3) {
    let input = TickInput {
        player_pos: pos,
        act: true,
        ..Default::default()
    };
    tick(session, &input, SIM_DT);
    report_events(session);
}

fn spell_word(session: &mut GameSession, word: &str) {
    for (slot, ch) in word.chars().enumerate() {
        let ring_idx = ALPHABET
            .iter()
            .position(|c| *c == ch)
            .unwrap_or_default();
        act_at(session, ring_position(ring_idx));
        act_at(session, slot_position(slot));
    }
    act_at(session, submit_position());
}

fn report_events(session: &mut GameSession) {
    for event in session.take_events() {
        match event {
            GameEvent::GuessScored { word, scores } => {
                log::info!("scored {word}: {scores:?}");
            }
            GameEvent::CreatureSpawned { id, tier } => {
                log::info!("creature {id} joined the hunt (tier {tier})");
            }
            GameEvent::CreatureSlain { id, pos } => {
                log::info!("creature {id} downed at {pos:?}");
            }
            GameEvent::Won { elapsed_secs } => {
                log::info!("won in {}", format_elapsed(elapsed_secs));
            }
            GameEvent::Lost { elapsed_secs } => {
                log::info!("caught after {}", format_elapsed(elapsed_secs));
            }
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let words = WordList::bundled();
    let seed = 0xC0FFEE;
    let mut seed_rng = Pcg32::seed_from_u64(seed);
    let Some(target) = words.choose(&mut seed_rng) else {
        log::error!("bundled word list is empty");
        return;
    };

    let mut session = GameSession::new(seed, &target);
    log::info!("session started ({} candidate words)", words.len());

    // Opening guess: a common-letter probe
    let opener = if target == "RAISE" { "CRANE" } else { "RAISE" };
    spell_word(&mut session, opener);

    // Spend the first eliminated letter on whatever the miss summoned
    let first_eliminated = session.eliminated().next();
    if let Some(letter) = first_eliminated {
        let ring_idx = ALPHABET.iter().position(|c| c == &letter).unwrap_or(0);
        act_at(&mut session, ring_position(ring_idx));
        let input = TickInput {
            player_pos: Vec3::new(0.0, 0.5, 4.0),
            player_facing: Vec3::NEG_Z,
            throw: true,
            ..Default::default()
        };
        tick(&mut session, &input, SIM_DT);
        // Let the projectile fly for a second
        for _ in 0..60 {
            tick(&mut session, &TickInput::default(), SIM_DT);
        }
        report_events(&mut session);
    }

    // Lock in the answer
    if session.phase() == GamePhase::Active {
        spell_word(&mut session, &target);
    }

    match serde_json::to_string_pretty(&session.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("snapshot serialization failed: {err}"),
    }
}
