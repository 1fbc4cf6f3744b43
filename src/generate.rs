//! # Question Generator
//!
//! Produces a random (pitch, clef, staff degree) prompt for the active
//! difficulty rules.
//!
//! ## Algorithm
//! 1. Choose a clef uniformly from {Treble, Bass}
//! 2. Choose a degree uniformly from the clef's on-staff candidate set
//! 3. Resolve the natural pitch at that degree
//! 4. If accidentals are enabled and the letter admits both a sharp and a
//!    flat spelling, apply one with probability [`ACCIDENTAL_PROBABILITY`],
//!    choosing sharp or flat uniformly
//!
//! Accidentals never shift the staff degree; they only change the spelling.
//! E and B are excluded from step 4 because E#/Fb and B#/Cb coincide with
//! the adjacent natural.
//!
//! The RNG is injected so callers (and tests) control seeding; the session
//! controller owns a seedable `StdRng`.

use rand::Rng;
use serde::Serialize;

use crate::note::{Accidental, Clef, NoteName, Pitch};
use crate::staff::{on_staff_candidates, Degree};

/// Probability that an eligible natural is spelled with an accidental
pub const ACCIDENTAL_PROBABILITY: f64 = 1.0 / 3.0;

/// Letters that admit both a sharp and a flat spelling without collapsing
/// into the neighboring natural
const ACCIDENTAL_ELIGIBLE: [NoteName; 5] = [
    NoteName::C,
    NoteName::D,
    NoteName::F,
    NoteName::G,
    NoteName::A,
];

/// A generated prompt plus the moment it was issued
///
/// Questions are replaced, never mutated: the state machine generates a new
/// one for each prompt and discards it at round end.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub pitch: Pitch,
    pub clef: Clef,
    /// Staff degree of the note head (0 = bottom line)
    pub degree: Degree,
    /// Monotonic timestamp in seconds, used for the per-question time limit
    pub issued_at: f64,
}

/// Generate a random question under the given accidental rule
pub fn generate_question<R: Rng + ?Sized>(
    include_accidentals: bool,
    rng: &mut R,
    now: f64,
) -> Question {
    let clef = if rng.random_bool(0.5) {
        Clef::Treble
    } else {
        Clef::Bass
    };

    let candidates = on_staff_candidates(clef);
    let (degree, natural) = candidates[rng.random_range(0..candidates.len())];

    let mut pitch = natural;
    if include_accidentals
        && ACCIDENTAL_ELIGIBLE.contains(&pitch.name)
        && rng.random_bool(ACCIDENTAL_PROBABILITY)
    {
        let accidental = if rng.random_bool(0.5) {
            Accidental::Sharp
        } else {
            Accidental::Flat
        };
        pitch = pitch.with_accidental(accidental);
    }

    Question {
        pitch,
        clef,
        degree,
        issued_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::staff::ON_STAFF_DEGREES;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_no_accidentals_when_disabled() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let question = generate_question(false, &mut rng, 0.0);
            assert!(question.pitch.is_natural());
        }
    }

    #[test]
    fn test_degrees_stay_on_staff() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let question = generate_question(true, &mut rng, 0.0);
            assert!(ON_STAFF_DEGREES.contains(&question.degree));
        }
    }

    #[test]
    fn test_accidentals_only_on_eligible_letters() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..500 {
            let question = generate_question(true, &mut rng, 0.0);
            if !question.pitch.is_natural() {
                assert!(
                    ACCIDENTAL_ELIGIBLE.contains(&question.pitch.name),
                    "accidental on {:?}",
                    question.pitch.name
                );
            }
        }
    }

    #[test]
    fn test_accidentals_do_appear_when_enabled() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut sharps = 0;
        let mut flats = 0;
        for _ in 0..500 {
            let question = generate_question(true, &mut rng, 0.0);
            match question.pitch.accidental {
                Accidental::Sharp => sharps += 1,
                Accidental::Flat => flats += 1,
                Accidental::Natural => {}
            }
        }
        assert!(sharps > 0);
        assert!(flats > 0);
    }

    #[test]
    fn test_pitch_matches_staff_table() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let question = generate_question(false, &mut rng, 0.0);
            let expected = crate::staff::natural_at(question.clef, question.degree).unwrap();
            assert_eq!(question.pitch, expected);
        }
    }

    #[test]
    fn test_deterministic_under_fixed_seed() {
        let mut a = StdRng::seed_from_u64(1234);
        let mut b = StdRng::seed_from_u64(1234);
        for _ in 0..50 {
            assert_eq!(
                generate_question(true, &mut a, 2.5),
                generate_question(true, &mut b, 2.5)
            );
        }
    }

    #[test]
    fn test_issued_at_is_recorded() {
        let mut rng = StdRng::seed_from_u64(5);
        let question = generate_question(false, &mut rng, 17.25);
        assert_eq!(question.issued_at, 17.25);
    }
}
