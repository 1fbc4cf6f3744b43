//! # Answer Normalizer
//!
//! Collapses a generated pitch to its canonical answer-choice label.
//!
//! ## Rules
//! - Naturals map to their own letter ("C" .. "B").
//! - A sharp or flat on an eligible letter maps to the dual-spelling label,
//!   e.g. both C# and Db map to "C#/Db".
//! - The four degenerate spellings collapse into the neighboring natural:
//!   E# -> "F", B# -> "C", Fb -> "E", Cb -> "B".
//!
//! The question generator never produces E or B with an accidental (their
//! sharp/flat forms coincide with the adjacent natural), but the collapse
//! rules are defined for every letter so pitches arriving from other callers
//! normalize consistently.
//!
//! ## Label Sets
//! The offered multiple-choice set is fixed per difficulty: the seven
//! naturals, plus the five dual-spelling labels once accidentals are enabled.
//! `canonical` always returns a member of the corresponding set.

use crate::note::{Accidental, NoteName, Pitch};

/// The seven natural answer labels
pub const NATURAL_LABELS: [&str; 7] = ["C", "D", "E", "F", "G", "A", "B"];

/// The five enharmonic dual-spelling labels
pub const ACCIDENTAL_LABELS: [&str; 5] = ["C#/Db", "D#/Eb", "F#/Gb", "G#/Ab", "A#/Bb"];

/// The answer-choice set offered for a difficulty
pub fn answer_options(include_accidentals: bool) -> Vec<&'static str> {
    let mut options: Vec<&'static str> = NATURAL_LABELS.to_vec();
    if include_accidentals {
        options.extend_from_slice(&ACCIDENTAL_LABELS);
    }
    options
}

/// Canonical answer label for a pitch
///
/// Both spellings of an enharmonic pair yield the same label, so grading an
/// answer never depends on whether the generator chose the sharp or the flat
/// spelling.
pub fn canonical(pitch: &Pitch) -> &'static str {
    match (pitch.accidental, pitch.name) {
        (Accidental::Natural, name) => name.letter(),

        // Sharps: E#/B# collapse upward, the rest pair with the next letter's flat
        (Accidental::Sharp, NoteName::E) => "F",
        (Accidental::Sharp, NoteName::B) => "C",
        (Accidental::Sharp, NoteName::C) => "C#/Db",
        (Accidental::Sharp, NoteName::D) => "D#/Eb",
        (Accidental::Sharp, NoteName::F) => "F#/Gb",
        (Accidental::Sharp, NoteName::G) => "G#/Ab",
        (Accidental::Sharp, NoteName::A) => "A#/Bb",

        // Flats: Fb/Cb collapse downward, the rest pair with the previous letter's sharp
        (Accidental::Flat, NoteName::F) => "E",
        (Accidental::Flat, NoteName::C) => "B",
        (Accidental::Flat, NoteName::D) => "C#/Db",
        (Accidental::Flat, NoteName::E) => "D#/Eb",
        (Accidental::Flat, NoteName::G) => "F#/Gb",
        (Accidental::Flat, NoteName::A) => "G#/Ab",
        (Accidental::Flat, NoteName::B) => "A#/Bb",
    }
}
