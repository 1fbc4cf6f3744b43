//! # Note Model
//!
//! Core pitch types shared by every other module: note letters, accidentals,
//! clefs and the `Pitch` struct carried by generated questions.
//!
//! ## Key Concepts
//!
//! ### Letters
//! The seven letters C through B repeat cyclically. `next()`/`prev()` step
//! through the cycle, so the letter above G is A and the letter below A is G.
//!
//! ### Accidentals
//! A pitch optionally carries a sharp or flat. Enharmonic pairs (C#/Db, etc.)
//! are distinct spellings of the same sounding pitch; collapsing them to a
//! single answer label is the job of the `answer` module.
//!
//! ## Related Modules
//! - `staff` - Maps staff degrees to natural pitches per clef
//! - `answer` - Enharmonic collapse to answer-choice labels
//! - `generate` - Produces random `Pitch` values for questions

use serde::Serialize;
use std::fmt;

/// Note names C through B
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum NoteName {
    #[default]
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl NoteName {
    /// The letter as it appears on an answer card
    pub fn letter(self) -> &'static str {
        match self {
            NoteName::C => "C",
            NoteName::D => "D",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::G => "G",
            NoteName::A => "A",
            NoteName::B => "B",
        }
    }

    /// Next letter upward in the cycle (G steps to A, B wraps to C)
    pub fn next(self) -> NoteName {
        match self {
            NoteName::C => NoteName::D,
            NoteName::D => NoteName::E,
            NoteName::E => NoteName::F,
            NoteName::F => NoteName::G,
            NoteName::G => NoteName::A,
            NoteName::A => NoteName::B,
            NoteName::B => NoteName::C,
        }
    }

    /// Previous letter downward in the cycle (A steps to G, C wraps to B)
    pub fn prev(self) -> NoteName {
        match self {
            NoteName::C => NoteName::B,
            NoteName::D => NoteName::C,
            NoteName::E => NoteName::D,
            NoteName::F => NoteName::E,
            NoteName::G => NoteName::F,
            NoteName::A => NoteName::G,
            NoteName::B => NoteName::A,
        }
    }
}

/// Accidental applied to a note letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum Accidental {
    #[default]
    Natural,
    Sharp,
    Flat,
}

impl Accidental {
    /// Glyph drawn beside the note head, if any
    pub fn glyph(self) -> Option<&'static str> {
        match self {
            Accidental::Natural => None,
            Accidental::Sharp => Some("\u{266F}"),
            Accidental::Flat => Some("\u{266D}"),
        }
    }
}

/// A staff-reading context defining which pitch sits on which line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Clef {
    Treble,
    Bass,
}

impl Clef {
    /// Display name used in headings ("Treble", "Bass")
    pub fn name(self) -> &'static str {
        match self {
            Clef::Treble => "Treble",
            Clef::Bass => "Bass",
        }
    }

    /// Clef symbol glyph drawn at the start of the staff
    pub fn glyph(self) -> &'static str {
        match self {
            Clef::Treble => "\u{1D11E}",
            Clef::Bass => "\u{1D122}",
        }
    }
}

/// A concrete pitch: letter, accidental, and reference octave
///
/// The octave comes from the staff lookup table (e.g. the bottom line of the
/// treble staff is E4). Accidentals never shift the staff position; they only
/// change the spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pitch {
    pub name: NoteName,
    pub accidental: Accidental,
    pub octave: u8,
}

impl Pitch {
    /// A natural pitch at the given octave
    pub fn natural(name: NoteName, octave: u8) -> Self {
        Self {
            name,
            accidental: Accidental::Natural,
            octave,
        }
    }

    /// The same staff position spelled with an accidental
    pub fn with_accidental(self, accidental: Accidental) -> Self {
        Self { accidental, ..self }
    }

    pub fn is_natural(&self) -> bool {
        self.accidental == Accidental::Natural
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let acc = match self.accidental {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
        };
        write!(f, "{}{}{}", self.name.letter(), acc, self.octave)
    }
}
