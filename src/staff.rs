//! # Staff Model
//!
//! Fixed lookup tables mapping staff positions to natural pitches, one per
//! clef. Pure data, initialized as constants; nothing here mutates.
//!
//! ## Degrees and Offsets
//! A position is a *degree*: an integer count of line-or-space steps from the
//! bottom staff line. Degree 0 is the bottom line, degree 1 the first space,
//! degree 8 the top line. In the half-unit offsets used by the renderer one
//! degree equals 0.5, so the tables span offsets -5.0 through +5.0.
//!
//! ## Tables
//! Each table covers degrees -10 through +10 and is monotonically increasing
//! in pitch: every degree maps to exactly one natural, and stepping up one
//! degree steps up one letter. The treble bottom line is E4, the bass bottom
//! line is G2.
//!
//! ## On-staff candidates
//! Questions are drawn only from the nine degrees spanning the staff itself
//! (five lines plus the four spaces between them), degrees 0..=8.
//!
//! ## Related Modules
//! - `generate` - Picks random on-staff candidates
//! - `render` - Turns a degree into a vertical drawing coordinate

use crate::note::{Clef, NoteName, Pitch};

/// Line-or-space steps from the bottom staff line
pub type Degree = i8;

/// Lowest degree covered by the lookup tables (offset -5.0)
pub const MIN_DEGREE: Degree = -10;

/// Highest degree covered by the lookup tables (offset +5.0)
pub const MAX_DEGREE: Degree = 10;

/// Degrees considered fair game for questions: bottom line through top line
pub const ON_STAFF_DEGREES: std::ops::RangeInclusive<Degree> = 0..=8;

/// Degree of the middle (third) staff line, used for stem direction
pub const MIDDLE_LINE_DEGREE: Degree = 4;

/// Treble staff naturals, degree -10 (B2) through +10 (A5).
/// Bottom line (degree 0) is E4.
const TREBLE_NATURALS: [(NoteName, u8); 21] = [
    (NoteName::B, 2),
    (NoteName::C, 3),
    (NoteName::D, 3),
    (NoteName::E, 3),
    (NoteName::F, 3),
    (NoteName::G, 3),
    (NoteName::A, 3),
    (NoteName::B, 3),
    (NoteName::C, 4),
    (NoteName::D, 4),
    (NoteName::E, 4), // bottom line
    (NoteName::F, 4),
    (NoteName::G, 4),
    (NoteName::A, 4),
    (NoteName::B, 4), // middle line
    (NoteName::C, 5),
    (NoteName::D, 5),
    (NoteName::E, 5),
    (NoteName::F, 5), // top line
    (NoteName::G, 5),
    (NoteName::A, 5),
];

/// Bass staff naturals, degree -10 (D1) through +10 (C4).
/// Bottom line (degree 0) is G2.
const BASS_NATURALS: [(NoteName, u8); 21] = [
    (NoteName::D, 1),
    (NoteName::E, 1),
    (NoteName::F, 1),
    (NoteName::G, 1),
    (NoteName::A, 1),
    (NoteName::B, 1),
    (NoteName::C, 2),
    (NoteName::D, 2),
    (NoteName::E, 2),
    (NoteName::F, 2),
    (NoteName::G, 2), // bottom line
    (NoteName::A, 2),
    (NoteName::B, 2),
    (NoteName::C, 3),
    (NoteName::D, 3), // middle line
    (NoteName::E, 3),
    (NoteName::F, 3),
    (NoteName::G, 3),
    (NoteName::A, 3), // top line
    (NoteName::B, 3),
    (NoteName::C, 4),
];

/// Offset in half-line-or-space units for a degree (one degree = 0.5)
pub fn offset_of(degree: Degree) -> f64 {
    degree as f64 * 0.5
}

/// The natural pitch at a staff degree, or `None` outside the table range
pub fn natural_at(clef: Clef, degree: Degree) -> Option<Pitch> {
    if !(MIN_DEGREE..=MAX_DEGREE).contains(&degree) {
        return None;
    }
    let table = match clef {
        Clef::Treble => &TREBLE_NATURALS,
        Clef::Bass => &BASS_NATURALS,
    };
    let (name, octave) = table[(degree - MIN_DEGREE) as usize];
    Some(Pitch::natural(name, octave))
}

/// All (degree, natural) pairs eligible as question prompts for a clef
pub fn on_staff_candidates(clef: Clef) -> Vec<(Degree, Pitch)> {
    ON_STAFF_DEGREES
        .filter_map(|degree| natural_at(clef, degree).map(|pitch| (degree, pitch)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_anchors() {
        // Treble: bottom line E4, middle line B4, top line F5
        assert_eq!(natural_at(Clef::Treble, 0), Some(Pitch::natural(NoteName::E, 4)));
        assert_eq!(natural_at(Clef::Treble, 4), Some(Pitch::natural(NoteName::B, 4)));
        assert_eq!(natural_at(Clef::Treble, 8), Some(Pitch::natural(NoteName::F, 5)));
        // Bass: bottom line G2, middle line D3, top line A3
        assert_eq!(natural_at(Clef::Bass, 0), Some(Pitch::natural(NoteName::G, 2)));
        assert_eq!(natural_at(Clef::Bass, 4), Some(Pitch::natural(NoteName::D, 3)));
        assert_eq!(natural_at(Clef::Bass, 8), Some(Pitch::natural(NoteName::A, 3)));
    }

    #[test]
    fn test_tables_step_one_letter_per_degree() {
        for clef in [Clef::Treble, Clef::Bass] {
            for degree in MIN_DEGREE..MAX_DEGREE {
                let lower = natural_at(clef, degree).unwrap();
                let upper = natural_at(clef, degree + 1).unwrap();
                assert_eq!(lower.name.next(), upper.name, "{:?} degree {}", clef, degree);
                // Octave increments exactly when the letter wraps to C
                let expected_octave = if upper.name == NoteName::C {
                    lower.octave + 1
                } else {
                    lower.octave
                };
                assert_eq!(upper.octave, expected_octave);
            }
        }
    }

    #[test]
    fn test_out_of_range_degrees() {
        assert_eq!(natural_at(Clef::Treble, 11), None);
        assert_eq!(natural_at(Clef::Bass, -11), None);
    }

    #[test]
    fn test_candidate_set_spans_staff() {
        for clef in [Clef::Treble, Clef::Bass] {
            let candidates = on_staff_candidates(clef);
            assert_eq!(candidates.len(), 9);
            assert_eq!(candidates.first().unwrap().0, 0);
            assert_eq!(candidates.last().unwrap().0, 8);
        }
    }

    #[test]
    fn test_every_letter_reachable_on_staff() {
        for clef in [Clef::Treble, Clef::Bass] {
            let letters: Vec<NoteName> = on_staff_candidates(clef)
                .into_iter()
                .map(|(_, p)| p.name)
                .collect();
            for name in [
                NoteName::C,
                NoteName::D,
                NoteName::E,
                NoteName::F,
                NoteName::G,
                NoteName::A,
                NoteName::B,
            ] {
                assert!(letters.contains(&name), "{:?} missing {:?}", clef, name);
            }
        }
    }

    #[test]
    fn test_offset_mapping() {
        assert_eq!(offset_of(0), 0.0);
        assert_eq!(offset_of(8), 4.0);
        assert_eq!(offset_of(-10), -5.0);
        assert_eq!(offset_of(10), 5.0);
    }
}
