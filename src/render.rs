//! # Staff Renderer
//!
//! Pure function turning a (pitch, clef, degree) triple into an abstract
//! drawing description. The consuming render surface (SVG, canvas, anything)
//! turns the description into pixels; this module never touches a surface.
//!
//! ## Geometry
//! Coordinates live in a fixed 300x200 view box. The five staff lines sit at
//! y = 70, 85, 100, 115, 130, so one line-to-line gap is 15 units and one
//! staff degree (line-to-space step) is 7.5. The note head is centered at
//! x = 160 and `y = 130 - degree * 7.5`.
//!
//! ## Rules
//! - A ledger line is emitted iff the note head falls outside the staff's
//!   vertical span.
//! - The stem points up on the right side of the head for notes at or below
//!   the middle line, down on the left side above it, so stems never collide
//!   with ledger lines.
//! - An accidental glyph is placed beside the head iff the pitch carries one.
//!
//! Rendering is deterministic: identical inputs always produce an identical
//! `StaffDrawing`.

use serde::Serialize;

use crate::note::{Clef, Pitch};
use crate::staff::{Degree, MIDDLE_LINE_DEGREE};

const VIEW_WIDTH: f64 = 300.0;
const VIEW_HEIGHT: f64 = 200.0;

const STAFF_LEFT: f64 = 50.0;
const STAFF_RIGHT: f64 = 250.0;
const TOP_LINE_Y: f64 = 70.0;
const BOTTOM_LINE_Y: f64 = 130.0;
const LINE_GAP: f64 = 15.0;
/// Vertical units per staff degree (half a line gap)
const DEGREE_STEP: f64 = LINE_GAP / 2.0;

const HEAD_X: f64 = 160.0;
const HEAD_RX: f64 = 12.0;
const HEAD_RY: f64 = 8.0;
const STEM_LENGTH: f64 = 35.0;
const STEM_UP_X: f64 = HEAD_X + HEAD_RX;
const STEM_DOWN_X: f64 = HEAD_X - HEAD_RX;
const LEDGER_LEFT: f64 = 140.0;
const LEDGER_RIGHT: f64 = 180.0;

const CLEF_X: f64 = 60.0;
const CLEF_Y: f64 = 110.0;
const CLEF_FONT_SIZE: f64 = 48.0;
const ACCIDENTAL_X: f64 = 130.0;
const ACCIDENTAL_FONT_SIZE: f64 = 24.0;

/// A straight stroke between two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl LineSegment {
    fn horizontal(x1: f64, x2: f64, y: f64) -> Self {
        Self { x1, y1: y, x2, y2: y }
    }
}

/// A filled ellipse note head
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteHead {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
}

/// A text glyph (clef symbol or accidental) at a baseline position
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Glyph {
    pub x: f64,
    pub y: f64,
    pub text: &'static str,
    pub font_size: f64,
}

/// Complete drawing description for one staff-plus-note prompt
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffDrawing {
    pub width: f64,
    pub height: f64,
    /// Heading label, e.g. "Treble"
    pub clef_name: &'static str,
    /// The five staff lines, top to bottom
    pub staff_lines: Vec<LineSegment>,
    pub clef: Glyph,
    /// Short extra line under/over the head when it sits outside the staff
    pub ledger_line: Option<LineSegment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accidental: Option<Glyph>,
    pub note_head: NoteHead,
    pub stem: LineSegment,
}

/// Render a note at a staff degree into a drawing description
pub fn render(pitch: &Pitch, clef: Clef, degree: Degree) -> StaffDrawing {
    let note_y = BOTTOM_LINE_Y - degree as f64 * DEGREE_STEP;

    let staff_lines = (0..5)
        .map(|i| LineSegment::horizontal(STAFF_LEFT, STAFF_RIGHT, TOP_LINE_Y + i as f64 * LINE_GAP))
        .collect();

    let ledger_line = if note_y < TOP_LINE_Y || note_y > BOTTOM_LINE_Y {
        Some(LineSegment::horizontal(LEDGER_LEFT, LEDGER_RIGHT, note_y))
    } else {
        None
    };

    // Stem up for notes at or below the middle line, down above it
    let stem = if degree <= MIDDLE_LINE_DEGREE {
        LineSegment {
            x1: STEM_UP_X,
            y1: note_y,
            x2: STEM_UP_X,
            y2: note_y - STEM_LENGTH,
        }
    } else {
        LineSegment {
            x1: STEM_DOWN_X,
            y1: note_y,
            x2: STEM_DOWN_X,
            y2: note_y + STEM_LENGTH,
        }
    };

    let accidental = pitch.accidental.glyph().map(|text| Glyph {
        x: ACCIDENTAL_X,
        y: note_y + 5.0,
        text,
        font_size: ACCIDENTAL_FONT_SIZE,
    });

    StaffDrawing {
        width: VIEW_WIDTH,
        height: VIEW_HEIGHT,
        clef_name: clef.name(),
        staff_lines,
        clef: Glyph {
            x: CLEF_X,
            y: CLEF_Y,
            text: clef.glyph(),
            font_size: CLEF_FONT_SIZE,
        },
        ledger_line,
        accidental,
        note_head: NoteHead {
            cx: HEAD_X,
            cy: note_y,
            rx: HEAD_RX,
            ry: HEAD_RY,
        },
        stem,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::{Accidental, NoteName};
    use crate::staff::{natural_at, MAX_DEGREE, MIN_DEGREE, ON_STAFF_DEGREES};

    fn drawing_for(degree: Degree) -> StaffDrawing {
        let pitch = natural_at(Clef::Treble, degree).unwrap();
        render(&pitch, Clef::Treble, degree)
    }

    #[test]
    fn test_render_is_deterministic() {
        let pitch = Pitch::natural(NoteName::G, 4).with_accidental(Accidental::Sharp);
        assert_eq!(render(&pitch, Clef::Treble, 2), render(&pitch, Clef::Treble, 2));
    }

    #[test]
    fn test_vertical_mapping() {
        // Bottom line sits on the lowest staff line, top line on the highest
        assert_eq!(drawing_for(0).note_head.cy, 130.0);
        assert_eq!(drawing_for(4).note_head.cy, 100.0);
        assert_eq!(drawing_for(8).note_head.cy, 70.0);
        // One degree above the top line is half a gap higher
        assert_eq!(drawing_for(9).note_head.cy, 62.5);
    }

    #[test]
    fn test_ledger_line_rule() {
        for degree in MIN_DEGREE..=MAX_DEGREE {
            let drawing = drawing_for(degree);
            if ON_STAFF_DEGREES.contains(&degree) {
                assert!(drawing.ledger_line.is_none(), "degree {}", degree);
            } else {
                let ledger = drawing.ledger_line.expect("ledger line expected");
                assert_eq!(ledger.y1, drawing.note_head.cy);
            }
        }
    }

    #[test]
    fn test_stem_direction() {
        // At or below the middle line: stem up on the right
        let low = drawing_for(0);
        assert_eq!(low.stem.x1, 172.0);
        assert!(low.stem.y2 < low.stem.y1);
        let middle = drawing_for(4);
        assert!(middle.stem.y2 < middle.stem.y1);
        // Above the middle line: stem down on the left
        let high = drawing_for(5);
        assert_eq!(high.stem.x1, 148.0);
        assert!(high.stem.y2 > high.stem.y1);
    }

    #[test]
    fn test_accidental_glyph_emitted_iff_present() {
        let natural = Pitch::natural(NoteName::A, 4);
        assert!(render(&natural, Clef::Treble, 3).accidental.is_none());

        let flat = natural.with_accidental(Accidental::Flat);
        let glyph = render(&flat, Clef::Treble, 3).accidental.unwrap();
        assert_eq!(glyph.text, "\u{266D}");
    }

    #[test]
    fn test_clef_glyphs() {
        let pitch = Pitch::natural(NoteName::G, 2);
        assert_eq!(render(&pitch, Clef::Bass, 0).clef.text, "\u{1D122}");
        assert_eq!(render(&pitch, Clef::Bass, 0).clef_name, "Bass");
        assert_eq!(render(&pitch, Clef::Treble, 0).clef.text, "\u{1D11E}");
    }

    #[test]
    fn test_five_staff_lines() {
        let drawing = drawing_for(3);
        assert_eq!(drawing.staff_lines.len(), 5);
        let ys: Vec<f64> = drawing.staff_lines.iter().map(|l| l.y1).collect();
        assert_eq!(ys, vec![70.0, 85.0, 100.0, 115.0, 130.0]);
    }
}
