//! State type definitions for the game state machine.

use serde::Serialize;

use crate::generate::Question;

/// Top-level phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Menu,
    Playing,
    Finished,
}

/// Playing sub-mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Bounded round at the given difficulty level
    Level(u8),
    /// Unbounded, untimed streak chase
    Record,
}

impl Mode {
    pub fn is_record(self) -> bool {
        matches!(self, Mode::Record)
    }
}

/// Result of grading one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Correct,
    Incorrect,
}

/// Which time budget ran out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeout {
    /// The round's total time limit
    Round,
    /// The per-question time limit
    Question,
}

/// Mutable per-round record
///
/// Created with defaults at session start, fully reset when a round begins,
/// and mutated exclusively by the [`Session`](super::Session) transition
/// methods.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundState {
    /// Zero-based index of the current question (level mode)
    pub question_number: u32,
    /// Correct answers so far; never decreases within a round
    pub correct_answers: u32,
    /// The current prompt; always present while Playing
    pub question: Option<Question>,
    /// Monotonic timestamp of the round start
    pub started_at: Option<f64>,
    /// Grade of the most recent submission, shown as feedback
    pub last_outcome: Option<Outcome>,
    /// Canonical answer to display after an incorrect guess
    pub last_correct_answer: Option<&'static str>,
    /// Running streak of consecutive correct answers (record mode)
    pub streak: u32,
}
