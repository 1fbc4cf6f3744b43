//! # clefquiz
//!
//! Core engine for a music-note flash-card quiz: a staff model, a random
//! question generator, an enharmonic answer normalizer, a pure staff
//! renderer, and the game state machine that ties them together. A small
//! market-dynamics toy calculator ships alongside as a second dashboard
//! model.
//!
//! The crate is UI-agnostic: rendering produces an abstract
//! [`StaffDrawing`] description for an external surface to draw, and the
//! state machine takes time as an explicit `now` argument instead of
//! reading a clock.
//!
//! ## Example
//! ```rust
//! use clefquiz::{canonical, Outcome, Phase, Session};
//!
//! let mut session = Session::with_seed(7);
//! session.select_level(1, 0.0).unwrap();
//! assert_eq!(session.phase(), Phase::Playing);
//!
//! // Answering with the canonical label of the current pitch is always correct
//! let label = canonical(&session.question().unwrap().pitch);
//! assert_eq!(session.submit_answer(label, 1.0).unwrap(), Outcome::Correct);
//! ```

pub mod answer;
pub mod error;
pub mod game;
pub mod generate;
pub mod levels;
pub mod market;
pub mod note;
pub mod render;
pub mod staff;

pub use answer::{answer_options, canonical, ACCIDENTAL_LABELS, NATURAL_LABELS};
pub use error::QuizError;
pub use game::{Mode, Outcome, Phase, RoundState, Session, Timeout};
pub use generate::{generate_question, Question, ACCIDENTAL_PROBABILITY};
pub use levels::{builtin_levels, load_levels, LevelConfig};
pub use market::{predict, MarketInputs, MarketMetrics, Outlook, Prediction};
pub use note::{Accidental, Clef, NoteName, Pitch};
pub use render::{render, StaffDrawing};
pub use staff::{natural_at, offset_of, on_staff_candidates, Degree, ON_STAFF_DEGREES};
