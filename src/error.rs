//! # Error Types
//!
//! This module defines all error types for the quiz engine.
//!
//! The error taxonomy is deliberately small: nothing here is fatal. A
//! submitted label that is not among the offered answer choices is *not* an
//! error - it is scored as an incorrect answer. Errors cover only caller
//! misuse (acting outside the right game phase, selecting a level that does
//! not exist) and invalid level configuration.
//!
//! ## Usage
//! ```rust
//! use clefquiz::{QuizError, Session};
//!
//! let mut session = Session::with_seed(1);
//! match session.select_level(9, 0.0) {
//!     Err(QuizError::UnknownLevel(level)) => assert_eq!(level, 9),
//!     other => panic!("expected UnknownLevel, got {:?}", other),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    /// The requested difficulty level is not in the active level set.
    #[error("unknown difficulty level {0}")]
    UnknownLevel(u8),

    /// An answer was submitted (or a replay requested) outside the Playing
    /// phase.
    #[error("no round is in progress")]
    NotPlaying,

    /// `play_again` was called without a finished round to replay.
    #[error("no finished round to replay")]
    NotFinished,

    /// The round's time budget was already spent when the answer arrived;
    /// the session has transitioned to Finished and the answer was not
    /// scored.
    #[error("the round's time limit has expired")]
    RoundExpired,

    /// A custom level set failed to parse or violated the difficulty
    /// ordering invariants.
    #[error("invalid level configuration: {0}")]
    ConfigError(String),
}
