//! # Game State Machine
//!
//! Session-scoped quiz controller driving the Menu -> Playing -> Finished
//! lifecycle.
//!
//! ## States
//! - `Menu` - level/mode selection
//! - `Playing` - a round in progress, in one of two orthogonal sub-modes:
//!   - **Level mode**: fixed question count with a total time budget and an
//!     optional per-question budget
//!   - **Record mode**: unbounded and untimed, tracking a running streak and
//!     a session-lifetime best streak
//! - `Finished` - round over (all questions answered, or a time budget spent)
//!
//! ## Design
//! The machine is pure with respect to time: every time-sensitive transition
//! takes an explicit `now` argument (monotonic seconds), so there is no
//! hidden clock and tests drive timeouts with plain numbers. Elapsed time is
//! sampled at check points (`tick`, answer submission); there are no
//! scheduled callbacks.
//!
//! All round state lives in [`RoundState`] and is mutated only through the
//! transition methods on [`Session`], which centrally enforce the
//! invariants: a question is always present while Playing, the correct-answer
//! count never decreases within a round, and the best streak never decreases
//! within a session.
//!
//! ## Sub-modules
//! - `state` - Phase, Mode, Outcome, Timeout, RoundState definitions
//! - `machine` - The `Session` controller and its transitions
//!
//! ## Entry Point
//! [`Session::new()`] (or [`Session::with_seed()`] for deterministic tests),
//! then the event methods: `select_level`, `start_record_mode`,
//! `submit_answer`, `tick`, `play_again`, `back_to_menu`.

mod machine;
mod state;


pub use machine::Session;
pub use state::{Mode, Outcome, Phase, RoundState, Timeout};
