//! The session controller: owns round state and drives all transitions.

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::answer::{answer_options, canonical};
use crate::error::QuizError;
use crate::generate::{generate_question, Question};
use crate::levels::{builtin_levels, validate_levels, LevelConfig};
use crate::render::{render, StaffDrawing};

use super::state::{Mode, Outcome, Phase, RoundState, Timeout};

/// Session-scoped quiz controller
///
/// One `Session` per user session; it has no cross-session visibility. All
/// mutation goes through the transition methods, never ad hoc field writes,
/// so the round invariants are enforced in one place.
pub struct Session {
    phase: Phase,
    mode: Mode,
    round: RoundState,
    /// Longest streak seen this session; never decreases
    best_streak: u32,
    levels: Vec<LevelConfig>,
    rng: StdRng,
}

impl Session {
    /// A session with the built-in levels and an OS-seeded RNG
    pub fn new() -> Self {
        Self::from_parts(builtin_levels(), StdRng::from_os_rng())
    }

    /// A deterministic session for tests
    pub fn with_seed(seed: u64) -> Self {
        Self::from_parts(builtin_levels(), StdRng::seed_from_u64(seed))
    }

    /// A session with a custom, validated level set
    pub fn with_levels(levels: Vec<LevelConfig>) -> Result<Self, QuizError> {
        validate_levels(&levels)?;
        Ok(Self::from_parts(levels, StdRng::from_os_rng()))
    }

    fn from_parts(levels: Vec<LevelConfig>, rng: StdRng) -> Self {
        Self {
            phase: Phase::Menu,
            mode: Mode::Level(1),
            round: RoundState::default(),
            best_streak: 0,
            levels,
            rng,
        }
    }

    // --- Accessors ---------------------------------------------------------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    pub fn levels(&self) -> &[LevelConfig] {
        &self.levels
    }

    pub fn level_config(&self, level: u8) -> Option<&LevelConfig> {
        self.levels.iter().find(|c| c.level == level)
    }

    /// The active level's configuration, when playing in level mode
    pub fn active_level(&self) -> Option<&LevelConfig> {
        match self.mode {
            Mode::Level(level) => self.level_config(level),
            Mode::Record => None,
        }
    }

    /// The current prompt, if a round is in progress
    pub fn question(&self) -> Option<&Question> {
        self.round.question.as_ref()
    }

    /// Answer choices offered for the active mode
    pub fn answer_options(&self) -> Vec<&'static str> {
        answer_options(self.include_accidentals())
    }

    /// Seconds left in the round's total budget; `None` when untimed
    pub fn remaining_time(&self, now: f64) -> Option<f64> {
        let config = self.active_level()?;
        let started = self.round.started_at?;
        Some((config.total_time_limit - (now - started)).max(0.0))
    }

    /// Percentage score for a level-mode round
    pub fn score_percent(&self) -> Option<f64> {
        let config = self.active_level()?;
        Some(self.round.correct_answers as f64 / config.questions as f64 * 100.0)
    }

    /// Drawing description for the current question
    pub fn render_current(&self) -> Option<StaffDrawing> {
        self.round
            .question
            .as_ref()
            .map(|q| render(&q.pitch, q.clef, q.degree))
    }

    // --- Transitions -------------------------------------------------------

    /// Menu -> Playing in level mode; the round state is fully reset
    pub fn select_level(&mut self, level: u8, now: f64) -> Result<(), QuizError> {
        if self.level_config(level).is_none() {
            return Err(QuizError::UnknownLevel(level));
        }
        self.mode = Mode::Level(level);
        self.start_round(now);
        Ok(())
    }

    /// Menu -> Playing in record mode; the best streak persists
    pub fn start_record_mode(&mut self, now: f64) {
        self.mode = Mode::Record;
        self.start_round(now);
    }

    /// Finished -> Playing with the same mode and a full reset
    pub fn play_again(&mut self, now: f64) -> Result<(), QuizError> {
        if self.phase != Phase::Finished {
            return Err(QuizError::NotFinished);
        }
        self.start_round(now);
        Ok(())
    }

    /// Unconditional return to the menu; any in-flight round is discarded
    /// without recording a score
    pub fn back_to_menu(&mut self) {
        self.phase = Phase::Menu;
        self.round = RoundState::default();
    }

    /// Timer check performed at the start of handling the Playing state
    ///
    /// Level mode only: checks the total budget, then the per-question
    /// budget, and forces Finished when either is spent. Record mode is
    /// immune to timeouts.
    pub fn tick(&mut self, now: f64) -> Option<Timeout> {
        if self.phase != Phase::Playing {
            return None;
        }
        let Mode::Level(level) = self.mode else {
            return None;
        };
        let (total_limit, question_limit) = {
            let config = self.level_config(level)?;
            (config.total_time_limit, config.individual_time_limit)
        };

        let timeout = if self
            .round
            .started_at
            .is_some_and(|started| now - started > total_limit)
        {
            Some(Timeout::Round)
        } else if question_limit.is_some_and(|limit| {
            self.round
                .question
                .as_ref()
                .is_some_and(|q| now - q.issued_at > limit)
        }) {
            Some(Timeout::Question)
        } else {
            None
        };

        if let Some(kind) = timeout {
            debug!("level {} round timed out ({:?})", level, kind);
            self.phase = Phase::Finished;
            self.round.question = None;
        }
        timeout
    }

    /// Grade a submitted answer label and advance the round
    ///
    /// Labels outside the offered option set are simply incorrect, never an
    /// error. The timeout check runs first: if the round already expired the
    /// submission is not scored and `RoundExpired` is returned. While the
    /// session stays in Playing, a replacement question is generated before
    /// this method returns.
    pub fn submit_answer(&mut self, label: &str, now: f64) -> Result<Outcome, QuizError> {
        if self.phase != Phase::Playing {
            return Err(QuizError::NotPlaying);
        }
        if self.tick(now).is_some() {
            return Err(QuizError::RoundExpired);
        }

        let question = match self.round.question.take() {
            Some(question) => question,
            // Self-heal: Playing must never be observed without a question
            None => generate_question(self.include_accidentals(), &mut self.rng, now),
        };

        let correct = canonical(&question.pitch);
        let outcome = if label == correct {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        };

        match outcome {
            Outcome::Correct => {
                self.round.correct_answers += 1;
                self.round.last_correct_answer = None;
                if self.mode.is_record() {
                    self.round.streak += 1;
                    if self.round.streak > self.best_streak {
                        self.best_streak = self.round.streak;
                    }
                }
            }
            Outcome::Incorrect => {
                self.round.last_correct_answer = Some(correct);
                if self.mode.is_record() {
                    self.round.streak = 0;
                }
            }
        }
        self.round.last_outcome = Some(outcome);

        match self.mode {
            Mode::Record => self.next_question(now),
            Mode::Level(level) => {
                self.round.question_number += 1;
                let total = self
                    .level_config(level)
                    .map(|c| c.questions)
                    .unwrap_or(crate::levels::DEFAULT_QUESTIONS);
                if self.round.question_number >= total {
                    debug!(
                        "level {} round finished: {}/{} correct",
                        level, self.round.correct_answers, total
                    );
                    self.phase = Phase::Finished;
                } else {
                    self.next_question(now);
                }
            }
        }

        Ok(outcome)
    }

    // --- Internals ---------------------------------------------------------

    fn include_accidentals(&self) -> bool {
        match self.mode {
            // Record mode always draws from the full note set
            Mode::Record => true,
            Mode::Level(level) => self
                .level_config(level)
                .map(|c| c.include_accidentals)
                .unwrap_or(false),
        }
    }

    fn start_round(&mut self, now: f64) {
        self.round = RoundState {
            started_at: Some(now),
            ..RoundState::default()
        };
        self.phase = Phase::Playing;
        self.next_question(now);
        debug!("round started in {:?}", self.mode);
    }

    fn next_question(&mut self, now: f64) {
        let include_accidentals = self.include_accidentals();
        self.round.question = Some(generate_question(
            include_accidentals,
            &mut self.rng,
            now,
        ));
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
