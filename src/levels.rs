//! # Difficulty Levels
//!
//! The four built-in difficulty levels plus support for loading a custom
//! level set from YAML.
//!
//! ## Validation Rules
//! A level set is valid when:
//! - Ordinals run consecutively from 1
//! - Every round has a positive question count and total time limit
//! - Time budgets never loosen from one level to the next (total limits are
//!   non-increasing; a per-question limit, once introduced, stays and never
//!   grows)
//! - Accidentals, once enabled, stay enabled at higher levels
//!
//! ## YAML Format
//! ```yaml
//! levels:
//!   - level: 1
//!     name: Beginner
//!     description: Natural notes only, 5 minutes total
//!     include-accidentals: false
//!     total-time-limit: 300
//! ```
//! `individual-time-limit` and `questions` (default 20) are optional.
//!
//! ## Related Modules
//! - `generate` - Reads `include_accidentals` when producing questions
//! - `game` - Enforces the time limits during a round

use serde::Deserialize;

use crate::error::QuizError;

/// Questions per round unless a custom set overrides it
pub const DEFAULT_QUESTIONS: u32 = 20;

/// Immutable attributes of one difficulty level
#[derive(Debug, Clone, PartialEq)]
pub struct LevelConfig {
    /// Ordinal starting at 1
    pub level: u8,
    pub name: String,
    pub description: String,
    pub include_accidentals: bool,
    /// Total budget for the round, in seconds
    pub total_time_limit: f64,
    /// Per-question budget in seconds; `None` means unlimited
    pub individual_time_limit: Option<f64>,
    /// Fixed question count for the round
    pub questions: u32,
}

/// Raw level entry for YAML deserialization
#[derive(Deserialize, Debug)]
#[serde(rename_all = "kebab-case")]
struct RawLevel {
    level: u8,
    name: String,
    #[serde(default)]
    description: String,
    include_accidentals: bool,
    total_time_limit: f64,
    #[serde(default)]
    individual_time_limit: Option<f64>,
    #[serde(default = "default_questions")]
    questions: u32,
}

fn default_questions() -> u32 {
    DEFAULT_QUESTIONS
}

#[derive(Deserialize, Debug)]
struct RawLevelSet {
    levels: Vec<RawLevel>,
}

/// The standard four-level progression
pub fn builtin_levels() -> Vec<LevelConfig> {
    vec![
        LevelConfig {
            level: 1,
            name: "Beginner".to_string(),
            description: "Natural notes only, 5 minutes total".to_string(),
            include_accidentals: false,
            total_time_limit: 300.0,
            individual_time_limit: None,
            questions: DEFAULT_QUESTIONS,
        },
        LevelConfig {
            level: 2,
            name: "Intermediate".to_string(),
            description: "Including sharps and flats, 4 minutes total".to_string(),
            include_accidentals: true,
            total_time_limit: 240.0,
            individual_time_limit: None,
            questions: DEFAULT_QUESTIONS,
        },
        LevelConfig {
            level: 3,
            name: "Advanced".to_string(),
            description: "All notes, 3 minutes total, 15 seconds per question".to_string(),
            include_accidentals: true,
            total_time_limit: 180.0,
            individual_time_limit: Some(15.0),
            questions: DEFAULT_QUESTIONS,
        },
        LevelConfig {
            level: 4,
            name: "Expert".to_string(),
            description: "All notes, 2 minutes total, 10 seconds per question".to_string(),
            include_accidentals: true,
            total_time_limit: 120.0,
            individual_time_limit: Some(10.0),
            questions: DEFAULT_QUESTIONS,
        },
    ]
}

/// Parse a custom level set from YAML and validate it
pub fn load_levels(yaml: &str) -> Result<Vec<LevelConfig>, QuizError> {
    let raw: RawLevelSet =
        serde_yaml::from_str(yaml).map_err(|e| QuizError::ConfigError(e.to_string()))?;

    let levels: Vec<LevelConfig> = raw
        .levels
        .into_iter()
        .map(|r| LevelConfig {
            level: r.level,
            name: r.name,
            description: r.description,
            include_accidentals: r.include_accidentals,
            total_time_limit: r.total_time_limit,
            individual_time_limit: r.individual_time_limit,
            questions: r.questions,
        })
        .collect();

    validate_levels(&levels)?;
    Ok(levels)
}

/// Validate the difficulty ordering invariants for a level set
pub fn validate_levels(levels: &[LevelConfig]) -> Result<(), QuizError> {
    if levels.is_empty() {
        return Err(QuizError::ConfigError(
            "level set must contain at least one level".to_string(),
        ));
    }

    for (i, config) in levels.iter().enumerate() {
        let expected = (i + 1) as u8;
        if config.level != expected {
            return Err(QuizError::ConfigError(format!(
                "level ordinals must run consecutively from 1: found {} at position {}",
                config.level, expected
            )));
        }
        if config.questions == 0 {
            return Err(QuizError::ConfigError(format!(
                "level {}: question count must be positive",
                config.level
            )));
        }
        if config.total_time_limit <= 0.0 {
            return Err(QuizError::ConfigError(format!(
                "level {}: total time limit must be positive",
                config.level
            )));
        }
        if let Some(limit) = config.individual_time_limit {
            if limit <= 0.0 {
                return Err(QuizError::ConfigError(format!(
                    "level {}: per-question time limit must be positive",
                    config.level
                )));
            }
        }
    }

    for pair in levels.windows(2) {
        let (lower, upper) = (&pair[0], &pair[1]);
        if upper.total_time_limit > lower.total_time_limit {
            return Err(QuizError::ConfigError(format!(
                "level {}: total time limit ({}s) must not exceed level {}'s ({}s)",
                upper.level, upper.total_time_limit, lower.level, lower.total_time_limit
            )));
        }
        match (lower.individual_time_limit, upper.individual_time_limit) {
            (Some(_), None) => {
                return Err(QuizError::ConfigError(format!(
                    "level {}: per-question time limit cannot be dropped at a higher level",
                    upper.level
                )));
            }
            (Some(low), Some(high)) if high > low => {
                return Err(QuizError::ConfigError(format!(
                    "level {}: per-question time limit ({}s) must not exceed level {}'s ({}s)",
                    upper.level, high, lower.level, low
                )));
            }
            _ => {}
        }
        if lower.include_accidentals && !upper.include_accidentals {
            return Err(QuizError::ConfigError(format!(
                "level {}: accidentals cannot be disabled once a lower level enables them",
                upper.level
            )));
        }
    }

    Ok(())
}
