use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Default seconds allowed per question.
pub const DEFAULT_QUESTION_TIME_LIMIT_SECS: u32 = 10;

/// Default score needed for the celebration on the result screen.
pub const DEFAULT_HIGH_SCORE: u32 = 13;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("question time limit must be > 0")]
    InvalidTimeLimit,

    #[error("high-score fraction needs a non-zero denominator")]
    ZeroDenominator,

    #[error("high-score fraction {numerator}/{denominator} is greater than 1")]
    FractionAboveOne { numerator: u32, denominator: u32 },

    #[error("invalid high-score threshold: {raw}")]
    InvalidThreshold { raw: String },
}

/// When a finished quiz counts as a high score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighScoreThreshold {
    /// At least this many correct answers.
    Absolute(u32),
    /// At least `numerator / denominator` of the questions answered correctly.
    Fraction { numerator: u32, denominator: u32 },
}

impl HighScoreThreshold {
    /// # Errors
    ///
    /// Returns `ConfigError` for a zero denominator or a fraction above one.
    pub fn fraction(numerator: u32, denominator: u32) -> Result<Self, ConfigError> {
        if denominator == 0 {
            return Err(ConfigError::ZeroDenominator);
        }
        if numerator > denominator {
            return Err(ConfigError::FractionAboveOne {
                numerator,
                denominator,
            });
        }
        Ok(Self::Fraction {
            numerator,
            denominator,
        })
    }

    #[must_use]
    pub fn is_met(&self, score: u32, total: u32) -> bool {
        match *self {
            Self::Absolute(min) => score >= min,
            // score/total >= n/d, compared without floating point.
            Self::Fraction {
                numerator,
                denominator,
            } => u64::from(score) * u64::from(denominator) >= u64::from(numerator) * u64::from(total),
        }
    }
}

impl Default for HighScoreThreshold {
    fn default() -> Self {
        Self::Absolute(DEFAULT_HIGH_SCORE)
    }
}

impl fmt::Display for HighScoreThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute(min) => write!(f, "{min}"),
            Self::Fraction {
                numerator,
                denominator,
            } => write!(f, "{numerator}/{denominator}"),
        }
    }
}

/// Parses `"8"` as an absolute count and `"13/15"` as a fraction.
impl FromStr for HighScoreThreshold {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidThreshold { raw: s.to_string() };
        let s_trimmed = s.trim();
        match s_trimmed.split_once('/') {
            Some((num, den)) => {
                let numerator = num.trim().parse::<u32>().map_err(|_| invalid())?;
                let denominator = den.trim().parse::<u32>().map_err(|_| invalid())?;
                Self::fraction(numerator, denominator)
            }
            None => s_trimmed
                .parse::<u32>()
                .map(Self::Absolute)
                .map_err(|_| invalid()),
        }
    }
}

/// Quiz tuning knobs. Fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizConfig {
    question_time_limit_secs: u32,
    high_score: HighScoreThreshold,
}

impl QuizConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTimeLimit` if the time limit is zero.
    pub fn new(
        question_time_limit_secs: u32,
        high_score: HighScoreThreshold,
    ) -> Result<Self, ConfigError> {
        if question_time_limit_secs == 0 {
            return Err(ConfigError::InvalidTimeLimit);
        }
        Ok(Self {
            question_time_limit_secs,
            high_score,
        })
    }

    #[must_use]
    pub fn question_time_limit_secs(&self) -> u32 {
        self.question_time_limit_secs
    }

    #[must_use]
    pub fn high_score(&self) -> HighScoreThreshold {
        self.high_score
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            question_time_limit_secs: DEFAULT_QUESTION_TIME_LIMIT_SECS,
            high_score: HighScoreThreshold::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_bundled_quiz() {
        let config = QuizConfig::default();
        assert_eq!(config.question_time_limit_secs(), 10);
        assert_eq!(config.high_score(), HighScoreThreshold::Absolute(13));
    }

    #[test]
    fn rejects_zero_time_limit() {
        let err = QuizConfig::new(0, HighScoreThreshold::default()).unwrap_err();
        assert_eq!(err, ConfigError::InvalidTimeLimit);
    }

    #[test]
    fn absolute_threshold_is_inclusive() {
        let t = HighScoreThreshold::Absolute(8);
        assert!(t.is_met(8, 15));
        assert!(!t.is_met(7, 15));
    }

    #[test]
    fn fraction_threshold_scales_with_total() {
        let t = HighScoreThreshold::fraction(13, 15).unwrap();
        assert!(t.is_met(13, 15));
        assert!(!t.is_met(12, 15));
        assert!(t.is_met(26, 30));
        assert!(!t.is_met(25, 30));
    }

    #[test]
    fn parses_both_threshold_forms() {
        assert_eq!("8".parse::<HighScoreThreshold>().unwrap(), HighScoreThreshold::Absolute(8));
        assert_eq!(
            " 13 / 15 ".parse::<HighScoreThreshold>().unwrap(),
            HighScoreThreshold::Fraction {
                numerator: 13,
                denominator: 15
            }
        );
        assert_eq!(
            "3/0".parse::<HighScoreThreshold>().unwrap_err(),
            ConfigError::ZeroDenominator
        );
        assert!(matches!(
            "16/15".parse::<HighScoreThreshold>(),
            Err(ConfigError::FractionAboveOne { .. })
        ));
        assert!(matches!(
            "lots".parse::<HighScoreThreshold>(),
            Err(ConfigError::InvalidThreshold { .. })
        ));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let t = HighScoreThreshold::fraction(2, 3).unwrap();
        assert_eq!(t.to_string().parse::<HighScoreThreshold>().unwrap(), t);
    }
}
