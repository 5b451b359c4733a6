use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Minimum number of characters in a trimmed player name.
pub const MIN_NAME_CHARS: usize = 2;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NameError {
    #[error("Please enter at least {MIN_NAME_CHARS} characters")]
    TooShort,
}

/// A trimmed attendee name of at least [`MIN_NAME_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerName(String);

impl PlayerName {
    /// # Errors
    ///
    /// Returns `NameError::TooShort` if the trimmed input is shorter than
    /// [`MIN_NAME_CHARS`] characters.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, NameError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.chars().count() < MIN_NAME_CHARS {
            return Err(NameError::TooShort);
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One completed quiz, as persisted on the scoreboard and attendee log.
///
/// Entries are append-only: once written they are never edited, only
/// bulk-cleared together with the rest of their list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: PlayerName,
    pub score: u32,
    pub total: u32,
    #[serde(rename = "dateISO", alias = "timestampISO")]
    pub recorded_at: DateTime<Utc>,
}

impl ScoreEntry {
    #[must_use]
    pub fn new(name: PlayerName, score: u32, total: u32, recorded_at: DateTime<Utc>) -> Self {
        Self {
            name,
            score,
            total,
            recorded_at,
        }
    }

    #[must_use]
    pub fn wrong(&self) -> u32 {
        self.total.saturating_sub(self.score)
    }
}
