use std::sync::Arc;

use quiz_core::model::{PlayerName, QuizSession, ScoreEntry};
use quiz_core::{RankedEntry, leaderboard};
use storage::repository::{ScoreRepository, StorageKey};

use crate::Clock;
use crate::error::ScoreboardError;

/// Presentation-facing scoreboard facade that hides the repository and time from the UI.
///
/// This service owns:
/// - the time source (`Clock`) used to stamp entries
/// - repository access for the scoreboard and the attendee log
///
/// It does **not** own UI formatting.
#[derive(Clone)]
pub struct ScoreboardService {
    clock: Clock,
    scores: Arc<dyn ScoreRepository>,
}

impl ScoreboardService {
    #[must_use]
    pub fn new(clock: Clock, scores: Arc<dyn ScoreRepository>) -> Self {
        Self { clock, scores }
    }

    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        Self::new(
            clock,
            Arc::new(storage::repository::InMemoryRepository::new()),
        )
    }

    /// Save a finished session under the attendee's name.
    ///
    /// The entry goes to the scoreboard first, then to the attendee log. Once
    /// the scoreboard write has landed the entry counts as saved: a failed
    /// attendee-log write is logged and not reported, so a retry can never
    /// add a second scoreboard row for the same quiz.
    ///
    /// # Errors
    ///
    /// Returns `ScoreboardError::InvalidName` for names under two characters,
    /// `ScoreboardError::NotCompleted` if the session has not finished, and
    /// `ScoreboardError::Storage` if the scoreboard write fails.
    pub async fn record_result(
        &self,
        raw_name: &str,
        session: &QuizSession,
    ) -> Result<ScoreEntry, ScoreboardError> {
        let name = PlayerName::parse(raw_name)?;
        let result = session.result().ok_or(ScoreboardError::NotCompleted)?;
        let entry = ScoreEntry::new(name, result.correct, result.total, self.clock.now());

        if let Err(err) = self
            .scores
            .append_entry(StorageKey::Scoreboard, &entry)
            .await
        {
            log::warn!("scoreboard write failed for {}: {err}", entry.name);
            return Err(err.into());
        }
        if let Err(err) = self
            .scores
            .append_entry(StorageKey::AttendeeLog, &entry)
            .await
        {
            log::warn!("attendee log write failed for {}: {err}", entry.name);
        }

        log::info!(
            "recorded {}/{} for {}",
            entry.score,
            entry.total,
            entry.name
        );
        Ok(entry)
    }

    /// Ranked scoreboard, best first.
    pub async fn leaderboard(&self) -> Vec<RankedEntry> {
        let entries = self.scores.load_entries(StorageKey::Scoreboard).await;
        leaderboard(&entries)
    }

    /// Every recorded quiz, in the order it was completed.
    pub async fn attendees(&self) -> Vec<ScoreEntry> {
        self.scores.load_entries(StorageKey::AttendeeLog).await
    }

    /// Clear the scoreboard. The attendee log is kept.
    ///
    /// # Errors
    ///
    /// Returns `ScoreboardError::Storage` if the scoreboard cannot be removed.
    pub async fn clear_scoreboard(&self) -> Result<(), ScoreboardError> {
        self.scores.clear(StorageKey::Scoreboard).await?;
        log::info!("scoreboard cleared");
        Ok(())
    }
}
