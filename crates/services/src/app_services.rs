use std::path::Path;
use std::sync::Arc;

use quiz_core::{QuestionBank, QuizConfig};
use storage::repository::Storage;

use crate::error::AppServicesError;
use crate::quiz_service::QuizService;
use crate::scoreboard_service::ScoreboardService;
use crate::Clock;

/// Assembles app-facing services around one storage backend and question bank.
#[derive(Clone)]
pub struct AppServices {
    quiz: Arc<QuizService>,
    scoreboard: Arc<ScoreboardService>,
}

impl AppServices {
    #[must_use]
    pub fn new(storage: &Storage, clock: Clock, config: QuizConfig, bank: QuestionBank) -> Self {
        let quiz = Arc::new(QuizService::new(Arc::new(bank), config));
        let scoreboard = Arc::new(ScoreboardService::new(clock, Arc::clone(&storage.scores)));
        Self { quiz, scoreboard }
    }

    /// Build services backed by a JSON data directory.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the data directory cannot be opened.
    pub async fn new_json_dir(
        data_dir: &Path,
        clock: Clock,
        config: QuizConfig,
        bank: QuestionBank,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::json_dir(data_dir).await?;
        log::info!(
            "scoreboard stored in {} ({} questions, {}s per question, high score {})",
            data_dir.display(),
            bank.len(),
            config.question_time_limit_secs(),
            config.high_score()
        );
        Ok(Self::new(&storage, clock, config, bank))
    }

    /// In-memory services over the bundled question bank.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Bank` if the bundled bank cannot be decoded.
    pub fn in_memory(clock: Clock, config: QuizConfig) -> Result<Self, AppServicesError> {
        let bank = QuestionBank::general_knowledge()?;
        Ok(Self::new(&Storage::in_memory(), clock, config, bank))
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn scoreboard(&self) -> Arc<ScoreboardService> {
        Arc::clone(&self.scoreboard)
    }
}
