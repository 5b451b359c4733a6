use std::sync::Arc;

use services::{QuizService, ScoreboardService};

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn quiz(&self) -> Arc<QuizService>;
    fn scoreboard(&self) -> Arc<ScoreboardService>;
}

#[derive(Clone)]
pub struct AppContext {
    quiz: Arc<QuizService>,
    scoreboard: Arc<ScoreboardService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz: app.quiz(),
            scoreboard: app.scoreboard(),
        }
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

// Provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
