use std::sync::Arc;

use quiz_core::model::QuizSession;
use quiz_core::{QuestionBank, QuizConfig};

/// Hands out fresh quiz sessions over a shared question bank.
///
/// Sessions are owned values; nothing here keeps a reference to them.
#[derive(Clone)]
pub struct QuizService {
    bank: Arc<QuestionBank>,
    config: QuizConfig,
}

impl QuizService {
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>, config: QuizConfig) -> Self {
        Self { bank, config }
    }

    /// A new session in the `Idle` phase.
    #[must_use]
    pub fn new_session(&self) -> QuizSession {
        QuizSession::new(Arc::clone(&self.bank), self.config)
    }

    #[must_use]
    pub fn config(&self) -> QuizConfig {
        self.config
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.bank.len()
    }
}
