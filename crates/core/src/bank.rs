//! The fixed, read-only question set a quiz runs through.

use std::collections::HashSet;

use thiserror::Error;

use crate::model::{Question, QuestionId};

const GENERAL_KNOWLEDGE_JSON: &str = include_str!("../data/general_knowledge.json");

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankError {
    #[error("question bank is empty")]
    Empty,

    #[error("duplicate question id {0}")]
    DuplicateId(QuestionId),

    #[error("question bank could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Ordered, non-empty list of questions. There is no mutation API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// # Errors
    ///
    /// Returns `BankError::Empty` for an empty list and
    /// `BankError::DuplicateId` if two questions share an id.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }
        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(BankError::DuplicateId(question.id()));
            }
        }
        Ok(Self { questions })
    }

    /// Decode a bank from a JSON array of `{ id, question, options, answerIndex }`.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Decode` for malformed JSON or invalid questions,
    /// and the errors of [`QuestionBank::new`] otherwise.
    pub fn from_json(json: &str) -> Result<Self, BankError> {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        Self::new(questions)
    }

    /// The bundled 15-question general-knowledge set.
    ///
    /// # Errors
    ///
    /// Returns `BankError` only if the bundled file is broken.
    pub fn general_knowledge() -> Result<Self, BankError> {
        Self::from_json(GENERAL_KNOWLEDGE_JSON)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}
