mod ids;
mod question;
mod score;
mod session;

pub use ids::QuestionId;
pub use question::{OPTION_COUNT, Question, QuestionError};
pub use score::{MIN_NAME_CHARS, NameError, PlayerName, ScoreEntry};
pub use session::{
    Advance, AdvanceReason, NextStep, QuizPhase, QuizResult, QuizSession, Verdict,
};
