#![forbid(unsafe_code)]

pub mod bank;
pub mod config;
pub mod model;
pub mod ranking;
pub mod time;
pub mod timer;

pub use bank::{BankError, QuestionBank};
pub use config::{ConfigError, HighScoreThreshold, QuizConfig};
pub use ranking::{RankedEntry, leaderboard, rank_entries};
pub use time::Clock;
pub use timer::{Countdown, Tick};
