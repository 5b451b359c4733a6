#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod quiz_service;
pub mod scoreboard_service;

pub use quiz_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, ScoreboardError};
pub use quiz_service::QuizService;
pub use scoreboard_service::ScoreboardService;
