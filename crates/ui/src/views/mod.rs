mod home;
mod instructions;
mod quiz;
mod scoreboard;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use instructions::InstructionsView;
pub use quiz::QuizView;
pub use scoreboard::ScoreboardView;
pub use state::{ViewError, ViewState, view_state_from_resource};
