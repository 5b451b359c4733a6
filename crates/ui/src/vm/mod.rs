mod confetti_vm;
mod leaderboard_vm;
mod quiz_vm;
mod time_fmt;

pub use confetti_vm::{CONFETTI_COLORS, ConfettiParticleVm, confetti_particles};
pub use leaderboard_vm::{LeaderboardRowVm, map_leaderboard_rows};
pub use quiz_vm::{
    OptionVm, QuestionCardVm, QuizIntent, QuizResultVm, QuizVm, TIMER_URGENT_SECS,
    option_index_for_key,
};
pub use time_fmt::{format_datetime, format_datetime_in};
