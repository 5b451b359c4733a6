use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::config::{DEFAULT_HIGH_SCORE, DEFAULT_QUESTION_TIME_LIMIT_SECS};
use quiz_core::{ConfigError, HighScoreThreshold, QuestionBank, QuizConfig};
use services::{AppServices, Clock, QuizService, ScoreboardService};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidTimeLimit { raw: String },
    InvalidHighScore { raw: String },
    InvalidDataDir { raw: String },
    InvalidConfig(ConfigError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidTimeLimit { raw } => {
                write!(f, "invalid --time-limit value (expected seconds > 0): {raw}")
            }
            ArgsError::InvalidHighScore { raw } => {
                write!(f, "invalid --high-score value (expected n or n/d): {raw}")
            }
            ArgsError::InvalidDataDir { raw } => write!(f, "invalid --data-dir value: {raw}"),
            ArgsError::InvalidConfig(err) => write!(f, "invalid configuration: {err}"),
        }
    }
}

impl std::error::Error for ArgsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArgsError::InvalidConfig(err) => Some(err),
            _ => None,
        }
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_time_limit(raw: String) -> Result<u32, ArgsError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|secs| *secs > 0)
        .ok_or(ArgsError::InvalidTimeLimit { raw })
}

fn parse_high_score(raw: String) -> Result<HighScoreThreshold, ArgsError> {
    raw.trim()
        .parse::<HighScoreThreshold>()
        .map_err(|_| ArgsError::InvalidHighScore { raw })
}

fn parse_data_dir(raw: String) -> Result<PathBuf, ArgsError> {
    if raw.trim().is_empty() {
        return Err(ArgsError::InvalidDataDir { raw });
    }
    Ok(PathBuf::from(raw))
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn quiz(&self) -> Arc<QuizService> {
        self.services.quiz()
    }

    fn scoreboard(&self) -> Arc<ScoreboardService> {
        self.services.scoreboard()
    }
}

#[derive(Debug)]
struct Args {
    time_limit_secs: u32,
    high_score: HighScoreThreshold,
    data_dir: PathBuf,
    questions: Option<PathBuf>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --time-limit <secs>       Seconds per question (default: 10)");
    eprintln!("  --high-score <n or n/d>   Score that triggers the celebration (default: 13)");
    eprintln!("  --data-dir <path>         Scoreboard directory (default: quiz-data)");
    eprintln!("  --questions <file.json>   Question bank to use instead of the built-in one");
    eprintln!("  -h, --help                Show this help");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_TIME_LIMIT_SECS, QUIZ_HIGH_SCORE, QUIZ_DATA_DIR, QUIZ_QUESTIONS, RUST_LOG");
}

impl Args {
    /// Environment first, then flags on top.
    fn parse(
        env: impl Fn(&str) -> Option<String>,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Self, ArgsError> {
        let mut time_limit_secs = env("QUIZ_TIME_LIMIT_SECS")
            .map(parse_time_limit)
            .transpose()?
            .unwrap_or(DEFAULT_QUESTION_TIME_LIMIT_SECS);
        let mut high_score = env("QUIZ_HIGH_SCORE")
            .map(parse_high_score)
            .transpose()?
            .unwrap_or(HighScoreThreshold::Absolute(DEFAULT_HIGH_SCORE));
        let mut data_dir = env("QUIZ_DATA_DIR")
            .map(parse_data_dir)
            .transpose()?
            .unwrap_or_else(|| PathBuf::from("quiz-data"));
        let mut questions = env("QUIZ_QUESTIONS")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--time-limit" => {
                    time_limit_secs = parse_time_limit(require_value(args, "--time-limit")?)?;
                }
                "--high-score" => {
                    high_score = parse_high_score(require_value(args, "--high-score")?)?;
                }
                "--data-dir" => {
                    data_dir = parse_data_dir(require_value(args, "--data-dir")?)?;
                }
                "--questions" => {
                    questions = Some(PathBuf::from(require_value(args, "--questions")?));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            time_limit_secs,
            high_score,
            data_dir,
            questions,
        })
    }

    fn config(&self) -> Result<QuizConfig, ArgsError> {
        QuizConfig::new(self.time_limit_secs, self.high_score).map_err(ArgsError::InvalidConfig)
    }
}

fn load_bank(path: Option<&Path>) -> Result<QuestionBank, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(QuestionBank::general_knowledge()?);
    };
    let raw = std::fs::read_to_string(path)
        .map_err(|err| format!("could not read {}: {err}", path.display()))?;
    let bank = QuestionBank::from_json(&raw)
        .map_err(|err| format!("invalid question bank {}: {err}", path.display()))?;
    log::info!("loaded {} questions from {}", bank.len(), path.display());
    Ok(bank)
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(|key| std::env::var(key).ok(), &mut argv)?;
    let config = args.config()?;
    let bank = load_bank(args.questions.as_deref())?;

    let services =
        AppServices::new_json_dir(&args.data_dir, Clock::system(), config, bank).await?;
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Trivia Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();
    if let Err(err) = run().await {
        eprintln!("{err}");
        if wants_usage(err.as_ref()) {
            print_usage();
        }
        std::process::exit(2);
    }
}

/// Argument mistakes get the usage text after the message.
fn wants_usage(err: &(dyn std::error::Error + 'static)) -> bool {
    err.is::<ArgsError>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn parse(env: &[(&str, &str)], argv: &[&str]) -> Result<Args, ArgsError> {
        let env: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        let mut argv = argv.iter().map(|arg| (*arg).to_string());
        Args::parse(|key| env.get(key).cloned(), &mut argv)
    }

    #[test]
    fn defaults_without_env_or_flags() {
        let args = parse(&[], &[]).unwrap();
        assert_eq!(args.time_limit_secs, 10);
        assert_eq!(args.high_score, HighScoreThreshold::Absolute(13));
        assert_eq!(args.data_dir, PathBuf::from("quiz-data"));
        assert!(args.questions.is_none());
    }

    #[test]
    fn flags_override_env() {
        let args = parse(
            &[("QUIZ_TIME_LIMIT_SECS", "30"), ("QUIZ_HIGH_SCORE", "5")],
            &["--time-limit", "15", "--high-score", "13/15"],
        )
        .unwrap();
        assert_eq!(args.time_limit_secs, 15);
        assert_eq!(
            args.high_score,
            HighScoreThreshold::Fraction {
                numerator: 13,
                denominator: 15
            }
        );
    }

    #[test]
    fn env_applies_without_flags() {
        let args = parse(
            &[("QUIZ_DATA_DIR", "/tmp/scores"), ("QUIZ_QUESTIONS", "bank.json")],
            &[],
        )
        .unwrap();
        assert_eq!(args.data_dir, PathBuf::from("/tmp/scores"));
        assert_eq!(args.questions, Some(PathBuf::from("bank.json")));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            parse(&[], &["--time-limit", "0"]),
            Err(ArgsError::InvalidTimeLimit { .. })
        ));
        assert!(matches!(
            parse(&[("QUIZ_HIGH_SCORE", "lots")], &[]),
            Err(ArgsError::InvalidHighScore { .. })
        ));
        assert!(matches!(
            parse(&[], &["--data-dir"]),
            Err(ArgsError::MissingValue { flag: "--data-dir" })
        ));
        assert!(matches!(
            parse(&[], &["--verbose"]),
            Err(ArgsError::UnknownArg(_))
        ));
    }

    #[test]
    fn fraction_above_one_is_rejected() {
        assert!(matches!(
            parse(&[], &["--high-score", "16/15"]),
            Err(ArgsError::InvalidHighScore { .. })
        ));
        let args = parse(&[], &["--high-score", "15/15"]).unwrap();
        assert!(args.config().is_ok());
    }

    #[test]
    fn only_argument_errors_ask_for_usage() {
        let err: Box<dyn std::error::Error> = parse(&[], &["--verbose"]).unwrap_err().into();
        assert!(wants_usage(err.as_ref()));

        let err: Box<dyn std::error::Error> = "could not read bank.json".into();
        assert!(!wants_usage(err.as_ref()));
    }
}
