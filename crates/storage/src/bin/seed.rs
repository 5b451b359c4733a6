use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};
use quiz_core::model::{PlayerName, ScoreEntry};
use storage::repository::{Storage, StorageKey};

#[derive(Debug, Clone)]
struct Args {
    data_dir: PathBuf,
    entries: u32,
    total: u32,
    now: Option<DateTime<Utc>>,
}

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidEntries { raw: String },
    InvalidTotal { raw: String },
    InvalidDataDir { raw: String },
    InvalidNow { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidEntries { raw } => write!(f, "invalid --entries value: {raw}"),
            ArgsError::InvalidTotal { raw } => write!(f, "invalid --total value: {raw}"),
            ArgsError::InvalidDataDir { raw } => write!(f, "invalid --data-dir value: {raw}"),
            ArgsError::InvalidNow { raw } => {
                write!(f, "invalid --now value (expected RFC3339): {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

impl Args {
    fn parse() -> Result<Self, ArgsError> {
        let mut data_dir = std::env::var("QUIZ_DATA_DIR")
            .map_or_else(|_| PathBuf::from("quiz-data"), PathBuf::from);
        let mut entries = std::env::var("QUIZ_SEED_ENTRIES")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(5);
        let mut total = 15;
        let mut now: Option<DateTime<Utc>> = None;

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--data-dir" => {
                    let value = require_value(&mut args, "--data-dir")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDataDir { raw: value });
                    }
                    data_dir = PathBuf::from(value);
                }
                "--entries" => {
                    let value = require_value(&mut args, "--entries")?;
                    entries = value
                        .parse::<u32>()
                        .map_err(|_| ArgsError::InvalidEntries { raw: value.clone() })?;
                }
                "--total" => {
                    let value = require_value(&mut args, "--total")?;
                    total = value
                        .parse::<u32>()
                        .ok()
                        .filter(|t| *t > 0)
                        .ok_or_else(|| ArgsError::InvalidTotal { raw: value.clone() })?;
                }
                "--now" => {
                    let value = require_value(&mut args, "--now")?;
                    let parsed = DateTime::parse_from_rfc3339(&value)
                        .map_err(|_| ArgsError::InvalidNow { raw: value.clone() })?
                        .with_timezone(&Utc);
                    now = Some(parsed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            data_dir,
            entries,
            total,
            now,
        })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p storage --bin seed -- [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --data-dir <path>         Scoreboard directory (default: quiz-data)");
    eprintln!("  --entries <n>             Number of scoreboard entries to append (default: 5)");
    eprintln!("  --total <n>               Questions per seeded quiz (default: 15)");
    eprintln!("  --now <rfc3339>           Fixed current time for deterministic seeding");
    eprintln!("  -h, --help                Show this help");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_DATA_DIR, QUIZ_SEED_ENTRIES");
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse().map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let storage = Storage::json_dir(&args.data_dir).await?;
    let now = args.now.unwrap_or_else(Utc::now);

    let names = ["Ada", "Grace", "Linus", "Ken", "Barbara"];
    for i in 0..args.entries {
        let idx = (i as usize) % names.len();
        let name = PlayerName::parse(names[idx])?;
        let score = (args.total.saturating_sub(i * 2)) % (args.total + 1);
        let recorded_at = now - Duration::hours(i64::from(i));
        let entry = ScoreEntry::new(name, score, args.total, recorded_at);
        storage
            .scores
            .append_entry(StorageKey::Scoreboard, &entry)
            .await?;
        storage
            .scores
            .append_entry(StorageKey::AttendeeLog, &entry)
            .await?;
    }

    println!(
        "Seeded {} scoreboard entries into {}",
        args.entries,
        args.data_dir.display()
    );

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
