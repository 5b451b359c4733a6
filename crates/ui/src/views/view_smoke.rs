use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::Duration;
use dioxus::prelude::{ReadableExt, WritableExt};
use quiz_core::model::{PlayerName, QuizPhase, ScoreEntry};
use quiz_core::time::fixed_now;
use quiz_core::{HighScoreThreshold, QuizConfig};
use storage::repository::{ScoreRepository, StorageError, StorageKey};

use super::test_harness::{ViewHarness, ViewKind, setup_view_harness, setup_view_harness_with};
use crate::vm::QuizIntent;

fn entry(name: &str, score: u32, minutes: i64) -> ScoreEntry {
    ScoreEntry::new(
        PlayerName::parse(name).unwrap(),
        score,
        15,
        fixed_now() + Duration::minutes(minutes),
    )
}

fn dispatch(harness: &mut ViewHarness, intent: QuizIntent) {
    let dispatch = harness.quiz().dispatch();
    harness.in_runtime(|| dispatch.call(intent));
    super::test_harness::drive_dom(&mut harness.dom);
}

/// Answers every remaining question, the first `correct` of them correctly.
fn finish_quiz(harness: &mut ViewHarness, correct: usize) {
    let vm = harness.quiz().vm();
    let mut answered = 0;
    while harness.in_runtime(|| vm.peek().phase()) == QuizPhase::InProgress {
        let (answer, options) = harness.in_runtime(|| {
            let guard = vm.peek();
            let question = guard.session().current_question().unwrap();
            (question.correct_option_index(), question.options().len())
        });
        let pick = if answered < correct {
            answer
        } else {
            (answer + 1) % options
        };
        dispatch(harness, QuizIntent::Select(pick));
        dispatch(harness, QuizIntent::Next);
        answered += 1;
    }
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_start() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("15 questions"), "missing count in {html}");
    assert!(html.contains("Start Quiz"), "missing start in {html}");
    assert!(html.contains("View Scoreboard"), "missing scoreboard link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn instructions_view_smoke_uses_config() {
    let config = QuizConfig::new(20, HighScoreThreshold::Absolute(8)).unwrap();
    let mut harness = setup_view_harness_with(
        ViewKind::Instructions,
        Arc::new(storage::repository::InMemoryRepository::new()),
        config,
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("You have 20 seconds"), "missing time limit in {html}");
    assert!(html.contains("Get 8 or more right"), "missing threshold in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("1. What is the capital of France?"),
        "missing question in {html}"
    );
    assert!(html.contains("Question 1 of 15"), "missing progress in {html}");
    assert!(html.contains(">10<"), "missing timer in {html}");
    assert!(html.contains("Paris"), "missing option in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_select_and_next_moves_on() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();

    dispatch(&mut harness, QuizIntent::Select(2));
    let html = harness.render();
    assert!(html.contains("option selected"), "missing selection in {html}");

    dispatch(&mut harness, QuizIntent::Next);
    let html = harness.render();
    assert!(
        html.contains("2. Which planet is known as the Red Planet?"),
        "missing second question in {html}"
    );
    let vm = harness.quiz().vm();
    assert_eq!(harness.in_runtime(|| vm.peek().session().correct_count()), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_timeout_advances() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();

    for _ in 0..10 {
        dispatch(&mut harness, QuizIntent::Tick);
    }

    let html = harness.render();
    assert!(html.contains("2. Which planet"), "missing second question in {html}");
    assert!(html.contains("Time&#39;s up") || html.contains("Time's up"), "missing notice in {html}");
    let vm = harness.quiz().vm();
    assert_eq!(harness.in_runtime(|| vm.peek().session().wrong_count()), 1);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn quiz_view_smoke_next_mid_second_restarts_heartbeat() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();
    harness.settle();

    harness.advance_time(StdDuration::from_millis(900)).await;
    dispatch(&mut harness, QuizIntent::Select(0));
    dispatch(&mut harness, QuizIntent::Next);
    harness.settle();

    // The first question's beat would have landed here.
    harness.advance_time(StdDuration::from_millis(200)).await;
    let html = harness.render();
    assert!(html.contains("2. Which planet"), "missing second question in {html}");
    assert!(html.contains(r#"id="timer-value">10<"#), "second lost time in {html}");

    harness.advance_time(StdDuration::from_millis(800)).await;
    let html = harness.render();
    assert!(html.contains(r#"id="timer-value">9<"#), "no tick after a second in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn quiz_view_smoke_heartbeat_counts_down_each_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();
    harness.settle();

    for _ in 0..10 {
        harness.advance_time(StdDuration::from_secs(1)).await;
    }
    let html = harness.render();
    assert!(html.contains("2. Which planet"), "first question did not time out in {html}");
    assert!(html.contains(r#"id="timer-value">10<"#), "second lost time in {html}");

    harness.advance_time(StdDuration::from_secs(1)).await;
    let html = harness.render();
    assert!(html.contains(r#"id="timer-value">9<"#), "no tick on second question in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_high_score_celebrates() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();

    finish_quiz(&mut harness, 15);

    let html = harness.render();
    assert!(
        html.contains("You scored 15 out of 15. Correct: 15, Wrong: 0"),
        "missing summary in {html}"
    );
    assert!(html.contains("confetti-piece"), "missing confetti in {html}");
    assert!(html.contains("Save Score"), "missing name form in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_low_score_has_no_confetti() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();

    finish_quiz(&mut harness, 12);

    let html = harness.render();
    assert!(
        html.contains("You scored 12 out of 15. Correct: 12, Wrong: 3"),
        "missing summary in {html}"
    );
    assert!(!html.contains("confetti-piece"), "unexpected confetti in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_short_name_shows_error() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();
    finish_quiz(&mut harness, 5);

    let mut name = harness.quiz().name();
    let save = harness.quiz().save();
    harness.in_runtime(|| {
        name.set(" A ".to_string());
        save.call(());
    });
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Please enter at least 2 characters"),
        "missing name error in {html}"
    );
    assert!(harness.scoreboard.leaderboard().await.is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_saves_named_score() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();
    finish_quiz(&mut harness, 9);

    let mut name = harness.quiz().name();
    let save = harness.quiz().save();
    harness.in_runtime(|| {
        name.set("  Ada ".to_string());
        save.call(());
    });
    for _ in 0..3 {
        harness.drive_async().await;
    }

    let board = harness.scoreboard.leaderboard().await;
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].entry.name.as_str(), "Ada");
    assert_eq!(board[0].entry.score, 9);
    assert_eq!(board[0].entry.total, 15);
    assert_eq!(harness.scoreboard.attendees().await.len(), 1);
}

struct FailingRepo;

#[async_trait::async_trait]
impl ScoreRepository for FailingRepo {
    async fn load_entries(&self, _key: StorageKey) -> Vec<ScoreEntry> {
        Vec::new()
    }

    async fn append_entry(&self, _key: StorageKey, _entry: &ScoreEntry) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn clear(&self, _key: StorageKey) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_save_failure_shows_notice() {
    let mut harness =
        setup_view_harness_with(ViewKind::Quiz, Arc::new(FailingRepo), QuizConfig::default());
    harness.rebuild();
    finish_quiz(&mut harness, 14);

    let mut name = harness.quiz().name();
    let save = harness.quiz().save();
    harness.in_runtime(|| {
        name.set("Grace".to_string());
        save.call(());
    });
    for _ in 0..3 {
        harness.drive_async().await;
    }

    let html = harness.render();
    assert!(
        html.contains("Your score could not be saved"),
        "missing notice in {html}"
    );
    assert!(html.contains("You scored 14 out of 15"), "result lost in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn scoreboard_view_smoke_renders_empty_message() {
    let mut harness = setup_view_harness(ViewKind::Scoreboard);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("No entries yet. Play a quiz to add your score!"),
        "missing empty message in {html}"
    );
    assert!(!html.contains("Clear Scoreboard"), "unexpected clear in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn scoreboard_view_smoke_renders_ranked_rows() {
    let mut harness = setup_view_harness(ViewKind::Scoreboard);
    for item in [entry("Quinn", 5, 0), entry("Rosa", 9, 1), entry("Sven", 9, 2)] {
        harness
            .repo
            .append_entry(StorageKey::Scoreboard, &item)
            .await
            .expect("append entry");
    }

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    let first = html.find("Rosa").expect("Rosa rendered");
    let second = html.find("Sven").expect("Sven rendered");
    let third = html.find("Quinn").expect("Quinn rendered");
    assert!(first < second && second < third, "wrong order in {html}");
    assert!(html.contains("#1"), "missing rank in {html}");
    assert!(html.contains("9/15"), "missing score in {html}");
    assert!(html.contains("Clear Scoreboard"), "missing clear in {html}");
}
