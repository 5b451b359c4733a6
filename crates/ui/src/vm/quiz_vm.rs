use quiz_core::model::{Advance, AdvanceReason, QuizPhase, QuizSession};

/// Seconds left at which the timer is drawn as urgent.
pub const TIMER_URGENT_SECS: u32 = 3;

const KEY_HINTS: [&str; 4] = ["1", "2", "3", "4"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Start,
    Select(usize),
    Next,
    Tick,
    Abandon,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub label: String,
    pub key_hint: &'static str,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCardVm {
    /// Numbered prompt, e.g. `3. Who wrote Hamlet?`.
    pub heading: String,
    pub options: Vec<OptionVm>,
    pub can_advance: bool,
    pub progress_percent: u32,
    pub progress_label: String,
    pub time_left_secs: u32,
    pub timer_urgent: bool,
    /// Set when the previous question ran out of time.
    pub timed_out_notice: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizResultVm {
    pub summary: String,
    pub correct: u32,
    pub wrong: u32,
    pub total: u32,
    pub celebrate: bool,
}

/// UI wrapper around a `QuizSession`.
///
/// All state changes go through `apply`, so the view and the test handles
/// drive the session the same way.
#[derive(Clone, Debug)]
pub struct QuizVm {
    session: QuizSession,
    last_advance: Option<Advance>,
    question_generation: u64,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self {
            session,
            last_advance: None,
            question_generation: 0,
        }
    }

    /// Apply one intent and return the question it closed, if any.
    pub fn apply(&mut self, intent: QuizIntent) -> Option<Advance> {
        let advance = match intent {
            QuizIntent::Start => {
                self.session.start();
                self.last_advance = None;
                self.question_generation += 1;
                None
            }
            QuizIntent::Select(index) => {
                self.session.select_option(index);
                None
            }
            QuizIntent::Next => self.session.advance(AdvanceReason::Manual),
            QuizIntent::Tick => self.session.tick(),
            QuizIntent::Abandon => {
                self.session.abandon();
                self.last_advance = None;
                self.question_generation += 1;
                None
            }
        };

        if let Some(advance) = advance {
            log::debug!(
                "question {} closed ({:?}, {:?})",
                advance.question_index + 1,
                advance.reason,
                advance.verdict
            );
            self.last_advance = Some(advance);
            self.question_generation += 1;
            if let Some(result) = self.session.result() {
                log::info!("quiz completed: {}/{}", result.correct, result.total);
            }
        }
        advance
    }

    /// Bumped every time a question begins or the quiz stops.
    ///
    /// The view restarts its one-second heartbeat when this changes, so each
    /// question's countdown is measured from the moment it appeared.
    #[must_use]
    pub fn question_generation(&self) -> u64 {
        self.question_generation
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.session.phase()
    }

    #[must_use]
    pub fn is_timer_running(&self) -> bool {
        self.session.is_timer_running()
    }

    #[must_use]
    pub fn question_card(&self) -> Option<QuestionCardVm> {
        let question = self.session.current_question()?;
        let index = self.session.current_index();
        let selected = self.session.selected_option();
        let time_left_secs = self.session.time_left_secs();

        let options = question
            .options()
            .iter()
            .enumerate()
            .map(|(i, label)| OptionVm {
                index: i,
                label: label.clone(),
                key_hint: KEY_HINTS.get(i).copied().unwrap_or(""),
                selected: selected == Some(i),
            })
            .collect();

        let timed_out_notice = self
            .last_advance
            .filter(|advance| advance.reason == AdvanceReason::Timeout)
            .map(|_| "Time's up! That one counted as wrong.");

        Some(QuestionCardVm {
            heading: format!("{}. {}", index + 1, question.text()),
            options,
            can_advance: selected.is_some(),
            progress_percent: self.session.progress_percent(),
            progress_label: format!(
                "Question {} of {}",
                index + 1,
                self.session.total_questions()
            ),
            time_left_secs,
            timer_urgent: time_left_secs <= TIMER_URGENT_SECS,
            timed_out_notice,
        })
    }

    #[must_use]
    pub fn result(&self) -> Option<QuizResultVm> {
        let result = self.session.result()?;
        Some(QuizResultVm {
            summary: format!(
                "You scored {} out of {}. Correct: {}, Wrong: {}",
                result.correct, result.total, result.correct, result.wrong
            ),
            correct: result.correct,
            wrong: result.wrong,
            total: result.total,
            celebrate: result.celebrate,
        })
    }
}

/// Maps the number keys `1`..`4` to option indices.
#[must_use]
pub fn option_index_for_key(key: &str) -> Option<usize> {
    KEY_HINTS.iter().position(|hint| *hint == key)
}
