use std::sync::Arc;

use crate::bank::QuestionBank;
use crate::config::QuizConfig;
use crate::model::Question;
use crate::timer::{Countdown, Tick};

//
// ─── PHASES & OUTCOMES ─────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Idle,
    InProgress,
    Completed,
}

/// Why the current question was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceReason {
    Manual,
    Timeout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Wrong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    Question(usize),
    Completed,
}

/// Record of one closed question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    pub question_index: usize,
    pub reason: AdvanceReason,
    pub verdict: Verdict,
    pub next: NextStep,
}

/// Final tally of a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub correct: u32,
    pub wrong: u32,
    pub total: u32,
    /// The score reached the configured high-score threshold.
    pub celebrate: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One run through a question bank.
///
/// Owns its countdown, so at most one timer is ever live per session. Every
/// path that closes a question cancels the countdown before the next one is
/// armed.
#[derive(Debug, Clone)]
pub struct QuizSession {
    bank: Arc<QuestionBank>,
    config: QuizConfig,
    phase: QuizPhase,
    current: usize,
    selected: Option<usize>,
    correct: u32,
    wrong: u32,
    countdown: Countdown,
}

impl QuizSession {
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>, config: QuizConfig) -> Self {
        Self {
            bank,
            countdown: Countdown::new(config.question_time_limit_secs()),
            config,
            phase: QuizPhase::Idle,
            current: 0,
            selected: None,
            correct: 0,
            wrong: 0,
        }
    }

    /// Reset counters and begin at the first question. Valid from any phase.
    pub fn start(&mut self) {
        self.reset_counters();
        self.phase = QuizPhase::InProgress;
        self.countdown.start();
    }

    /// Leave the session, e.g. when the user navigates away.
    pub fn abandon(&mut self) {
        self.reset_counters();
        self.phase = QuizPhase::Idle;
    }

    /// Record a selection for the current question.
    ///
    /// Ignored unless the session is in progress and `index` is a valid
    /// option. Returns whether the selection was taken. The timer keeps
    /// running.
    pub fn select_option(&mut self, index: usize) -> bool {
        if self.phase != QuizPhase::InProgress {
            return false;
        }
        match self.current_question() {
            Some(question) if question.has_option(index) => {
                self.selected = Some(index);
                true
            }
            _ => false,
        }
    }

    /// Score the current question and move on.
    ///
    /// No selection counts as wrong, whatever the reason. Returns `None` when
    /// the session is not in progress.
    pub fn advance(&mut self, reason: AdvanceReason) -> Option<Advance> {
        if self.phase != QuizPhase::InProgress {
            return None;
        }
        self.countdown.cancel();

        let question_index = self.current;
        let verdict = match self.current_question() {
            Some(question) if question.is_correct(self.selected) => Verdict::Correct,
            _ => Verdict::Wrong,
        };
        match verdict {
            Verdict::Correct => self.correct += 1,
            Verdict::Wrong => self.wrong += 1,
        }

        self.current += 1;
        self.selected = None;
        let next = if self.current < self.bank.len() {
            self.countdown.start();
            NextStep::Question(self.current)
        } else {
            self.phase = QuizPhase::Completed;
            NextStep::Completed
        };

        Some(Advance {
            question_index,
            reason,
            verdict,
            next,
        })
    }

    /// One-second heartbeat. On expiry, closes the question as a timeout.
    pub fn tick(&mut self) -> Option<Advance> {
        if self.phase != QuizPhase::InProgress {
            return None;
        }
        match self.countdown.tick() {
            Tick::Expired => self.advance(AdvanceReason::Timeout),
            Tick::Idle | Tick::Running(_) => None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            QuizPhase::InProgress => self.bank.get(self.current),
            QuizPhase::Idle | QuizPhase::Completed => None,
        }
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn wrong_count(&self) -> u32 {
        self.wrong
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.bank.len()
    }

    #[must_use]
    pub fn time_left_secs(&self) -> u32 {
        self.countdown.remaining_secs()
    }

    #[must_use]
    pub fn is_timer_running(&self) -> bool {
        self.countdown.is_running()
    }

    /// Share of questions already closed, rounded to a whole percent.
    #[must_use]
    pub fn progress_percent(&self) -> u32 {
        let total = self.bank.len();
        if total == 0 {
            return 0;
        }
        let pct = (self.current * 100 + total / 2) / total;
        u32::try_from(pct).unwrap_or(100)
    }

    #[must_use]
    pub fn result(&self) -> Option<QuizResult> {
        if self.phase != QuizPhase::Completed {
            return None;
        }
        let total = u32::try_from(self.bank.len()).unwrap_or(u32::MAX);
        Some(QuizResult {
            correct: self.correct,
            wrong: self.wrong,
            total,
            celebrate: self.config.high_score().is_met(self.correct, total),
        })
    }

    fn reset_counters(&mut self) {
        self.current = 0;
        self.selected = None;
        self.correct = 0;
        self.wrong = 0;
        self.countdown.reset();
    }
}
