use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use quiz_core::model::{PlayerName, QuizPhase};
use services::ScoreboardError;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::{
    QuestionCardVm, QuizIntent, QuizResultVm, QuizVm, confetti_particles, option_index_for_key,
};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

const HEARTBEAT: Duration = Duration::from_secs(1);
const CONFETTI_PIECES: usize = 120;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SaveState {
    Idle,
    Saving,
    Failed(ViewError),
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let quiz = ctx.quiz();
    let scoreboard = ctx.scoreboard();

    let vm = use_signal(move || {
        let mut vm = QuizVm::new(quiz.new_session());
        vm.apply(QuizIntent::Start);
        vm
    });
    let mut name = use_signal(String::new);
    let name_error = use_signal(|| None::<String>);
    let save_state = use_signal(|| SaveState::Idle);

    // One heartbeat per question: a new generation cancels the old loop and
    // starts a fresh one, so the first second of a question is a full second.
    let generation = use_memo(move || vm.read().question_generation());
    let _heartbeat = use_resource(move || {
        let generation = generation();
        async move {
            let mut vm = vm;
            loop {
                tokio::time::sleep(HEARTBEAT).await;
                let stale = {
                    let current = vm.peek();
                    current.question_generation() != generation || !current.is_timer_running()
                };
                if stale {
                    break;
                }
                vm.write().apply(QuizIntent::Tick);
            }
        }
    });

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        let mut name = name;
        let mut name_error = name_error;
        let mut save_state = save_state;

        vm.write().apply(intent);
        if intent == QuizIntent::Start {
            name.set(String::new());
            name_error.set(None);
            save_state.set(SaveState::Idle);
        }
    });

    let save_score = use_callback(move |()| {
        let mut name_error = name_error;
        let mut save_state = save_state;
        if save_state() == SaveState::Saving {
            return;
        }

        let raw = name.peek().clone();
        if let Err(err) = PlayerName::parse(&raw) {
            name_error.set(Some(err.to_string()));
            return;
        }
        name_error.set(None);
        save_state.set(SaveState::Saving);

        let session = vm.peek().session().clone();
        let scoreboard = scoreboard.clone();
        spawn(async move {
            match scoreboard.record_result(&raw, &session).await {
                Ok(_) => {
                    save_state.set(SaveState::Idle);
                    navigator.push(Route::Scoreboard {});
                }
                Err(ScoreboardError::InvalidName(err)) => {
                    save_state.set(SaveState::Idle);
                    name_error.set(Some(err.to_string()));
                }
                Err(err) => {
                    log::warn!("score not saved: {err}");
                    save_state.set(SaveState::Failed(ViewError::SaveFailed));
                }
            }
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, save_score, vm, name);
            }
        }
    }

    let on_key = move |evt: KeyboardEvent| {
        if vm.peek().phase() != QuizPhase::InProgress {
            return;
        }
        match evt.data.key() {
            Key::Character(value) => {
                if let Some(index) = option_index_for_key(&value) {
                    evt.prevent_default();
                    dispatch_intent.call(QuizIntent::Select(index));
                }
            }
            Key::Enter => {
                if vm.peek().session().selected_option().is_some() {
                    evt.prevent_default();
                    dispatch_intent.call(QuizIntent::Next);
                }
            }
            _ => {}
        }
    };

    let phase = vm.read().phase();
    let card = vm.read().question_card();
    let result = vm.read().result();
    let saving = save_state() == SaveState::Saving;
    let save_notice = match save_state() {
        SaveState::Failed(err) => Some(err.message()),
        SaveState::Idle | SaveState::Saving => None,
    };

    rsx! {
        div {
            class: "page quiz-page",
            id: "quiz-root",
            tabindex: "0",
            onkeydown: on_key,
            onmounted: move |evt| async move {
                let _ = evt.set_focus(true).await;
            },
            match (phase, card, result) {
                (QuizPhase::InProgress, Some(card), _) => rsx! {
                    QuestionCard { card, on_intent: dispatch_intent }
                    div { class: "actions",
                        button {
                            class: "btn btn-link",
                            id: "quit-btn",
                            onclick: move |_| {
                                dispatch_intent.call(QuizIntent::Abandon);
                                navigator.push(Route::Home {});
                            },
                            "Quit"
                        }
                    }
                },
                (QuizPhase::Completed, _, Some(result)) => rsx! {
                    ResultPanel { result }
                    form {
                        class: "name-form",
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                            save_score.call(());
                        },
                        label { r#for: "name-input", "Your name" }
                        input {
                            id: "name-input",
                            r#type: "text",
                            maxlength: "40",
                            placeholder: "At least 2 characters",
                            value: "{name}",
                            oninput: move |evt: FormEvent| name.set(evt.value()),
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: saving,
                            if saving { "Saving..." } else { "Save Score" }
                        }
                    }
                    if let Some(message) = name_error() {
                        p { class: "field-error", role: "alert", "{message}" }
                    }
                    if let Some(message) = save_notice {
                        div { class: "notice notice-warning", role: "status", "{message}" }
                    }
                    div { class: "actions",
                        button {
                            class: "btn btn-secondary",
                            id: "retry-btn",
                            onclick: move |_| dispatch_intent.call(QuizIntent::Start),
                            "Play Again"
                        }
                        Link { class: "btn btn-secondary", to: Route::Scoreboard {}, "View Scoreboard" }
                    }
                },
                _ => rsx! {
                    p { class: "muted", "The quiz has not started." }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| dispatch_intent.call(QuizIntent::Start),
                        "Start Quiz"
                    }
                },
            }
        }
    }
}

#[component]
fn QuestionCard(card: QuestionCardVm, on_intent: Callback<QuizIntent>) -> Element {
    let timer_class = if card.timer_urgent {
        "timer timer-urgent"
    } else {
        "timer"
    };
    let time_left = card.time_left_secs;
    let progress_width = format!("width: {}%;", card.progress_percent);

    rsx! {
        div { class: "quiz-header",
            span { class: "progress-label", "{card.progress_label}" }
            div { class: timer_class,
                span { class: "timer-label", "Time left" }
                span { id: "timer-value", "{time_left}" }
            }
        }
        div { class: "progress",
            div { class: "progress-bar", style: progress_width }
        }
        if let Some(notice) = card.timed_out_notice {
            p { class: "notice notice-info", "{notice}" }
        }
        h3 { id: "question-text", "{card.heading}" }
        div { class: "options", role: "listbox",
            for option in card.options.iter().cloned() {
                button {
                    key: "{option.index}",
                    class: if option.selected { "option selected" } else { "option" },
                    role: "option",
                    aria_selected: option.selected,
                    onclick: move |_| on_intent.call(QuizIntent::Select(option.index)),
                    span { class: "key-hint", "{option.key_hint}" }
                    span { class: "option-label", "{option.label}" }
                }
            }
        }
        div { class: "actions",
            button {
                class: "btn btn-primary",
                id: "next-btn",
                disabled: !card.can_advance,
                onclick: move |_| on_intent.call(QuizIntent::Next),
                "Next"
            }
        }
    }
}

#[component]
fn ResultPanel(result: QuizResultVm) -> Element {
    rsx! {
        div { class: "result",
            if result.celebrate {
                Confetti {}
                h2 { "Great job!" }
            } else {
                h2 { "Quiz complete" }
            }
            p { id: "result-summary", "{result.summary}" }
        }
    }
}

#[component]
fn Confetti() -> Element {
    let particles = use_hook(|| confetti_particles(CONFETTI_PIECES, &mut rand::rng()));

    rsx! {
        div { class: "confetti", aria_hidden: "true",
            for (i, particle) in particles.iter().enumerate() {
                span { key: "{i}", class: "confetti-piece", style: particle.style() }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    save: Rc<RefCell<Option<Callback<()>>>>,
    vm: Rc<RefCell<Option<Signal<QuizVm>>>>,
    name: Rc<RefCell<Option<Signal<String>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<QuizIntent>,
        save: Callback<()>,
        vm: Signal<QuizVm>,
        name: Signal<String>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.save.borrow_mut() = Some(save);
        *self.vm.borrow_mut() = Some(vm);
        *self.name.borrow_mut() = Some(name);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn save(&self) -> Callback<()> {
        (*self.save.borrow()).expect("quiz save registered")
    }

    pub(crate) fn vm(&self) -> Signal<QuizVm> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }

    pub(crate) fn name(&self) -> Signal<String> {
        (*self.name.borrow()).expect("quiz name registered")
    }
}
