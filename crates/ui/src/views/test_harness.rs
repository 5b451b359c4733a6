use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::time::fixed_clock;
use quiz_core::{QuestionBank, QuizConfig};
use services::{QuizService, ScoreboardService};
use storage::repository::{InMemoryRepository, ScoreRepository};

use crate::context::{UiApp, build_app_context};
use crate::views::quiz::QuizTestHandles;
use crate::views::{HomeView, InstructionsView, QuizView, ScoreboardView};

#[derive(Clone)]
struct TestApp {
    quiz: Arc<QuizService>,
    scoreboard: Arc<ScoreboardService>,
}

impl UiApp for TestApp {
    fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    fn scoreboard(&self) -> Arc<ScoreboardService> {
        Arc::clone(&self.scoreboard)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Instructions,
    Quiz,
    Scoreboard,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    quiz_handles: Option<QuizTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    if let Some(handles) = props.quiz_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
    #[route("/scoreboard", ScoreboardView)]
    Scoreboard {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Instructions => rsx! { InstructionsView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Scoreboard => rsx! { ScoreboardView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub repo: Arc<dyn ScoreRepository>,
    pub scoreboard: Arc<ScoreboardService>,
    pub quiz_handles: Option<QuizTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Move the paused tokio clock forward, then let woken tasks run.
    pub async fn advance_time(&mut self, by: std::time::Duration) {
        tokio::time::advance(by).await;
        self.settle();
    }

    /// Drain queued work a few times so chained memo and resource updates land.
    pub fn settle(&mut self) {
        for _ in 0..3 {
            drive_dom(&mut self.dom);
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Run `f` with this dom's runtime entered, as event handlers would.
    pub fn in_runtime<O>(&self, f: impl FnOnce() -> O) -> O {
        self.dom.in_runtime(f)
    }

    pub fn quiz(&self) -> &QuizTestHandles {
        self.quiz_handles.as_ref().expect("quiz handles for quiz view")
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with(view, Arc::new(InMemoryRepository::new()), QuizConfig::default())
}

pub fn setup_view_harness_with(
    view: ViewKind,
    repo: Arc<dyn ScoreRepository>,
    config: QuizConfig,
) -> ViewHarness {
    let bank = Arc::new(QuestionBank::general_knowledge().expect("bundled bank"));
    let quiz = Arc::new(QuizService::new(bank, config));
    let scoreboard = Arc::new(ScoreboardService::new(fixed_clock(), Arc::clone(&repo)));

    let quiz_handles = match view {
        ViewKind::Quiz => Some(QuizTestHandles::default()),
        _ => None,
    };

    let app = Arc::new(TestApp {
        quiz,
        scoreboard: Arc::clone(&scoreboard),
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            quiz_handles: quiz_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        repo,
        scoreboard,
        quiz_handles,
    }
}
