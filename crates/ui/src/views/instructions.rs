use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use quiz_core::HighScoreThreshold;

use crate::context::AppContext;
use crate::routes::Route;

fn threshold_rule(threshold: HighScoreThreshold, total: usize) -> String {
    match threshold {
        HighScoreThreshold::Absolute(min) => {
            format!("Get {min} or more right and we'll celebrate.")
        }
        HighScoreThreshold::Fraction { .. } => {
            format!("Get {threshold} of the {total} questions right and we'll celebrate.")
        }
    }
}

#[component]
pub fn InstructionsView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let quiz = ctx.quiz();
    let total = quiz.total_questions();
    let config = quiz.config();
    let secs = config.question_time_limit_secs();
    let celebrate_rule = threshold_rule(config.high_score(), total);

    rsx! {
        div { class: "page instructions-page",
            h2 { "How it works" }
            ul { class: "rules",
                li { "There are {total} multiple-choice questions." }
                li { "You have {secs} seconds for each question." }
                li { "If the time runs out, the question counts as wrong and the next one appears." }
                li { "Press 1 to 4 to pick an answer and Enter to continue." }
                li { "{celebrate_rule}" }
            }
            div { class: "actions",
                button {
                    class: "btn btn-primary",
                    id: "begin-btn",
                    onclick: move |_| {
                        navigator.push(Route::Quiz {});
                    },
                    "Begin"
                }
                Link { class: "btn btn-secondary", to: Route::Home {}, "Back" }
            }
        }
    }
}
