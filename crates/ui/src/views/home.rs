use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let total = ctx.quiz().total_questions();

    rsx! {
        div { class: "page home-page",
            h2 { "General Knowledge" }
            p { class: "muted", "{total} questions. How many can you get right?" }
            div { class: "actions",
                button {
                    class: "btn btn-primary",
                    id: "start-btn",
                    onclick: move |_| {
                        navigator.push(Route::Instructions {});
                    },
                    "Start Quiz"
                }
                Link { class: "btn btn-secondary", to: Route::Scoreboard {}, "View Scoreboard" }
            }
        }
    }
}
