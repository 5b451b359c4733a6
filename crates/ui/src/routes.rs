use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{HomeView, InstructionsView, QuizView, ScoreboardView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/instructions", InstructionsView)] Instructions {},
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/scoreboard", ScoreboardView)] Scoreboard {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                h1 { "Trivia Quiz" }
                nav {
                    Link { to: Route::Home {}, "Home" }
                    Link { to: Route::Scoreboard {}, "Scoreboard" }
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
