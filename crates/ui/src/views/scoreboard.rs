use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{LeaderboardRowVm, map_leaderboard_rows};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ClearState {
    Idle,
    Confirming,
    Failed,
}

#[component]
pub fn ScoreboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let scoreboard = ctx.scoreboard();
    let mut clear_state = use_signal(|| ClearState::Idle);

    let resource = {
        let scoreboard = scoreboard.clone();
        use_resource(move || {
            let scoreboard = scoreboard.clone();
            async move {
                let rows = scoreboard.leaderboard().await;
                Ok::<_, ViewError>(map_leaderboard_rows(&rows))
            }
        })
    };
    let state = view_state_from_resource(resource);

    let confirm_clear = use_callback(move |()| {
        let scoreboard = scoreboard.clone();
        let mut clear_state = clear_state;
        let mut resource = resource;
        spawn(async move {
            match scoreboard.clear_scoreboard().await {
                Ok(()) => {
                    clear_state.set(ClearState::Idle);
                    resource.restart();
                }
                Err(err) => {
                    log::warn!("scoreboard not cleared: {err}");
                    clear_state.set(ClearState::Failed);
                }
            }
        });
    });

    rsx! {
        div { class: "page scoreboard-page",
            h2 { "Scoreboard" }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "muted", "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "notice notice-warning", "{err.message()}" }
                },
                ViewState::Ready(rows) => rsx! {
                    ScoreboardTable { rows: rows.clone() }
                    if !rows.is_empty() {
                        ClearControls {
                            state: clear_state(),
                            on_request: move |()| clear_state.set(ClearState::Confirming),
                            on_cancel: move |()| clear_state.set(ClearState::Idle),
                            on_confirm: confirm_clear,
                        }
                    }
                },
            }
            div { class: "actions",
                Link { class: "btn btn-primary", to: Route::Instructions {}, "Play" }
                Link { class: "btn btn-secondary", to: Route::Home {}, "Home" }
            }
        }
    }
}

#[component]
fn ScoreboardTable(rows: Vec<LeaderboardRowVm>) -> Element {
    if rows.is_empty() {
        return rsx! {
            p { class: "muted empty", "No entries yet. Play a quiz to add your score!" }
        };
    }

    rsx! {
        ol { class: "scoreboard",
            for row in rows {
                li { key: "{row.rank_label}", class: "scoreboard-row",
                    span { class: "rank", "{row.rank_label}" }
                    span { class: "name", "{row.name}" }
                    span { class: "score", "{row.score_label}" }
                    span { class: "date", "{row.date_label}" }
                }
            }
        }
    }
}

#[component]
fn ClearControls(
    state: ClearState,
    on_request: Callback<()>,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> Element {
    rsx! {
        div { class: "clear-controls",
            match state {
                ClearState::Confirming => rsx! {
                    span { "Remove every entry from the scoreboard?" }
                    button {
                        class: "btn btn-danger",
                        id: "confirm-clear-btn",
                        onclick: move |_| on_confirm.call(()),
                        "Yes, clear"
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                },
                ClearState::Idle | ClearState::Failed => rsx! {
                    if state == ClearState::Failed {
                        p { class: "notice notice-warning", "The scoreboard could not be cleared." }
                    }
                    button {
                        class: "btn btn-secondary",
                        id: "clear-btn",
                        onclick: move |_| on_request.call(()),
                        "Clear Scoreboard"
                    }
                },
            }
        }
    }
}
