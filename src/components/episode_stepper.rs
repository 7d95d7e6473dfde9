//! Episode Stepper Component
//!
//! Watched-episode counter with -/+ controls. Mutates through the
//! backend and bumps the reload trigger; the displayed value comes from
//! the next store read, not from a local echo.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::models::WatchEntry;

#[component]
pub fn EpisodeStepper(entry: WatchEntry) -> impl IntoView {
    let ctx = use_app_context();
    let mal_id = entry.id;
    let progress = entry.progress;
    let total = entry.total_episodes;

    let set_progress = move |next: u32| {
        spawn_local(async move {
            if let Err(err) = commands::update_progress(mal_id, next).await {
                web_sys::console::error_1(&err.into());
            }
            ctx.reload();
        });
    };

    let label = match total {
        Some(total) => format!("{} / {}", progress, total),
        None => format!("{}", progress),
    };

    view! {
        <div class="episode-stepper">
            <button
                class="stepper-button"
                disabled=progress == 0
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_progress(progress.saturating_sub(1));
                }
            >
                "−"
            </button>

            <span class="stepper-count">{label}</span>

            <button
                class="stepper-button"
                disabled=total.is_some_and(|t| progress >= t)
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_progress(progress + 1);
                }
            >
                "+"
            </button>
        </div>
    }
}
