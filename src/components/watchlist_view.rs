//! Watchlist Screen
//!
//! Tracked titles with progress stepper, status picker, user rating, and
//! remove. Every mutation bumps the reload trigger and the list re-reads
//! from the backend.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::components::EpisodeStepper;
use crate::context::{use_app_context, Screen};
use crate::models::{WatchEntry, WATCH_STATUSES};
use crate::store::{store_is_liked, store_watchlist, use_app_store};

/// Status dropdown for one entry
#[component]
fn StatusPicker(entry: WatchEntry) -> impl IntoView {
    let ctx = use_app_context();
    let mal_id = entry.id;
    let current = entry.status.clone();

    let on_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
        let chosen = select.value();
        spawn_local(async move {
            if let Err(err) = commands::update_status(mal_id, &chosen).await {
                web_sys::console::error_1(&err.into());
            }
            ctx.reload();
        });
    };

    view! {
        <select class="status-picker" on:change=on_change>
            {WATCH_STATUSES.iter().map(|status| {
                let selected = *status == current;
                view! {
                    <option value=*status selected=selected>{*status}</option>
                }
            }).collect_view()}
        </select>
    }
}

#[component]
pub fn WatchlistView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (ratings, set_ratings) = signal(Vec::<(u32, u8)>::new());

    // Ratings live outside the shared store; fetch them per reload
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            if let Ok(all) = commands::get_ratings().await {
                set_ratings.set(all);
            }
        });
    });

    let remove = move |mal_id: u32| {
        spawn_local(async move {
            if let Err(err) = commands::remove_from_watchlist(mal_id).await {
                web_sys::console::error_1(&err.into());
            }
            ctx.reload();
        });
    };

    let rating_for = move |mal_id: u32| {
        ratings.get().iter().find(|(id, _)| *id == mal_id).map(|(_, value)| *value)
    };

    view! {
        <div class="watchlist-view">
            <h2>"My Watchlist"</h2>

            {move || {
                let entries = store_watchlist(&store);
                if entries.is_empty() {
                    view! { <p class="hint">"Nothing tracked yet."</p> }.into_any()
                } else {
                    view! {
                        <ul class="watchlist">
                            {entries.into_iter().map(|entry| {
                                let mal_id = entry.id;
                                let title = entry.title.clone();
                                let image = entry.image.clone();
                                let liked = store_is_liked(&store, mal_id);
                                view! {
                                    <li class="watchlist-row">
                                        {match image {
                                            Some(url) => view! {
                                                <img
                                                    class="watchlist-thumb"
                                                    src=url
                                                    alt=""
                                                    on:click=move |_| ctx.navigate(Screen::Details(mal_id))
                                                />
                                            }.into_any(),
                                            None => view! { <div class="watchlist-thumb placeholder"></div> }.into_any(),
                                        }}

                                        <div class="watchlist-row-body">
                                            <span
                                                class="watchlist-title"
                                                on:click=move |_| ctx.navigate(Screen::Details(mal_id))
                                            >
                                                {title}
                                                {liked.then(|| view! { <span class="liked-mark">" ♥"</span> })}
                                            </span>

                                            <div class="watchlist-controls">
                                                <EpisodeStepper entry=entry.clone() />
                                                <StatusPicker entry=entry.clone() />
                                                {rating_for(mal_id).map(|value| view! {
                                                    <span class="chip score">{format!("★ {}", value)}</span>
                                                })}
                                                <button
                                                    class="remove-button"
                                                    on:click=move |_| remove(mal_id)
                                                >
                                                    "Remove"
                                                </button>
                                            </div>
                                        </div>
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                    }.into_any()
                }
            }}
        </div>
    }
}
