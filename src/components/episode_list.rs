//! Episode List Screen
//!
//! Episodes for one title, with filler/recap badges. When the title is on
//! the watchlist the progress stepper is shown and watched episodes are
//! marked.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::EpisodeStepper;
use crate::context::use_app_context;
use crate::models::Episode;
use crate::store::{store_find_entry, use_app_store};

#[component]
pub fn EpisodeListView(mal_id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (episodes, set_episodes) = signal(Vec::<Episode>::new());
    let (loading, set_loading) = signal(true);

    let cancelled = Arc::new(AtomicBool::new(false));
    on_cleanup({
        let cancelled = cancelled.clone();
        move || cancelled.store(true, Ordering::SeqCst)
    });

    Effect::new({
        let cancelled = cancelled.clone();
        move |_| {
            let cancelled = cancelled.clone();
            spawn_local(async move {
                let fetched = commands::get_anime_episodes(mal_id).await;
                if cancelled.load(Ordering::SeqCst) {
                    return;
                }
                match fetched {
                    Ok(list) => set_episodes.set(list),
                    Err(err) => web_sys::console::error_1(&err.into()),
                }
                set_loading.set(false);
            });
        }
    });

    // Re-reads on every store refresh so the stepper stays current
    let entry = move || {
        let _ = ctx.reload_trigger.get();
        store_find_entry(&store, mal_id)
    };

    view! {
        <div class="episode-list-view">
            {move || entry().map(|e| {
                let title = e.title.clone();
                view! {
                    <div class="episode-list-header">
                        <h2>{title}</h2>
                        <EpisodeStepper entry=e />
                    </div>
                }
            })}

            {move || {
                let watched = entry().map(|e| e.progress).unwrap_or(0);
                let list = episodes.get();
                if list.is_empty() {
                    view! {
                        <p class="hint">
                            {move || if loading.get() { "Loading..." } else { "No episode data." }}
                        </p>
                    }.into_any()
                } else {
                    view! {
                        <ul class="episode-list">
                            {list.into_iter().enumerate().map(|(index, episode)| {
                                let number = index as u32 + 1;
                                let seen = number <= watched;
                                view! {
                                    <li class=move || if seen { "episode watched" } else { "episode" }>
                                        <span class="episode-number">{format!("{}.", number)}</span>
                                        <span class="episode-title">{episode.title.clone()}</span>
                                        {episode.filler.then(|| view! { <span class="chip filler">"Filler"</span> })}
                                        {episode.recap.then(|| view! { <span class="chip recap">"Recap"</span> })}
                                        {episode.aired.clone().map(|aired| view! { <span class="episode-aired">{aired}</span> })}
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
