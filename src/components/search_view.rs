//! Search Screen
//!
//! Debounced text search, best-scored first, with load-more paging.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::components::AnimeCard;
use crate::models::Anime;

const DEBOUNCE_MS: u32 = 400;

#[component]
pub fn SearchView() -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let (results, set_results) = signal(Vec::<Anime>::new());
    let (page, set_page) = signal(1u32);
    let (has_next, set_has_next) = signal(false);
    let (searching, set_searching) = signal(false);

    // Debounced search: wait, then bail out if the query moved on
    Effect::new(move |_| {
        let q = query.get();
        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if query.get_untracked() != q {
                return;
            }

            let trimmed = q.trim().to_string();
            if trimmed.is_empty() {
                set_results.set(Vec::new());
                set_has_next.set(false);
                return;
            }

            set_searching.set(true);
            match commands::search_anime(&trimmed, 1).await {
                Ok(found) => {
                    set_results.set(found.data);
                    set_has_next.set(found.pagination.has_next_page);
                    set_page.set(1);
                }
                Err(err) => {
                    web_sys::console::error_1(&err.into());
                    set_results.set(Vec::new());
                    set_has_next.set(false);
                }
            }
            set_searching.set(false);
        });
    });

    let load_more = move |_| {
        let q = query.get_untracked().trim().to_string();
        let next_page = page.get_untracked() + 1;
        spawn_local(async move {
            match commands::search_anime(&q, next_page).await {
                Ok(found) => {
                    set_results.update(|list| list.extend(found.data));
                    set_has_next.set(found.pagination.has_next_page);
                    set_page.set(next_page);
                }
                Err(err) => web_sys::console::error_1(&err.into()),
            }
        });
    };

    view! {
        <div class="search-view">
            <input
                type="text"
                class="search-input"
                placeholder="Search anime..."
                prop:value=move || query.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_query.set(input.value());
                }
            />

            {move || searching.get().then(|| view! { <p class="hint">"Searching..."</p> })}

            <div class="search-results">
                {move || results.get().into_iter()
                    .map(|anime| view! { <AnimeCard anime=anime /> })
                    .collect_view()}
            </div>

            {move || has_next.get().then(|| view! {
                <button class="load-more" on:click=load_more>"Load more"</button>
            })}
        </div>
    }
}
