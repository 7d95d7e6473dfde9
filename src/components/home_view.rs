//! Home Screen
//!
//! Three catalog rows: current season, top ranked, most popular. A failed
//! fetch collapses to an empty row.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::AnimeCard;
use crate::models::Anime;

#[component]
fn CardRow(title: &'static str, items: ReadSignal<Vec<Anime>>) -> impl IntoView {
    view! {
        <section class="card-row-section">
            <h2>{title}</h2>
            <div class="card-row">
                {move || items.get().into_iter()
                    .map(|anime| view! { <AnimeCard anime=anime /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn HomeView() -> impl IntoView {
    let (season, set_season) = signal(Vec::<Anime>::new());
    let (top, set_top) = signal(Vec::<Anime>::new());
    let (popular, set_popular) = signal(Vec::<Anime>::new());

    Effect::new(move |_| {
        spawn_local(async move {
            match commands::get_season_now().await {
                Ok(page) => set_season.set(page.data),
                Err(err) => web_sys::console::error_1(&err.into()),
            }
            match commands::get_top_anime(1).await {
                Ok(page) => set_top.set(page.data),
                Err(err) => web_sys::console::error_1(&err.into()),
            }
            match commands::get_popular_anime(1).await {
                Ok(page) => set_popular.set(page.data),
                Err(err) => web_sys::console::error_1(&err.into()),
            }
        });
    });

    view! {
        <div class="home-view">
            <CardRow title="Airing this season" items=season />
            <CardRow title="Top ranked" items=top />
            <CardRow title="Most popular" items=popular />
        </div>
    }
}
