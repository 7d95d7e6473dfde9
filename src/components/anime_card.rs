//! Anime Card Component
//!
//! Poster + title card used in the home rows and search results.
//! Clicking opens the detail screen.

use leptos::prelude::*;

use crate::context::{use_app_context, Screen};
use crate::models::Anime;

#[component]
pub fn AnimeCard(anime: Anime) -> impl IntoView {
    let ctx = use_app_context();
    let mal_id = anime.mal_id;
    let poster = anime.poster_url();
    let title = anime.title.clone();
    let score = anime.score;
    let year = anime.year;

    view! {
        <div class="anime-card" on:click=move |_| ctx.navigate(Screen::Details(mal_id))>
            {match poster {
                Some(url) => view! { <img class="anime-card-poster" src=url alt="" /> }.into_any(),
                None => view! { <div class="anime-card-poster placeholder"></div> }.into_any(),
            }}

            <div class="anime-card-body">
                <span class="anime-card-title">{title}</span>
                <div class="anime-card-meta">
                    {score.map(|s| view! { <span class="chip score">{format!("★ {:.2}", s)}</span> })}
                    {year.map(|y| view! { <span class="chip">{y}</span> })}
                </div>
            </div>
        </div>
    }
}
