//! Poster Card Component
//!
//! Compact poster-only card for recommendation rows.

use leptos::prelude::*;

use crate::context::{use_app_context, Screen};
use crate::models::Anime;

#[component]
pub fn PosterCard(anime: Anime, #[prop(optional)] votes: Option<u32>) -> impl IntoView {
    let ctx = use_app_context();
    let mal_id = anime.mal_id;
    let poster = anime.poster_url();
    let title = anime.title.clone();

    view! {
        <div class="poster-card" on:click=move |_| ctx.navigate(Screen::Details(mal_id))>
            {match poster {
                Some(url) => view! { <img class="poster-card-image" src=url alt="" /> }.into_any(),
                None => view! { <div class="poster-card-image placeholder"></div> }.into_any(),
            }}
            <span class="poster-card-title">{title}</span>
            {votes.map(|v| view! { <span class="poster-card-votes">{format!("{} votes", v)}</span> })}
        </div>
    }
}
