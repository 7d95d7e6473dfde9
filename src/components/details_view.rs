//! Details Screen
//!
//! Full record for one title plus cast, staff, recommendations, and the
//! user's own rating/like/comments. The title fetch drives the screen;
//! the satellite fetches fall back to empty sections. A late response is
//! dropped via the cancelled flag once the user navigates away.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::components::{PosterCard, StarRating};
use crate::context::{use_app_context, Screen};
use crate::models::{Anime, CharacterRole, Recommendation, StaffMember};
use crate::store::{store_is_tracked, use_app_store};

/// Comment thread for one title: list + append box
#[component]
fn CommentPanel(mal_id: u32) -> impl IntoView {
    let (comments, set_comments) = signal(Vec::<String>::new());
    let (draft, set_draft) = signal(String::new());

    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(thread) = commands::get_comments(mal_id).await {
                set_comments.set(thread);
            }
        });
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get();
        if text.trim().is_empty() {
            return;
        }
        spawn_local(async move {
            match commands::add_comment(mal_id, &text).await {
                Ok(thread) => {
                    set_comments.set(thread);
                    set_draft.set(String::new());
                }
                Err(err) => web_sys::console::error_1(&err.into()),
            }
        });
    };

    view! {
        <section class="comment-panel">
            <h3>"Comments"</h3>

            <ul class="comment-list">
                {move || comments.get().into_iter()
                    .map(|text| view! { <li class="comment">{text}</li> })
                    .collect_view()}
            </ul>

            <form class="comment-form" on:submit=submit>
                <input
                    type="text"
                    placeholder="Add a comment..."
                    prop:value=move || draft.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_draft.set(input.value());
                    }
                />
                <button type="submit">"Post"</button>
            </form>
        </section>
    }
}

#[component]
pub fn DetailsView(mal_id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (anime, set_anime) = signal(None::<Anime>);
    let (characters, set_characters) = signal(Vec::<CharacterRole>::new());
    let (staff, set_staff) = signal(Vec::<StaffMember>::new());
    let (recommendations, set_recommendations) = signal(Vec::<Recommendation>::new());
    let (liked, set_liked) = signal(false);
    let (rating, set_rating) = signal(0u8);
    let (loading, set_loading) = signal(true);

    // Drop responses that land after navigation away from this screen
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
                let full = commands::get_anime(mal_id).await;
                if cancelled.load(Ordering::SeqCst) {
                    return;
                }
                match full {
                    Ok(found) => set_anime.set(Some(found)),
                    Err(err) => web_sys::console::error_1(&err.into()),
                }
                set_loading.set(false);

                let cast = commands::get_anime_characters(mal_id).await.unwrap_or_default();
                let crew = commands::get_anime_staff(mal_id).await.unwrap_or_default();
                let similar = commands::get_anime_recommendations(mal_id).await.unwrap_or_default();
                if cancelled.load(Ordering::SeqCst) {
                    return;
                }
                set_characters.set(cast);
                set_staff.set(crew);
                set_recommendations.set(similar.into_iter().filter(|r| r.entry.mal_id != 0).collect());
            });
        }
    });

    Effect::new({
        let cancelled = cancelled.clone();
        move |_| {
            let cancelled = cancelled.clone();
            spawn_local(async move {
                let is_liked = commands::is_liked(mal_id).await.unwrap_or(false);
                let stored = commands::get_rating(mal_id).await.ok().flatten();
                if cancelled.load(Ordering::SeqCst) {
                    return;
                }
                set_liked.set(is_liked);
                if let Some(value) = stored {
                    set_rating.set(value);
                }
            });
        }
    });

    let tracked = move || store_is_tracked(&store, mal_id);

    let on_toggle_like = move |_| {
        spawn_local(async move {
            match commands::toggle_like(mal_id).await {
                Ok(now_liked) => {
                    set_liked.set(now_liked);
                    ctx.reload();
                }
                Err(err) => web_sys::console::error_1(&err.into()),
            }
        });
    };

    let on_rate = Callback::new(move |value: u8| {
        set_rating.set(value);
        spawn_local(async move {
            if let Err(err) = commands::add_rating(mal_id, value).await {
                web_sys::console::error_1(&err.into());
            }
        });
    });

    let on_add_to_watchlist = move |_| {
        let Some(current) = anime.get_untracked() else { return };
        spawn_local(async move {
            match commands::add_to_watchlist(&current).await {
                Ok(_) => ctx.reload(),
                Err(err) => web_sys::console::error_1(&err.into()),
            }
        });
    };

    let on_open_external = move |_| {
        let Some(url) = anime.get_untracked().and_then(|a| a.url) else { return };
        spawn_local(async move {
            if let Err(err) = commands::open_external(&url).await {
                web_sys::console::error_1(&err.into());
            }
        });
    };

    view! {
        <div class="details-view">
            {move || match anime.get() {
                None => view! {
                    <p class="hint">{move || if loading.get() { "Loading..." } else { "Title not available." }}</p>
                }.into_any(),
                Some(found) => {
                    let poster = found.large_poster_url();
                    let title = found.title.clone();
                    let secondary = found.secondary_title();
                    let synopsis = found.synopsis.clone();
                    let has_url = found.url.is_some();
                    let genres = found.genres.clone();
                    let facts: Vec<(&str, String)> = [
                        ("Type", found.type_.clone()),
                        ("Status", found.status.clone()),
                        ("Source", found.source.clone()),
                        ("Duration", found.duration.clone()),
                        ("Rated", found.rating.clone()),
                        ("Season", found.season.clone()),
                        ("Aired", found.aired.as_ref().and_then(|a| a.string.clone())),
                    ]
                    .into_iter()
                    .filter_map(|(label, value)| value.map(|v| (label, v)))
                    .collect();

                    view! {
                        <section class="hero">
                            {match poster {
                                Some(url) => view! { <img class="hero-poster" src=url alt="" /> }.into_any(),
                                None => view! { <div class="hero-poster placeholder"></div> }.into_any(),
                            }}

                            <div class="hero-body">
                                <h1>{title}</h1>
                                {secondary.map(|s| view! { <p class="secondary-title">{s}</p> })}

                                <div class="hero-chips">
                                    {found.score.map(|s| view! { <span class="chip score">{format!("★ {:.2}", s)}</span> })}
                                    {found.episodes.map(|n| view! { <span class="chip">{format!("{} ep", n)}</span> })}
                                    {found.year.map(|y| view! { <span class="chip">{y}</span> })}
                                </div>

                                <div class="action-row">
                                    <button
                                        class=move || if liked.get() { "like-button liked" } else { "like-button" }
                                        on:click=on_toggle_like
                                    >
                                        {move || if liked.get() { "♥ Liked" } else { "♡ Like" }}
                                    </button>

                                    <button
                                        class="watchlist-button"
                                        disabled=move || tracked()
                                        on:click=on_add_to_watchlist
                                    >
                                        {move || if tracked() { "On watchlist" } else { "+ Watchlist" }}
                                    </button>

                                    <button
                                        class="episodes-button"
                                        on:click=move |_| ctx.navigate(Screen::Episodes(mal_id))
                                    >
                                        "Episodes"
                                    </button>

                                    {has_url.then(|| view! {
                                        <button class="external-button" on:click=on_open_external>
                                            "Open on MyAnimeList"
                                        </button>
                                    })}
                                </div>

                                <StarRating rating=rating on_rate=on_rate />
                            </div>
                        </section>

                        {synopsis.map(|text| view! {
                            <section class="synopsis">
                                <h3>"Synopsis"</h3>
                                <p>{text}</p>
                            </section>
                        })}

                        {(!genres.is_empty()).then(|| view! {
                            <div class="genre-row">
                                {genres.into_iter()
                                    .map(|g| view! { <span class="chip">{g.name}</span> })
                                    .collect_view()}
                            </div>
                        })}

                        {(!facts.is_empty()).then(|| view! {
                            <dl class="fact-list">
                                {facts.into_iter().map(|(label, value)| view! {
                                    <div class="fact">
                                        <dt>{label}</dt>
                                        <dd>{value}</dd>
                                    </div>
                                }).collect_view()}
                            </dl>
                        })}
                    }.into_any()
                }
            }}

            {move || (!characters.get().is_empty()).then(|| view! {
                <section class="cast-section">
                    <h3>"Characters"</h3>
                    <div class="cast-row">
                        {characters.get().into_iter().map(|role| {
                            let image = role.character.images
                                .as_ref()
                                .and_then(|i| i.jpg.as_ref())
                                .and_then(|set| set.image_url.clone());
                            view! {
                                <div class="cast-card">
                                    {match image {
                                        Some(url) => view! { <img class="cast-image" src=url alt="" /> }.into_any(),
                                        None => view! { <div class="cast-image placeholder"></div> }.into_any(),
                                    }}
                                    <span class="cast-name">{role.character.name.clone()}</span>
                                    {role.role.map(|r| view! { <span class="cast-role">{r}</span> })}
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </section>
            })}

            {move || (!staff.get().is_empty()).then(|| view! {
                <section class="cast-section">
                    <h3>"Staff"</h3>
                    <div class="cast-row">
                        {staff.get().into_iter().map(|member| view! {
                            <div class="cast-card">
                                <span class="cast-name">{member.person.name.clone()}</span>
                                <span class="cast-role">{member.positions.join(", ")}</span>
                            </div>
                        }).collect_view()}
                    </div>
                </section>
            })}

            {move || (!recommendations.get().is_empty()).then(|| view! {
                <section class="recommendation-section">
                    <h3>"You might also like"</h3>
                    <div class="card-row">
                        {recommendations.get().into_iter().map(|rec| view! {
                            <PosterCard anime=rec.entry votes=rec.votes />
                        }).collect_view()}
                    </div>
                </section>
            })}

            <CommentPanel mal_id=mal_id />
        </div>
    }
}
