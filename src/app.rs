//! AniDex Frontend App
//!
//! Top-level component: provides context and store, keeps the local
//! preference collections in sync with the backend, switches screens.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{
    AppBar, DetailsView, EpisodeListView, HomeView, SearchView, WatchlistView,
};
use crate::context::{AppContext, Screen};
use crate::store::{store_set_likes, store_set_watchlist, AppState};

#[component]
pub fn App() -> impl IntoView {
    let (screen, set_screen) = signal(Screen::Home);
    let (last_tab, set_last_tab) = signal(Screen::Home);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    let store = Store::new(AppState::default());

    // Provide context to all children
    provide_context(AppContext::new(
        (screen, set_screen),
        (last_tab, set_last_tab),
        (reload_trigger, set_reload_trigger),
    ));
    provide_context(store);

    // Re-read local preferences whenever a mutation bumps the trigger
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        spawn_local(async move {
            match commands::get_watchlist().await {
                Ok(entries) => store_set_watchlist(&store, entries),
                Err(err) => web_sys::console::error_1(&err.into()),
            }
            if let Ok(likes) = commands::get_likes().await {
                store_set_likes(&store, likes);
            }
        });
    });

    view! {
        <div class="app-shell">
            <AppBar />

            <main class="screen">
                {move || match screen.get() {
                    Screen::Home => view! { <HomeView /> }.into_any(),
                    Screen::Search => view! { <SearchView /> }.into_any(),
                    Screen::Watchlist => view! { <WatchlistView /> }.into_any(),
                    Screen::Details(mal_id) => view! { <DetailsView mal_id=mal_id /> }.into_any(),
                    Screen::Episodes(mal_id) => view! { <EpisodeListView mal_id=mal_id /> }.into_any(),
                }}
            </main>
        </div>
    }
}
