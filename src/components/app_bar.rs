//! App Bar Component
//!
//! Top navigation: back affordance on pushed screens, tab buttons.

use leptos::prelude::*;

use crate::context::{use_app_context, Screen};

#[component]
fn TabButton(label: &'static str, target: Screen) -> impl IntoView {
    let ctx = use_app_context();
    let is_active = move || ctx.screen.get() == target;

    view! {
        <button
            class=move || if is_active() { "tab-button active" } else { "tab-button" }
            on:click=move |_| ctx.navigate(target)
        >
            {label}
        </button>
    }
}

#[component]
pub fn AppBar() -> impl IntoView {
    let ctx = use_app_context();
    let on_pushed_screen = move || !ctx.screen.get().is_tab();

    view! {
        <header class="app-bar">
            {move || on_pushed_screen().then(|| view! {
                <button class="back-button" on:click=move |_| ctx.back()>"←"</button>
            })}

            <span class="app-title">"AniDex"</span>

            <nav class="tabs">
                <TabButton label="Home" target=Screen::Home />
                <TabButton label="Search" target=Screen::Search />
                <TabButton label="Watchlist" target=Screen::Watchlist />
            </nav>
        </header>
    }
}
