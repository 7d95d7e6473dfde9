//! Star Rating Component
//!
//! Five tappable stars; emits the chosen 1-5 value.

use leptos::prelude::*;

#[component]
pub fn StarRating(
    rating: ReadSignal<u8>,
    #[prop(into)] on_rate: Callback<u8>,
) -> impl IntoView {
    view! {
        <div class="star-rating">
            {(1u8..=5).map(|value| {
                let filled = move || rating.get() >= value;
                view! {
                    <button
                        class=move || if filled() { "star filled" } else { "star" }
                        on:click=move |_| on_rate.run(value)
                    >
                        {move || if filled() { "★" } else { "☆" }}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
