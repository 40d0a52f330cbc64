//! Selectable platform card on the Download screen.

use leptos::prelude::*;

use crate::types::{Platform, PlatformInfo};

/// A platform tile: icon, name and description.
#[component]

pub fn PlatformCard(
    /// Platform to display.
    platform: PlatformInfo,
    /// Whether this card is the chosen one.
    #[prop(into)]
    selected: Signal<bool>,
    /// Called when the card is tapped.
    on_select: Callback<Platform>,
) -> impl IntoView {
    let id = platform.id;

    view! {
        <button
            class=move || if selected.get() { "platform-card selected" } else { "platform-card" }
            aria-pressed=move || selected.get().to_string()
            data-platform=id.tag()
            on:click=move |_| on_select.run(id)
        >
            <img class="platform-card-icon" src=platform.icon alt="" width="48" height="48" />
            <div class="platform-card-content">
                <h3 class="platform-card-name">{platform.name}</h3>
                <p class="platform-card-description">{platform.description}</p>
            </div>
        </button>
    }
}
