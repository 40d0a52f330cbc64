//! Screen header component.

use leptos::prelude::*;

/// Title and subtitle at the top of a screen.
#[component]

pub fn ScreenHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <header class="screen-header">
            <h1 class="screen-title">{title}</h1>
            <p class="screen-subtitle">{subtitle}</p>
        </header>
    }
}
