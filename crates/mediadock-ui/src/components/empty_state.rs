//! Empty state shown in place of an empty list.

use leptos::prelude::*;

/// Centered icon and message.
#[component]

pub fn EmptyState(
    /// The message shown under the icon.
    message: &'static str,
    /// Optional additional CSS class.
    #[prop(optional)]
    class: Option<&'static str>,
) -> impl IntoView {
    let full_class = format!("empty-state {}", class.unwrap_or(""));

    view! {
        <div class=full_class data-testid="empty-state">
            <div class="empty-state-icon">
                <svg viewBox="0 0 24 24" width="56" height="56" fill="var(--color-text-secondary)">
                    <path d="M19 9h-4V3H9v6H5l7 7 7-7zM5 18v2h14v-2H5z"/>
                </svg>
            </div>
            <p class="empty-state-message">{message}</p>
        </div>
    }
}
