//! Themes screen: current palette and the grouped catalog.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{AdBanner, AdSize, ScreenHeader, use_notifications};
use crate::tauri_api;
use crate::theme::use_theme;
use crate::types::{Theme, ThemeCategory};

/// Current theme card plus a card per catalog theme.
#[component]

pub fn ThemesScreen() -> impl IntoView {
    let notifications = use_notifications();
    let theme = use_theme();
    let (categories, set_categories) = signal::<Vec<ThemeCategory>>(vec![]);

    spawn_local(async move {
        match tauri_api::get_theme_categories().await {
            Ok(list) => set_categories.set(list),
            Err(e) => notifications.error(format!("Failed to load themes: {e}")),
        }
    });

    let on_select = Callback::new(move |theme_id: String| {
        spawn_local(async move {
            match tauri_api::set_theme(&theme_id).await {
                Ok(change) => {
                    theme.set(change.theme);
                    if !change.persisted {
                        notifications.warning("Theme applied, but it could not be saved");
                    }
                }
                Err(e) => notifications.error(e),
            }
        });
    });

    view! {
        <div class="screen themes-screen">
            <ScreenHeader title="Themes" subtitle="Customize your app appearance" />

            <div class="current-theme-card">
                <h2 class="current-theme-title">"Current Theme"</h2>
                <p class="current-theme-name">
                    {move || theme.current.with(|t| t.as_ref().map(|t| t.name.clone()).unwrap_or_default())}
                </p>
                <div class="swatch-row">
                    <span class="swatch" style="background: var(--color-primary)"></span>
                    <span class="swatch" style="background: var(--color-primary-light)"></span>
                    <span class="swatch" style="background: var(--color-primary-dark)"></span>
                    <span class="swatch" style="background: var(--color-accent)"></span>
                </div>
            </div>

            <AdBanner size=AdSize::Medium />

            <For
                each=move || categories.get()
                key=|category| category.key.clone()
                children=move |category| {
                    let title = category.title();
                    view! {
                        <section class="screen-section">
                            <h2 class="section-title">{title}</h2>
                            <div class="theme-grid">
                                {category
                                    .themes
                                    .into_iter()
                                    .map(|t| view! { <ThemeCard theme=t on_select=on_select /> })
                                    .collect_view()}
                            </div>
                        </section>
                    }
                }
            />

            <AdBanner size=AdSize::Small />
        </div>
    }
}

/// Preview card for one catalog theme.
#[component]
fn ThemeCard(theme: Theme, on_select: Callback<String>) -> impl IntoView {
    let active = use_theme();
    let id = theme.id.clone();
    let is_selected = {
        let id = id.clone();
        move || active.current_id().as_deref() == Some(id.as_str())
    };

    view! {
        <button
            class="theme-card"
            class:selected=is_selected.clone()
            data-theme-id=id.clone()
            on:click=move |_| on_select.run(id.clone())
        >
            <div class="theme-card-preview" style=format!("background: {}", theme.colors.background)>
                <span class="theme-card-primary" style=format!("background: {}", theme.colors.primary)></span>
            </div>
            <div class="theme-card-footer">
                <span class="theme-card-name">{theme.name}</span>
                <Show when=is_selected.clone()>
                    <svg class="theme-card-check" viewBox="0 0 24 24" width="16" height="16" fill="currentColor">
                        <path d="M9 16.17L4.83 12l-1.42 1.41L9 19 21 7l-1.41-1.41z"/>
                    </svg>
                </Show>
            </div>
        </button>
    }
}
