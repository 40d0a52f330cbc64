//! Manager screen: counters, the queue list and "Clear Completed".

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::use_queue;
use crate::components::{
    AdBanner, AdSize, DownloadItem, EmptyState, ScreenHeader, use_notifications,
};
use crate::tauri_api;

/// Queue overview. Reads the shared snapshot; every change goes to the host.
#[component]

pub fn ManagerScreen() -> impl IntoView {
    let notifications = use_notifications();
    let queue = use_queue();

    let on_delete = Callback::new(move |id: String| {
        spawn_local(async move {
            if let Err(e) = tauri_api::remove_download(&id).await {
                notifications.error(e);
            }
        });
    });

    let clear_completed = move |_| {
        spawn_local(async move {
            match tauri_api::clear_completed_downloads().await {
                Ok(removed) => leptos::logging::log!("Cleared {} downloads", removed),
                Err(e) => notifications.error(e),
            }
        });
    };

    let completed = move || queue.stats.get().completed;
    let count = move || queue.downloads.with(Vec::len);

    view! {
        <div class="screen manager-screen">
            <ScreenHeader title="Download Manager" subtitle="Track and manage your downloads" />

            <div class="stats-row">
                <div class="stat-card">
                    <span class="stat-number stat-completed">{completed}</span>
                    <span class="stat-label">"Completed"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-number stat-downloading">
                        {move || queue.stats.get().downloading}
                    </span>
                    <span class="stat-label">"Downloading"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-number stat-pending">{move || queue.stats.get().pending}</span>
                    <span class="stat-label">"Pending"</span>
                </div>
            </div>

            <AdBanner size=AdSize::Medium />

            <Show when=move || { completed() > 0 }>
                <div class="actions-row">
                    <button class="btn btn-danger-soft" on:click=clear_completed>
                        <svg viewBox="0 0 24 24" width="16" height="16" fill="currentColor">
                            <path d="M6 19c0 1.1.9 2 2 2h8c1.1 0 2-.9 2-2V7H6v12zM19 4h-3.5l-1-1h-5l-1 1H5v2h14V4z"/>
                        </svg>
                        "Clear Completed"
                    </button>
                </div>
            </Show>

            <section class="screen-section">
                <h2 class="section-title">{move || format!("Downloads ({})", count())}</h2>
                <Show
                    when=move || { count() > 0 }
                    fallback=|| view! {
                        <EmptyState message="No downloads yet. Start downloading from the Download tab!" />
                    }
                >
                    <div class="download-list">
                        // Rows render a fixed record; a new key per change redraws them
                        <For
                            each=move || queue.downloads.get()
                            key=|record| (record.id.clone(), record.status, record.progress)
                            children=move |record| view! { <DownloadItem record=record on_delete=on_delete /> }
                        />
                    </div>
                </Show>
            </section>

            <AdBanner size=AdSize::Small />
        </div>
    }
}
