//! Main application component.
//!
//! The root owns two contexts: the active theme and a read-only snapshot of
//! the host's download queue. Both are filled from IPC on mount and kept
//! current by host events.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{NotificationProvider, Tab, TabBar, use_notifications};
use crate::screens::{DownloadScreen, ManagerScreen, StreamScreen, ThemesScreen};
use crate::tauri_api::{self, event_payload, events};
use crate::theme::ThemeContext;
use crate::types::{DownloadRecord, DownloadRemoved, DownloadsCleared, QueueStats, Theme};

/// Snapshot of the host download queue.
///
/// Screens read it; only host events and [`QueueContext::refresh`] write it.
#[derive(Clone, Copy)]
pub struct QueueContext {
    /// Records, newest first.
    pub downloads: ReadSignal<Vec<DownloadRecord>>,
    set_downloads: WriteSignal<Vec<DownloadRecord>>,
    /// Per-status counts.
    pub stats: ReadSignal<QueueStats>,
    set_stats: WriteSignal<QueueStats>,
}

impl QueueContext {
    /// Create an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        let (downloads, set_downloads) = signal::<Vec<DownloadRecord>>(vec![]);
        let (stats, set_stats) = signal(QueueStats::default());
        Self {
            downloads,
            set_downloads,
            stats,
            set_stats,
        }
    }

    /// Reload records and counts from the host.
    pub fn refresh(&self) {
        let ctx = *self;
        spawn_local(async move {
            match tauri_api::get_downloads().await {
                Ok(records) => ctx.set_downloads.set(records),
                Err(e) => leptos::logging::error!("Failed to load downloads: {}", e),
            }
            ctx.refresh_stats();
        });
    }

    fn refresh_stats(&self) {
        let set_stats = self.set_stats;
        spawn_local(async move {
            match tauri_api::get_queue_stats().await {
                Ok(stats) => set_stats.set(stats),
                Err(e) => leptos::logging::error!("Failed to load queue stats: {}", e),
            }
        });
    }

    fn on_added(&self, record: DownloadRecord) {
        self.set_downloads.update(|list| insert_record(list, record));
        self.refresh_stats();
    }

    fn on_updated(&self, record: DownloadRecord) {
        self.set_downloads.update(|list| replace_record(list, record));
        self.refresh_stats();
    }

    fn on_removed(&self, id: &str) {
        self.set_downloads.update(|list| remove_record(list, id));
        self.refresh_stats();
    }
}

impl Default for QueueContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the queue snapshot.
///
/// # Panics
/// Panics if called outside of the root `App`.
pub fn use_queue() -> QueueContext {
    expect_context::<QueueContext>()
}

/// Put a newly added record at the front, replacing a stale copy if the
/// snapshot already has it.
fn insert_record(list: &mut Vec<DownloadRecord>, record: DownloadRecord) {
    list.retain(|r| r.id != record.id);
    list.insert(0, record);
}

/// Swap in an updated record, keeping its position.
fn replace_record(list: &mut [DownloadRecord], record: DownloadRecord) {
    if let Some(slot) = list.iter_mut().find(|r| r.id == record.id) {
        *slot = record;
    }
}

fn remove_record(list: &mut Vec<DownloadRecord>, id: &str) {
    list.retain(|r| r.id != id);
}

/// Main application component.
#[component]

pub fn App() -> impl IntoView {
    let theme = ThemeContext::new();
    provide_context(theme);
    provide_context(QueueContext::new());

    view! {
        <style>{move || theme.css()}</style>
        <style>{include_str!("../styles/main.css")}</style>
        <NotificationProvider>
            <AppContent />
        </NotificationProvider>
    }
}

/// Inner application content with access to notification context.
#[component]
fn AppContent() -> impl IntoView {
    let notifications = use_notifications();
    let theme = expect_context::<ThemeContext>();
    let queue = use_queue();

    let (active_tab, set_active_tab) = signal(Tab::default());

    // Initial load
    spawn_local(async move {
        match tauri_api::get_current_theme().await {
            Ok(current) => theme.set(current),
            Err(e) => notifications.error(format!("Failed to load theme: {e}")),
        }
    });
    queue.refresh();

    // Host events
    spawn_local(async move {
        if let Err(e) = tauri_api::listen_to_event(events::DOWNLOAD_ADDED, move |event| {
            match event_payload::<DownloadRecord>(&event) {
                Ok(record) => queue.on_added(record),
                Err(e) => leptos::logging::error!("download-added: {}", e),
            }
        })
        .await
        {
            leptos::logging::error!("Failed to listen for added downloads: {}", e);
        }

        if let Err(e) = tauri_api::listen_to_event(events::DOWNLOAD_UPDATED, move |event| {
            match event_payload::<DownloadRecord>(&event) {
                Ok(record) => queue.on_updated(record),
                Err(e) => leptos::logging::error!("download-updated: {}", e),
            }
        })
        .await
        {
            leptos::logging::error!("Failed to listen for download updates: {}", e);
        }

        if let Err(e) = tauri_api::listen_to_event(events::DOWNLOAD_REMOVED, move |event| {
            match event_payload::<DownloadRemoved>(&event) {
                Ok(removed) => queue.on_removed(&removed.id),
                Err(e) => leptos::logging::error!("download-removed: {}", e),
            }
        })
        .await
        {
            leptos::logging::error!("Failed to listen for removed downloads: {}", e);
        }

        if let Err(e) = tauri_api::listen_to_event(events::DOWNLOADS_CLEARED, move |event| {
            if let Ok(cleared) = event_payload::<DownloadsCleared>(&event) {
                leptos::logging::log!("Cleared {} completed downloads", cleared.removed);
            }
            queue.refresh();
        })
        .await
        {
            leptos::logging::error!("Failed to listen for cleared downloads: {}", e);
        }

        if let Err(e) = tauri_api::listen_to_event(events::THEME_CHANGED, move |event| {
            match event_payload::<Theme>(&event) {
                Ok(changed) => theme.set(changed),
                Err(e) => leptos::logging::error!("theme-changed: {}", e),
            }
        })
        .await
        {
            leptos::logging::error!("Failed to listen for theme changes: {}", e);
        }
    });

    view! {
        <div class="app-shell">
            <main class="screen-container">
                {move || match active_tab.get() {
                    Tab::Download => view! { <DownloadScreen /> }.into_any(),
                    Tab::Stream => view! { <StreamScreen /> }.into_any(),
                    Tab::Manager => view! { <ManagerScreen /> }.into_any(),
                    Tab::Themes => view! { <ThemesScreen /> }.into_any(),
                }}
            </main>
            <TabBar
                active=active_tab
                on_select=Callback::new(move |tab| set_active_tab.set(tab))
            />
        </div>
    }
}
