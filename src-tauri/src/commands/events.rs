//! Queue event forwarding to the frontend.

use std::sync::Arc;

use mediadock_core::{DownloadQueue, QueueEvent};
use tauri::{AppHandle, Emitter};
use tracing::{debug, error};

/// Event names emitted to the frontend.
pub mod event_names {
    /// A download was added; payload is the record.
    pub const DOWNLOAD_ADDED: &str = "download-added";
    /// A download changed; payload is the record.
    pub const DOWNLOAD_UPDATED: &str = "download-updated";
    /// A download was removed; payload is `{ id }`.
    pub const DOWNLOAD_REMOVED: &str = "download-removed";
    /// Completed downloads were cleared; payload is `{ removed }`.
    pub const DOWNLOADS_CLEARED: &str = "downloads-cleared";
    /// The active theme changed; payload is the theme.
    pub const THEME_CHANGED: &str = "theme-changed";
}

/// Frontend event name for a queue event.
pub const fn event_name(event: &QueueEvent) -> &'static str {
    match event {
        QueueEvent::Added(_) => event_names::DOWNLOAD_ADDED,
        QueueEvent::Updated(_) => event_names::DOWNLOAD_UPDATED,
        QueueEvent::Removed { .. } => event_names::DOWNLOAD_REMOVED,
        QueueEvent::Cleared { .. } => event_names::DOWNLOADS_CLEARED,
    }
}

fn emit_queue_event(app: &AppHandle, event: &QueueEvent) -> tauri::Result<()> {
    let name = event_name(event);
    match event {
        QueueEvent::Added(record) | QueueEvent::Updated(record) => app.emit(name, record),
        QueueEvent::Removed { id } => app.emit(name, serde_json::json!({ "id": id })),
        QueueEvent::Cleared { removed } => {
            app.emit(name, serde_json::json!({ "removed": removed }))
        }
    }
}

/// Forward every queue event to the frontend until the queue is dropped.
pub fn spawn_queue_event_relay(app: AppHandle, queue: Arc<DownloadQueue>) {
    tauri::async_runtime::spawn(async move {
        while let Some(event) = queue.recv_event().await {
            let name = event_name(&event);
            debug!("Emitting {} event", name);
            if let Err(e) = emit_queue_event(&app, &event) {
                error!("Failed to emit {} event: {}", name, e);
            }
        }
        debug!("Queue event relay ended");
    });
}
