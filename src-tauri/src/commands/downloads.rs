//! Download queue commands.
//!
//! Commands only call the queue store; the resulting queue events reach the
//! frontend through the relay in `events`.

use mediadock_core::{DownloadId, DownloadRecord, DownloadStatus, NewDownload, QueueStats};
use tauri::State;
use tracing::{debug, info};

use super::error::map_err;
use super::state::AppState;

/// Every download record, most recent first.
#[tauri::command]
pub async fn get_downloads(
    state: State<'_, AppState>,
) -> std::result::Result<Vec<DownloadRecord>, String> {
    debug!("Getting downloads");
    Ok(state.download_queue.list().await)
}

/// A single download record.
#[tauri::command]
pub async fn get_download(
    state: State<'_, AppState>,
    id: DownloadId,
) -> std::result::Result<Option<DownloadRecord>, String> {
    Ok(state.download_queue.get(id).await)
}

/// Validate and enqueue a download.
#[tauri::command]
pub async fn add_download(
    state: State<'_, AppState>,
    request: NewDownload,
) -> std::result::Result<DownloadRecord, String> {
    info!(
        "Adding {} download: {}",
        request.platform.tag(),
        request.url
    );
    state.download_queue.add(request).await.map_err(map_err)
}

/// Report progress and status for a download.
#[tauri::command]
pub async fn update_download_progress(
    state: State<'_, AppState>,
    id: DownloadId,
    progress: u8,
    status: DownloadStatus,
) -> std::result::Result<DownloadRecord, String> {
    state
        .download_queue
        .update_progress(id, progress, status)
        .await
        .map_err(map_err)
}

/// Remove a download, stopping its simulated transfer if one is running.
#[tauri::command]
pub async fn remove_download(
    state: State<'_, AppState>,
    id: DownloadId,
) -> std::result::Result<DownloadRecord, String> {
    state.cancel_simulation(id).await;
    state.download_queue.remove(id).await.map_err(map_err)
}

/// Remove every completed download. Returns how many were removed.
#[tauri::command]
pub async fn clear_completed_downloads(
    state: State<'_, AppState>,
) -> std::result::Result<usize, String> {
    Ok(state.download_queue.clear_completed().await)
}

/// Counts per status.
#[tauri::command]
pub async fn get_queue_stats(state: State<'_, AppState>) -> std::result::Result<QueueStats, String> {
    Ok(state.download_queue.stats().await)
}
