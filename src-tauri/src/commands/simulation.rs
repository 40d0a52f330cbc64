//! Simulated transfer commands.

use std::sync::Arc;

use mediadock_core::{DownloadId, SimulationOutcome, TransferSimulator};
use tauri::{AppHandle, Manager, State};
use tracing::{error, info, warn};

use super::error::map_err;
use super::state::AppState;

/// Start a simulated transfer for a download.
///
/// Returns `false` if one is already running for it. A finished record is a
/// conflict error. Progress reaches the frontend as `download-updated` events.
#[tauri::command]
pub async fn start_simulated_download(
    app: AppHandle,
    state: State<'_, AppState>,
    id: DownloadId,
    fail_at: Option<u8>,
) -> std::result::Result<bool, String> {
    let config = state.config_manager.read().await.config().simulation;
    let mut simulator = TransferSimulator::new(state.download_queue_arc(), config);
    if let Some(progress) = fail_at {
        simulator = simulator.with_failure_at(progress);
    }
    simulator.ensure_startable(id).await.map_err(map_err)?;

    if !state.register_simulation(id, simulator.cancel_flag()).await {
        warn!("Simulated transfer already running for {}", id);
        return Ok(false);
    }

    info!("Starting simulated transfer for {}", id);
    let simulator = Arc::new(simulator);
    tauri::async_runtime::spawn(async move {
        match simulator.run(id).await {
            Ok(SimulationOutcome::Completed) => info!("Simulated transfer {} completed", id),
            Ok(SimulationOutcome::Failed) => info!("Simulated transfer {} failed", id),
            Ok(SimulationOutcome::Cancelled) => info!("Simulated transfer {} cancelled", id),
            Err(e) => error!("Simulated transfer {} stopped: {}", id, e),
        }
        app.state::<AppState>().unregister_simulation(id).await;
    });

    Ok(true)
}

/// Cancel a running simulated transfer. Returns `false` if none was running.
#[tauri::command]
pub async fn cancel_simulated_download(
    state: State<'_, AppState>,
    id: DownloadId,
) -> std::result::Result<bool, String> {
    Ok(state.cancel_simulation(id).await)
}
