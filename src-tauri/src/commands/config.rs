//! Configuration commands.

use mediadock_core::AppConfig;
use tauri::State;
use tracing::{debug, info};

use super::error::map_err;
use super::state::AppState;

/// Get the current application configuration.
#[tauri::command]
pub async fn get_config(state: State<'_, AppState>) -> std::result::Result<AppConfig, String> {
    debug!("Getting config");
    let config_manager = state.config_manager.read().await;
    Ok(config_manager.config().clone())
}

/// Update the application configuration and apply it to the running stores.
#[tauri::command]
pub async fn update_config(
    state: State<'_, AppState>,
    config: AppConfig,
) -> std::result::Result<AppConfig, String> {
    info!("Updating config");

    let (previous_dir, updated) = {
        let mut config_manager = state.config_manager.write().await;
        let previous_dir = config_manager.data_directory().to_path_buf();
        config_manager.update(config).map_err(map_err)?;
        (previous_dir, config_manager.config().clone())
    };

    state.download_queue.set_config(updated.queue).await;

    if updated.data_directory != previous_dir {
        debug!(
            "Data directory changed: {} -> {}",
            previous_dir.display(),
            updated.data_directory.display()
        );
        state
            .rebind_preferences(&updated.data_directory)
            .await
            .map_err(map_err)?;
    }

    info!("Config updated successfully");
    Ok(updated)
}
