//! Theme commands.

use mediadock_core::theme::{THEMES, ThemeCategory, themes_by_category};
use mediadock_core::{Theme, ThemeChange};
use tauri::{AppHandle, Emitter, State};
use tracing::{debug, error, info};

use super::error::map_err;
use super::events::event_names;
use super::state::AppState;

/// The theme catalog in definition order.
#[tauri::command]
pub fn get_themes() -> Vec<Theme> {
    THEMES.to_vec()
}

/// The catalog grouped by category, for the theme picker.
#[tauri::command]
pub fn get_theme_categories() -> Vec<ThemeCategory> {
    themes_by_category()
}

/// The active theme.
#[tauri::command]
pub async fn get_current_theme(state: State<'_, AppState>) -> std::result::Result<Theme, String> {
    debug!("Getting current theme");
    let theme_store = state.theme_store.read().await;
    Ok(*theme_store.current())
}

/// Activate a theme and save the choice.
#[tauri::command]
pub async fn set_theme(
    app: AppHandle,
    state: State<'_, AppState>,
    theme_id: String,
) -> std::result::Result<ThemeChange, String> {
    info!("Setting theme: {}", theme_id);

    let change = {
        let mut theme_store = state.theme_store.write().await;
        theme_store.set_current(&theme_id).await.map_err(map_err)?
    };

    if let Err(e) = app.emit(event_names::THEME_CHANGED, change.theme) {
        error!("Failed to emit theme-changed event: {}", e);
    }

    Ok(change)
}
