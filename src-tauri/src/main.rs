//! MediaDock - mobile/desktop app for queueing media downloads.
//!
//! This is the main entry point for the Tauri application.

#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

mod commands;
mod logging;

use commands::AppState;
use tauri::Manager;
use tracing::{error, info};

fn main() {
    // Keep the guard alive for the whole run so file logs are flushed on exit
    let _logging_guard = match logging::init(&logging::LoggingConfig::auto()) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            None
        }
    };

    info!("Starting MediaDock application");

    let (app_state, restore_outcome) = match tauri::async_runtime::block_on(AppState::initialize())
    {
        Ok(initialized) => initialized,
        Err(e) => {
            error!("Failed to create app state: {}", e);
            std::process::exit(1);
        }
    };
    info!("Theme restore: {:?}", restore_outcome);

    let result = tauri::Builder::default()
        .manage(app_state)
        .setup(|app| {
            let queue = app.state::<AppState>().download_queue_arc();
            commands::spawn_queue_event_relay(app.handle().clone(), queue);
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_themes,
            commands::get_theme_categories,
            commands::get_current_theme,
            commands::set_theme,
            commands::get_downloads,
            commands::get_download,
            commands::add_download,
            commands::update_download_progress,
            commands::remove_download,
            commands::clear_completed_downloads,
            commands::get_queue_stats,
            commands::get_streaming_videos,
            commands::download_streaming_video,
            commands::get_platforms,
            commands::validate_media_url,
            commands::start_simulated_download,
            commands::cancel_simulated_download,
            commands::get_config,
            commands::update_config,
        ])
        .run(tauri::generate_context!());

    if let Err(e) = result {
        error!("Error while running tauri application: {}", e);
        std::process::exit(1);
    }
}
