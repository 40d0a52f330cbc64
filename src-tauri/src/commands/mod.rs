//! Tauri commands for the MediaDock application.
//!
//! These commands are invoked from the frontend via Tauri's IPC mechanism.
//!
//! This module is organized into submodules by feature area:
//! - `state`: Application state management
//! - `error`: Error handling utilities
//! - `events`: Queue event forwarding
//! - `theme`: Theme catalog and selection
//! - `downloads`: Download queue operations
//! - `streaming`: Streaming catalog and platforms
//! - `simulation`: Simulated transfers
//! - `config`: Application configuration

mod config;
mod downloads;
mod error;
mod events;
mod simulation;
mod state;
mod streaming;
mod theme;

// Re-export AppState and the relay for main.rs
pub use events::spawn_queue_event_relay;
pub use state::AppState;

// Re-export all commands
pub use config::*;
pub use downloads::*;
pub use simulation::*;
pub use streaming::*;
pub use theme::*;
