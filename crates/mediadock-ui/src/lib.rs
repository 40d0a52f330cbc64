//! `MediaDock` UI - Leptos-based user interface.
//!
//! This crate provides the screens and widgets of the `MediaDock` application.
//! All state lives in the host; the UI reads snapshots and issues commands
//! through [`tauri_api`].

// Component files tend to be large by nature - they contain view logic
#![allow(clippy::too_many_lines)]
// Pass by value suggestions for small types like bool - not always clearer
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod app;
pub mod components;
pub mod screens;
pub mod tauri_api;
pub mod theme;
pub mod types;

pub use app::App;
pub use types::{DownloadRecord, StreamingVideo, Theme};
