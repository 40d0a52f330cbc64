//! MediaDock Core Library
//!
//! This crate provides the state behind the MediaDock application:
//! - Theme catalog and the persisted active-theme choice
//! - Download queue store and the streaming video catalog
//! - Platform URL checks and simulated transfers
//! - Application configuration

pub mod catalog;
pub mod config;
pub mod error;
pub mod platform;
pub mod queue;
pub mod simulate;
pub mod storage;
pub mod theme;

pub use catalog::{StreamingVideo, VideoQuality};
pub use config::{AppConfig, ConfigManager};
pub use error::{Error, ErrorKind, Result};
pub use platform::{MediaType, Platform};
pub use queue::{
    DownloadId, DownloadQueue, DownloadRecord, DownloadStatus, NewDownload, QueueConfig,
    QueueEvent, QueueStats, TransitionPolicy,
};
pub use simulate::{SimulationConfig, SimulationOutcome, TransferSimulator};
pub use storage::{JsonFilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use theme::{RestoreOutcome, Theme, ThemeChange, ThemeStore};
