//! Type definitions for the UI.
//!
//! These mirror the JSON the host sends over IPC. Identifiers are kept as
//! strings; the UI never interprets them.

use serde::{Deserialize, Serialize};

// =============================================================================
// Platforms
// =============================================================================

/// Content source a download targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// WhatsApp status media.
    WhatsApp,
    /// TikTok videos.
    TikTok,
    /// Instagram posts, stories and reels.
    Instagram,
    /// YouTube videos.
    YouTube,
}

impl Platform {
    /// Lowercase wire tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::WhatsApp => "whatsapp",
            Self::TikTok => "tiktok",
            Self::Instagram => "instagram",
            Self::YouTube => "youtube",
        }
    }

    /// Tag as shown on a download row.
    #[must_use]
    pub fn badge(self) -> String {
        self.tag().to_uppercase()
    }
}

/// Platform card data as served by `get_platforms`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformInfo {
    /// Wire tag.
    pub id: Platform,
    /// Display name.
    pub name: String,
    /// Card description.
    pub description: String,
    /// Card icon URL.
    pub icon: String,
    /// Hosts accepted for this platform.
    #[serde(default)]
    pub domains: Vec<String>,
}

/// Kind of media a download produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Video file.
    #[default]
    Video,
    /// Still image.
    Image,
}

/// Result of `validate_media_url`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UrlValidation {
    /// Whether the URL passed every check.
    pub is_valid: bool,
    /// Trimmed URL when valid.
    pub normalized_url: Option<String>,
    /// Lowercased host, when one could be extracted.
    pub host: Option<String>,
    /// Reason the URL was rejected.
    pub error_message: Option<String>,
}

impl UrlValidation {
    /// The URL is well formed but its host belongs to another platform.
    #[must_use]
    pub const fn is_platform_mismatch(&self) -> bool {
        !self.is_valid && self.host.is_some()
    }
}

// =============================================================================
// Downloads
// =============================================================================

/// Thumbnail used for downloads entered by URL.
pub const DEFAULT_THUMBNAIL: &str =
    "https://images.pexels.com/photos/3945313/pexels-photo-3945313.jpeg?auto=compress&cs=tinysrgb&w=200";

/// Size label used for downloads entered by URL.
pub const DEFAULT_SIZE: &str = "2.5 MB";

/// Lifecycle state of a download record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadStatus {
    /// Queued, not started.
    Pending,
    /// In flight.
    Downloading,
    /// Finished successfully.
    Completed,
    /// Failed.
    Error,
}

/// A download record as held by the host queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadRecord {
    /// Record identifier.
    pub id: String,
    /// Source URL.
    pub url: String,
    /// Display title.
    pub title: String,
    /// Target platform.
    pub platform: Platform,
    /// Media kind.
    #[serde(rename = "type")]
    pub media_type: MediaType,
    /// Progress, 0 to 100.
    pub progress: u8,
    /// Lifecycle state.
    pub status: DownloadStatus,
    /// Human-readable size.
    pub size: String,
    /// Thumbnail URL.
    pub thumbnail: String,
    /// When the record was added (Unix millis).
    #[serde(default)]
    pub added_at: u64,
    /// When the record first completed (Unix millis).
    #[serde(default)]
    pub completed_at: Option<u64>,
    /// Failure reason for records in `error`.
    #[serde(default)]
    pub error_message: Option<String>,
}

impl DownloadRecord {
    /// Status line shown on a download row.
    #[must_use]
    pub fn status_text(&self) -> String {
        match self.status {
            DownloadStatus::Completed => "Completed".to_string(),
            DownloadStatus::Downloading => format!("{}%", self.progress),
            DownloadStatus::Error => "Failed".to_string(),
            DownloadStatus::Pending => "Pending".to_string(),
        }
    }

    /// Whether the row shows a progress bar.
    #[must_use]
    pub const fn shows_progress_bar(&self) -> bool {
        matches!(self.status, DownloadStatus::Downloading)
    }
}

/// Request body for `add_download`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewDownload {
    /// Source URL.
    pub url: String,
    /// Display title.
    pub title: String,
    /// Target platform.
    pub platform: Platform,
    /// Media kind.
    #[serde(rename = "type")]
    pub media_type: MediaType,
    /// Human-readable size.
    pub size: String,
    /// Thumbnail URL.
    pub thumbnail: String,
}

impl NewDownload {
    /// Request for a URL typed into the download form.
    ///
    /// The title is generated from the platform tag and `now_millis`.
    #[must_use]
    pub fn from_form(url: &str, platform: Platform, now_millis: u64) -> Self {
        Self {
            url: url.trim().to_string(),
            title: format!("{} content - {now_millis}", platform.tag()),
            platform,
            media_type: MediaType::Video,
            size: DEFAULT_SIZE.to_string(),
            thumbnail: DEFAULT_THUMBNAIL.to_string(),
        }
    }
}

/// Per-status counts from `get_queue_stats`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct QueueStats {
    /// All records.
    pub total: usize,
    /// Records in `pending`.
    pub pending: usize,
    /// Records in `downloading`.
    pub downloading: usize,
    /// Records in `completed`.
    pub completed: usize,
    /// Records in `error`.
    pub failed: usize,
}

/// Payload of the `download-removed` event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DownloadRemoved {
    /// Identifier of the removed record.
    pub id: String,
}

/// Payload of the `downloads-cleared` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DownloadsCleared {
    /// Number of completed records dropped.
    pub removed: usize,
}

// =============================================================================
// Streaming
// =============================================================================

/// One entry of the streaming catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StreamingVideo {
    /// Catalog identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Source URL.
    pub url: String,
    /// Thumbnail URL.
    pub thumbnail: String,
    /// Duration label, e.g. `1:00`.
    pub duration: String,
    /// Quality label: `720p`, `1080p` or `4K`.
    pub quality: String,
    /// Human-readable size.
    pub size: String,
}

// =============================================================================
// Themes
// =============================================================================

/// Named colors of a theme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[allow(missing_docs)]
pub struct ThemeColors {
    pub primary: String,
    pub primary_light: String,
    pub primary_dark: String,
    pub background: String,
    pub surface: String,
    pub card: String,
    pub text: String,
    pub text_secondary: String,
    pub border: String,
    pub accent: String,
    pub success: String,
    pub warning: String,
    pub error: String,
}

/// A color theme from the host catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Theme {
    /// Catalog identifier, e.g. `dark-midnight`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Palette.
    pub colors: ThemeColors,
}

/// Themes sharing an identifier prefix.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ThemeCategory {
    /// Category key, e.g. `dark`.
    pub key: String,
    /// Themes in catalog order.
    pub themes: Vec<Theme>,
}

impl ThemeCategory {
    /// Section heading, e.g. `Dark Themes`.
    #[must_use]
    pub fn title(&self) -> String {
        let mut chars = self.key.chars();
        let capitalized = chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect::<String>()
        });
        format!("{capitalized} Themes")
    }
}

/// Result of `set_theme`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ThemeChange {
    /// The now-active theme.
    pub theme: Theme,
    /// Whether the choice was saved.
    pub persisted: bool,
}

// =============================================================================
// Errors
// =============================================================================

/// Error body returned by failing commands.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message.
    pub message: String,
    /// Error category, e.g. `not_found`.
    pub kind: String,
    /// Whether retrying may succeed.
    #[serde(default)]
    pub retryable: bool,
}

/// Extract the message from a command error string.
///
/// Commands fail with a JSON [`ErrorResponse`]; anything else is shown as is.
#[must_use]
pub fn error_message(raw: &str) -> String {
    serde_json::from_str::<ErrorResponse>(raw).map_or_else(|_| raw.to_string(), |e| e.message)
}

// =============================================================================
// Notification Types
// =============================================================================

/// Type of notification to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationType {
    /// Informational message.
    #[default]
    Info,
    /// Success message.
    Success,
    /// Warning message.
    Warning,
    /// Error message.
    Error,
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Success => write!(f, "success"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

impl NotificationType {
    /// SVG path of the toast icon.
    #[must_use]
    pub const fn icon_path(self) -> &'static str {
        match self {
            Self::Info => {
                "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm1 15h-2v-6h2v6zm0-8h-2V7h2v2z"
            }
            Self::Success => {
                "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm-2 15l-5-5 1.41-1.41L10 14.17l7.59-7.59L19 8l-9 9z"
            }
            Self::Warning => "M1 21h22L12 2 1 21zm12-3h-2v-2h2v2zm0-4h-2v-4h2v4z",
            Self::Error => {
                "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm1 15h-2v-2h2v2zm0-4h-2V7h2v6z"
            }
        }
    }
}

/// A toast notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Unique identifier for this notification.
    pub id: u64,
    /// The notification type.
    pub notification_type: NotificationType,
    /// The message to display.
    pub message: String,
    /// Duration in milliseconds before auto-dismiss (None = manual dismiss only).
    pub duration_ms: Option<u64>,
}

impl Notification {
    /// Create a new notification with a unique ID.
    #[must_use]
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);

        Self {
            id: COUNTER.fetch_add(1, Ordering::Relaxed),
            notification_type,
            message: message.into(),
            duration_ms: Some(4000),
        }
    }

    /// Create a success notification.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationType::Success, message)
    }

    /// Create a warning notification.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationType::Warning, message)
    }

    /// Create an error notification.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        let mut notification = Self::new(NotificationType::Error, message);
        notification.duration_ms = Some(6000); // Errors stay longer
        notification
    }
}
