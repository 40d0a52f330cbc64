//! Download queue store.
//!
//! The store owns two collections:
//! - the download records, most recently added first;
//! - the read-only streaming catalog.
//!
//! Every mutation goes through [`DownloadQueue`], which serializes access with
//! an async `RwLock` and publishes a [`QueueEvent`] after each change.
//! Nothing here transfers data; [`DownloadQueue::update_progress`] is the
//! point a transfer engine (see [`crate::simulate`]) drives.

use std::collections::VecDeque;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{RwLock, mpsc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::catalog::{StreamingVideo, sample_streaming_videos};
use crate::error::{DownloadError, Result};
use crate::platform::{MediaType, Platform, validate_media_url};

/// Unique identifier of a download record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DownloadId(Uuid);

impl DownloadId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DownloadId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for DownloadId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

impl std::fmt::Display for DownloadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// Lifecycle status of a download record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DownloadStatus {
    /// Waiting to start.
    #[default]
    Pending,
    /// Transfer in progress.
    Downloading,
    /// Transfer finished.
    Completed,
    /// Transfer failed.
    Error,
}

impl DownloadStatus {
    /// Whether no further progress is expected.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Error)
    }
}

impl std::fmt::Display for DownloadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Downloading => write!(f, "downloading"),
            Self::Completed => write!(f, "completed"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Which status changes [`DownloadQueue::update_progress`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// `pending -> downloading -> {completed | error}`. A pending record may
    /// jump straight to a terminal status; a terminal record only accepts its
    /// own status again.
    #[default]
    Strict,
    /// Any status may follow any other.
    Permissive,
}

impl TransitionPolicy {
    /// Whether a record in `from` may move to `to`.
    #[must_use]
    pub const fn allows(self, from: DownloadStatus, to: DownloadStatus) -> bool {
        use DownloadStatus::{Completed, Downloading, Error, Pending};

        match self {
            Self::Permissive => true,
            Self::Strict => match from {
                Pending => true,
                Downloading => !matches!(to, Pending),
                Completed => matches!(to, Completed),
                Error => matches!(to, Error),
            },
        }
    }
}

/// Configuration for the download queue.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct QueueConfig {
    /// Status transition rules.
    #[serde(default)]
    pub transition_policy: TransitionPolicy,
    /// Require the URL host to belong to the selected platform.
    #[serde(default)]
    pub validate_platform_urls: bool,
}

/// A request to enqueue a download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDownload {
    /// Source URL.
    pub url: String,
    /// Display title.
    pub title: String,
    /// Target platform.
    pub platform: Platform,
    /// Kind of media.
    #[serde(rename = "type", default)]
    pub media_type: MediaType,
    /// Size label, e.g. `2.5 MB`.
    #[serde(default)]
    pub size: String,
    /// Thumbnail URL.
    #[serde(default)]
    pub thumbnail: String,
}

impl NewDownload {
    /// Create a request for a video with no size label or thumbnail.
    pub fn new(url: impl Into<String>, title: impl Into<String>, platform: Platform) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            platform,
            media_type: MediaType::default(),
            size: String::new(),
            thumbnail: String::new(),
        }
    }

    /// Set the media type.
    #[must_use]
    pub const fn with_media_type(mut self, media_type: MediaType) -> Self {
        self.media_type = media_type;
        self
    }

    /// Set the size label.
    #[must_use]
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    /// Set the thumbnail URL.
    #[must_use]
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = thumbnail.into();
        self
    }
}

/// A queued download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadRecord {
    /// Unique identifier.
    pub id: DownloadId,
    /// Source URL (trimmed).
    pub url: String,
    /// Display title.
    pub title: String,
    /// Target platform.
    pub platform: Platform,
    /// Kind of media.
    #[serde(rename = "type")]
    pub media_type: MediaType,
    /// Progress, 0 to 100.
    pub progress: u8,
    /// Lifecycle status.
    pub status: DownloadStatus,
    /// Size label.
    pub size: String,
    /// Thumbnail URL.
    pub thumbnail: String,
    /// When the record was added (Unix millis).
    pub added_at: u64,
    /// When the record first reached `completed` (Unix millis).
    pub completed_at: Option<u64>,
    /// Why the download failed, for records in `error`.
    pub error_message: Option<String>,
}

impl DownloadRecord {
    fn new(id: DownloadId, request: NewDownload) -> Self {
        Self {
            id,
            url: request.url.trim().to_string(),
            title: request.title.trim().to_string(),
            platform: request.platform,
            media_type: request.media_type,
            progress: 0,
            status: DownloadStatus::Pending,
            size: request.size,
            thumbnail: request.thumbnail,
            added_at: now_millis(),
            completed_at: None,
            error_message: None,
        }
    }
}

/// Event types emitted by the queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum QueueEvent {
    /// A record was added.
    Added(DownloadRecord),
    /// A record's progress or status changed.
    Updated(DownloadRecord),
    /// A record was removed.
    Removed {
        /// The removed record's identifier.
        id: DownloadId,
    },
    /// Completed records were cleared.
    Cleared {
        /// How many records were removed.
        removed: usize,
    },
}

/// Counts per status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct QueueStats {
    /// Number of records.
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

fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

struct QueueState {
    /// Most recently added first.
    items: VecDeque<DownloadRecord>,
    streaming: Vec<StreamingVideo>,
    config: QueueConfig,
}

impl QueueState {
    fn find_item_mut(&mut self, id: DownloadId) -> Option<&mut DownloadRecord> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    fn stats(&self) -> QueueStats {
        let mut stats = QueueStats {
            total: self.items.len(),
            ..QueueStats::default()
        };
        for item in &self.items {
            match item.status {
                DownloadStatus::Pending => stats.pending += 1,
                DownloadStatus::Downloading => stats.downloading += 1,
                DownloadStatus::Completed => stats.completed += 1,
                DownloadStatus::Error => stats.failed += 1,
            }
        }
        stats
    }
}

/// The download queue store.
pub struct DownloadQueue {
    state: Arc<RwLock<QueueState>>,
    event_tx: mpsc::UnboundedSender<QueueEvent>,
    event_rx: Arc<RwLock<mpsc::UnboundedReceiver<QueueEvent>>>,
}

impl DownloadQueue {
    /// Create an empty queue with default configuration and the sample
    /// streaming catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(QueueConfig::default())
    }

    /// Create an empty queue with custom configuration.
    #[must_use]
    pub fn with_config(config: QueueConfig) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        Self {
            state: Arc::new(RwLock::new(QueueState {
                items: VecDeque::new(),
                streaming: sample_streaming_videos(),
                config,
            })),
            event_tx,
            event_rx: Arc::new(RwLock::new(event_rx)),
        }
    }

    /// Validate `request` and insert it at the front as a pending record.
    ///
    /// The title must not be blank and the URL must be an `http(s)` URL with
    /// a host. When [`QueueConfig::validate_platform_urls`] is set, the host
    /// must also belong to the request's platform.
    pub async fn add(&self, request: NewDownload) -> Result<DownloadRecord> {
        let mut state = self.state.write().await;
        let check_platform = state.config.validate_platform_urls;
        self.insert(&mut state, request, check_platform)
    }

    /// Enqueue the streaming catalog entry `video_id` as a YouTube video.
    ///
    /// Catalog URLs are trusted, so the platform host check is skipped.
    pub async fn add_streaming_video(&self, video_id: &str) -> Result<DownloadRecord> {
        let mut state = self.state.write().await;
        let request = state
            .streaming
            .iter()
            .find(|video| video.id == video_id)
            .map(StreamingVideo::to_new_download)
            .ok_or_else(|| DownloadError::UnknownVideo {
                id: video_id.to_string(),
            })?;
        self.insert(&mut state, request, false)
    }

    fn insert(
        &self,
        state: &mut QueueState,
        request: NewDownload,
        check_platform: bool,
    ) -> Result<DownloadRecord> {
        if request.title.trim().is_empty() {
            warn!("Rejected download with empty title");
            return Err(DownloadError::EmptyTitle.into());
        }

        let validation = validate_media_url(&request.url, check_platform.then_some(request.platform));
        if !validation.is_valid {
            let reason = validation
                .error_message
                .unwrap_or_else(|| "invalid URL".to_string());
            warn!("Rejected download url={}: {}", request.url, reason);
            return Err(DownloadError::InvalidUrl {
                url: request.url,
                reason,
            }
            .into());
        }

        let record = DownloadRecord::new(DownloadId::new(), request);
        info!(
            "Adding download to queue: id={}, platform={}, url={}",
            record.id,
            record.platform.tag(),
            record.url
        );

        state.items.push_front(record.clone());
        let _ = self.event_tx.send(QueueEvent::Added(record.clone()));
        Ok(record)
    }

    /// Set the progress and status of record `id`.
    ///
    /// A `completed` status forces progress to 100 and stamps `completed_at`
    /// the first time only. On any error the record is left untouched.
    pub async fn update_progress(
        &self,
        id: DownloadId,
        progress: u8,
        status: DownloadStatus,
    ) -> Result<DownloadRecord> {
        self.apply_update(id, progress, status, None).await
    }

    /// Move record `id` to `error` at its current progress, with a reason.
    pub async fn fail(&self, id: DownloadId, message: impl Into<String>) -> Result<DownloadRecord> {
        let progress = {
            let state = self.state.read().await;
            state
                .items
                .iter()
                .find(|item| item.id == id)
                .map(|item| item.progress)
                .ok_or(DownloadError::NotFound { id })?
        };
        self.apply_update(id, progress, DownloadStatus::Error, Some(message.into()))
            .await
    }

    async fn apply_update(
        &self,
        id: DownloadId,
        progress: u8,
        status: DownloadStatus,
        error_message: Option<String>,
    ) -> Result<DownloadRecord> {
        if progress > 100 {
            warn!("Rejected progress {} for {}", progress, id);
            return Err(DownloadError::InvalidProgress { progress }.into());
        }

        let mut state = self.state.write().await;
        let policy = state.config.transition_policy;

        let Some(item) = state.find_item_mut(id) else {
            warn!("Cannot update download {} - not found", id);
            return Err(DownloadError::NotFound { id }.into());
        };

        if !policy.allows(item.status, status) {
            warn!(
                "Rejected status change for {}: {} -> {}",
                id, item.status, status
            );
            return Err(DownloadError::IllegalTransition {
                id,
                from: item.status,
                to: status,
            }
            .into());
        }

        item.status = status;
        item.progress = if status == DownloadStatus::Completed {
            100
        } else {
            progress
        };
        if status == DownloadStatus::Completed && item.completed_at.is_none() {
            item.completed_at = Some(now_millis());
        }
        if status == DownloadStatus::Error {
            if error_message.is_some() {
                item.error_message = error_message;
            }
        } else {
            item.error_message = None;
        }

        debug!("Download {} now {} at {}%", id, item.status, item.progress);
        if status.is_terminal() {
            info!("Download {} finished with status {}", id, status);
        }

        let record = item.clone();
        let _ = self.event_tx.send(QueueEvent::Updated(record.clone()));
        Ok(record)
    }

    /// Delete record `id` and return it.
    pub async fn remove(&self, id: DownloadId) -> Result<DownloadRecord> {
        let mut state = self.state.write().await;

        let Some(pos) = state.items.iter().position(|item| item.id == id) else {
            warn!("Cannot remove download {} - not found", id);
            return Err(DownloadError::NotFound { id }.into());
        };

        let record = state
            .items
            .remove(pos)
            .ok_or(DownloadError::NotFound { id })?;
        info!("Removed download {}", id);
        let _ = self.event_tx.send(QueueEvent::Removed { id });
        Ok(record)
    }

    /// Delete every `completed` record, keeping the order of the rest.
    ///
    /// Returns the number of records removed.
    pub async fn clear_completed(&self) -> usize {
        let mut state = self.state.write().await;
        let before = state.items.len();
        state
            .items
            .retain(|item| item.status != DownloadStatus::Completed);
        let removed = before - state.items.len();
        if removed > 0 {
            info!("Cleared {} completed downloads", removed);
        }
        let _ = self.event_tx.send(QueueEvent::Cleared { removed });
        removed
    }

    /// Get a record by identifier.
    pub async fn get(&self, id: DownloadId) -> Option<DownloadRecord> {
        let state = self.state.read().await;
        state.items.iter().find(|item| item.id == id).cloned()
    }

    /// Snapshot of every record, most recent first.
    pub async fn list(&self) -> Vec<DownloadRecord> {
        let state = self.state.read().await;
        state.items.iter().cloned().collect()
    }

    /// Number of records.
    pub async fn len(&self) -> usize {
        self.state.read().await.items.len()
    }

    /// Whether the queue holds no records.
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.items.is_empty()
    }

    /// Counts per status.
    pub async fn stats(&self) -> QueueStats {
        self.state.read().await.stats()
    }

    /// The streaming catalog.
    pub async fn streaming_videos(&self) -> Vec<StreamingVideo> {
        self.state.read().await.streaming.clone()
    }

    /// Get the current configuration.
    pub async fn config(&self) -> QueueConfig {
        self.state.read().await.config
    }

    /// Replace the configuration. Applies to subsequent operations only.
    pub async fn set_config(&self, config: QueueConfig) {
        let mut state = self.state.write().await;
        state.config = config;
        info!(
            "Queue configuration updated: policy={:?}, validate_platform_urls={}",
            config.transition_policy, config.validate_platform_urls
        );
    }

    /// Try to receive a pending event (non-blocking).
    pub async fn try_recv_event(&self) -> Option<QueueEvent> {
        let mut rx = self.event_rx.write().await;
        rx.try_recv().ok()
    }

    /// Wait for the next event.
    ///
    /// Intended for a single relay task; concurrent callers wait on each other.
    pub async fn recv_event(&self) -> Option<QueueEvent> {
        let mut rx = self.event_rx.write().await;
        rx.recv().await
    }
}

impl Default for DownloadQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DownloadQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloadQueue").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn request(title: &str) -> NewDownload {
        NewDownload::new("https://x/video", title, Platform::YouTube)
            .with_size("2MB")
            .with_thumbnail("https://x/thumb")
    }

    async fn drain(queue: &DownloadQueue) -> Vec<QueueEvent> {
        let mut events = Vec::new();
        while let Some(event) = queue.try_recv_event().await {
            events.push(event);
        }
        events
    }

    #[test]
    fn test_download_id_parse_roundtrip() {
        let id = DownloadId::new();
        let parsed: DownloadId = id.to_string().parse().expect("parse");
        assert_eq!(parsed, id);
        assert!("not-a-uuid".parse::<DownloadId>().is_err());
    }

    #[test]
    fn test_strict_policy() {
        use DownloadStatus::{Completed, Downloading, Error, Pending};
        let strict = TransitionPolicy::Strict;

        assert!(strict.allows(Pending, Downloading));
        assert!(strict.allows(Pending, Completed));
        assert!(strict.allows(Downloading, Downloading));
        assert!(strict.allows(Downloading, Error));
        assert!(!strict.allows(Downloading, Pending));
        assert!(strict.allows(Completed, Completed));
        assert!(!strict.allows(Completed, Downloading));
        assert!(!strict.allows(Error, Pending));
        assert!(TransitionPolicy::Permissive.allows(Completed, Pending));
    }

    #[test]
    fn test_record_wire_format() {
        let record = DownloadRecord::new(DownloadId::new(), request("t"));
        let json = serde_json::to_value(&record).expect("serialize");
        assert_eq!(json["type"], "video");
        assert_eq!(json["platform"], "youtube");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["progress"], 0);
    }

    #[tokio::test]
    async fn test_add_inserts_at_front_as_pending() {
        let queue = DownloadQueue::new();
        let first = queue.add(request("first")).await.expect("add first");
        let second = queue.add(request("second")).await.expect("add second");

        let items = queue.list().await;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, second.id);
        assert_eq!(items[1].id, first.id);
        for item in &items {
            assert_eq!(item.status, DownloadStatus::Pending);
            assert_eq!(item.progress, 0);
            assert!(item.completed_at.is_none());
        }
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_add_rejects_blank_title() {
        let queue = DownloadQueue::new();
        let result = queue.add(request("   ")).await;
        assert!(matches!(
            result,
            Err(Error::Download(DownloadError::EmptyTitle))
        ));
        assert!(queue.is_empty().await);
    }

    #[tokio::test]
    async fn test_add_rejects_malformed_url() {
        let queue = DownloadQueue::new();
        let bad = NewDownload::new("not a url", "t", Platform::TikTok);
        let result = queue.add(bad).await;
        assert!(matches!(
            result,
            Err(Error::Download(DownloadError::InvalidUrl { .. }))
        ));
        assert!(queue.is_empty().await);
    }

    #[tokio::test]
    async fn test_add_platform_check_when_enabled() {
        let queue = DownloadQueue::with_config(QueueConfig {
            validate_platform_urls: true,
            ..QueueConfig::default()
        });

        let wrong = NewDownload::new("https://www.tiktok.com/@a/video/1", "t", Platform::YouTube);
        assert!(queue.add(wrong).await.is_err());

        let right = NewDownload::new("https://youtu.be/abc", "t", Platform::YouTube);
        assert!(queue.add(right).await.is_ok());
        assert_eq!(queue.len().await, 1);
    }

    #[tokio::test]
    async fn test_add_trims_url_and_title() {
        let queue = DownloadQueue::new();
        let record = queue
            .add(NewDownload::new("  https://x/video ", " Title ", Platform::Instagram))
            .await
            .expect("add");
        assert_eq!(record.url, "https://x/video");
        assert_eq!(record.title, "Title");
    }

    #[tokio::test]
    async fn test_update_unknown_id_leaves_queue_unchanged() {
        let queue = DownloadQueue::new();
        queue.add(request("a")).await.expect("add");
        let before = queue.list().await;

        let result = queue
            .update_progress(DownloadId::new(), 50, DownloadStatus::Downloading)
            .await;
        assert!(matches!(
            result,
            Err(Error::Download(DownloadError::NotFound { .. }))
        ));
        assert_eq!(queue.list().await, before);
    }

    #[tokio::test]
    async fn test_update_rejects_progress_over_100() {
        let queue = DownloadQueue::new();
        let record = queue.add(request("a")).await.expect("add");
        let result = queue
            .update_progress(record.id, 101, DownloadStatus::Downloading)
            .await;
        assert!(matches!(
            result,
            Err(Error::Download(DownloadError::InvalidProgress { progress: 101 }))
        ));
        assert_eq!(queue.get(record.id).await, Some(record));
    }

    #[tokio::test]
    async fn test_completed_then_downloading_strict_vs_permissive() {
        let queue = DownloadQueue::new();
        let record = queue.add(request("a")).await.expect("add");
        queue
            .update_progress(record.id, 100, DownloadStatus::Completed)
            .await
            .expect("complete");

        let result = queue
            .update_progress(record.id, 50, DownloadStatus::Downloading)
            .await;
        assert!(matches!(
            result,
            Err(Error::Download(DownloadError::IllegalTransition {
                from: DownloadStatus::Completed,
                to: DownloadStatus::Downloading,
                ..
            }))
        ));
        let unchanged = queue.get(record.id).await.expect("still present");
        assert_eq!(unchanged.status, DownloadStatus::Completed);
        assert_eq!(unchanged.progress, 100);

        queue
            .set_config(QueueConfig {
                transition_policy: TransitionPolicy::Permissive,
                ..QueueConfig::default()
            })
            .await;
        let moved = queue
            .update_progress(record.id, 50, DownloadStatus::Downloading)
            .await
            .expect("permissive allows");
        assert_eq!(moved.status, DownloadStatus::Downloading);
        assert_eq!(moved.progress, 50);
    }

    #[tokio::test]
    async fn test_recompleting_keeps_first_timestamp() {
        let queue = DownloadQueue::new();
        let record = queue.add(request("a")).await.expect("add");

        let first = queue
            .update_progress(record.id, 100, DownloadStatus::Completed)
            .await
            .expect("complete");
        let stamp = first.completed_at.expect("timestamp set");

        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = queue
            .update_progress(record.id, 100, DownloadStatus::Completed)
            .await
            .expect("re-complete");
        assert_eq!(second.completed_at, Some(stamp));
    }

    #[tokio::test]
    async fn test_completed_normalizes_progress() {
        let queue = DownloadQueue::new();
        let record = queue.add(request("a")).await.expect("add");
        let done = queue
            .update_progress(record.id, 40, DownloadStatus::Completed)
            .await
            .expect("complete");
        assert_eq!(done.progress, 100);
    }

    #[tokio::test]
    async fn test_fail_keeps_progress_and_sets_message() {
        let queue = DownloadQueue::new();
        let record = queue.add(request("a")).await.expect("add");
        queue
            .update_progress(record.id, 30, DownloadStatus::Downloading)
            .await
            .expect("start");

        let failed = queue.fail(record.id, "connection reset").await.expect("fail");
        assert_eq!(failed.status, DownloadStatus::Error);
        assert_eq!(failed.progress, 30);
        assert_eq!(failed.error_message.as_deref(), Some("connection reset"));
        assert!(queue.fail(DownloadId::new(), "x").await.is_err());
    }

    #[tokio::test]
    async fn test_clear_completed_preserves_order() {
        let queue = DownloadQueue::new();
        // Inserted at the front, so list order is a, b, c after these adds
        let c = queue.add(request("c")).await.expect("add c");
        let b = queue.add(request("b")).await.expect("add b");
        let a = queue.add(request("a")).await.expect("add a");

        queue
            .update_progress(a.id, 100, DownloadStatus::Completed)
            .await
            .expect("complete a");
        queue
            .update_progress(c.id, 100, DownloadStatus::Completed)
            .await
            .expect("complete c");

        assert_eq!(queue.clear_completed().await, 2);
        let items = queue.list().await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, b.id);
        assert_eq!(items[0].status, DownloadStatus::Pending);

        assert_eq!(queue.clear_completed().await, 0);
    }

    #[tokio::test]
    async fn test_remove() {
        let queue = DownloadQueue::new();
        let a = queue.add(request("a")).await.expect("add a");
        let b = queue.add(request("b")).await.expect("add b");

        let before = queue.list().await;
        assert!(queue.remove(DownloadId::new()).await.is_err());
        assert_eq!(queue.list().await, before);

        let removed = queue.remove(a.id).await.expect("remove a");
        assert_eq!(removed.id, a.id);
        let after = queue.list().await;
        assert_eq!(after, vec![b]);
    }

    #[tokio::test]
    async fn test_stats() {
        let queue = DownloadQueue::new();
        let a = queue.add(request("a")).await.expect("add");
        let b = queue.add(request("b")).await.expect("add");
        queue.add(request("c")).await.expect("add");

        queue
            .update_progress(a.id, 100, DownloadStatus::Completed)
            .await
            .expect("complete");
        queue
            .update_progress(b.id, 10, DownloadStatus::Downloading)
            .await
            .expect("start");

        let stats = queue.stats().await;
        assert_eq!(
            stats,
            QueueStats {
                total: 3,
                pending: 1,
                downloading: 1,
                completed: 1,
                failed: 0,
            }
        );
    }

    #[tokio::test]
    async fn test_streaming_video_download() {
        let queue = DownloadQueue::with_config(QueueConfig {
            validate_platform_urls: true,
            ..QueueConfig::default()
        });
        assert_eq!(queue.streaming_videos().await.len(), 3);

        let record = queue.add_streaming_video("3").await.expect("catalog entry");
        assert_eq!(record.platform, Platform::YouTube);
        assert_eq!(record.size, "5.8 MB");

        let missing = queue.add_streaming_video("99").await;
        assert!(matches!(
            missing,
            Err(Error::Download(DownloadError::UnknownVideo { .. }))
        ));
    }

    #[tokio::test]
    async fn test_events() {
        let queue = DownloadQueue::new();
        let record = queue.add(request("a")).await.expect("add");
        queue
            .update_progress(record.id, 100, DownloadStatus::Completed)
            .await
            .expect("complete");
        queue.clear_completed().await;

        let events = drain(&queue).await;
        assert_eq!(events.len(), 3);
        assert!(matches!(&events[0], QueueEvent::Added(r) if r.id == record.id));
        assert!(
            matches!(&events[1], QueueEvent::Updated(r) if r.status == DownloadStatus::Completed)
        );
        assert_eq!(events[2], QueueEvent::Cleared { removed: 1 });

        // Rejected operations publish nothing
        let _ = queue.remove(record.id).await;
        assert!(queue.try_recv_event().await.is_none());
    }
}
