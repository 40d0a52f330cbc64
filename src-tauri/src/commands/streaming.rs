//! Streaming catalog and platform commands.

use mediadock_core::platform::{self, UrlValidation};
use mediadock_core::{DownloadRecord, Platform, StreamingVideo};
use serde::Serialize;
use tauri::State;
use tracing::{debug, info};

use super::error::map_err;
use super::state::AppState;

/// Platform card data.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformInfo {
    /// Wire tag.
    pub id: Platform,
    /// Display name.
    pub name: &'static str,
    /// Card description.
    pub description: &'static str,
    /// Card icon URL.
    pub icon: &'static str,
    /// Hosts accepted for this platform.
    pub domains: &'static [&'static str],
}

impl From<Platform> for PlatformInfo {
    fn from(platform: Platform) -> Self {
        Self {
            id: platform,
            name: platform.display_name(),
            description: platform.description(),
            icon: platform.icon_url(),
            domains: platform.domains(),
        }
    }
}

/// The streaming catalog.
#[tauri::command]
pub async fn get_streaming_videos(
    state: State<'_, AppState>,
) -> std::result::Result<Vec<StreamingVideo>, String> {
    debug!("Getting streaming videos");
    Ok(state.download_queue.streaming_videos().await)
}

/// Enqueue a streaming catalog video.
#[tauri::command]
pub async fn download_streaming_video(
    state: State<'_, AppState>,
    video_id: String,
) -> std::result::Result<DownloadRecord, String> {
    info!("Downloading streaming video {}", video_id);
    state
        .download_queue
        .add_streaming_video(&video_id)
        .await
        .map_err(map_err)
}

/// Every platform, in card order.
#[tauri::command]
pub fn get_platforms() -> Vec<PlatformInfo> {
    Platform::ALL.into_iter().map(PlatformInfo::from).collect()
}

/// Check a URL without enqueueing anything.
#[tauri::command]
pub fn validate_media_url(url: String, platform: Option<Platform>) -> UrlValidation {
    platform::validate_media_url(&url, platform)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platforms_in_card_order() {
        let names: Vec<_> = get_platforms().iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["WhatsApp", "TikTok", "Instagram", "YouTube"]);
    }

    #[test]
    fn test_platform_info_wire_format() {
        let json = serde_json::to_value(PlatformInfo::from(Platform::TikTok)).expect("serialize");
        assert_eq!(json["id"], "tiktok");
        assert_eq!(json["domains"][0], "tiktok.com");
    }
}
