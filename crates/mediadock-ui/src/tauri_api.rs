//! Tauri API bindings for WASM.
//!
//! Thin wrappers over the host's commands. Argument structs are serialized
//! in camelCase, which is how Tauri 2 names command parameters on the JS side.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::types::{
    DownloadRecord, NewDownload, Platform, PlatformInfo, QueueStats, StreamingVideo, Theme,
    ThemeCategory, ThemeChange, UrlValidation, error_message,
};

#[wasm_bindgen]
extern "C" {
    /// The global Tauri invoke function (Tauri 2.x API).
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], js_name = invoke, catch)]
    fn tauri_invoke(cmd: &str, args: JsValue) -> Result<js_sys::Promise, JsValue>;

    /// Listen to Tauri events (Tauri 2.x API).
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "event"], js_name = listen, catch)]
    fn tauri_listen(
        event: &str,
        handler: &Closure<dyn Fn(JsValue)>,
    ) -> Result<js_sys::Promise, JsValue>;
}

/// Event names emitted by the host.
pub mod events {
    /// A record was added; payload is the record.
    pub const DOWNLOAD_ADDED: &str = "download-added";
    /// A record changed; payload is the record.
    pub const DOWNLOAD_UPDATED: &str = "download-updated";
    /// A record was removed; payload is `{ id }`.
    pub const DOWNLOAD_REMOVED: &str = "download-removed";
    /// Completed records were cleared; payload is `{ removed }`.
    pub const DOWNLOADS_CLEARED: &str = "downloads-cleared";
    /// The active theme changed; payload is the theme.
    pub const THEME_CHANGED: &str = "theme-changed";
}

/// Listen to a Tauri event.
///
/// The handler receives the raw event object; see [`event_payload`].
/// Returns the function that stops listening.
pub async fn listen_to_event<F>(event: &str, handler: F) -> Result<js_sys::Function, String>
where
    F: Fn(JsValue) + 'static,
{
    if !is_tauri_available() {
        return Err("Tauri API not available".to_string());
    }

    let closure = Closure::new(handler);
    let promise = tauri_listen(event, &closure).map_err(|e| {
        e.as_string()
            .unwrap_or_else(|| "Failed to listen to event".to_string())
    })?;

    // Listeners live for the whole session
    closure.forget();

    let unlisten = JsFuture::from(promise).await.map_err(|e| {
        e.as_string()
            .unwrap_or_else(|| "Failed to set up event listener".to_string())
    })?;

    Ok(unlisten.unchecked_into())
}

/// Deserialize the `payload` field of a Tauri event object.
pub fn event_payload<T: serde::de::DeserializeOwned>(event: &JsValue) -> Result<T, String> {
    let payload = js_sys::Reflect::get(event, &JsValue::from_str("payload"))
        .map_err(|_| "Event has no payload".to_string())?;
    serde_wasm_bindgen::from_value(payload).map_err(|e| format!("Failed to parse payload: {e}"))
}

/// Check if the Tauri API is available.
fn is_tauri_available() -> bool {
    web_sys::window()
        .and_then(|window| js_sys::Reflect::get(&window, &JsValue::from_str("__TAURI__")).ok())
        .is_some_and(|tauri| !tauri.is_undefined())
}

/// Call a Tauri command with the given arguments.
///
/// Errors are reduced to their message, ready for a toast.
async fn invoke<T: serde::de::DeserializeOwned>(
    cmd: &str,
    args: impl Serialize,
) -> Result<T, String> {
    if !is_tauri_available() {
        let msg = "Tauri API not available - are you running in a Tauri app?";
        leptos::logging::error!("{}", msg);
        return Err(msg.to_string());
    }

    let args_value = serde_wasm_bindgen::to_value(&args).map_err(|e| {
        let msg = format!("Failed to serialize args: {e}");
        leptos::logging::error!("{}", msg);
        msg
    })?;

    let promise = tauri_invoke(cmd, args_value).map_err(|e| {
        let msg = e
            .as_string()
            .unwrap_or_else(|| "Failed to invoke Tauri command".to_string());
        leptos::logging::error!("invoke {} failed: {}", cmd, msg);
        msg
    })?;

    let result = JsFuture::from(promise).await.map_err(|e| {
        let raw = e
            .as_string()
            .unwrap_or_else(|| "Unknown error from Tauri command".to_string());
        leptos::logging::error!("{} failed: {}", cmd, raw);
        error_message(&raw)
    })?;

    serde_wasm_bindgen::from_value(result).map_err(|e| {
        let msg = format!("Failed to deserialize result: {e}");
        leptos::logging::error!("{} returned unexpected data: {}", cmd, msg);
        msg
    })
}

#[derive(Serialize)]
struct NoArgs {}

// =============================================================================
// Theme API
// =============================================================================

/// The active theme.
pub async fn get_current_theme() -> Result<Theme, String> {
    invoke("get_current_theme", NoArgs {}).await
}

/// The theme catalog grouped by category.
pub async fn get_theme_categories() -> Result<Vec<ThemeCategory>, String> {
    invoke("get_theme_categories", NoArgs {}).await
}

/// Activate a theme and save the choice.
pub async fn set_theme(theme_id: &str) -> Result<ThemeChange, String> {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Args<'a> {
        theme_id: &'a str,
    }

    invoke("set_theme", Args { theme_id }).await
}

// =============================================================================
// Download API
// =============================================================================

/// Snapshot of the queue, newest first.
pub async fn get_downloads() -> Result<Vec<DownloadRecord>, String> {
    invoke("get_downloads", NoArgs {}).await
}

/// Enqueue a download.
pub async fn add_download(request: NewDownload) -> Result<DownloadRecord, String> {
    #[derive(Serialize)]
    struct Args {
        request: NewDownload,
    }

    invoke("add_download", Args { request }).await
}

/// Remove a download, stopping its transfer if one is running.
pub async fn remove_download(id: &str) -> Result<DownloadRecord, String> {
    #[derive(Serialize)]
    struct Args<'a> {
        id: &'a str,
    }

    invoke("remove_download", Args { id }).await
}

/// Drop every completed download. Returns how many were dropped.
pub async fn clear_completed_downloads() -> Result<usize, String> {
    invoke("clear_completed_downloads", NoArgs {}).await
}

/// Per-status counts.
pub async fn get_queue_stats() -> Result<QueueStats, String> {
    invoke("get_queue_stats", NoArgs {}).await
}

/// Start the simulated transfer for a queued download.
///
/// Returns `false` if a transfer for it is already running.
pub async fn start_simulated_download(id: &str) -> Result<bool, String> {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Args<'a> {
        id: &'a str,
        fail_at: Option<u8>,
    }

    invoke("start_simulated_download", Args { id, fail_at: None }).await
}

// =============================================================================
// Streaming and platform API
// =============================================================================

/// The streaming catalog.
pub async fn get_streaming_videos() -> Result<Vec<StreamingVideo>, String> {
    invoke("get_streaming_videos", NoArgs {}).await
}

/// Enqueue a catalog video.
pub async fn download_streaming_video(video_id: &str) -> Result<DownloadRecord, String> {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Args<'a> {
        video_id: &'a str,
    }

    invoke("download_streaming_video", Args { video_id }).await
}

/// Platform cards, in display order.
pub async fn get_platforms() -> Result<Vec<PlatformInfo>, String> {
    invoke("get_platforms", NoArgs {}).await
}

/// Check a URL against a platform without enqueueing it.
pub async fn validate_media_url(url: &str, platform: Platform) -> Result<UrlValidation, String> {
    #[derive(Serialize)]
    struct Args<'a> {
        url: &'a str,
        platform: Platform,
    }

    invoke("validate_media_url", Args { url, platform }).await
}
