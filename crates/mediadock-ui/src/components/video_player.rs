//! Placeholder video player for the streaming catalog.
//!
//! Nothing is decoded. Play/pause and the controls overlay only flip local
//! state; the download button hands the video back to the screen.

use leptos::prelude::*;

use crate::types::StreamingVideo;

/// Format whole seconds as `m:ss`.
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Playback position label, e.g. `0:00 / 1:00`.
pub fn playback_label(position_secs: u32, duration: &str) -> String {
    format!("{} / {duration}", format_time(position_secs))
}

/// A player card for one catalog video.
#[component]

pub fn VideoPlayer(
    /// Video to show.
    video: StreamingVideo,
    /// Called with the video id when the download button is tapped.
    on_download: Callback<String>,
) -> impl IntoView {
    let (is_playing, set_is_playing) = signal(false);
    let (show_controls, set_show_controls) = signal(true);
    // Placeholder playback never advances
    let position_secs = 0;

    let id = video.id.clone();
    let quality = video.quality.clone();
    let time_label = playback_label(position_secs, &video.duration);

    view! {
        <div class="video-player">
            <div
                class="video-player-screen"
                style=format!("background-image: url('{}')", video.thumbnail)
                on:click=move |_| set_show_controls.update(|shown| *shown = !*shown)
            >
                <div class="video-player-placeholder">
                    <span class="video-player-placeholder-label">"Video Player"</span>
                    <span class="video-player-placeholder-title">{video.title.clone()}</span>
                </div>
                <Show when=move || show_controls.get()>
                    <div class="video-player-controls">
                        <div class="video-player-top">
                            <span class="quality-badge">{quality.clone()}</span>
                            <button
                                class="video-player-download"
                                aria-label="Download video"
                                on:click={
                                    let id = id.clone();
                                    move |ev: leptos::ev::MouseEvent| {
                                        ev.stop_propagation();
                                        on_download.run(id.clone());
                                    }
                                }
                            >
                                <svg viewBox="0 0 24 24" width="16" height="16" fill="currentColor">
                                    <path d="M19 9h-4V3H9v6H5l7 7 7-7zM5 18v2h14v-2H5z"/>
                                </svg>
                            </button>
                        </div>
                        <button
                            class="video-player-play"
                            aria-label=move || if is_playing.get() { "Pause" } else { "Play" }
                            on:click=move |ev: leptos::ev::MouseEvent| {
                                ev.stop_propagation();
                                set_is_playing.update(|playing| *playing = !*playing);
                            }
                        >
                            <svg viewBox="0 0 24 24" width="48" height="48" fill="currentColor">
                                <path d=move || if is_playing.get() { "M6 19h4V5H6v14zm8-14v14h4V5h-4z" } else { "M8 5v14l11-7z" } />
                            </svg>
                        </button>
                        <div class="video-player-bottom">
                            <span class="video-player-time">{time_label.clone()}</span>
                        </div>
                    </div>
                </Show>
            </div>
            <div class="video-player-details">
                <h3 class="video-player-title">{video.title}</h3>
                <div class="video-player-meta">
                    <span>{video.duration}</span>
                    <span>{video.quality}</span>
                    <span>{video.size}</span>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(65), "1:05");
        assert_eq!(format_time(150), "2:30");
    }

    #[test]
    fn test_playback_label_starts_at_zero() {
        assert_eq!(playback_label(0, "1:00"), "0:00 / 1:00");
    }
}
