//! Stream screen: the catalog as placeholder players.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{AdBanner, AdSize, ScreenHeader, VideoPlayer, use_notifications};
use crate::tauri_api;
use crate::types::StreamingVideo;

/// Catalog videos, each with a download button.
#[component]

pub fn StreamScreen() -> impl IntoView {
    let notifications = use_notifications();
    let (videos, set_videos) = signal::<Vec<StreamingVideo>>(vec![]);

    spawn_local(async move {
        match tauri_api::get_streaming_videos().await {
            Ok(list) => set_videos.set(list),
            Err(e) => notifications.error(format!("Failed to load videos: {e}")),
        }
    });

    let on_download = Callback::new(move |video_id: String| {
        spawn_local(async move {
            match tauri_api::download_streaming_video(&video_id).await {
                Ok(record) => {
                    notifications.success(format!("{} added to queue!", record.title));
                    if let Err(e) = tauri_api::start_simulated_download(&record.id).await {
                        leptos::logging::warn!("Transfer for {} not started: {}", record.id, e);
                    }
                }
                Err(e) => notifications.error(e),
            }
        });
    });

    view! {
        <div class="screen stream-screen">
            <ScreenHeader
                title="Cloud Streaming"
                subtitle="Stream and download videos from the cloud"
            />
            <AdBanner size=AdSize::Medium />

            <section class="screen-section">
                <h2 class="section-title">"Available Videos"</h2>
                <For
                    each=move || videos.get()
                    key=|video| video.id.clone()
                    children=move |video| view! { <VideoPlayer video=video on_download=on_download /> }
                />
            </section>

            <AdBanner size=AdSize::Large />
        </div>
    }
}
