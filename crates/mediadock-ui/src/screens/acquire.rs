//! Download screen: enqueue a URL for a chosen platform.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{AdBanner, AdSize, PlatformCard, ScreenHeader, use_notifications};
use crate::tauri_api;
use crate::types::{NewDownload, Platform, PlatformInfo};

/// Check the form before anything is sent to the host.
///
/// Returns the chosen platform, or the message for the error toast.
fn check_form(url: &str, platform: Option<Platform>) -> Result<Platform, &'static str> {
    if url.trim().is_empty() {
        return Err("Please enter a valid URL");
    }
    platform.ok_or("Please select a platform")
}

/// URL input, platform cards and the "Start Download" button.
#[component]

pub fn DownloadScreen() -> impl IntoView {
    let notifications = use_notifications();

    let (url, set_url) = signal(String::new());
    let (selected, set_selected) = signal::<Option<Platform>>(None);
    let (platforms, set_platforms) = signal::<Vec<PlatformInfo>>(vec![]);
    let (submitting, set_submitting) = signal(false);

    spawn_local(async move {
        match tauri_api::get_platforms().await {
            Ok(list) => set_platforms.set(list),
            Err(e) => notifications.error(format!("Failed to load platforms: {e}")),
        }
    });

    let ready = move || check_form(&url.get(), selected.get()).is_ok() && !submitting.get();

    let submit = move |_| {
        let current_url = url.get_untracked();
        let platform = match check_form(&current_url, selected.get_untracked()) {
            Ok(platform) => platform,
            Err(message) => {
                notifications.error(message);
                return;
            }
        };

        set_submitting.set(true);
        spawn_local(async move {
            // A link from another platform is allowed, but worth a heads-up
            if let Ok(check) = tauri_api::validate_media_url(&current_url, platform).await
                && check.is_platform_mismatch()
                && let Some(message) = check.error_message
            {
                notifications.warning(message);
            }

            let request = NewDownload::from_form(&current_url, platform, js_sys::Date::now() as u64);
            match tauri_api::add_download(request).await {
                Ok(record) => {
                    set_url.set(String::new());
                    set_selected.set(None);
                    notifications.success("Download added to queue!");
                    if let Err(e) = tauri_api::start_simulated_download(&record.id).await {
                        leptos::logging::warn!("Transfer for {} not started: {}", record.id, e);
                    }
                }
                Err(e) => notifications.error(e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="screen download-screen">
            <ScreenHeader
                title="Media Downloader"
                subtitle="Download videos and images from your favorite platforms"
            />
            <AdBanner size=AdSize::Medium />

            <section class="screen-section">
                <h2 class="section-title">"Enter URL"</h2>
                <div class="url-input">
                    <svg class="url-input-icon" viewBox="0 0 24 24" width="20" height="20" fill="currentColor">
                        <path d="M3.9 12c0-1.71 1.39-3.1 3.1-3.1h4V7H7c-2.76 0-5 2.24-5 5s2.24 5 5 5h4v-1.9H7c-1.71 0-3.1-1.39-3.1-3.1zM8 13h8v-2H8v2zm9-6h-4v1.9h4c1.71 0 3.1 1.39 3.1 3.1s-1.39 3.1-3.1 3.1h-4V17h4c2.76 0 5-2.24 5-5s-2.24-5-5-5z"/>
                    </svg>
                    <input
                        type="url"
                        placeholder="Paste your link here..."
                        prop:value=move || url.get()
                        on:input=move |ev| set_url.set(event_target_value(&ev))
                    />
                </div>
            </section>

            <section class="screen-section">
                <h2 class="section-title">"Select Platform"</h2>
                <div class="platform-list">
                    <For
                        each=move || platforms.get()
                        key=|platform| platform.id
                        children=move |platform| {
                            let id = platform.id;
                            view! {
                                <PlatformCard
                                    platform=platform
                                    selected=Signal::derive(move || selected.get() == Some(id))
                                    on_select=Callback::new(move |choice| set_selected.set(Some(choice)))
                                />
                            }
                        }
                    />
                </div>
            </section>

            <button
                class="btn btn-primary btn-block"
                disabled=move || !ready()
                on:click=submit
            >
                <svg viewBox="0 0 24 24" width="20" height="20" fill="currentColor">
                    <path d="M19 9h-4V3H9v6H5l7 7 7-7zM5 18v2h14v-2H5z"/>
                </svg>
                "Start Download"
            </button>

            <AdBanner size=AdSize::Large />
        </div>
    }
}
