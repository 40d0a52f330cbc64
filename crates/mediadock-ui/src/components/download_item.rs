//! One row of the download manager list.

use leptos::prelude::*;

use crate::types::{DownloadRecord, DownloadStatus};

fn status_icon(status: DownloadStatus) -> &'static str {
    match status {
        DownloadStatus::Completed => {
            "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm-2 15l-5-5 1.41-1.41L10 14.17l7.59-7.59L19 8l-9 9z"
        }
        DownloadStatus::Downloading => "M19 9h-4V3H9v6H5l7 7 7-7zM5 18v2h14v-2H5z",
        DownloadStatus::Error => {
            "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm1 15h-2v-2h2v2zm0-4h-2V7h2v6z"
        }
        DownloadStatus::Pending => {
            "M11.99 2C6.47 2 2 6.48 2 12s4.47 10 9.99 10C17.52 22 22 17.52 22 12S17.52 2 11.99 2zM12 20c-4.42 0-8-3.58-8-8s3.58-8 8-8 8 3.58 8 8-3.58 8-8 8zm.5-13H11v6l5.25 3.15.75-1.23-4.5-2.67z"
        }
    }
}

const fn status_class(status: DownloadStatus) -> &'static str {
    match status {
        DownloadStatus::Completed => "status-completed",
        DownloadStatus::Downloading => "status-downloading",
        DownloadStatus::Error => "status-error",
        DownloadStatus::Pending => "status-pending",
    }
}

/// A download row: thumbnail, title, platform, size, status and delete button.
#[component]

pub fn DownloadItem(
    /// The record to show.
    record: DownloadRecord,
    /// Called with the record id when the delete button is tapped.
    on_delete: Callback<String>,
) -> impl IntoView {
    let status = record.status;
    let status_text = record.status_text();
    let progress = record.progress;
    let show_bar = record.shows_progress_bar();
    let id = record.id.clone();

    view! {
        <div class="download-item" data-status=status_class(status)>
            <img class="download-item-thumbnail" src=record.thumbnail alt="" width="60" height="60" />
            <div class="download-item-body">
                <h4 class="download-item-title" title=record.url>{record.title}</h4>
                <div class="download-item-meta">
                    <span class="download-item-platform">{record.platform.badge()}</span>
                    <span class="download-item-size">{record.size}</span>
                </div>
                <div class=format!("download-item-status {}", status_class(status))>
                    <svg viewBox="0 0 24 24" width="14" height="14" fill="currentColor">
                        <path d=status_icon(status) />
                    </svg>
                    <span>{status_text}</span>
                </div>
                {record.error_message.map(|message| view! {
                    <p class="download-item-error">{message}</p>
                })}
                {show_bar.then(|| view! {
                    <div class="progress-bar" role="progressbar" aria-valuenow=progress.to_string()>
                        <div class="progress-bar-fill" style=format!("width: {progress}%")></div>
                    </div>
                })}
            </div>
            <button
                class="download-item-delete"
                aria-label="Delete download"
                on:click=move |_| on_delete.run(id.clone())
            >
                <svg viewBox="0 0 24 24" width="18" height="18" fill="currentColor">
                    <path d="M6 19c0 1.1.9 2 2 2h8c1.1 0 2-.9 2-2V7H6v12zM19 4h-3.5l-1-1h-5l-1 1H5v2h14V4z"/>
                </svg>
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classes_are_distinct() {
        let classes = [
            DownloadStatus::Pending,
            DownloadStatus::Downloading,
            DownloadStatus::Completed,
            DownloadStatus::Error,
        ]
        .map(status_class);
        for (i, a) in classes.iter().enumerate() {
            assert!(classes[i + 1..].iter().all(|b| a != b));
        }
    }
}
