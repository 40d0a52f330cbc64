//! Bottom tab bar.

use leptos::prelude::*;

/// The four top-level screens.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Tab {
    /// Acquire by URL.
    #[default]
    Download,
    /// Streaming catalog.
    Stream,
    /// Queue manager.
    Manager,
    /// Theme picker.
    Themes,
}

impl Tab {
    /// Tabs in bar order.
    pub const ALL: [Self; 4] = [Self::Download, Self::Stream, Self::Manager, Self::Themes];

    /// Tab label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Download => "Download",
            Self::Stream => "Stream",
            Self::Manager => "Manager",
            Self::Themes => "Themes",
        }
    }

    const fn icon(self) -> &'static str {
        match self {
            Self::Download => icons::DOWNLOAD,
            Self::Stream => icons::PLAY,
            Self::Manager => icons::SETTINGS,
            Self::Themes => icons::PALETTE,
        }
    }
}

/// Tab bar pinned to the bottom of the window.
#[component]

pub fn TabBar(
    /// The selected tab.
    active: ReadSignal<Tab>,
    /// Called with the tab the user picked.
    on_select: Callback<Tab>,
) -> impl IntoView {
    view! {
        <nav class="tab-bar" role="tablist">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class="tab-item"
                            class:active=move || active.get() == tab
                            role="tab"
                            aria-selected=move || (active.get() == tab).to_string()
                            on:click=move |_| on_select.run(tab)
                        >
                            <svg class="tab-item-icon" viewBox="0 0 24 24" width="22" height="22" fill="currentColor">
                                <path d=tab.icon() />
                            </svg>
                            <span class="tab-item-label">{tab.label()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// Icon paths for the tab bar.
pub mod icons {
    /// Download icon.
    pub const DOWNLOAD: &str = "M19 9h-4V3H9v6H5l7 7 7-7zM5 18v2h14v-2H5z";
    /// Play icon.
    pub const PLAY: &str = "M8 5v14l11-7z";
    /// Settings icon.
    pub const SETTINGS: &str = "M19.14 12.94c.04-.31.06-.63.06-.94 0-.31-.02-.63-.06-.94l2.03-1.58c.18-.14.23-.41.12-.61l-1.92-3.32c-.12-.22-.37-.29-.59-.22l-2.39.96c-.5-.38-1.03-.7-1.62-.94l-.36-2.54c-.04-.24-.24-.41-.48-.41h-3.84c-.24 0-.43.17-.47.41l-.36 2.54c-.59.24-1.13.57-1.62.94l-2.39-.96c-.22-.08-.47 0-.59.22L2.74 8.87c-.12.21-.08.47.12.61l2.03 1.58c-.04.31-.06.63-.06.94s.02.63.06.94l-2.03 1.58c-.18.14-.23.41-.12.61l1.92 3.32c.12.22.37.29.59.22l2.39-.96c.5.38 1.03.7 1.62.94l.36 2.54c.05.24.24.41.48.41h3.84c.24 0 .44-.17.47-.41l.36-2.54c.59-.24 1.13-.56 1.62-.94l2.39.96c.22.08.47 0 .59-.22l1.92-3.32c.12-.22.07-.47-.12-.61l-2.01-1.58zM12 15.6c-1.98 0-3.6-1.62-3.6-3.6s1.62-3.6 3.6-3.6 3.6 1.62 3.6 3.6-1.62 3.6-3.6 3.6z";
    /// Palette icon.
    pub const PALETTE: &str = "M12 3c-4.97 0-9 4.03-9 9s4.03 9 9 9c.83 0 1.5-.67 1.5-1.5 0-.39-.15-.74-.39-1.01-.23-.26-.38-.61-.38-.99 0-.83.67-1.5 1.5-1.5H16c2.76 0 5-2.24 5-5 0-4.42-4.03-8-9-8zm-5.5 9c-.83 0-1.5-.67-1.5-1.5S5.67 9 6.5 9 8 9.67 8 10.5 7.33 12 6.5 12zm3-4C8.67 8 8 7.33 8 6.5S8.67 5 9.5 5s1.5.67 1.5 1.5S10.33 8 9.5 8zm5 0c-.83 0-1.5-.67-1.5-1.5S13.67 5 14.5 5s1.5.67 1.5 1.5S15.33 8 14.5 8zm3 4c-.83 0-1.5-.67-1.5-1.5S16.67 9 17.5 9s1.5.67 1.5 1.5-.67 1.5-1.5 1.5z";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_order_and_labels() {
        let labels: Vec<_> = Tab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["Download", "Stream", "Manager", "Themes"]);
        assert_eq!(Tab::default(), Tab::Download);
    }

    #[test]
    fn test_icons_are_valid() {
        assert!(Tab::ALL.iter().all(|t| !t.icon().is_empty()));
    }
}
