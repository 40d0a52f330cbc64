//! Placeholder advertisement slot.
//!
//! Renders a fixed-size box; no ad network is contacted.

use leptos::prelude::*;

/// Ad slot size.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AdSize {
    /// Compact strip.
    Small,
    /// Default slot.
    #[default]
    Medium,
    /// Tall slot.
    Large,
}

impl AdSize {
    /// Slot height in pixels.
    pub const fn height_px(self) -> u32 {
        match self {
            Self::Small => 50,
            Self::Medium => 80,
            Self::Large => 120,
        }
    }

    /// Label font size in pixels.
    pub const fn font_px(self) -> u32 {
        match self {
            Self::Small => 12,
            Self::Medium => 14,
            Self::Large => 16,
        }
    }

    const fn class(self) -> &'static str {
        match self {
            Self::Small => "ad-banner-small",
            Self::Medium => "ad-banner-medium",
            Self::Large => "ad-banner-large",
        }
    }
}

/// An advertisement placeholder.
#[component]
pub fn AdBanner(#[prop(default = AdSize::Medium)] size: AdSize) -> impl IntoView {
    let style = format!("height: {}px", size.height_px());
    let text_style = format!("font-size: {}px", size.font_px());

    view! {
        <div class=format!("ad-banner {}", size.class()) style=style data-testid="ad-banner">
            <div class="ad-banner-content">
                <svg viewBox="0 0 24 24" width="20" height="20" fill="var(--color-primary)">
                    <path d="M19 19H5V5h7V3H5c-1.11 0-2 .9-2 2v14c0 1.1.89 2 2 2h14c1.1 0 2-.9 2-2v-7h-2v7zM14 3v2h3.59l-9.83 9.83 1.41 1.41L19 6.41V10h2V3h-7z"/>
                </svg>
                <span class="ad-banner-text" style=text_style>"Advertisement Space"</span>
            </div>
            <span class="ad-banner-label">"Ad"</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ad_size_metrics() {
        assert_eq!(
            [AdSize::Small, AdSize::Medium, AdSize::Large].map(AdSize::height_px),
            [50, 80, 120]
        );
        assert_eq!(
            [AdSize::Small, AdSize::Medium, AdSize::Large].map(AdSize::font_px),
            [12, 14, 16]
        );
    }

    #[test]
    fn test_default_is_medium() {
        assert_eq!(AdSize::default(), AdSize::Medium);
        assert_eq!(AdSize::default().class(), "ad-banner-medium");
    }
}
