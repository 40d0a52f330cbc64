//! Content platforms a download can target and URL checks against them.
//!
//! URLs are never dereferenced. Validation only confirms that a URL is an
//! `http(s)` URL with a host, and optionally that the host belongs to the
//! platform the user picked.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Scheme and host of an absolute `http(s)` URL.
const URL_HOST_PATTERN: &str = r"(?i)^https?://([a-z0-9.-]+)(?::\d+)?(?:[/?#]|$)";

/// Content source a download request targets.
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
    /// Every platform, in the order the acquire screen lists them.
    pub const ALL: [Self; 4] = [Self::WhatsApp, Self::TikTok, Self::Instagram, Self::YouTube];

    /// Lowercase tag used on the wire and in generated titles.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::WhatsApp => "whatsapp",
            Self::TikTok => "tiktok",
            Self::Instagram => "instagram",
            Self::YouTube => "youtube",
        }
    }

    /// Human-readable platform name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::WhatsApp => "WhatsApp",
            Self::TikTok => "TikTok",
            Self::Instagram => "Instagram",
            Self::YouTube => "YouTube",
        }
    }

    /// Short description shown on the platform card.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::WhatsApp => "Download status videos and images",
            Self::TikTok => "Save your favorite TikTok videos",
            Self::Instagram => "Download posts, stories, and reels",
            Self::YouTube => "Save videos for offline viewing",
        }
    }

    /// Icon shown on the platform card.
    #[must_use]
    pub const fn icon_url(self) -> &'static str {
        match self {
            Self::WhatsApp => {
                "https://images.pexels.com/photos/147413/twitter-facebook-together-exchange-of-information-147413.jpeg?auto=compress&cs=tinysrgb&w=100&h=100"
            }
            Self::TikTok => {
                "https://images.pexels.com/photos/5797999/pexels-photo-5797999.jpeg?auto=compress&cs=tinysrgb&w=100&h=100"
            }
            Self::Instagram => {
                "https://images.pexels.com/photos/1680172/pexels-photo-1680172.jpeg?auto=compress&cs=tinysrgb&w=100&h=100"
            }
            Self::YouTube => {
                "https://images.pexels.com/photos/2873486/pexels-photo-2873486.jpeg?auto=compress&cs=tinysrgb&w=100&h=100"
            }
        }
    }

    /// Registrable domains whose hosts (and subdomains) belong to this platform.
    #[must_use]
    pub const fn domains(self) -> &'static [&'static str] {
        match self {
            Self::WhatsApp => &["whatsapp.com", "whatsapp.net", "wa.me"],
            Self::TikTok => &["tiktok.com"],
            Self::Instagram => &["instagram.com", "instagr.am"],
            Self::YouTube => &["youtube.com", "youtu.be"],
        }
    }

    /// Whether `host` is one of this platform's domains or a subdomain of one.
    #[must_use]
    pub fn owns_host(self, host: &str) -> bool {
        let host = host.trim_end_matches('.').to_ascii_lowercase();
        self.domains().iter().any(|domain| {
            host == *domain
                || host
                    .strip_suffix(domain)
                    .is_some_and(|prefix| prefix.ends_with('.'))
        })
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Kind of media a download produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Video file.
    #[default]
    Video,
    /// Still image.
    Image,
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Video => write!(f, "Video"),
            Self::Image => write!(f, "Image"),
        }
    }
}

/// Outcome of checking a URL against a platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlValidation {
    /// Whether the URL is acceptable.
    pub is_valid: bool,
    /// The trimmed URL, when valid.
    pub normalized_url: Option<String>,
    /// Lowercased host extracted from the URL, when one was found.
    pub host: Option<String>,
    /// Why the URL was rejected.
    pub error_message: Option<String>,
}

impl UrlValidation {
    fn valid(url: &str, host: String) -> Self {
        Self {
            is_valid: true,
            normalized_url: Some(url.to_string()),
            host: Some(host),
            error_message: None,
        }
    }

    fn invalid(host: Option<String>, error_message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            normalized_url: None,
            host,
            error_message: Some(error_message.into()),
        }
    }
}

/// Extract the lowercased host from an absolute `http(s)` URL.
#[must_use]
pub fn extract_host(url: &str) -> Option<String> {
    let re = Regex::new(URL_HOST_PATTERN).ok()?;
    re.captures(url.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_ascii_lowercase())
        .filter(|host| !host.starts_with('.') && !host.contains(".."))
}

/// Check that `url` is well formed and, when `platform` is given, that its
/// host belongs to that platform.
///
/// # Examples
///
/// ```rust
/// use mediadock_core::platform::{Platform, validate_media_url};
///
/// let ok = validate_media_url("https://youtu.be/abc123", Some(Platform::YouTube));
/// assert!(ok.is_valid);
///
/// let wrong = validate_media_url("https://www.tiktok.com/@a/video/1", Some(Platform::YouTube));
/// assert!(!wrong.is_valid);
/// ```
#[must_use]
pub fn validate_media_url(url: &str, platform: Option<Platform>) -> UrlValidation {
    let url = url.trim();

    if url.is_empty() {
        return UrlValidation::invalid(None, "URL cannot be empty");
    }

    let lower = url.to_ascii_lowercase();
    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        return UrlValidation::invalid(None, "URL must start with http:// or https://");
    }

    let Some(host) = extract_host(url) else {
        return UrlValidation::invalid(None, "URL does not contain a valid host");
    };

    match platform {
        Some(platform) if !platform.owns_host(&host) => UrlValidation::invalid(
            Some(host),
            format!(
                "URL is not a {} link (expected {})",
                platform.display_name(),
                platform.domains().join(" or ")
            ),
        ),
        _ => UrlValidation::valid(url, host),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_serde_tags() {
        let json = serde_json::to_string(&Platform::WhatsApp).expect("serialize");
        assert_eq!(json, "\"whatsapp\"");
        let parsed: Platform = serde_json::from_str("\"youtube\"").expect("deserialize");
        assert_eq!(parsed, Platform::YouTube);
    }

    #[test]
    fn test_owns_host_subdomains() {
        assert!(Platform::YouTube.owns_host("www.youtube.com"));
        assert!(Platform::YouTube.owns_host("m.youtube.com"));
        assert!(Platform::YouTube.owns_host("youtu.be"));
        assert!(!Platform::YouTube.owns_host("notyoutube.com"));
        assert!(Platform::WhatsApp.owns_host("wa.me"));
        assert!(!Platform::Instagram.owns_host("tiktok.com"));
    }

    #[test]
    fn test_extract_host() {
        assert_eq!(
            extract_host("https://www.TikTok.com/@user/video/1"),
            Some("www.tiktok.com".to_string())
        );
        assert_eq!(
            extract_host("http://youtu.be:8080/x"),
            Some("youtu.be".to_string())
        );
        assert_eq!(extract_host("https://x/video"), Some("x".to_string()));
        assert_eq!(extract_host("https://.bad/x"), None);
        assert_eq!(extract_host("https:///x"), None);
        assert_eq!(extract_host("ftp://example.com"), None);
    }

    #[test]
    fn test_validate_empty_url() {
        let result = validate_media_url("   ", None);
        assert!(!result.is_valid);
        assert_eq!(result.error_message.as_deref(), Some("URL cannot be empty"));
    }

    #[test]
    fn test_validate_requires_scheme() {
        let result = validate_media_url("www.youtube.com/watch?v=1", Some(Platform::YouTube));
        assert!(!result.is_valid);
        assert!(
            result
                .error_message
                .is_some_and(|m| m.contains("http://"))
        );
    }

    #[test]
    fn test_validate_platform_mismatch() {
        let result = validate_media_url(
            "https://www.instagram.com/reel/xyz",
            Some(Platform::TikTok),
        );
        assert!(!result.is_valid);
        assert_eq!(result.host.as_deref(), Some("www.instagram.com"));
        assert!(
            result
                .error_message
                .is_some_and(|m| m.contains("TikTok"))
        );
    }

    #[test]
    fn test_validate_without_platform_accepts_any_host() {
        let result = validate_media_url(" https://x.example/video ", None);
        assert!(result.is_valid);
        assert_eq!(
            result.normalized_url.as_deref(),
            Some("https://x.example/video")
        );
    }

    #[test]
    fn test_every_platform_has_card_text() {
        for platform in Platform::ALL {
            assert!(!platform.display_name().is_empty());
            assert!(!platform.description().is_empty());
            assert!(platform.icon_url().starts_with("https://"));
            assert!(!platform.domains().is_empty());
        }
    }
}
