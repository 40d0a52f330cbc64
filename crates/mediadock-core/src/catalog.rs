//! Read-only streaming video catalog.

use serde::{Deserialize, Serialize};

use crate::platform::{MediaType, Platform};
use crate::queue::NewDownload;

/// Resolution label of a streaming video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VideoQuality {
    /// 1280x720.
    #[serde(rename = "720p")]
    Hd720,
    /// 1920x1080.
    #[serde(rename = "1080p")]
    Hd1080,
    /// 3840x2160.
    #[serde(rename = "4K")]
    Uhd4k,
}

impl VideoQuality {
    /// Badge label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hd720 => "720p",
            Self::Hd1080 => "1080p",
            Self::Uhd4k => "4K",
        }
    }
}

impl std::fmt::Display for VideoQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A video offered on the stream screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamingVideo {
    /// Catalog identifier.
    pub id: String,
    /// Title.
    pub title: String,
    /// Source URL.
    pub url: String,
    /// Thumbnail URL.
    pub thumbnail: String,
    /// Duration label, e.g. `1:00`.
    pub duration: String,
    /// Resolution.
    pub quality: VideoQuality,
    /// Size label, e.g. `2.5 MB`.
    pub size: String,
}

impl StreamingVideo {
    /// Download request for this video. Catalog videos are queued as YouTube videos.
    #[must_use]
    pub fn to_new_download(&self) -> NewDownload {
        NewDownload::new(&self.url, &self.title, Platform::YouTube)
            .with_media_type(MediaType::Video)
            .with_size(&self.size)
            .with_thumbnail(&self.thumbnail)
    }
}

fn sample(
    id: &str,
    title: &str,
    url: &str,
    thumbnail: &str,
    duration: &str,
    quality: VideoQuality,
    size: &str,
) -> StreamingVideo {
    StreamingVideo {
        id: id.to_string(),
        title: title.to_string(),
        url: url.to_string(),
        thumbnail: thumbnail.to_string(),
        duration: duration.to_string(),
        quality,
        size: size.to_string(),
    }
}

/// The fixed sample catalog.
#[must_use]
pub fn sample_streaming_videos() -> Vec<StreamingVideo> {
    vec![
        sample(
            "1",
            "Sample Video 1",
            "https://sample-videos.com/zip/10/mp4/SampleVideo_1280x720_1mb.mp4",
            "https://images.pexels.com/photos/3945313/pexels-photo-3945313.jpeg?auto=compress&cs=tinysrgb&w=400",
            "0:30",
            VideoQuality::Hd720,
            "1.2 MB",
        ),
        sample(
            "2",
            "Sample Video 2",
            "https://sample-videos.com/zip/10/mp4/SampleVideo_1280x720_2mb.mp4",
            "https://images.pexels.com/photos/2873486/pexels-photo-2873486.jpeg?auto=compress&cs=tinysrgb&w=400",
            "1:00",
            VideoQuality::Hd1080,
            "2.5 MB",
        ),
        sample(
            "3",
            "Sample Video 3",
            "https://sample-videos.com/zip/10/mp4/SampleVideo_1280x720_5mb.mp4",
            "https://images.pexels.com/photos/1437267/pexels-photo-1437267.jpeg?auto=compress&cs=tinysrgb&w=400",
            "2:30",
            VideoQuality::Uhd4k,
            "5.8 MB",
        ),
    ]
}
