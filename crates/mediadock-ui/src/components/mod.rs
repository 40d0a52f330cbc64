//! UI components for the MediaDock application.

mod ad_banner;
mod download_item;
mod empty_state;
mod header;
mod navigation;
mod platform_card;
mod toast;
mod video_player;

pub use ad_banner::{AdBanner, AdSize};
pub use download_item::DownloadItem;
pub use empty_state::EmptyState;
pub use header::ScreenHeader;
pub use navigation::{Tab, TabBar, icons};
pub use platform_card::PlatformCard;
pub use toast::{NotificationContext, NotificationProvider, ToastContainer, use_notifications};
pub use video_player::{VideoPlayer, format_time, playback_label};
