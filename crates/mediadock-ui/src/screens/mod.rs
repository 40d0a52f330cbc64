//! The four top-level screens.

mod acquire;
mod manager;
mod streaming;
mod themes;

pub use acquire::DownloadScreen;
pub use manager::ManagerScreen;
pub use streaming::StreamScreen;
pub use themes::ThemesScreen;
