//! UI Components
//!
//! Layout shell, navigation and shared placeholders.

pub mod banned;
pub mod layout;
pub mod loading;
pub mod other_apps;
pub mod sidebar;

pub use banned::BannedNotice;
pub use layout::Layout;
pub use loading::{ListSkeleton, Loading};
pub use other_apps::OtherAppsModal;
pub use sidebar::Sidebar;
