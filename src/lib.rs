//! # Venue Hub
//!
//! Navigation core for the campus venue-booking and facilities-management
//! front-end. Everything here is free of any UI framework so the browser app
//! (`venue-hub-ui`) and the `venue-hub` CLI share the same decisions.
//!
//! ## Modules
//!
//! - [`routing`]: Route table and the auth-gated routing decision
//! - [`menu`]: Static per-role menu catalogs
//! - [`navigation`]: Selection state machine and mobile bottom bar projection
//! - [`identity`]: Session identity mirror for push notifications
//! - [`history`]: Clear-booking-history flow
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use venue_hub::{resolve, AppRoute, Navigator, RoleMenus, RouteDecision, SessionStatus, Role};
//!
//! let session = SessionStatus::signed_in("user_123");
//! assert_eq!(resolve(&session, "/"), RouteDecision::Redirect(AppRoute::Dashboard));
//!
//! let menus = RoleMenus::for_role(Role::Admin);
//! let mut navigator = Navigator::new();
//! navigator.initialize(menus);
//! assert!(navigator.is_selected(&menus.primary()[0]));
//! ```

pub mod config;
pub mod history;
pub mod identity;
pub mod layout;
pub mod menu;
pub mod navigation;
pub mod routing;
pub mod session;
pub mod theme;
pub mod user;

pub use config::{generate_default_config, Config, ConfigError, LoggingConfig, OtherApp};
pub use history::{
    clear_history, ClearHistoryOutcome, HistoryClient, HistoryError, HistoryResult,
    CLEAR_HISTORY_FAILED,
};
pub use identity::{sync_identity, IdentityKeys, KeyValueStore, MemoryStore, StoreError, SyncOutcome};
pub use layout::LayoutMode;
pub use menu::{Icon, MenuAction, MenuItem, MenuTarget, RoleMenus};
pub use navigation::{Activation, BottomBar, Navigator, Selection, SidebarView};
pub use routing::{resolve, AppRoute, RouteDecision};
pub use session::{SessionIdentity, SessionStatus};
pub use theme::ColorMode;
pub use user::{Role, UserStatus};
