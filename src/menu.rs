//! Menu Catalogs
//!
//! Static, ordered navigation entries for each role.

use crate::user::{Role, UserStatus};

/// Symbol rendered next to a menu label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Home,
    Dashboard,
    Calendar,
    People,
    Inbox,
    Notifications,
    Build,
    Report,
    DarkMode,
    Apps,
    History,
    Logout,
    Account,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Home => "🏠",
            Icon::Dashboard => "📊",
            Icon::Calendar => "📅",
            Icon::People => "👥",
            Icon::Inbox => "📥",
            Icon::Notifications => "🔔",
            Icon::Build => "🛠️",
            Icon::Report => "📝",
            Icon::DarkMode => "🌙",
            Icon::Apps => "🧩",
            Icon::History => "🧹",
            Icon::Logout => "🚪",
            Icon::Account => "👤",
        }
    }
}

/// Local actions triggered by routeless entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    ToggleTheme,
    SignOut,
    ClearHistory,
    OpenOtherApps,
    OpenProfile,
}

/// Where activating an entry leads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTarget {
    Route(&'static str),
    Action(MenuAction),
}

/// A single sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub icon: Icon,
    pub target: MenuTarget,
}

impl MenuItem {
    pub const fn route(label: &'static str, icon: Icon, route: &'static str) -> Self {
        Self {
            label,
            icon,
            target: MenuTarget::Route(route),
        }
    }

    pub const fn action(label: &'static str, icon: Icon, action: MenuAction) -> Self {
        Self {
            label,
            icon,
            target: MenuTarget::Action(action),
        }
    }

    pub fn route_path(&self) -> Option<&'static str> {
        match self.target {
            MenuTarget::Route(route) => Some(route),
            MenuTarget::Action(_) => None,
        }
    }
}

pub const ADMIN_PRIMARY: &[MenuItem] = &[
    MenuItem::route("Dashboard", Icon::Dashboard, "/admin"),
    MenuItem::route("Users", Icon::People, "/admin/manage-users"),
    MenuItem::route("Requests", Icon::Inbox, "/admin/manage-bookings"),
    MenuItem::route("Activity", Icon::Notifications, "/activity"),
];

pub const ADMIN_SECONDARY: &[MenuItem] = &[
    MenuItem::action("Dark Mode", Icon::DarkMode, MenuAction::ToggleTheme),
    MenuItem::action("Other Wits Apps", Icon::Apps, MenuAction::OpenOtherApps),
    MenuItem::action("Log Out", Icon::Logout, MenuAction::SignOut),
];

pub const MAINTENANCE_PRIMARY: &[MenuItem] = &[
    MenuItem::route("Issues", Icon::Build, "/maintenance/issues"),
    MenuItem::route("Report Issue", Icon::Report, "/venue-issue-reporting"),
    MenuItem::route("Activity", Icon::Notifications, "/activity"),
];

pub const USER_PRIMARY: &[MenuItem] = &[
    MenuItem::route("Home", Icon::Home, "/dashboard"),
    MenuItem::route("Bookings", Icon::Calendar, "/bookings"),
    MenuItem::route("Activity", Icon::Notifications, "/activity"),
];

pub const PROFILE_SECONDARY: &[MenuItem] = &[
    MenuItem::action("Dark Mode", Icon::DarkMode, MenuAction::ToggleTheme),
    MenuItem::action("Other Wits Apps", Icon::Apps, MenuAction::OpenOtherApps),
    MenuItem::action("Clear History", Icon::History, MenuAction::ClearHistory),
    MenuItem::action("Log Out", Icon::Logout, MenuAction::SignOut),
];

/// Label of the always-present profile slot
pub const PROFILE_LABEL: &str = "Profile";

/// Profile entry used by the mobile bottom bar
pub const PROFILE_ITEM: MenuItem =
    MenuItem::action(PROFILE_LABEL, Icon::Account, MenuAction::OpenProfile);

/// The active catalog pair, keyed by role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleMenus {
    Admin,
    Maintenance,
    General,
}

impl RoleMenus {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => RoleMenus::Admin,
            Role::Maintenance => RoleMenus::Maintenance,
            Role::User => RoleMenus::General,
        }
    }

    /// Catalog for a looked-up user; `None` for banned users, who get no menu at all
    pub fn for_status(status: &UserStatus) -> Option<Self> {
        if status.banned {
            None
        } else {
            Some(Self::for_role(status.role))
        }
    }

    pub fn primary(&self) -> &'static [MenuItem] {
        match self {
            RoleMenus::Admin => ADMIN_PRIMARY,
            RoleMenus::Maintenance => MAINTENANCE_PRIMARY,
            RoleMenus::General => USER_PRIMARY,
        }
    }

    pub fn secondary(&self) -> &'static [MenuItem] {
        match self {
            RoleMenus::Admin => ADMIN_SECONDARY,
            RoleMenus::Maintenance | RoleMenus::General => PROFILE_SECONDARY,
        }
    }

    /// All entries of both lists, primary first
    pub fn items(&self) -> impl Iterator<Item = &'static MenuItem> {
        self.primary().iter().chain(self.secondary().iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_role_selects_catalog() {
        assert_eq!(RoleMenus::for_role(Role::Admin).primary(), ADMIN_PRIMARY);
        assert_eq!(RoleMenus::for_role(Role::Maintenance).primary(), MAINTENANCE_PRIMARY);
        assert_eq!(RoleMenus::for_role(Role::User).primary(), USER_PRIMARY);

        assert_eq!(RoleMenus::Admin.secondary(), ADMIN_SECONDARY);
        assert_eq!(RoleMenus::Maintenance.secondary(), PROFILE_SECONDARY);
        assert_eq!(RoleMenus::General.secondary(), PROFILE_SECONDARY);
    }

    #[test]
    fn test_banned_has_no_catalog() {
        for role in [Role::Admin, Role::Maintenance, Role::User] {
            assert_eq!(RoleMenus::for_status(&UserStatus::new(role).banned()), None);
        }
        assert_eq!(
            RoleMenus::for_status(&UserStatus::new(Role::Admin)),
            Some(RoleMenus::Admin)
        );
    }

    #[test]
    fn test_labels_unique_per_list() {
        for list in [
            ADMIN_PRIMARY,
            ADMIN_SECONDARY,
            MAINTENANCE_PRIMARY,
            USER_PRIMARY,
            PROFILE_SECONDARY,
        ] {
            let labels: HashSet<_> = list.iter().map(|item| item.label).collect();
            assert_eq!(labels.len(), list.len());
        }
    }

    #[test]
    fn test_catalog_routes_are_known() {
        for menus in [RoleMenus::Admin, RoleMenus::Maintenance, RoleMenus::General] {
            for route in menus.items().filter_map(MenuItem::route_path) {
                assert!(crate::routing::AppRoute::parse(route).is_some(), "{}", route);
            }
        }
    }

    #[test]
    fn test_secondary_lists_are_actions() {
        for item in ADMIN_SECONDARY.iter().chain(PROFILE_SECONDARY) {
            assert!(item.route_path().is_none(), "{}", item.label);
        }
    }
}
