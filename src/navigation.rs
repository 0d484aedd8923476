//! Navigation State
//!
//! Selection state machine behind the sidebar and the mobile bottom bar.
//! Activating an entry returns what the caller must do; the navigator never
//! performs side effects itself.

use std::fmt;

use crate::menu::{MenuAction, MenuItem, MenuTarget, RoleMenus, PROFILE_ITEM, PROFILE_LABEL};
use crate::routing::PROFILE_PATH;
use crate::user::UserStatus;

/// Which entry is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Unset,
    Route(&'static str),
    Label(&'static str),
}

impl Selection {
    /// Selection an entry produces once activated
    pub fn of(item: &MenuItem) -> Self {
        match item.target {
            MenuTarget::Route(route) => Selection::Route(route),
            MenuTarget::Action(_) => Selection::Label(item.label),
        }
    }

    /// Routes match routed entries, labels match routeless ones
    pub fn matches(&self, item: &MenuItem) -> bool {
        match (*self, item.target) {
            (Selection::Route(route), MenuTarget::Route(target)) => route == target,
            (Selection::Label(label), MenuTarget::Action(_)) => label == item.label,
            _ => false,
        }
    }
}

/// What the navigation frame shows for the current role lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarView {
    /// Lookup in flight; no catalog is active
    Pending,
    /// Banned users get the notice and no menus
    Banned,
    Menus(RoleMenus),
}

impl SidebarView {
    /// Map a role lookup (`None` while pending) to the frame to render.
    /// A failed lookup falls back to the general catalog.
    pub fn from_lookup<E: fmt::Display>(lookup: Option<&Result<UserStatus, E>>) -> Self {
        match lookup {
            None => SidebarView::Pending,
            Some(Ok(status)) => {
                RoleMenus::for_status(status).map_or(SidebarView::Banned, SidebarView::Menus)
            }
            Some(Err(e)) => {
                tracing::warn!("Role lookup failed, using the general menu: {}", e);
                SidebarView::Menus(RoleMenus::General)
            }
        }
    }
}

/// Side effect requested by an activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Navigate(&'static str),
    Perform(MenuAction),
}

/// Tracks the current selection
#[derive(Debug, Clone, Copy, Default)]
pub struct Navigator {
    selection: Selection,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Select the first primary entry when nothing is selected yet
    pub fn initialize(&mut self, menus: RoleMenus) {
        if self.selection != Selection::Unset {
            return;
        }
        if let Some(first) = menus.primary().first() {
            self.selection = Selection::of(first);
            tracing::debug!(selection = ?self.selection, "Initialized selection");
        }
    }

    /// Drop a selection that the active catalog no longer contains, then re-initialize
    pub fn reconcile(&mut self, menus: RoleMenus) {
        let known = self.selection == Selection::Unset
            || self.is_profile_selected()
            || menus.items().any(|item| self.selection.matches(item));
        if !known {
            tracing::debug!(selection = ?self.selection, menus = ?menus, "Selection outside catalog");
            self.selection = Selection::Unset;
        }
        self.initialize(menus);
    }

    /// Activate an entry: routed entries navigate, routeless ones perform their action
    pub fn activate(&mut self, item: &MenuItem) -> Activation {
        self.selection = Selection::of(item);
        match item.target {
            MenuTarget::Route(route) => Activation::Navigate(route),
            MenuTarget::Action(action) => Activation::Perform(action),
        }
    }

    /// Navigate to the profile page
    pub fn open_profile(&mut self) -> Activation {
        self.selection = Selection::Route(PROFILE_PATH);
        Activation::Navigate(PROFILE_PATH)
    }

    pub fn is_selected(&self, item: &MenuItem) -> bool {
        self.selection.matches(item)
    }

    fn is_profile_selected(&self) -> bool {
        matches!(
            self.selection,
            Selection::Route(PROFILE_PATH) | Selection::Label(PROFILE_LABEL)
        )
    }
}

/// Mobile bottom bar: one slot per primary entry plus a final profile slot
#[derive(Debug, Clone, Copy)]
pub struct BottomBar {
    menus: RoleMenus,
}

impl BottomBar {
    pub fn new(menus: RoleMenus) -> Self {
        Self { menus }
    }

    pub fn slots(&self) -> Vec<&'static MenuItem> {
        self.menus
            .primary()
            .iter()
            .chain(std::iter::once(&PROFILE_ITEM))
            .collect()
    }

    pub fn profile_slot(&self) -> usize {
        self.menus.primary().len()
    }

    /// Index of the highlighted slot, if any
    pub fn selected_slot(&self, navigator: &Navigator) -> Option<usize> {
        if navigator.is_profile_selected() {
            return Some(self.profile_slot());
        }
        self.menus
            .primary()
            .iter()
            .position(|item| navigator.is_selected(item))
    }

    /// Activate the slot at `index`; out-of-range indices do nothing
    pub fn activate(&self, navigator: &mut Navigator, index: usize) -> Option<Activation> {
        if index == self.profile_slot() {
            return Some(navigator.open_profile());
        }
        self.menus
            .primary()
            .get(index)
            .map(|item| navigator.activate(item))
    }
}
