//! Sidebar Component
//!
//! Role-based navigation: a vertical list on desktop, a bottom bar on mobile.

mod bottom_bar;
mod item;

use leptos::*;

use venue_hub::{RoleMenus, SidebarView};

use crate::components::{BannedNotice, ListSkeleton};
use crate::state::{use_global_state, use_nav_context};

pub use bottom_bar::BottomNavigation;
pub use item::SidebarItem;

#[component]
pub fn Sidebar() -> impl IntoView {
    let nav = use_nav_context();
    let state = use_global_state();

    move || match nav.view.get() {
        SidebarView::Banned => view! { <BannedNotice /> }.into_view(),
        SidebarView::Pending if state.is_mobile() => view! {}.into_view(),
        SidebarView::Pending => view! {
            <SidebarFrame>
                <ListSkeleton count=4 />
            </SidebarFrame>
        }
        .into_view(),
        SidebarView::Menus(menus) if state.is_mobile() => {
            view! { <BottomNavigation menus=menus /> }.into_view()
        }
        SidebarView::Menus(menus) => view! { <DesktopMenu menus=menus /> }.into_view(),
    }
}

#[component]
fn DesktopMenu(menus: RoleMenus) -> impl IntoView {
    view! {
        <SidebarFrame>
            <nav class="space-y-1">
                {menus.primary().iter().map(|item| view! { <SidebarItem item=*item /> }).collect_view()}
            </nav>
            <hr class="my-4 border-gray-200 dark:border-gray-700" />
            <nav class="space-y-1">
                {menus.secondary().iter().map(|item| view! { <SidebarItem item=*item /> }).collect_view()}
            </nav>
        </SidebarFrame>
    }
}

/// Fixed-width column with the logo on top
#[component]
fn SidebarFrame(children: Children) -> impl IntoView {
    let state = use_global_state();

    view! {
        <aside class="h-screen w-64 shrink-0 overflow-y-hidden bg-white dark:bg-gray-800 p-4">
            <div class="mb-8">
                <img src=move || state.color_mode.get().logo() alt="Logo" width="250" />
            </div>
            {children()}
        </aside>
    }
}
