//! Profile Page
//!
//! Account details plus the secondary menu, which mobile layouts reach
//! through the bottom bar's profile slot.

use leptos::*;

use venue_hub::{RoleMenus, SidebarView};

use crate::auth::use_auth;
use crate::components::ListSkeleton;
use crate::state::use_nav_context;

#[component]
pub fn Profile() -> impl IntoView {
    let auth = use_auth();
    let nav = use_nav_context();

    let user_id = move || {
        auth.status
            .with(|status| status.user_id().map(str::to_string))
            .unwrap_or_default()
    };
    let role = move || {
        nav.user_status
            .get()
            .and_then(|result| result.ok())
            .map(|status| status.role.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    };

    view! {
        <div class="space-y-8 max-w-xl">
            <div>
                <h1 class="text-3xl font-bold">"Profile"</h1>
                <p class="text-gray-500 mt-1">{user_id}</p>
                <p class="text-sm text-gray-400">"Role: " {role}</p>
            </div>

            {move || match nav.view.get() {
                SidebarView::Menus(menus) => view! { <ProfileActions menus=menus /> }.into_view(),
                SidebarView::Pending => view! { <ListSkeleton count=4 /> }.into_view(),
                SidebarView::Banned => view! {}.into_view(),
            }}
        </div>
    }
}

#[component]
fn ProfileActions(menus: RoleMenus) -> impl IntoView {
    let nav = use_nav_context();

    view! {
        <ul class="divide-y divide-gray-200 dark:divide-gray-700 rounded-xl bg-white dark:bg-gray-800">
            {menus.secondary().iter().map(|item| {
                let item = *item;
                view! {
                    <li>
                        <button
                            class="w-full flex items-center gap-3 px-4 py-3 text-left hover:bg-gray-100 dark:hover:bg-gray-700"
                            on:click=move |_| nav.activate(item)
                        >
                            <span class="w-6 text-center">{item.icon.glyph()}</span>
                            <span>{item.label}</span>
                        </button>
                    </li>
                }
            }).collect_view()}
        </ul>
    }
}
