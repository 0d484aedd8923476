//! Sidebar entry.

use leptos::*;

use venue_hub::MenuItem;

use crate::state::use_nav_context;

#[component]
pub fn SidebarItem(item: MenuItem) -> impl IntoView {
    let nav = use_nav_context();

    let class = move || {
        if nav.is_selected(&item) {
            "w-full flex items-center gap-3 px-3 py-2 rounded-lg text-left font-semibold bg-blue-100 dark:bg-gray-700"
        } else {
            "w-full flex items-center gap-3 px-3 py-2 rounded-lg text-left hover:bg-gray-100 dark:hover:bg-gray-700 transition-colors"
        }
    };

    view! {
        <button class=class on:click=move |_| nav.activate(item)>
            <span class="w-6 text-center">{item.icon.glyph()}</span>
            <span>{item.label}</span>
        </button>
    }
}
