//! Mobile bottom action bar.

use leptos::*;

use venue_hub::{BottomBar, RoleMenus};

use crate::state::use_nav_context;

#[component]
pub fn BottomNavigation(menus: RoleMenus) -> impl IntoView {
    let nav = use_nav_context();
    let bar = BottomBar::new(menus);
    let selected = move || nav.navigator.with(|navigator| bar.selected_slot(navigator));

    let on_select = move |index: usize| {
        if let Some(activation) = nav
            .navigator
            .try_update(|navigator| bar.activate(navigator, index))
            .flatten()
        {
            nav.dispatch(activation);
        }
    };

    view! {
        <nav class="fixed bottom-0 left-0 right-0 z-30 flex justify-around bg-white dark:bg-gray-800 border-t border-gray-400 px-4 py-3">
            {bar.slots().into_iter().enumerate().map(|(index, item)| view! {
                <button
                    class="flex flex-col items-center gap-1 text-xs text-gray-500"
                    class:text-blue-600=move || selected() == Some(index)
                    on:click=move |_| on_select(index)
                >
                    <span class="text-xl">{item.icon.glyph()}</span>
                    <span>{item.label}</span>
                </button>
            }).collect_view()}
        </nav>
    }
}
