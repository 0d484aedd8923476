//! Global Application State
//!
//! Color mode and viewport width, shared by the layout shell and pages.

use leptos::*;

use venue_hub::theme::COLOR_MODE_KEY;
use venue_hub::{ColorMode, KeyValueStore, LayoutMode};

use crate::config::app_config;
use crate::state::LocalStore;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    pub color_mode: RwSignal<ColorMode>,
    /// Current `window.innerWidth`
    pub viewport_width: RwSignal<f64>,
}

/// Provide global state to the component tree
pub fn provide_global_state() -> GlobalState {
    let stored_mode = LocalStore
        .get(COLOR_MODE_KEY)
        .ok()
        .flatten()
        .and_then(|value| ColorMode::parse(&value))
        .unwrap_or_default();

    let state = GlobalState {
        color_mode: create_rw_signal(stored_mode),
        viewport_width: create_rw_signal(current_width()),
    };
    apply_color_mode(stored_mode);

    window_event_listener(ev::resize, move |_| {
        state.viewport_width.set(current_width());
    });

    provide_context(state);
    state
}

/// Global state of the current component tree
pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

impl GlobalState {
    pub fn layout_mode(&self) -> LayoutMode {
        LayoutMode::for_width(
            self.viewport_width.get(),
            app_config().layout.mobile_breakpoint_px,
        )
    }

    pub fn is_mobile(&self) -> bool {
        self.layout_mode().is_mobile()
    }

    /// Flip between light and dark, persist the choice and restyle the page
    pub fn toggle_color_mode(&self) {
        let next = self.color_mode.get_untracked().toggle();
        self.color_mode.set(next);
        apply_color_mode(next);

        if let Err(e) = LocalStore.set(COLOR_MODE_KEY, next.as_str()) {
            tracing::warn!("Failed to persist color mode: {}", e);
        }
    }
}

fn current_width() -> f64 {
    window().inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(1024.0)
}

fn apply_color_mode(mode: ColorMode) {
    let Some(root) = document().document_element() else {
        return;
    };
    let classes = root.class_list();
    let result = if mode.is_dark() {
        classes.add_1("dark")
    } else {
        classes.remove_1("dark")
    };
    if let Err(e) = result {
        tracing::warn!("Failed to apply color mode: {:?}", e);
    }
}
