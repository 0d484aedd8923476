//! Navigation Context
//!
//! Role lookup, selection and menu actions shared by the sidebar, the bottom
//! bar and the profile page. Provided once by the layout shell so the selection
//! survives page changes.

use leptos::*;
use leptos_router::*;

use venue_hub::{
    clear_history, sync_identity, Activation, ClearHistoryOutcome, HistoryError, MenuAction,
    MenuItem, Navigator, SessionIdentity, SidebarView, UserStatus,
};

use crate::api;
use crate::auth::{use_auth, AuthContext};
use crate::config::app_config;
use crate::state::{use_global_state, GlobalState, LocalStore};

/// Navigation state for the authenticated shell
#[derive(Clone, Copy)]
pub struct NavContext {
    pub navigator: RwSignal<Navigator>,
    pub view: Memo<SidebarView>,
    pub user_status: Resource<Option<String>, Result<UserStatus, String>>,
    pub other_apps_open: RwSignal<bool>,
    dispatch: Callback<Activation>,
}

impl NavContext {
    /// Activate a menu entry and carry out the result
    pub fn activate(&self, item: MenuItem) {
        if let Some(activation) = self.navigator.try_update(|nav| nav.activate(&item)) {
            self.dispatch.call(activation);
        }
    }

    /// Run an activation produced elsewhere (bottom bar slots)
    pub fn dispatch(&self, activation: Activation) {
        self.dispatch.call(activation);
    }

    pub fn is_selected(&self, item: &MenuItem) -> bool {
        self.navigator.with(|nav| nav.is_selected(item))
    }
}

/// Create and provide the [`NavContext`]
pub fn provide_nav_context() -> NavContext {
    let auth = use_auth();
    let state = use_global_state();
    let navigate = use_navigate();

    let user_status = create_local_resource(
        move || auth.status.with(|status| status.user_id().map(str::to_string)),
        move |user_id| async move {
            if user_id.is_none() {
                return Err("Not signed in".to_string());
            }
            let token = auth.token().await?;
            api::fetch_user_status(&token).await
        },
    );

    let view = create_memo(move |_| SidebarView::from_lookup(user_status.get().as_ref()));

    let navigator = create_rw_signal(Navigator::new());
    create_effect(move |_| {
        if let SidebarView::Menus(menus) = view.get() {
            navigator.update(|nav| nav.reconcile(menus));
        }
    });

    // Mirror identity for push notifications whenever it changes
    create_effect(move |_| {
        let lookup = user_status.get().and_then(Result::ok);
        let Some(identity) =
            auth.status.with(|status| SessionIdentity::from_lookup(status, lookup.as_ref()))
        else {
            return;
        };

        if let Err(e) = sync_identity(&LocalStore, &app_config().identity.keys(), &identity) {
            tracing::warn!("Failed to mirror session identity: {}", e);
        }
    });

    let other_apps_open = create_rw_signal(false);

    let dispatch = Callback::new(move |activation: Activation| match activation {
        Activation::Navigate(route) => navigate(route, Default::default()),
        Activation::Perform(action) => perform(action, auth, state, other_apps_open, &navigate),
    });

    let ctx = NavContext {
        navigator,
        view,
        user_status,
        other_apps_open,
        dispatch,
    };
    provide_context(ctx);
    ctx
}

/// Navigation context of the current component tree
pub fn use_nav_context() -> NavContext {
    use_context::<NavContext>().expect("NavContext not found")
}

fn perform(
    action: MenuAction,
    auth: AuthContext,
    state: GlobalState,
    other_apps_open: RwSignal<bool>,
    navigate: &impl Fn(&str, NavigateOptions),
) {
    tracing::debug!(action = ?action, "Menu action");
    match action {
        MenuAction::ToggleTheme => state.toggle_color_mode(),
        MenuAction::SignOut => auth.sign_out(),
        MenuAction::ClearHistory => spawn_local(run_clear_history(auth)),
        MenuAction::OpenOtherApps => other_apps_open.set(true),
        MenuAction::OpenProfile => navigate(venue_hub::routing::PROFILE_PATH, Default::default()),
    }
}

async fn run_clear_history(auth: AuthContext) {
    let client = api::GlooHistoryClient::new(&api::get_api_base());
    let token = auth.token().await.map_err(HistoryError::Token);

    match clear_history(&client, token).await {
        ClearHistoryOutcome::Reload => {
            if let Err(e) = window().location().reload() {
                tracing::error!("Reload failed: {:?}", e);
            }
        }
        ClearHistoryOutcome::Alert(message) => {
            if let Err(e) = window().alert_with_message(&message) {
                tracing::error!("Alert failed: {:?}", e);
            }
        }
    }
}
