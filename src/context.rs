//! Application Context
//!
//! App-wide actions provided via Leptos Context API: navigation, sign-in
//! state changes, refresh triggers and toasts.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::TOAST_MILLIS;
use crate::error::ApiError;
use crate::models::Role;
use crate::routes::{self, Route};
use crate::session::{self, Session};
use crate::store::{store_dismiss_toast, store_push_toast, AppStateStoreFields, AppStore, ToastKind};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to refetch page data - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to refetch page data - write
    set_reload_trigger: WriteSignal<u32>,
    store: AppStore,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), store: AppStore) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            store,
        }
    }

    /// Trigger a refetch on every page that listens
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn session(&self) -> Option<Session> {
        self.store.session().get()
    }

    pub fn role(&self) -> Option<Role> {
        self.store.session().with(|s| s.as_ref().map(|s| s.role))
    }

    /// Go to `route`, updating the URL hash
    pub fn navigate(&self, route: Route) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(&route.hash());
        }
        self.store.route().set(Some(route));
    }

    pub fn sign_in(&self, new_session: Session) {
        web_sys::console::log_1(&format!("[Auth] Signed in as {}", new_session.role.as_str()).into());
        session::save(&new_session);
        let home = routes::home(new_session.role);
        self.store.session().set(Some(new_session));
        self.navigate(home);
    }

    pub fn sign_out(&self) {
        session::clear();
        self.store.session().set(None);
        self.store.open_groups().write().clear();
        self.navigate(Route::Login);
    }

    fn notify(&self, kind: ToastKind, message: String) {
        let store = self.store;
        let id = store_push_toast(&store, kind, message);
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
            store_dismiss_toast(&store, id);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(ToastKind::Success, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(ToastKind::Info, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(ToastKind::Error, message.into());
    }

    /// Toast the failure; a lost session also sends the user to login
    pub fn report_error(&self, err: &ApiError) {
        web_sys::console::error_1(&format!("[App] {}", err).into());
        if err.is_unauthorized() {
            self.sign_out();
        }
        self.error(err.user_message());
    }

    pub fn dismiss(&self, toast_id: u32) {
        store_dismiss_toast(&self.store, toast_id);
    }
}

/// Get the app context
pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
