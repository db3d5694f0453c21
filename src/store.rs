//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::routes::Route;
use crate::session::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Info => "toast toast-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Signed-in user, mirrored in localStorage
    pub session: Option<Session>,
    /// Current route; `None` when the hash does not name a known page
    pub route: Option<Route>,
    /// Expanded sidebar groups, by label
    pub open_groups: Vec<String>,
    pub sidebar_collapsed: bool,
    pub toasts: Vec<Toast>,
    pub next_toast_id: u32,
}

impl AppState {
    pub fn new(session: Option<Session>, route: Option<Route>) -> Self {
        Self {
            session,
            route,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a toast and return its id
pub fn store_push_toast(store: &AppStore, kind: ToastKind, message: String) -> u32 {
    let id = store.next_toast_id().get_untracked();
    store.next_toast_id().set(id.wrapping_add(1));
    store.toasts().write().push(Toast { id, kind, message });
    id
}

/// Remove a toast by ID
pub fn store_dismiss_toast(store: &AppStore, toast_id: u32) {
    store.toasts().write().retain(|t| t.id != toast_id);
}
