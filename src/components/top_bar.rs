//! Top Bar Component
//!
//! Page title, sidebar toggle and sign-out.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TopBar() -> impl IntoView {
    let ctx = use_app();
    let store = use_app_store();
    let (signing_out, set_signing_out) = signal(false);

    let title = move || store.route().get().map(|r| r.title()).unwrap_or("");

    let logout = move |_| {
        if signing_out.get_untracked() {
            return;
        }
        set_signing_out.set(true);
        spawn_local(async move {
            // Server-side logout is best effort
            if let Err(e) = api::logout().await {
                web_sys::console::warn_1(&format!("[TopBar] Logout request failed: {}", e).into());
            }
            set_signing_out.set(false);
            ctx.sign_out();
            ctx.info("You have been signed out.");
        });
    };

    view! {
        <header class="top-bar">
            <button
                type="button"
                class="sidebar-toggle"
                title="Toggle menu"
                on:click=move |_| store.sidebar_collapsed().update(|c| *c = !*c)
            >
                "☰"
            </button>
            <h1 class="top-bar-title">{title}</h1>
            <div class="top-bar-user">
                <span class="top-bar-role">{move || ctx.role().map(|r| r.label()).unwrap_or("")}</span>
                <button type="button" class="logout-btn" disabled=signing_out on:click=logout>
                    {move || if signing_out.get() { "Signing out..." } else { "Sign out" }}
                </button>
            </div>
        </header>
    }
}
