//! School Inventory Frontend App
//!
//! Root component: session restore, hash routing, route guard and the
//! sidebar/top-bar layout around the current page.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Loading, Sidebar, ToastStack, TopBar};
use crate::context::AppContext;
use crate::pages::RoutedPage;
use crate::routes::{self, Guard, Route};
use crate::session;
use crate::store::{AppState, AppStateStoreFields};

/// Route named by the current `location.hash`
fn current_route() -> Option<Route> {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .and_then(|hash| Route::parse(&hash))
}

fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(&format!("{} | School Property Inventory", title));
    }
}

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::new(session::load(), current_route()));
    let ctx = AppContext::new(signal(0u32), store);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    web_sys::console::log_1(
        &format!(
            "[App] Started, signed in: {}",
            store.session().with_untracked(Option::is_some)
        )
        .into(),
    );

    // Back/forward buttons and hand-edited URLs
    let _ = window_event_listener(ev::hashchange, move |_| {
        store.route().set(current_route());
    });

    let guarded = Memo::new(move |_| {
        let route = store.route().get();
        store.session().with(|s| routes::guard(route, s.as_ref()))
    });

    Effect::new(move |_| match guarded.get() {
        Guard::Redirect(to) => {
            web_sys::console::log_1(&format!("[Router] Redirecting to {}", to.path()).into());
            ctx.navigate(to);
        }
        Guard::Allow(route) => set_document_title(route.title()),
    });

    let allowed = Memo::new(move |_| match guarded.get() {
        Guard::Allow(route) => Some(route),
        Guard::Redirect(_) => None,
    });
    // Login, and pages reached without a session, render without the dashboard chrome
    let with_layout = Memo::new(move |_| {
        store.session().with(Option::is_some) && allowed.get().is_some_and(|r| r != Route::Login)
    });

    let page = move || match allowed.get() {
        Some(route) => view! { <RoutedPage route=route /> }.into_any(),
        None => view! { <Loading /> }.into_any(),
    };

    view! {
        <Show when=move || with_layout.get() fallback=page>
            <div class="app-layout">
                <Sidebar />
                <div class="app-main">
                    <TopBar />
                    <main class="main-content">{page}</main>
                </div>
            </div>
        </Show>
        <ToastStack />
    }
}
