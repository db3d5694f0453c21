//! Unauthorized Page

use leptos::prelude::*;

use crate::context::use_app;
use crate::routes::{self, Route};

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    let ctx = use_app();
    let go_home = move |_| match ctx.role() {
        Some(role) => ctx.navigate(routes::home(role)),
        None => ctx.navigate(Route::Login),
    };

    view! {
        <div class="empty-state unauthorized">
            <h2>"Access denied"</h2>
            <p>"You do not have permission to view this page."</p>
            <button type="button" class="btn btn-primary" on:click=go_home>
                "Back to my dashboard"
            </button>
        </div>
    }
}
