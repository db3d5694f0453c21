//! Toast Stack Component
//!
//! Transient success/error messages; each dismisses itself after a delay.

use leptos::prelude::*;

use crate::context::use_app;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_app();
    let store = use_app_store();

    view! {
        <div class="toast-stack" role="status">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class()>
                            <span class="toast-message">{toast.message}</span>
                            <button type="button" class="toast-close" on:click=move |_| ctx.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
