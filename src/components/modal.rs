//! Modal Component
//!
//! Overlay dialog used by the create/edit forms.

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" role="dialog" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>{move || title.get()}</h2>
                    <button type="button" class="modal-close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
