//! Delete Confirm Button Component
//!
//! Inline two-step confirmation for destructive table actions.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows the action label first. When clicked, asks "Are you sure?" with
/// confirm/cancel buttons; only confirm runs `on_confirm`.
///
/// # Arguments
/// * `label` - Text of the initial button (e.g. "Delete", "Return")
/// * `on_confirm` - Callback to execute when the user confirms
#[component]
pub fn DeleteConfirmButton(
    #[prop(into, optional)] label: Option<String>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Delete".to_string());
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show
            when=move || confirming.get()
            fallback=move || {
                let label = label.clone();
                view! {
                    <button
                        type="button"
                        class="btn btn-danger btn-sm"
                        disabled=move || disabled.get()
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirming.set(true);
                        }
                    >
                        {label}
                    </button>
                }
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Are you sure?"</span>
                <button
                    type="button"
                    class="btn btn-danger btn-sm"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button
                    type="button"
                    class="btn btn-sm"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    "No"
                </button>
            </span>
        </Show>
    }
}
