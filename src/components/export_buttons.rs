//! Export Buttons Component

use leptos::prelude::*;

/// CSV / PDF export actions for the currently filtered rows
#[component]
pub fn ExportButtons(
    #[prop(into)] on_csv: Callback<()>,
    #[prop(into, optional)] on_pdf: Option<Callback<()>>,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="export-buttons">
            <button
                type="button"
                class="btn btn-secondary"
                disabled=move || disabled.get()
                on:click=move |_| on_csv.run(())
            >
                "Export CSV"
            </button>
            {on_pdf.map(|on_pdf| view! {
                <button
                    type="button"
                    class="btn btn-secondary"
                    disabled=move || disabled.get()
                    on:click=move |_| on_pdf.run(())
                >
                    "Export PDF"
                </button>
            })}
        </div>
    }
}
