//! Page Header and Loading States

use leptos::prelude::*;

use crate::context::use_app;

/// Page title row with optional action buttons and a refresh button
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let ctx = use_app();
    view! {
        <div class="page-header">
            <h2>{title}</h2>
            <div class="page-actions">
                {children.map(|c| c())}
                <button type="button" class="btn btn-light" title="Refresh" on:click=move |_| ctx.reload()>
                    "↻ Refresh"
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn Loading() -> impl IntoView {
    view! { <div class="loading">"Loading..."</div> }
}

/// Table body row spanning all columns
#[component]
pub fn EmptyRow(colspan: u32, #[prop(into)] message: String) -> impl IntoView {
    view! {
        <tr class="empty-row">
            <td colspan=colspan.to_string()>{message}</td>
        </tr>
    }
}
