//! Status Badges

use leptos::prelude::*;

use crate::models::{Condition, ItemStatus};

#[component]
pub fn StatusBadge(status: ItemStatus) -> impl IntoView {
    let class = format!("badge badge-{}", status.as_str());
    view! { <span class=class>{status.label()}</span> }
}

#[component]
pub fn ConditionBadge(condition: Condition) -> impl IntoView {
    let class = format!("badge badge-{}", condition.as_str());
    view! { <span class=class>{condition.label()}</span> }
}

#[component]
pub fn ActiveBadge(active: bool) -> impl IntoView {
    if active {
        view! { <span class="badge badge-active">"Active"</span> }.into_any()
    } else {
        view! { <span class="badge badge-inactive">"Inactive"</span> }.into_any()
    }
}
