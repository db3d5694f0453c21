//! Stat Card Component

use leptos::prelude::*;

/// Dashboard summary card
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into, optional)] hint: Option<String>,
    #[prop(into, optional)] tone: Option<String>,
) -> impl IntoView {
    let class = format!("stat-card {}", tone.unwrap_or_default());
    view! {
        <div class=class>
            <div class="stat-label">{label}</div>
            <div class="stat-value">{move || value.get()}</div>
            {hint.map(|h| view! { <div class="stat-hint">{h}</div> })}
        </div>
    }
}
