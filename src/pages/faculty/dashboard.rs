//! Teacher Dashboard

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{BarChart, ConditionBadge, PageHeader, StatCard};
use crate::context::use_app;
use crate::format;
use crate::models::{AssignedItem, Condition, Role};
use crate::routes::{Page, Route};
use crate::stats;

#[component]
pub fn FacultyDashboard() -> impl IntoView {
    let ctx = use_app();
    let (assigned, set_assigned) = signal(Vec::<AssignedItem>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::list_my_items().await {
                Ok(list) => set_assigned.set(list),
                Err(e) => ctx.report_error(&e),
            }
            set_loading.set(false);
        });
    });

    let summary = Memo::new(move |_| assigned.with(|a| stats::faculty_summary(a)));
    let stat = move |f: fn(&stats::FacultySummary) -> String| {
        Signal::derive(move || if loading.get() { "…".to_string() } else { summary.with(f) })
    };
    let condition_chart = Signal::derive(move || {
        assigned.with(|items| {
            Condition::ALL
                .iter()
                .map(|c| {
                    let n = items.iter().filter(|a| a.condition == *c).count();
                    (c.label().to_string(), n as f64)
                })
                .collect::<Vec<_>>()
        })
    });
    let attention = Memo::new(move |_| {
        assigned.with(|items| {
            items
                .iter()
                .filter(|a| a.condition.needs_attention())
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="page dashboard">
            <PageHeader title="Dashboard">
                <button
                    type="button"
                    class="btn btn-primary"
                    on:click=move |_| ctx.navigate(Route::Page(Role::Teacher, Page::MyItems))
                >
                    "View my items"
                </button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard label="Assigned Items" value=stat(|s| s.items.to_string()) />
                <StatCard label="Total Units" value=stat(|s| format::thousands(s.units)) />
                <StatCard label="In Good Condition" value=stat(|s| s.good.to_string()) tone="stat-success" />
                <StatCard label="Needs Attention" value=stat(|s| s.needs_attention.to_string()) tone="stat-danger" />
            </div>

            <BarChart title="Items by Condition" data=condition_chart />

            <section class="card">
                <h3>"Items Needing Attention"</h3>
                <Show
                    when=move || !attention.with(Vec::is_empty)
                    fallback=|| view! { <p class="muted">"All your items are in good or fair condition."</p> }
                >
                    <ul class="attention-list">
                        <For
                            each=move || attention.get()
                            key=|a| a.id
                            children=move |a| view! {
                                <li>
                                    <span class="mono">{a.property_no.clone()}</span>
                                    " "
                                    {a.item_name.clone()}
                                    " "
                                    <ConditionBadge condition=a.condition />
                                    <span class="muted">{a.remarks.clone().unwrap_or_default()}</span>
                                </li>
                            }
                        />
                    </ul>
                </Show>
            </section>
        </div>
    }
}
