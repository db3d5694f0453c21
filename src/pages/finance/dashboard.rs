//! Accounting Dashboard

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{BarChart, PageHeader, StatCard, StatusBadge};
use crate::context::use_app;
use crate::format;
use crate::models::{InventoryItem, Role};
use crate::routes::{Page, Route};
use crate::stats::{self, FinanceSummary};

const TOP_COUNT: usize = 5;

#[component]
pub fn FinanceDashboard() -> impl IntoView {
    let ctx = use_app();
    let (items, set_items) = signal(Vec::<InventoryItem>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::list_inventory().await {
                Ok(list) => set_items.set(list),
                Err(e) => ctx.report_error(&e),
            }
            set_loading.set(false);
        });
    });

    let summary = Memo::new(move |_| items.with(|i| stats::finance_summary(i)));
    let top = Memo::new(move |_| items.with(|i| stats::top_by_value(i, TOP_COUNT)));
    let stat = move |f: fn(&FinanceSummary) -> String| {
        Signal::derive(move || if loading.get() { "…".to_string() } else { summary.with(f) })
    };
    let category_chart = Signal::derive(move || {
        summary.with(|s| {
            s.by_category
                .iter()
                .map(|g| (g.label.clone(), g.value))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="page dashboard">
            <PageHeader title="Dashboard">
                <button
                    type="button"
                    class="btn btn-primary"
                    on:click=move |_| ctx.navigate(Route::Page(Role::Accounting, Page::Valuation))
                >
                    "Valuation report"
                </button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard label="Total Asset Value" value=stat(|s| format::peso(s.total_value)) tone="stat-primary" />
                <StatCard label="In Service" value=stat(|s| format::peso(s.in_service_value)) tone="stat-success" />
                <StatCard label="Condemned / Lost" value=stat(|s| format::peso(s.written_off_value)) tone="stat-danger" />
                <StatCard label="Categories" value=stat(|s| s.by_category.len().to_string()) />
            </div>

            <BarChart title="Asset Value by Category" data=category_chart format_value=format::peso />

            <section class="card">
                <h3>"Highest Value Items"</h3>
                <table class="data-table compact">
                    <thead>
                        <tr>
                            <th>"Property No."</th>
                            <th>"Item"</th>
                            <th class="num">"Qty"</th>
                            <th class="num">"Total Cost"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || top.get()
                            key=|item| item.id
                            children=move |item| view! {
                                <tr>
                                    <td class="mono">{item.property_no.clone()}</td>
                                    <td>{item.name.clone()}</td>
                                    <td class="num">{item.quantity}</td>
                                    <td class="num">{format::peso(item.total_cost())}</td>
                                    <td><StatusBadge status=item.status /></td>
                                </tr>
                            }
                        />
                    </tbody>
                </table>
            </section>
        </div>
    }
}
