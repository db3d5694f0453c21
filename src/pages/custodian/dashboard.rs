//! Custodian Dashboard

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{BarChart, PageHeader, StatCard, StatusBadge};
use crate::context::use_app;
use crate::format;
use crate::models::{AssignedItem, InventoryItem, Role};
use crate::routes::{Page, Route};
use crate::stats;

const RECENT_COUNT: usize = 5;

#[component]
pub fn CustodianDashboard() -> impl IntoView {
    let ctx = use_app();
    let (items, set_items) = signal(Vec::<InventoryItem>::new());
    let (assigned, set_assigned) = signal(Vec::<AssignedItem>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        set_loading.set(true);
        spawn_local(async move {
            let (inventory, assignments) =
                futures::join!(api::list_inventory(), api::list_assigned_items());
            match (inventory, assignments) {
                (Ok(inventory), Ok(assignments)) => {
                    set_items.set(inventory);
                    set_assigned.set(assignments);
                }
                (Err(e), _) | (_, Err(e)) => ctx.report_error(&e),
            }
            set_loading.set(false);
        });
    });

    let summary = Memo::new(move |_| {
        items.with(|i| assigned.with(|a| stats::custodian_summary(i, a)))
    });
    let status_chart = Signal::derive(move || {
        items.with(|i| {
            stats::by_status(i)
                .into_iter()
                .map(|g| (g.label, g.count as f64))
                .collect::<Vec<_>>()
        })
    });
    let category_chart = Signal::derive(move || {
        items.with(|i| {
            stats::by_category(i)
                .into_iter()
                .map(|g| (g.label, g.value))
                .collect::<Vec<_>>()
        })
    });
    let recent = Memo::new(move |_| items.with(|i| stats::recent_acquisitions(i, RECENT_COUNT)));

    let stat = move |f: fn(&stats::CustodianSummary) -> String| {
        Signal::derive(move || {
            if loading.get() {
                "…".to_string()
            } else {
                summary.with(f)
            }
        })
    };

    view! {
        <div class="page dashboard">
            <PageHeader title="Dashboard">
                <button
                    type="button"
                    class="btn btn-primary"
                    on:click=move |_| ctx.navigate(Route::Page(Role::PropertyCustodian, Page::InventoryNew))
                >
                    "+ Add Item"
                </button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard label="Inventory Items" value=stat(|s| format::thousands(s.items as u64)) hint="distinct records" />
                <StatCard label="Total Units" value=stat(|s| format::thousands(s.units)) />
                <StatCard label="Total Value" value=stat(|s| format::peso(s.total_value)) tone="stat-primary" />
                <StatCard label="Available" value=stat(|s| s.available.to_string()) tone="stat-success" />
                <StatCard label="Assigned" value=stat(|s| s.assigned.to_string()) />
                <StatCard label="Active Assignments" value=stat(|s| s.assignments.to_string()) hint="items issued to teachers" />
                <StatCard label="Under Repair" value=stat(|s| s.under_repair.to_string()) tone="stat-warning" />
                <StatCard label="Condemned / Lost" value=stat(|s| s.written_off.to_string()) tone="stat-danger" />
            </div>

            <div class="chart-grid">
                <BarChart title="Items by Status" data=status_chart />
                <BarChart title="Value by Category" data=category_chart format_value=format::peso />
            </div>

            <section class="card">
                <h3>"Recent Acquisitions"</h3>
                <table class="data-table compact">
                    <thead>
                        <tr>
                            <th>"Property No."</th>
                            <th>"Item"</th>
                            <th>"Acquired"</th>
                            <th>"Total Cost"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || recent.get()
                            key=|item| item.id
                            children=move |item| view! {
                                <tr>
                                    <td class="mono">{item.property_no.clone()}</td>
                                    <td>{item.name.clone()}</td>
                                    <td>{format::date(&item.date_acquired)}</td>
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
