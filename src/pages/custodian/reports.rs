//! Custodian Reports
//!
//! Status and category summaries with CSV/PDF export, plus full
//! inventory and assignment listings.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{BarChart, ExportButtons, PageHeader};
use crate::context::use_app;
use crate::export;
use crate::format;
use crate::models::{AssignedItem, InventoryItem};
use crate::pages::{export_csv, export_pdf};
use crate::stats::{self, GroupTotal};

#[component]
fn SummaryTable(
    #[prop(into)] title: String,
    #[prop(into)] group_header: String,
    #[prop(into)] rows: Signal<Vec<GroupTotal>>,
    #[prop(into)] on_csv: Callback<()>,
    #[prop(into)] on_pdf: Callback<()>,
) -> impl IntoView {
    let totals = move || {
        rows.with(|r| {
            (
                r.iter().map(|g| g.count).sum::<usize>(),
                r.iter().map(|g| g.value).sum::<f64>(),
            )
        })
    };
    view! {
        <section class="card">
            <div class="card-header">
                <h3>{title}</h3>
                <ExportButtons on_csv=on_csv on_pdf=on_pdf />
            </div>
            <table class="data-table compact">
                <thead>
                    <tr>
                        <th>{group_header}</th>
                        <th class="num">"Items"</th>
                        <th class="num">"Total Value"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || rows.get().into_iter().map(|g| view! {
                        <tr>
                            <td>{g.label}</td>
                            <td class="num">{g.count}</td>
                            <td class="num">{format::peso(g.value)}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
                <tfoot>
                    <tr>
                        <th>"Total"</th>
                        <th class="num">{move || totals().0}</th>
                        <th class="num">{move || format::peso(totals().1)}</th>
                    </tr>
                </tfoot>
            </table>
        </section>
    }
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let ctx = use_app();
    let (items, set_items) = signal(Vec::<InventoryItem>::new());
    let (assigned, set_assigned) = signal(Vec::<AssignedItem>::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
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
        });
    });

    let by_status = Memo::new(move |_| items.with(|i| stats::by_status(i)));
    let by_category = Memo::new(move |_| items.with(|i| stats::by_category(i)));
    let category_chart = Signal::derive(move || {
        by_category.with(|groups| groups.iter().map(|g| (g.label.clone(), g.count as f64)).collect::<Vec<_>>())
    });

    view! {
        <div class="page">
            <PageHeader title="Reports" />

            <div class="report-grid">
                <SummaryTable
                    title="Inventory by Status"
                    group_header="Status"
                    rows=by_status
                    on_csv=move |_: ()| by_status.with_untracked(|rows| {
                        export_csv(&ctx, "inventory-by-status", &export::summary_columns(), rows)
                    })
                    on_pdf=move |_: ()| by_status.with_untracked(|rows| {
                        export_pdf(&ctx, "Inventory by Status", "inventory-by-status", &export::summary_columns(), rows)
                    })
                />
                <SummaryTable
                    title="Inventory by Category"
                    group_header="Category"
                    rows=by_category
                    on_csv=move |_: ()| by_category.with_untracked(|rows| {
                        export_csv(&ctx, "inventory-by-category", &export::summary_columns(), rows)
                    })
                    on_pdf=move |_: ()| by_category.with_untracked(|rows| {
                        export_pdf(&ctx, "Inventory by Category", "inventory-by-category", &export::summary_columns(), rows)
                    })
                />
            </div>

            <BarChart title="Items per Category" data=category_chart />

            <section class="card">
                <div class="card-header">
                    <h3>"Full Listings"</h3>
                </div>
                <div class="report-downloads">
                    <div>
                        <span>{move || format!("Inventory master list ({} items)", items.with(Vec::len))}</span>
                        <ExportButtons
                            on_csv=move |_: ()| items.with_untracked(|rows| {
                                export_csv(&ctx, "inventory", &export::inventory_columns(), rows)
                            })
                            on_pdf=move |_: ()| items.with_untracked(|rows| {
                                export_pdf(&ctx, "School Property Inventory", "inventory", &export::inventory_pdf_columns(), rows)
                            })
                            disabled=Signal::derive(move || items.with(Vec::is_empty))
                        />
                    </div>
                    <div>
                        <span>{move || format!("Assigned items ({} records)", assigned.with(Vec::len))}</span>
                        <ExportButtons
                            on_csv=move |_: ()| assigned.with_untracked(|rows| {
                                export_csv(&ctx, "assigned-items", &export::assignment_columns(), rows)
                            })
                            on_pdf=move |_: ()| assigned.with_untracked(|rows| {
                                export_pdf(&ctx, "Assigned Items", "assigned-items", &export::assignment_columns(), rows)
                            })
                            disabled=Signal::derive(move || assigned.with(Vec::is_empty))
                        />
                    </div>
                </div>
            </section>
        </div>
    }
}
