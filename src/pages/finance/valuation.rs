//! Asset Valuation Report
//!
//! Value per category with each category's share of the total.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ExportButtons, PageHeader};
use crate::context::use_app;
use crate::export;
use crate::format;
use crate::models::InventoryItem;
use crate::pages::{export_csv, export_pdf};
use crate::stats::{self, GroupTotal};

/// Percentage of `total`, zero when there is nothing to share
fn share(value: f64, total: f64) -> f64 {
    if total > 0.0 {
        value / total * 100.0
    } else {
        0.0
    }
}

fn valuation_rows(items: &[InventoryItem], include_written_off: bool) -> Vec<GroupTotal> {
    if include_written_off {
        stats::by_category(items)
    } else {
        let in_service: Vec<InventoryItem> = items
            .iter()
            .filter(|i| !i.status.is_written_off())
            .cloned()
            .collect();
        stats::by_category(&in_service)
    }
}

#[component]
pub fn ValuationPage() -> impl IntoView {
    let ctx = use_app();
    let (items, set_items) = signal(Vec::<InventoryItem>::new());
    let include_written_off = RwSignal::new(false);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match api::list_inventory().await {
                Ok(list) => set_items.set(list),
                Err(e) => ctx.report_error(&e),
            }
        });
    });

    let rows = Memo::new(move |_| {
        let include = include_written_off.get();
        items.with(|all| valuation_rows(all, include))
    });
    let total = Memo::new(move |_| rows.with(|r| r.iter().map(|g| g.value).sum::<f64>()));
    let title = move || {
        if include_written_off.get_untracked() {
            "Asset Valuation (all items)"
        } else {
            "Asset Valuation (in service)"
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Valuation" />

            <section class="card">
                <div class="card-header">
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || include_written_off.get()
                            on:change=move |ev| include_written_off.set(event_target_checked(&ev))
                        />
                        " Include condemned and lost items"
                    </label>
                    <ExportButtons
                        on_csv=move |_: ()| rows.with_untracked(|r| {
                            export_csv(&ctx, "asset-valuation", &export::summary_columns(), r)
                        })
                        on_pdf=move |_: ()| rows.with_untracked(|r| {
                            export_pdf(&ctx, title(), "asset-valuation", &export::summary_columns(), r)
                        })
                        disabled=Signal::derive(move || rows.with(Vec::is_empty))
                    />
                </div>

                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Category"</th>
                            <th class="num">"Items"</th>
                            <th class="num">"Total Value"</th>
                            <th class="num">"Share"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let grand = total.get();
                            rows.get().into_iter().map(|g| view! {
                                <tr>
                                    <td>{g.label.clone()}</td>
                                    <td class="num">{g.count}</td>
                                    <td class="num">{format::peso(g.value)}</td>
                                    <td class="num">{format!("{:.1}%", share(g.value, grand))}</td>
                                </tr>
                            }).collect_view()
                        }}
                    </tbody>
                    <tfoot>
                        <tr>
                            <th>"Total"</th>
                            <th class="num">{move || rows.with(|r| r.iter().map(|g| g.count).sum::<usize>())}</th>
                            <th class="num">{move || format::peso(total.get())}</th>
                            <th class="num">"100%"</th>
                        </tr>
                    </tfoot>
                </table>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemStatus;

    fn item(id: u32, category: &str, cost: f64, status: ItemStatus) -> InventoryItem {
        InventoryItem {
            id,
            property_no: format!("PN-{}", id),
            name: format!("Item {}", id),
            description: None,
            category: category.to_string(),
            unit: "pcs".to_string(),
            quantity: 1,
            unit_cost: cost,
            date_acquired: "2024-01-01".to_string(),
            status,
            location: None,
            school_id: None,
        }
    }

    #[test]
    fn test_share() {
        assert_eq!(share(25.0, 100.0), 25.0);
        assert_eq!(share(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_written_off_excluded_by_default() {
        let items = vec![
            item(1, "Furniture", 1000.0, ItemStatus::Available),
            item(2, "Furniture", 500.0, ItemStatus::Condemned),
            item(3, "Books", 200.0, ItemStatus::Lost),
        ];
        let in_service = valuation_rows(&items, false);
        assert_eq!(in_service.len(), 1);
        assert_eq!(in_service[0].value, 1000.0);

        let all = valuation_rows(&items, true);
        assert_eq!(all.len(), 2);
        assert_eq!(all.iter().map(|g| g.value).sum::<f64>(), 1700.0);
    }
}
