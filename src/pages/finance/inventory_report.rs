//! Accounting Inventory Report

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::PageHeader;
use crate::context::use_app;
use crate::models::InventoryItem;
use crate::pages::inventory_table::InventoryTable;

#[component]
pub fn InventoryReportPage() -> impl IntoView {
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

    view! {
        <div class="page">
            <PageHeader title="Inventory Report" />
            <InventoryTable
                items=items
                loading=loading
                export_stem="inventory-report"
                export_title="Inventory Report"
            />
        </div>
    }
}
