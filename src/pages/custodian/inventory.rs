//! Inventory Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::PageHeader;
use crate::context::use_app;
use crate::models::{InventoryItem, Role};
use crate::pages::inventory_table::InventoryTable;
use crate::routes::{Page, Route};

#[component]
pub fn InventoryPage() -> impl IntoView {
    let ctx = use_app();
    let (items, set_items) = signal(Vec::<InventoryItem>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::list_inventory().await {
                Ok(list) => {
                    web_sys::console::log_1(&format!("[Inventory] Loaded {} items", list.len()).into());
                    set_items.set(list);
                }
                Err(e) => ctx.report_error(&e),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="page">
            <PageHeader title="Inventory">
                <button
                    type="button"
                    class="btn btn-primary"
                    on:click=move |_| ctx.navigate(Route::Page(Role::PropertyCustodian, Page::InventoryNew))
                >
                    "+ Add Item"
                </button>
            </PageHeader>
            <InventoryTable
                items=items
                loading=loading
                editable=true
                export_stem="inventory"
                export_title="School Property Inventory"
            />
        </div>
    }
}
