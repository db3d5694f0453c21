//! Property Custodian Area

mod dashboard;
mod inventory;
mod inventory_form;
mod assignments;
mod assign_form;
mod reports;

use leptos::prelude::*;

use crate::routes::Page;

pub(super) fn render(page: Page) -> AnyView {
    match page {
        Page::Dashboard => view! { <dashboard::CustodianDashboard /> }.into_any(),
        Page::Inventory => view! { <inventory::InventoryPage /> }.into_any(),
        Page::InventoryNew => view! { <inventory_form::InventoryFormPage item_id=None /> }.into_any(),
        Page::InventoryEdit(id) => view! { <inventory_form::InventoryFormPage item_id=Some(id) /> }.into_any(),
        Page::Assignments => view! { <assignments::AssignmentsPage /> }.into_any(),
        Page::AssignItem => view! { <assign_form::AssignItemPage /> }.into_any(),
        Page::Reports => view! { <reports::ReportsPage /> }.into_any(),
        _ => super::not_found(),
    }
}
