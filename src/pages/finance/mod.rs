//! Accounting Area

mod dashboard;
mod inventory_report;
mod valuation;

use leptos::prelude::*;

use crate::routes::Page;

pub(super) fn render(page: Page) -> AnyView {
    match page {
        Page::Dashboard => view! { <dashboard::FinanceDashboard /> }.into_any(),
        Page::InventoryReport => view! { <inventory_report::InventoryReportPage /> }.into_any(),
        Page::Valuation => view! { <valuation::ValuationPage /> }.into_any(),
        _ => super::not_found(),
    }
}
