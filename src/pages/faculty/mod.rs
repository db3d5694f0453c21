//! Teacher Area

mod dashboard;
mod my_items;

use leptos::prelude::*;

use crate::routes::Page;

pub(super) fn render(page: Page) -> AnyView {
    match page {
        Page::Dashboard => view! { <dashboard::FacultyDashboard /> }.into_any(),
        Page::MyItems => view! { <my_items::MyItemsPage /> }.into_any(),
        _ => super::not_found(),
    }
}
