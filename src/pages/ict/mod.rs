//! ICT Administrator Area

mod dashboard;
mod accounts;
mod personnel;
mod schools;
mod backups;

use leptos::prelude::*;

use crate::routes::Page;

pub(super) fn render(page: Page) -> AnyView {
    match page {
        Page::Dashboard => view! { <dashboard::IctDashboard /> }.into_any(),
        Page::Accounts => view! { <accounts::AccountsPage /> }.into_any(),
        Page::Personnel => view! { <personnel::PersonnelPage /> }.into_any(),
        Page::Schools => view! { <schools::SchoolsPage /> }.into_any(),
        Page::Backups => view! { <backups::BackupsPage /> }.into_any(),
        _ => super::not_found(),
    }
}
