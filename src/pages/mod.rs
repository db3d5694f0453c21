//! Pages
//!
//! One module per role area plus the shared pages. `RoutedPage` maps an
//! allowed route to its page component.

mod login;
mod unauthorized;
mod profile;
mod inventory_table;
mod custodian;
mod faculty;
mod ict;
mod finance;

use leptos::prelude::*;

use crate::context::AppContext;
use crate::error::{ApiError, FieldErrors};
use crate::models::Role;
use crate::routes::{Page, Route};
use crate::validation::merge;

pub use login::LoginPage;
pub use unauthorized::UnauthorizedPage;

/// Render the page for an allowed route
#[component]
pub fn RoutedPage(route: Route) -> impl IntoView {
    match route {
        Route::Login => view! { <LoginPage /> }.into_any(),
        Route::Unauthorized => view! { <UnauthorizedPage /> }.into_any(),
        Route::Page(_, Page::Profile) => view! { <profile::ProfilePage /> }.into_any(),
        Route::Page(Role::PropertyCustodian, page) => custodian::render(page),
        Route::Page(Role::Teacher, page) => faculty::render(page),
        Route::Page(Role::IctAdmin, page) => ict::render(page),
        Route::Page(Role::Accounting, page) => finance::render(page),
    }
}

/// Placeholder for a page that exists in another role's area only
fn not_found() -> AnyView {
    view! {
        <div class="empty-state">
            <h2>"Page not found"</h2>
        </div>
    }
    .into_any()
}

/// Show a failed save: backend field errors inline, everything else as a toast
fn show_save_error(ctx: &AppContext, err: &ApiError, errors: RwSignal<FieldErrors>) {
    let fields = err.field_errors();
    if fields.is_empty() {
        ctx.report_error(err);
    } else {
        errors.update(|current| merge(current, fields));
        ctx.error(err.user_message());
    }
}

/// Export the given rows to a dated CSV and toast the outcome
fn export_csv<T>(ctx: &AppContext, stem: &str, columns: &[crate::export::Column<T>], rows: &[T]) {
    let csv = crate::export::to_csv(columns, rows);
    let filename = crate::export::dated_filename(stem, &crate::format::today_iso(), "csv");
    match crate::export::download_csv(&filename, &csv) {
        Ok(()) => ctx.success(format!("Exported {} rows to {}", rows.len(), filename)),
        Err(e) => {
            web_sys::console::error_1(&format!("[Export] {}", e).into());
            ctx.error(format!("Export failed: {}", e));
        }
    }
}

/// Export the given rows to a dated PDF and toast the outcome
fn export_pdf<T>(
    ctx: &AppContext,
    title: &str,
    stem: &str,
    columns: &[crate::export::Column<T>],
    rows: &[T],
) {
    let filename = crate::export::dated_filename(stem, &crate::format::today_iso(), "pdf");
    match crate::export::export_pdf(title, columns, rows, &filename) {
        Ok(()) => ctx.success(format!("Exported {} rows to {}", rows.len(), filename)),
        Err(e) => {
            web_sys::console::error_1(&format!("[Export] {}", e).into());
            ctx.error(format!("Export failed: {}", e));
        }
    }
}
