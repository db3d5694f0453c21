//! Inventory Table
//!
//! Filterable inventory listing shared by the custodian's inventory page
//! (with edit/delete actions) and the accounting inventory report.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_datatable::{apply, filter_sorted, PageSizeSelect, Paginator, SearchBox, SortDir, SortHeader, TableState};

use crate::api;
use crate::components::{DeleteConfirmButton, EmptyRow, ExportButtons, StatusBadge};
use crate::config::{DEFAULT_PAGE_SIZE, PAGE_SIZE_CHOICES};
use crate::context::use_app;
use crate::export;
use crate::format;
use crate::models::{InventoryItem, ItemStatus, Role};
use crate::routes::{Page, Route};

/// Status / category select values; empty means "all"
fn matches_filters(item: &InventoryItem, status: &str, category: &str) -> bool {
    (status.is_empty() || item.status.as_str() == status)
        && (category.is_empty() || item.category.trim() == category)
}

/// Distinct non-empty categories, sorted
fn categories(items: &[InventoryItem]) -> Vec<String> {
    let mut out: Vec<String> = items
        .iter()
        .map(|i| i.category.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect();
    out.sort();
    out.dedup();
    out
}

#[component]
pub fn InventoryTable(
    items: ReadSignal<Vec<InventoryItem>>,
    loading: ReadSignal<bool>,
    /// Show edit/delete actions
    #[prop(optional)]
    editable: bool,
    export_stem: &'static str,
    export_title: &'static str,
) -> impl IntoView {
    let ctx = use_app();
    let table = TableState::new(DEFAULT_PAGE_SIZE).sorted_by("property_no", SortDir::Asc);
    let status_filter = RwSignal::new(String::new());
    let category_filter = RwSignal::new(String::new());

    let page = Memo::new(move |_| {
        let query = table.query();
        let status = status_filter.get();
        let category = category_filter.get();
        items.with(|all| apply(all, &query, |i| matches_filters(i, &status, &category)))
    });

    let filtered_rows = move || {
        let query = table.query_untracked();
        let status = status_filter.get_untracked();
        let category = category_filter.get_untracked();
        items.with_untracked(|all| filter_sorted(all, &query, |i| matches_filters(i, &status, &category)))
    };

    let on_csv = move |_: ()| {
        let rows = filtered_rows();
        super::export_csv(&ctx, export_stem, &export::inventory_columns(), &rows);
    };
    let on_pdf = move |_: ()| {
        let rows = filtered_rows();
        super::export_pdf(&ctx, export_title, export_stem, &export::inventory_pdf_columns(), &rows);
    };

    let delete_item = move |id: u32| {
        spawn_local(async move {
            match api::delete_inventory_item(id).await {
                Ok(()) => {
                    ctx.success("Item deleted");
                    ctx.reload();
                }
                Err(e) => ctx.report_error(&e),
            }
        });
    };

    let colspan = if editable { 10 } else { 9 };

    view! {
        <div class="table-toolbar">
            <SearchBox state=table placeholder="Search property no., name, location..." />
            <select
                class="table-filter"
                prop:value=move || status_filter.get()
                on:change=move |ev| {
                    status_filter.set(event_target_value(&ev));
                    table.reset_page();
                }
            >
                <option value="">"All statuses"</option>
                {ItemStatus::ALL.iter().map(|s| view! {
                    <option value=s.as_str()>{s.label()}</option>
                }).collect_view()}
            </select>
            <select
                class="table-filter"
                prop:value=move || category_filter.get()
                on:change=move |ev| {
                    category_filter.set(event_target_value(&ev));
                    table.reset_page();
                }
            >
                <option value="">"All categories"</option>
                {move || items.with(|all| categories(all)).into_iter().map(|c| view! {
                    <option value=c.clone()>{c.clone()}</option>
                }).collect_view()}
            </select>
            <PageSizeSelect state=table choices=PAGE_SIZE_CHOICES />
            <ExportButtons
                on_csv=on_csv
                on_pdf=on_pdf
                disabled=Signal::derive(move || page.with(|p| p.filtered == 0))
            />
        </div>

        <table class="data-table">
            <thead>
                <tr>
                    <SortHeader state=table column="property_no" label="Property No." />
                    <SortHeader state=table column="name" label="Item Name" />
                    <SortHeader state=table column="category" label="Category" />
                    <SortHeader state=table column="quantity" label="Qty" />
                    <SortHeader state=table column="unit_cost" label="Unit Cost" />
                    <SortHeader state=table column="total_cost" label="Total Cost" />
                    <SortHeader state=table column="date_acquired" label="Acquired" />
                    <SortHeader state=table column="status" label="Status" />
                    <SortHeader state=table column="location" label="Location" />
                    {editable.then_some(view! { <th>"Actions"</th> })}
                </tr>
            </thead>
            <tbody>
                {move || {
                    if loading.get() {
                        return view! { <EmptyRow colspan=colspan message="Loading..." /> }.into_any();
                    }
                    let rows = page.with(|p| p.rows.clone());
                    if rows.is_empty() {
                        return view! { <EmptyRow colspan=colspan message="No items found" /> }.into_any();
                    }
                    rows.into_iter().map(|item| {
                        let id = item.id;
                        view! {
                            <tr>
                                <td class="mono">{item.property_no.clone()}</td>
                                <td>{item.name.clone()}</td>
                                <td>{item.category.clone()}</td>
                                <td class="num">{format!("{} {}", item.quantity, item.unit)}</td>
                                <td class="num">{format::peso(item.unit_cost)}</td>
                                <td class="num">{format::peso(item.total_cost())}</td>
                                <td>{format::date(&item.date_acquired)}</td>
                                <td><StatusBadge status=item.status /></td>
                                <td>{item.location.clone().unwrap_or_else(|| "-".to_string())}</td>
                                {editable.then(|| view! {
                                    <td class="row-actions">
                                        <button
                                            type="button"
                                            class="btn btn-sm"
                                            on:click=move |_| ctx.navigate(Route::Page(
                                                Role::PropertyCustodian,
                                                Page::InventoryEdit(id),
                                            ))
                                        >
                                            "Edit"
                                        </button>
                                        <DeleteConfirmButton on_confirm=move |_: ()| delete_item(id) />
                                    </td>
                                })}
                            </tr>
                        }
                    }).collect_view().into_any()
                }}
            </tbody>
        </table>

        <Paginator state=table page=page />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, category: &str, status: ItemStatus) -> InventoryItem {
        InventoryItem {
            id,
            property_no: format!("PN-{}", id),
            name: format!("Item {}", id),
            description: None,
            category: category.to_string(),
            unit: "pcs".to_string(),
            quantity: 1,
            unit_cost: 100.0,
            date_acquired: "2024-01-01".to_string(),
            status,
            location: None,
            school_id: None,
        }
    }

    #[test]
    fn test_matches_filters() {
        let chair = item(1, "Furniture", ItemStatus::Available);
        assert!(matches_filters(&chair, "", ""));
        assert!(matches_filters(&chair, "available", "Furniture"));
        assert!(!matches_filters(&chair, "assigned", ""));
        assert!(!matches_filters(&chair, "", "ICT Equipment"));
    }

    #[test]
    fn test_padded_category_matches_its_option() {
        let desk = item(2, "Furniture ", ItemStatus::Available);
        let options = categories(std::slice::from_ref(&desk));
        assert_eq!(options, vec!["Furniture"]);
        assert!(matches_filters(&desk, "", &options[0]));
    }

    #[test]
    fn test_categories_distinct_sorted() {
        let items = vec![
            item(1, "Furniture", ItemStatus::Available),
            item(2, "Books", ItemStatus::Available),
            item(3, "Furniture", ItemStatus::Lost),
            item(4, "  ", ItemStatus::Lost),
        ];
        assert_eq!(categories(&items), vec!["Books", "Furniture"]);
    }
}
