//! Assigned Items Page
//!
//! Everything currently issued to teachers, with condition filter,
//! export and return-to-stock.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_datatable::{apply, filter_sorted, PageSizeSelect, Paginator, SearchBox, SortDir, SortHeader, TableState};

use crate::api;
use crate::components::{ConditionBadge, DeleteConfirmButton, EmptyRow, ExportButtons, PageHeader};
use crate::config::{DEFAULT_PAGE_SIZE, PAGE_SIZE_CHOICES};
use crate::context::use_app;
use crate::export;
use crate::format;
use crate::models::{AssignedItem, Condition, Role};
use crate::routes::{Page, Route};

fn matches_condition(item: &AssignedItem, condition: &str) -> bool {
    condition.is_empty() || item.condition.as_str() == condition
}

#[component]
pub fn AssignmentsPage() -> impl IntoView {
    let ctx = use_app();
    let (assigned, set_assigned) = signal(Vec::<AssignedItem>::new());
    let (loading, set_loading) = signal(true);
    let table = TableState::new(DEFAULT_PAGE_SIZE).sorted_by("date_assigned", SortDir::Desc);
    let condition_filter = RwSignal::new(String::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::list_assigned_items().await {
                Ok(list) => set_assigned.set(list),
                Err(e) => ctx.report_error(&e),
            }
            set_loading.set(false);
        });
    });

    let page = Memo::new(move |_| {
        let query = table.query();
        let condition = condition_filter.get();
        assigned.with(|all| apply(all, &query, |a| matches_condition(a, &condition)))
    });

    let on_csv = move |_: ()| {
        let query = table.query_untracked();
        let condition = condition_filter.get_untracked();
        let rows = assigned.with_untracked(|all| filter_sorted(all, &query, |a| matches_condition(a, &condition)));
        crate::pages::export_csv(&ctx, "assigned-items", &export::assignment_columns(), &rows);
    };

    let return_item = move |id: u32| {
        spawn_local(async move {
            match api::return_item(id).await {
                Ok(()) => {
                    ctx.success("Item returned to stock");
                    ctx.reload();
                }
                Err(e) => ctx.report_error(&e),
            }
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Assigned Items">
                <button
                    type="button"
                    class="btn btn-primary"
                    on:click=move |_| ctx.navigate(Route::Page(Role::PropertyCustodian, Page::AssignItem))
                >
                    "+ Assign Item"
                </button>
            </PageHeader>

            <div class="table-toolbar">
                <SearchBox state=table placeholder="Search item or teacher..." />
                <select
                    class="table-filter"
                    prop:value=move || condition_filter.get()
                    on:change=move |ev| {
                        condition_filter.set(event_target_value(&ev));
                        table.reset_page();
                    }
                >
                    <option value="">"All conditions"</option>
                    {Condition::ALL.iter().map(|c| view! {
                        <option value=c.as_str()>{c.label()}</option>
                    }).collect_view()}
                </select>
                <PageSizeSelect state=table choices=PAGE_SIZE_CHOICES />
                <ExportButtons on_csv=on_csv disabled=Signal::derive(move || page.with(|p| p.filtered == 0)) />
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <SortHeader state=table column="property_no" label="Property No." />
                        <SortHeader state=table column="item_name" label="Item" />
                        <SortHeader state=table column="teacher_name" label="Assigned To" />
                        <SortHeader state=table column="quantity" label="Qty" />
                        <SortHeader state=table column="date_assigned" label="Date Assigned" />
                        <SortHeader state=table column="condition" label="Condition" />
                        <th>"Remarks"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        if loading.get() {
                            return view! { <EmptyRow colspan=8 message="Loading..." /> }.into_any();
                        }
                        let rows = page.with(|p| p.rows.clone());
                        if rows.is_empty() {
                            return view! { <EmptyRow colspan=8 message="No assigned items" /> }.into_any();
                        }
                        rows.into_iter().map(|a| {
                            let id = a.id;
                            view! {
                                <tr>
                                    <td class="mono">{a.property_no.clone()}</td>
                                    <td>{a.item_name.clone()}</td>
                                    <td>{a.teacher_name.clone()}</td>
                                    <td class="num">{a.quantity}</td>
                                    <td>{format::date(&a.date_assigned)}</td>
                                    <td><ConditionBadge condition=a.condition /></td>
                                    <td class="muted">{a.remarks.clone().unwrap_or_default()}</td>
                                    <td class="row-actions">
                                        <DeleteConfirmButton label="Return" on_confirm=move |_: ()| return_item(id) />
                                    </td>
                                </tr>
                            }
                        }).collect_view().into_any()
                    }}
                </tbody>
            </table>

            <Paginator state=table page=page />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_condition() {
        let a = AssignedItem {
            id: 1,
            item_id: 9,
            property_no: "PN-9".into(),
            item_name: "Projector".into(),
            teacher_id: 2,
            teacher_name: "Jose Cruz".into(),
            quantity: 1,
            date_assigned: "2024-08-01".into(),
            condition: Condition::Damaged,
            remarks: Some("Cracked lens".into()),
        };
        assert!(matches_condition(&a, ""));
        assert!(matches_condition(&a, "damaged"));
        assert!(!matches_condition(&a, "good"));
    }
}
