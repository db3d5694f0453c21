//! My Items Page
//!
//! Items assigned to the signed-in teacher, with condition reporting.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_datatable::{apply, PageSizeSelect, Paginator, SearchBox, SortDir, SortHeader, TableState};

use crate::api;
use crate::components::{ConditionBadge, EmptyRow, Modal, PageHeader, SelectField, TextAreaField};
use crate::config::{DEFAULT_PAGE_SIZE, PAGE_SIZE_CHOICES};
use crate::context::use_app;
use crate::error::FieldErrors;
use crate::format;
use crate::forms::ConditionForm;
use crate::models::{AssignedItem, Condition};
use crate::pages::show_save_error;

fn condition_options() -> Vec<(String, String)> {
    Condition::ALL
        .iter()
        .map(|c| (c.as_str().to_string(), c.label().to_string()))
        .collect()
}

#[component]
fn ConditionModal(item: AssignedItem, on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app();
    let id = item.id;
    let item_name = item.item_name.clone();
    let form = RwSignal::new(ConditionForm {
        condition: item.condition,
        remarks: item.remarks.clone().unwrap_or_default(),
    });
    let errors = RwSignal::new(FieldErrors::new());
    let (saving, set_saving) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = match form.with_untracked(|f| f.to_payload()) {
            Ok(p) => p,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        let summary = format!("Condition of {} reported as {}", item_name, payload.condition.label());
        set_saving.set(true);
        spawn_local(async move {
            match api::report_condition(id, &payload).await {
                Ok(message) => {
                    ctx.success(message.unwrap_or(summary));
                    on_close.run(());
                    ctx.reload();
                }
                Err(e) => show_save_error(&ctx, &e, errors),
            }
            set_saving.set(false);
        });
    };

    let title = format!("Report Condition: {}", item.item_name);

    view! {
        <Modal title=title on_close=on_close>
            <form on:submit=on_submit novalidate=true>
                <p class="muted">{format!("{} · Qty {}", item.property_no, item.quantity)}</p>
                <SelectField
                    label="Condition"
                    name="condition"
                    options=Signal::derive(condition_options)
                    value=Signal::derive(move || form.with(|f| f.condition.as_str().to_string()))
                    on_change=move |v: String| {
                        if let Some(c) = Condition::from_str(&v) {
                            form.update(|f| f.condition = c);
                        }
                    }
                    errors=errors
                    required=true
                />
                <TextAreaField
                    label="Remarks"
                    name="remarks"
                    value=Signal::derive(move || form.with(|f| f.remarks.clone()))
                    on_input=move |v: String| form.update(|f| f.remarks = v)
                    errors=errors
                />
                {move || form.with(|f| f.condition.needs_attention()).then(|| view! {
                    <p class="field-hint">"Describe the problem so the custodian can act on it."</p>
                })}
                <div class="form-actions">
                    <button type="button" class="btn btn-light" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Submit Report" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}

#[component]
pub fn MyItemsPage() -> impl IntoView {
    let ctx = use_app();
    let (assigned, set_assigned) = signal(Vec::<AssignedItem>::new());
    let (loading, set_loading) = signal(true);
    let reporting = RwSignal::new(None::<AssignedItem>);
    let table = TableState::new(DEFAULT_PAGE_SIZE).sorted_by("date_assigned", SortDir::Desc);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::list_my_items().await {
                Ok(list) => set_assigned.set(list),
                Err(e) => ctx.report_error(&e),
            }
            set_loading.set(false);
        });
    });

    let page = Memo::new(move |_| {
        let query = table.query();
        assigned.with(|all| apply(all, &query, |_| true))
    });
    let close = Callback::new(move |_: ()| reporting.set(None));

    view! {
        <div class="page">
            <PageHeader title="My Items" />

            <div class="table-toolbar">
                <SearchBox state=table placeholder="Search my items..." />
                <PageSizeSelect state=table choices=PAGE_SIZE_CHOICES />
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <SortHeader state=table column="property_no" label="Property No." />
                        <SortHeader state=table column="item_name" label="Item" />
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
                            return view! { <EmptyRow colspan=7 message="Loading..." /> }.into_any();
                        }
                        let rows = page.with(|p| p.rows.clone());
                        if rows.is_empty() {
                            return view! { <EmptyRow colspan=7 message="No items are assigned to you" /> }.into_any();
                        }
                        rows.into_iter().map(|a| {
                            let row = a.clone();
                            view! {
                                <tr>
                                    <td class="mono">{a.property_no.clone()}</td>
                                    <td>{a.item_name.clone()}</td>
                                    <td class="num">{a.quantity}</td>
                                    <td>{format::date(&a.date_assigned)}</td>
                                    <td><ConditionBadge condition=a.condition /></td>
                                    <td class="muted">{a.remarks.clone().unwrap_or_default()}</td>
                                    <td class="row-actions">
                                        <button
                                            type="button"
                                            class="btn btn-sm"
                                            on:click=move |_| reporting.set(Some(row.clone()))
                                        >
                                            "Report Condition"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view().into_any()
                    }}
                </tbody>
            </table>

            <Paginator state=table page=page />

            {move || reporting.get().map(|item| view! { <ConditionModal item=item on_close=close /> })}
        </div>
    }
}
