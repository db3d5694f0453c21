//! Assign Item Page
//!
//! Issue available stock to a teacher.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{Loading, PageHeader, SelectField, TextAreaField, TextField};
use crate::context::use_app;
use crate::error::FieldErrors;
use crate::format;
use crate::forms::AssignmentForm;
use crate::models::{InventoryItem, ItemStatus, Personnel, Role};
use crate::pages::show_save_error;
use crate::routes::{Page, Route};

fn item_options(items: &[InventoryItem]) -> Vec<(String, String)> {
    items
        .iter()
        .filter(|i| i.status == ItemStatus::Available && i.quantity > 0)
        .map(|i| {
            (
                i.id.to_string(),
                format!("{} - {} ({} {} available)", i.property_no, i.name, i.quantity, i.unit),
            )
        })
        .collect()
}

fn teacher_options(personnel: &[Personnel]) -> Vec<(String, String)> {
    let mut out: Vec<(String, String)> = personnel
        .iter()
        .map(|p| (p.id.to_string(), format!("{} ({})", p.full_name(), p.position)))
        .collect();
    out.sort_by(|a, b| a.1.cmp(&b.1));
    out
}

#[component]
pub fn AssignItemPage() -> impl IntoView {
    let ctx = use_app();
    let form = RwSignal::new(AssignmentForm {
        quantity: "1".to_string(),
        date_assigned: format::today_iso(),
        ..Default::default()
    });
    let errors = RwSignal::new(FieldErrors::new());
    let (items, set_items) = signal(Vec::<InventoryItem>::new());
    let (personnel, set_personnel) = signal(Vec::<Personnel>::new());
    let (loading, set_loading) = signal(true);
    let (saving, set_saving) = signal(false);
    let back = Route::Page(Role::PropertyCustodian, Page::Assignments);

    spawn_local(async move {
        let (inventory, people) = futures::join!(api::list_inventory(), api::list_personnel());
        match (inventory, people) {
            (Ok(inventory), Ok(people)) => {
                set_items.set(inventory);
                set_personnel.set(people);
            }
            (Err(e), _) | (_, Err(e)) => ctx.report_error(&e),
        }
        set_loading.set(false);
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let payload = match items.with_untracked(|stock| form.with_untracked(|f| f.to_payload(stock))) {
            Ok(p) => p,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        let item_name = items.with_untracked(|all| {
            all.iter().find(|i| i.id == payload.item_id).map(|i| i.name.clone())
        });
        let teacher_name = personnel.with_untracked(|all| {
            all.iter().find(|p| p.id == payload.teacher_id).map(|p| p.full_name())
        });
        let summary = match (item_name, teacher_name) {
            (Some(item), Some(teacher)) => format!("{} assigned to {}", item, teacher),
            _ => "Item assigned".to_string(),
        };
        set_saving.set(true);
        spawn_local(async move {
            match api::assign_item(&payload).await {
                Ok(message) => {
                    ctx.success(message.unwrap_or(summary));
                    ctx.navigate(back);
                }
                Err(e) => show_save_error(&ctx, &e, errors),
            }
            set_saving.set(false);
        });
    };

    let selected_stock = move || {
        let id = form.with(|f| f.item_id.parse::<u32>().ok());
        id.and_then(|id| items.with(|all| all.iter().find(|i| i.id == id).cloned()))
    };

    view! {
        <div class="page">
            <PageHeader title="Assign Item" />
            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <form class="card form-grid" on:submit=on_submit novalidate=true>
                    <SelectField
                        label="Item"
                        name="item_id"
                        options=Signal::derive(move || items.with(|all| item_options(all)))
                        value=Signal::derive(move || form.with(|f| f.item_id.clone()))
                        on_change=move |v: String| form.update(|f| f.item_id = v)
                        errors=errors
                        placeholder="Select an available item"
                        required=true
                    />
                    <SelectField
                        label="Teacher"
                        name="teacher_id"
                        options=Signal::derive(move || personnel.with(|all| teacher_options(all)))
                        value=Signal::derive(move || form.with(|f| f.teacher_id.clone()))
                        on_change=move |v: String| form.update(|f| f.teacher_id = v)
                        errors=errors
                        placeholder="Select a teacher"
                        required=true
                    />
                    <TextField
                        label="Quantity"
                        name="quantity"
                        input_type="number"
                        value=Signal::derive(move || form.with(|f| f.quantity.clone()))
                        on_input=move |v: String| form.update(|f| f.quantity = v)
                        errors=errors
                        required=true
                    />
                    {move || selected_stock().map(|i| view! {
                        <p class="field-hint">{format!("In stock: {} {}", i.quantity, i.unit)}</p>
                    })}
                    <TextField
                        label="Date Assigned"
                        name="date_assigned"
                        input_type="date"
                        value=Signal::derive(move || form.with(|f| f.date_assigned.clone()))
                        on_input=move |v: String| form.update(|f| f.date_assigned = v)
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
                    <div class="form-actions">
                        <button type="button" class="btn btn-light" on:click=move |_| ctx.navigate(back)>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Assigning..." } else { "Assign" }}
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_options_only_available_stock() {
        let base = InventoryItem {
            id: 1,
            property_no: "PN-1".into(),
            name: "Chair".into(),
            description: None,
            category: "Furniture".into(),
            unit: "pcs".into(),
            quantity: 10,
            unit_cost: 500.0,
            date_acquired: "2024-01-01".into(),
            status: ItemStatus::Available,
            location: None,
            school_id: None,
        };
        let items = vec![
            base.clone(),
            InventoryItem { id: 2, status: ItemStatus::Condemned, ..base.clone() },
            InventoryItem { id: 3, quantity: 0, ..base },
        ];
        let options = item_options(&items);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].0, "1");
        assert_eq!(options[0].1, "PN-1 - Chair (10 pcs available)");
    }
}
