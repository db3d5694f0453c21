//! Inventory Item Form Page
//!
//! Create (`item_id = None`) or edit an inventory record.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{bind_field, Loading, PageHeader, SelectField, TextAreaField, TextField};
use crate::context::use_app;
use crate::error::FieldErrors;
use crate::forms::InventoryForm;
use crate::models::{ItemStatus, Role};
use crate::pages::show_save_error;
use crate::routes::{Page, Route};

fn status_options() -> Vec<(String, String)> {
    ItemStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect()
}

#[component]
pub fn InventoryFormPage(item_id: Option<u32>) -> impl IntoView {
    let ctx = use_app();
    let form = RwSignal::new(InventoryForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let (loading, set_loading) = signal(item_id.is_some());
    let (saving, set_saving) = signal(false);
    let back = Route::Page(Role::PropertyCustodian, Page::Inventory);

    if let Some(id) = item_id {
        spawn_local(async move {
            match api::get_inventory_item(id).await {
                Ok(item) => form.set(InventoryForm::from_item(&item)),
                Err(e) => {
                    ctx.report_error(&e);
                    if !e.is_unauthorized() {
                        ctx.navigate(back);
                    }
                }
            }
            set_loading.set(false);
        });
    }

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let payload = match form.with_untracked(|f| f.to_payload()) {
            Ok(p) => p,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        let property_no = payload.property_no.clone();
        set_saving.set(true);
        spawn_local(async move {
            let result = match item_id {
                Some(id) => api::update_inventory_item(id, &payload).await,
                None => api::create_inventory_item(&payload).await,
            };
            match result {
                Ok(message) => {
                    web_sys::console::log_1(&format!("[Inventory] Saved {}", property_no).into());
                    let fallback = if item_id.is_some() { "Item updated" } else { "Item added" };
                    ctx.success(message.unwrap_or_else(|| fallback.to_string()));
                    ctx.navigate(back);
                }
                Err(e) => show_save_error(&ctx, &e, errors),
            }
            set_saving.set(false);
        });
    };

    let (property_no, set_property_no) = bind_field(form, |f| &f.property_no, |f| &mut f.property_no);
    let (name, set_name) = bind_field(form, |f| &f.name, |f| &mut f.name);
    let (description, set_description) = bind_field(form, |f| &f.description, |f| &mut f.description);
    let (category, set_category) = bind_field(form, |f| &f.category, |f| &mut f.category);
    let (unit, set_unit) = bind_field(form, |f| &f.unit, |f| &mut f.unit);
    let (quantity, set_quantity) = bind_field(form, |f| &f.quantity, |f| &mut f.quantity);
    let (unit_cost, set_unit_cost) = bind_field(form, |f| &f.unit_cost, |f| &mut f.unit_cost);
    let (date_acquired, set_date_acquired) = bind_field(form, |f| &f.date_acquired, |f| &mut f.date_acquired);
    let (location, set_location) = bind_field(form, |f| &f.location, |f| &mut f.location);

    let title = if item_id.is_some() { "Edit Inventory Item" } else { "Add Inventory Item" };

    view! {
        <div class="page">
            <PageHeader title=title />
            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <form class="card form-grid" on:submit=on_submit novalidate=true>
                    <TextField label="Property No." name="property_no" value=property_no on_input=set_property_no errors=errors required=true placeholder="e.g. PN-2024-0001" />
                    <TextField label="Item Name" name="name" value=name on_input=set_name errors=errors required=true />
                    <TextField label="Category" name="category" value=category on_input=set_category errors=errors required=true />
                    <TextField label="Unit" name="unit" value=unit on_input=set_unit errors=errors required=true />
                    <TextField label="Quantity" name="quantity" input_type="number" value=quantity on_input=set_quantity errors=errors required=true />
                    <TextField label="Unit Cost" name="unit_cost" input_type="number" value=unit_cost on_input=set_unit_cost errors=errors required=true />
                    <TextField label="Date Acquired" name="date_acquired" input_type="date" value=date_acquired on_input=set_date_acquired errors=errors required=true />
                    <SelectField
                        label="Status"
                        name="status"
                        options=Signal::derive(status_options)
                        value=Signal::derive(move || form.with(|f| f.status.as_str().to_string()))
                        on_change=move |v: String| {
                            if let Some(status) = ItemStatus::from_str(&v) {
                                form.update(|f| f.status = status);
                            }
                        }
                        errors=errors
                        required=true
                    />
                    <TextField label="Location" name="location" value=location on_input=set_location errors=errors placeholder="Room / building" />
                    <TextAreaField label="Description" name="description" value=description on_input=set_description errors=errors />
                    <div class="form-actions">
                        <button type="button" class="btn btn-light" on:click=move |_| ctx.navigate(back)>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
