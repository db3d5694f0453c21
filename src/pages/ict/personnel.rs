//! Personnel Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_datatable::{apply, PageSizeSelect, Paginator, SearchBox, SortDir, SortHeader, TableState};

use crate::api;
use crate::components::{bind_field, DeleteConfirmButton, EditTarget, EmptyRow, Modal, PageHeader, TextField};
use crate::config::{DEFAULT_PAGE_SIZE, PAGE_SIZE_CHOICES};
use crate::context::use_app;
use crate::error::FieldErrors;
use crate::forms::PersonnelForm;
use crate::models::Personnel;
use crate::pages::show_save_error;

#[component]
fn PersonnelModal(target: EditTarget, initial: PersonnelForm, on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app();
    let form = RwSignal::new(initial);
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
        let saved = format!("Saved {} {}", payload.first_name, payload.last_name);
        set_saving.set(true);
        spawn_local(async move {
            let result = match target {
                EditTarget::New => api::create_personnel(&payload).await,
                EditTarget::Existing(id) => api::update_personnel(id, &payload).await,
            };
            match result {
                Ok(message) => {
                    ctx.success(message.unwrap_or(saved));
                    on_close.run(());
                    ctx.reload();
                }
                Err(e) => show_save_error(&ctx, &e, errors),
            }
            set_saving.set(false);
        });
    };

    let (employee_no, set_employee_no) = bind_field(form, |f| &f.employee_no, |f| &mut f.employee_no);
    let (first_name, set_first_name) = bind_field(form, |f| &f.first_name, |f| &mut f.first_name);
    let (last_name, set_last_name) = bind_field(form, |f| &f.last_name, |f| &mut f.last_name);
    let (email, set_email) = bind_field(form, |f| &f.email, |f| &mut f.email);
    let (phone, set_phone) = bind_field(form, |f| &f.phone, |f| &mut f.phone);
    let (position, set_position) = bind_field(form, |f| &f.position, |f| &mut f.position);
    let (department, set_department) = bind_field(form, |f| &f.department, |f| &mut f.department);

    let title = if target.is_new() { "New Personnel" } else { "Edit Personnel" };

    view! {
        <Modal title=title.to_string() on_close=on_close>
            <form on:submit=on_submit novalidate=true>
                <TextField label="Employee No." name="employee_no" value=employee_no on_input=set_employee_no errors=errors required=true />
                <TextField label="First Name" name="first_name" value=first_name on_input=set_first_name errors=errors required=true />
                <TextField label="Last Name" name="last_name" value=last_name on_input=set_last_name errors=errors required=true />
                <TextField label="Email" name="email" input_type="email" value=email on_input=set_email errors=errors required=true />
                <TextField label="Phone" name="phone" input_type="tel" value=phone on_input=set_phone errors=errors placeholder="09XXXXXXXXX" />
                <TextField label="Position" name="position" value=position on_input=set_position errors=errors required=true />
                <TextField label="Department" name="department" value=department on_input=set_department errors=errors />
                <div class="form-actions">
                    <button type="button" class="btn btn-light" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}

#[component]
pub fn PersonnelPage() -> impl IntoView {
    let ctx = use_app();
    let (personnel, set_personnel) = signal(Vec::<Personnel>::new());
    let (loading, set_loading) = signal(true);
    let editing = RwSignal::new(None::<(EditTarget, PersonnelForm)>);
    let table = TableState::new(DEFAULT_PAGE_SIZE).sorted_by("name", SortDir::Asc);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::list_personnel().await {
                Ok(list) => set_personnel.set(list),
                Err(e) => ctx.report_error(&e),
            }
            set_loading.set(false);
        });
    });

    let page = Memo::new(move |_| {
        let query = table.query();
        personnel.with(|all| apply(all, &query, |_| true))
    });

    let delete = move |id: u32| {
        spawn_local(async move {
            match api::delete_personnel(id).await {
                Ok(()) => {
                    ctx.success("Personnel record deleted");
                    ctx.reload();
                }
                Err(e) => ctx.report_error(&e),
            }
        });
    };
    let close = Callback::new(move |_: ()| editing.set(None));

    view! {
        <div class="page">
            <PageHeader title="Personnel">
                <button
                    type="button"
                    class="btn btn-primary"
                    on:click=move |_| editing.set(Some((EditTarget::New, PersonnelForm::default())))
                >
                    "+ Add Personnel"
                </button>
            </PageHeader>

            <div class="table-toolbar">
                <SearchBox state=table placeholder="Search name, employee no., position..." />
                <PageSizeSelect state=table choices=PAGE_SIZE_CHOICES />
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <SortHeader state=table column="employee_no" label="Employee No." />
                        <SortHeader state=table column="name" label="Name" />
                        <SortHeader state=table column="email" label="Email" />
                        <th>"Phone"</th>
                        <SortHeader state=table column="position" label="Position" />
                        <SortHeader state=table column="department" label="Department" />
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
                            return view! { <EmptyRow colspan=7 message="No personnel found" /> }.into_any();
                        }
                        rows.into_iter().map(|p| {
                            let id = p.id;
                            let form = PersonnelForm::from_personnel(&p);
                            view! {
                                <tr>
                                    <td class="mono">{p.employee_no.clone()}</td>
                                    <td>{p.full_name()}</td>
                                    <td>{p.email.clone()}</td>
                                    <td>{p.phone.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td>{p.position.clone()}</td>
                                    <td>{p.department.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td class="row-actions">
                                        <button
                                            type="button"
                                            class="btn btn-sm"
                                            on:click=move |_| editing.set(Some((EditTarget::Existing(id), form.clone())))
                                        >
                                            "Edit"
                                        </button>
                                        <DeleteConfirmButton on_confirm=move |_: ()| delete(id) />
                                    </td>
                                </tr>
                            }
                        }).collect_view().into_any()
                    }}
                </tbody>
            </table>

            <Paginator state=table page=page />

            {move || editing.get().map(|(target, initial)| view! {
                <PersonnelModal target=target initial=initial on_close=close />
            })}
        </div>
    }
}
