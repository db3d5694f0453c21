//! Schools Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_datatable::{apply, PageSizeSelect, Paginator, SearchBox, SortDir, SortHeader, TableState};

use crate::api;
use crate::components::{bind_field, DeleteConfirmButton, EditTarget, EmptyRow, Modal, PageHeader, TextAreaField, TextField};
use crate::config::{DEFAULT_PAGE_SIZE, PAGE_SIZE_CHOICES};
use crate::context::use_app;
use crate::error::FieldErrors;
use crate::forms::SchoolForm;
use crate::models::School;
use crate::pages::show_save_error;

#[component]
fn SchoolModal(target: EditTarget, initial: SchoolForm, on_close: Callback<()>) -> impl IntoView {
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
        let saved = format!("Saved {}", payload.name);
        set_saving.set(true);
        spawn_local(async move {
            let result = match target {
                EditTarget::New => api::create_school(&payload).await,
                EditTarget::Existing(id) => api::update_school(id, &payload).await,
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

    let (school_code, set_school_code) = bind_field(form, |f| &f.school_code, |f| &mut f.school_code);
    let (name, set_name) = bind_field(form, |f| &f.name, |f| &mut f.name);
    let (address, set_address) = bind_field(form, |f| &f.address, |f| &mut f.address);
    let (district, set_district) = bind_field(form, |f| &f.district, |f| &mut f.district);
    let title = if target.is_new() { "New School" } else { "Edit School" };

    view! {
        <Modal title=title.to_string() on_close=on_close>
            <form on:submit=on_submit novalidate=true>
                <TextField label="School ID" name="school_code" value=school_code on_input=set_school_code errors=errors required=true placeholder="e.g. 301234" />
                <TextField label="School Name" name="name" value=name on_input=set_name errors=errors required=true />
                <TextField label="District" name="district" value=district on_input=set_district errors=errors />
                <TextAreaField label="Address" name="address" value=address on_input=set_address errors=errors />
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
pub fn SchoolsPage() -> impl IntoView {
    let ctx = use_app();
    let (schools, set_schools) = signal(Vec::<School>::new());
    let (loading, set_loading) = signal(true);
    let editing = RwSignal::new(None::<(EditTarget, SchoolForm)>);
    let table = TableState::new(DEFAULT_PAGE_SIZE).sorted_by("name", SortDir::Asc);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::list_schools().await {
                Ok(list) => set_schools.set(list),
                Err(e) => ctx.report_error(&e),
            }
            set_loading.set(false);
        });
    });

    let page = Memo::new(move |_| {
        let query = table.query();
        schools.with(|all| apply(all, &query, |_| true))
    });

    let delete = move |id: u32| {
        spawn_local(async move {
            match api::delete_school(id).await {
                Ok(()) => {
                    ctx.success("School deleted");
                    ctx.reload();
                }
                Err(e) => ctx.report_error(&e),
            }
        });
    };
    let close = Callback::new(move |_: ()| editing.set(None));

    view! {
        <div class="page">
            <PageHeader title="Schools">
                <button
                    type="button"
                    class="btn btn-primary"
                    on:click=move |_| editing.set(Some((EditTarget::New, SchoolForm::default())))
                >
                    "+ Add School"
                </button>
            </PageHeader>

            <div class="table-toolbar">
                <SearchBox state=table placeholder="Search school ID, name, district..." />
                <PageSizeSelect state=table choices=PAGE_SIZE_CHOICES />
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <SortHeader state=table column="school_code" label="School ID" />
                        <SortHeader state=table column="name" label="Name" />
                        <SortHeader state=table column="district" label="District" />
                        <th>"Address"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        if loading.get() {
                            return view! { <EmptyRow colspan=5 message="Loading..." /> }.into_any();
                        }
                        let rows = page.with(|p| p.rows.clone());
                        if rows.is_empty() {
                            return view! { <EmptyRow colspan=5 message="No schools found" /> }.into_any();
                        }
                        rows.into_iter().map(|s| {
                            let id = s.id;
                            let form = SchoolForm::from_school(&s);
                            view! {
                                <tr>
                                    <td class="mono">{s.school_code.clone()}</td>
                                    <td>{s.name.clone()}</td>
                                    <td>{s.district.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td class="muted">{s.address.clone().unwrap_or_default()}</td>
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
                <SchoolModal target=target initial=initial on_close=close />
            })}
        </div>
    }
}
