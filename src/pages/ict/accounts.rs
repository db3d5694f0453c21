//! User Accounts Page
//!
//! Create, edit, activate/deactivate and delete dashboard accounts.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_datatable::{apply, PageSizeSelect, Paginator, SearchBox, SortDir, SortHeader, TableState};

use crate::api;
use crate::components::{
    ActiveBadge, DeleteConfirmButton, EditTarget, EmptyRow, Modal, PageHeader, SelectField, TextField,
};
use crate::config::{DEFAULT_PAGE_SIZE, PAGE_SIZE_CHOICES};
use crate::context::use_app;
use crate::error::FieldErrors;
use crate::forms::AccountForm;
use crate::models::{Account, Role};
use crate::pages::show_save_error;

fn role_options() -> Vec<(String, String)> {
    Role::ALL
        .iter()
        .map(|r| (r.as_str().to_string(), r.label().to_string()))
        .collect()
}

fn matches_role(account: &Account, role: &str) -> bool {
    role.is_empty() || account.user_type.as_str() == role
}

#[component]
fn AccountModal(target: EditTarget, initial: AccountForm, on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app();
    let form = RwSignal::new(initial);
    let errors = RwSignal::new(FieldErrors::new());
    let (saving, set_saving) = signal(false);
    let creating = target.is_new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = match form.with_untracked(|f| f.to_payload(creating)) {
            Ok(p) => p,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        let saved = format!("Account {} {}", payload.username, if creating { "created" } else { "updated" });
        set_saving.set(true);
        spawn_local(async move {
            let result = match target {
                EditTarget::New => api::create_account(&payload).await,
                EditTarget::Existing(id) => api::update_account(id, &payload).await,
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

    let title = if creating { "New Account" } else { "Edit Account" };
    let password_label = if creating { "Password" } else { "New Password (leave blank to keep)" };

    view! {
        <Modal title=title.to_string() on_close=on_close>
            <form on:submit=on_submit novalidate=true>
                <TextField
                    label="Username"
                    name="username"
                    value=Signal::derive(move || form.with(|f| f.username.clone()))
                    on_input=move |v: String| form.update(|f| f.username = v)
                    errors=errors
                    required=true
                />
                <TextField
                    label="Full Name"
                    name="full_name"
                    value=Signal::derive(move || form.with(|f| f.full_name.clone()))
                    on_input=move |v: String| form.update(|f| f.full_name = v)
                    errors=errors
                    required=true
                />
                <TextField
                    label="Email"
                    name="email"
                    input_type="email"
                    value=Signal::derive(move || form.with(|f| f.email.clone()))
                    on_input=move |v: String| form.update(|f| f.email = v)
                    errors=errors
                    required=true
                />
                <SelectField
                    label="Role"
                    name="user_type"
                    options=Signal::derive(role_options)
                    value=Signal::derive(move || form.with(|f| f.user_type.as_str().to_string()))
                    on_change=move |v: String| {
                        if let Some(role) = Role::parse(&v) {
                            form.update(|f| f.user_type = role);
                        }
                    }
                    errors=errors
                    required=true
                />
                <TextField
                    label=password_label
                    name="password"
                    input_type="password"
                    value=Signal::derive(move || form.with(|f| f.password.clone()))
                    on_input=move |v: String| form.update(|f| f.password = v)
                    errors=errors
                    required=creating
                />
                <TextField
                    label="Confirm Password"
                    name="password_confirm"
                    input_type="password"
                    value=Signal::derive(move || form.with(|f| f.password_confirm.clone()))
                    on_input=move |v: String| form.update(|f| f.password_confirm = v)
                    errors=errors
                    required=creating
                />
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
pub fn AccountsPage() -> impl IntoView {
    let ctx = use_app();
    let (accounts, set_accounts) = signal(Vec::<Account>::new());
    let (loading, set_loading) = signal(true);
    let editing = RwSignal::new(None::<(EditTarget, AccountForm)>);
    let role_filter = RwSignal::new(String::new());
    let table = TableState::new(DEFAULT_PAGE_SIZE).sorted_by("username", SortDir::Asc);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::list_accounts().await {
                Ok(list) => set_accounts.set(list),
                Err(e) => ctx.report_error(&e),
            }
            set_loading.set(false);
        });
    });

    let page = Memo::new(move |_| {
        let query = table.query();
        let role = role_filter.get();
        accounts.with(|all| apply(all, &query, |a| matches_role(a, &role)))
    });

    let set_active = move |id: u32, active: bool| {
        spawn_local(async move {
            match api::set_account_active(id, active).await {
                Ok(()) => {
                    ctx.success(if active { "Account activated" } else { "Account deactivated" });
                    ctx.reload();
                }
                Err(e) => ctx.report_error(&e),
            }
        });
    };
    let delete = move |id: u32| {
        spawn_local(async move {
            match api::delete_account(id).await {
                Ok(()) => {
                    ctx.success("Account deleted");
                    ctx.reload();
                }
                Err(e) => ctx.report_error(&e),
            }
        });
    };
    let close = Callback::new(move |_: ()| editing.set(None));

    view! {
        <div class="page">
            <PageHeader title="User Accounts">
                <button
                    type="button"
                    class="btn btn-primary"
                    on:click=move |_| editing.set(Some((EditTarget::New, AccountForm::default())))
                >
                    "+ New Account"
                </button>
            </PageHeader>

            <div class="table-toolbar">
                <SearchBox state=table placeholder="Search username, name, email..." />
                <select
                    class="table-filter"
                    prop:value=move || role_filter.get()
                    on:change=move |ev| {
                        role_filter.set(event_target_value(&ev));
                        table.reset_page();
                    }
                >
                    <option value="">"All roles"</option>
                    {Role::ALL.iter().map(|r| view! {
                        <option value=r.as_str()>{r.label()}</option>
                    }).collect_view()}
                </select>
                <PageSizeSelect state=table choices=PAGE_SIZE_CHOICES />
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <SortHeader state=table column="username" label="Username" />
                        <SortHeader state=table column="full_name" label="Full Name" />
                        <SortHeader state=table column="email" label="Email" />
                        <SortHeader state=table column="user_type" label="Role" />
                        <SortHeader state=table column="is_active" label="Status" />
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        if loading.get() {
                            return view! { <EmptyRow colspan=6 message="Loading..." /> }.into_any();
                        }
                        let rows = page.with(|p| p.rows.clone());
                        if rows.is_empty() {
                            return view! { <EmptyRow colspan=6 message="No accounts found" /> }.into_any();
                        }
                        rows.into_iter().map(|a| {
                            let id = a.id;
                            let active = a.is_active;
                            let form = AccountForm::from_account(&a);
                            view! {
                                <tr class:inactive=!active>
                                    <td class="mono">{a.username.clone()}</td>
                                    <td>{a.full_name.clone()}</td>
                                    <td>{a.email.clone()}</td>
                                    <td>{a.user_type.label()}</td>
                                    <td><ActiveBadge active=active /></td>
                                    <td class="row-actions">
                                        <button
                                            type="button"
                                            class="btn btn-sm"
                                            on:click=move |_| editing.set(Some((EditTarget::Existing(id), form.clone())))
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            type="button"
                                            class="btn btn-sm"
                                            on:click=move |_| set_active(id, !active)
                                        >
                                            {if active { "Deactivate" } else { "Activate" }}
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
                <AccountModal target=target initial=initial on_close=close />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_role() {
        let account = Account {
            id: 1,
            username: "mreyes".into(),
            email: "mreyes@school.edu.ph".into(),
            full_name: "Maria Reyes".into(),
            user_type: Role::Accounting,
            is_active: true,
        };
        assert!(matches_role(&account, ""));
        assert!(matches_role(&account, "accounting"));
        assert!(!matches_role(&account, "teacher"));
    }

    #[test]
    fn test_role_options_cover_every_role() {
        let options = role_options();
        assert_eq!(options.len(), Role::ALL.len());
        assert!(options.iter().all(|(value, _)| Role::parse(value).is_some()));
    }
}
