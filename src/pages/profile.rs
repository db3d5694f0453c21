//! Profile Page
//!
//! Shared by every role: contact details and password change.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{bind_field, Loading, PageHeader, TextField};
use crate::context::use_app;
use crate::error::FieldErrors;
use crate::forms::{PasswordForm, ProfileForm};
use crate::models::Profile;
use crate::pages::show_save_error;

#[component]
fn PasswordSection() -> impl IntoView {
    let ctx = use_app();
    let form = RwSignal::new(PasswordForm::default());
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
        set_saving.set(true);
        spawn_local(async move {
            match api::change_password(&payload).await {
                Ok(()) => {
                    form.set(PasswordForm::default());
                    ctx.success("Password changed");
                }
                Err(e) => show_save_error(&ctx, &e, errors),
            }
            set_saving.set(false);
        });
    };

    let (current, set_current) = bind_field(form, |f| &f.current_password, |f| &mut f.current_password);
    let (new_password, set_new_password) = bind_field(form, |f| &f.new_password, |f| &mut f.new_password);
    let (confirm, set_confirm) = bind_field(form, |f| &f.confirm_password, |f| &mut f.confirm_password);

    view! {
        <section class="card">
            <h3>"Change Password"</h3>
            <form on:submit=on_submit novalidate=true>
                <TextField label="Current Password" name="current_password" input_type="password" value=current on_input=set_current errors=errors required=true />
                <TextField label="New Password" name="new_password" input_type="password" value=new_password on_input=set_new_password errors=errors required=true />
                <TextField label="Confirm New Password" name="confirm_password" input_type="password" value=confirm on_input=set_confirm errors=errors required=true />
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Change Password" }}
                    </button>
                </div>
            </form>
        </section>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_app();
    let profile = RwSignal::new(None::<Profile>);
    let form = RwSignal::new(ProfileForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let (saving, set_saving) = signal(false);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match api::get_profile().await {
                Ok(p) => {
                    form.set(ProfileForm::from_profile(&p));
                    profile.set(Some(p));
                }
                Err(e) => ctx.report_error(&e),
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = match form.with_untracked(|f| f.to_payload()) {
            Ok(p) => p,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        set_saving.set(true);
        spawn_local(async move {
            match api::update_profile(&payload).await {
                Ok(message) => {
                    ctx.success(message.unwrap_or_else(|| "Profile updated".to_string()));
                    ctx.reload();
                }
                Err(e) => show_save_error(&ctx, &e, errors),
            }
            set_saving.set(false);
        });
    };

    let (full_name, set_full_name) = bind_field(form, |f| &f.full_name, |f| &mut f.full_name);
    let (email, set_email) = bind_field(form, |f| &f.email, |f| &mut f.email);
    let (phone, set_phone) = bind_field(form, |f| &f.phone, |f| &mut f.phone);
    let role_label = move || ctx.role().map(|r| r.label()).unwrap_or_default();

    view! {
        <div class="page">
            <PageHeader title="My Profile" />
            <Show when=move || profile.with(Option::is_some) fallback=|| view! { <Loading /> }>
                <section class="card">
                    <div class="profile-summary">
                        <div class="profile-username">{move || profile.with(|p| p.as_ref().map(|p| p.username.clone()))}</div>
                        <div class="muted">{role_label}</div>
                    </div>
                    <form on:submit=on_submit novalidate=true>
                        <TextField label="Full Name" name="full_name" value=full_name on_input=set_full_name errors=errors required=true />
                        <TextField label="Email" name="email" input_type="email" value=email on_input=set_email errors=errors required=true />
                        <TextField label="Phone" name="phone" input_type="tel" value=phone on_input=set_phone errors=errors placeholder="09XXXXXXXXX" />
                        <div class="form-actions">
                            <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                                {move || if saving.get() { "Saving..." } else { "Save Profile" }}
                            </button>
                        </div>
                    </form>
                </section>
                <PasswordSection />
            </Show>
        </div>
    }
}
