//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{FormAlert, TextField};
use crate::context::use_app;
use crate::error::FieldErrors;
use crate::forms::LoginForm;
use crate::session::Session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app();
    let form = RwSignal::new(LoginForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let alert = RwSignal::new(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let current = form.get_untracked();
        if let Err(field_errors) = current.validate() {
            errors.set(field_errors);
            return;
        }
        alert.set(None);
        set_submitting.set(true);
        spawn_local(async move {
            match api::login(current.username.trim(), &current.password).await {
                Ok(resp) => match Session::from_parts(Some(resp.access_token), Some(resp.user_type.clone())) {
                    Some(session) => {
                        ctx.sign_in(session);
                        ctx.success("Signed in successfully");
                    }
                    None => {
                        web_sys::console::warn_1(
                            &format!("[Auth] Unknown user type '{}'", resp.user_type).into(),
                        );
                        alert.set(Some("This account has no dashboard access.".to_string()));
                    }
                },
                // Wrong credentials come back as 401 here, not as an expired session
                Err(e) if e.is_unauthorized() => {
                    alert.set(Some("Invalid username or password.".to_string()));
                }
                Err(e) => {
                    let fields = e.field_errors();
                    if !fields.is_empty() {
                        errors.set(fields);
                    }
                    alert.set(Some(e.user_message()));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=on_submit novalidate=true>
                <h1>"School Property Inventory"</h1>
                <p class="login-subtitle">"Sign in to continue"</p>
                <FormAlert message=alert />
                <TextField
                    label="Username"
                    name="username"
                    value=Signal::derive(move || form.with(|f| f.username.clone()))
                    on_input=move |v: String| form.update(|f| f.username = v)
                    errors=errors
                    required=true
                />
                <TextField
                    label="Password"
                    name="password"
                    input_type="password"
                    value=Signal::derive(move || form.with(|f| f.password.clone()))
                    on_input=move |v: String| form.update(|f| f.password = v)
                    errors=errors
                    required=true
                />
                <button type="submit" class="btn btn-primary btn-block" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                </button>
            </form>
        </div>
    }
}
