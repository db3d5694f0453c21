//! Form Field Components
//!
//! Labelled inputs that show the inline error for their field.

use leptos::prelude::*;

use crate::error::FieldErrors;

fn field_error(errors: RwSignal<FieldErrors>, name: &'static str) -> impl Fn() -> Option<String> + Copy + Send + Sync + 'static {
    move || errors.with(|e| e.get(name).cloned())
}

/// Read/write pair for one string field of a form signal
pub fn bind_field<F: Send + Sync + 'static>(
    form: RwSignal<F>,
    get: fn(&F) -> &String,
    set: fn(&mut F) -> &mut String,
) -> (Signal<String>, Callback<String>) {
    (
        Signal::derive(move || form.with(|f| get(f).clone())),
        Callback::new(move |v: String| form.update(|f| *set(f) = v)),
    )
}

/// Text-like input (text, email, password, number, date)
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    name: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    errors: RwSignal<FieldErrors>,
    #[prop(into, optional)] input_type: Option<String>,
    #[prop(into, optional)] placeholder: Option<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let error = field_error(errors, name);
    let input_type = input_type.unwrap_or_else(|| "text".to_string());

    view! {
        <div class=move || if error().is_some() { "form-field has-error" } else { "form-field" }>
            <label for=name>
                {label}
                {required.then_some(view! { <span class="required">"*"</span> })}
            </label>
            <input
                id=name
                name=name
                type=input_type
                placeholder=placeholder.unwrap_or_default()
                prop:value=move || value.get()
                on:input=move |ev| {
                    on_input.run(event_target_value(&ev));
                    errors.update(|e| { e.remove(name); });
                }
            />
            {move || error().map(|msg| view! { <div class="field-error">{msg}</div> })}
        </div>
    }
}

/// Multi-line text input
#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    name: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    let error = field_error(errors, name);

    view! {
        <div class=move || if error().is_some() { "form-field has-error" } else { "form-field" }>
            <label for=name>{label}</label>
            <textarea
                id=name
                name=name
                prop:value=move || value.get()
                on:input=move |ev| {
                    on_input.run(event_target_value(&ev));
                    errors.update(|e| { e.remove(name); });
                }
            />
            {move || error().map(|msg| view! { <div class="field-error">{msg}</div> })}
        </div>
    }
}

/// Select input; `options` are (value, label) pairs
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    name: &'static str,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    errors: RwSignal<FieldErrors>,
    #[prop(into, optional)] placeholder: Option<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let error = field_error(errors, name);

    view! {
        <div class=move || if error().is_some() { "form-field has-error" } else { "form-field" }>
            <label for=name>
                {label}
                {required.then_some(view! { <span class="required">"*"</span> })}
            </label>
            <select
                id=name
                name=name
                prop:value=move || value.get()
                on:change=move |ev| {
                    on_change.run(event_target_value(&ev));
                    errors.update(|e| { e.remove(name); });
                }
            >
                {placeholder.map(|p| view! { <option value="">{p}</option> })}
                {move || options.get().into_iter().map(|(v, l)| {
                    let selected = value.get() == v;
                    view! { <option value=v selected=selected>{l}</option> }
                }).collect_view()}
            </select>
            {move || error().map(|msg| view! { <div class="field-error">{msg}</div> })}
        </div>
    }
}

/// Banner for a form-level message (e.g. the backend's validation summary)
#[component]
pub fn FormAlert(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || message.get().map(|m| view! { <div class="form-alert">{m}</div> })}
    }
}
