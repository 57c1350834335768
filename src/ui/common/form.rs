use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Inline error under a field, linked through `aria-describedby`
#[component]
fn FieldError(id: String, error: Option<Signal<Option<String>>>) -> impl IntoView {
    move || {
        error.and_then(|e| e.get()).map(|err| {
            view! {
                <p id=id.clone() class="field-error" role="alert">
                    <Icon name=icons::ALERT_CIRCLE class="w-4 h-4"/>
                    <span>{err}</span>
                </p>
            }
        })
    }
}

fn has_error(error: Option<Signal<Option<String>>>) -> bool {
    error.and_then(|e| e.get()).is_some()
}

/// Labelled text input
#[component]
pub fn FormField(
    /// Input id and form field name
    name: &'static str,
    /// Field label text
    label: &'static str,
    /// Whether field is required (shows an asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "off")]
    autocomplete: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    #[prop(into)]
    on_input: Callback<String>,
    #[prop(default = false.into(), into)]
    disabled: Signal<bool>,
    /// Optional error message to display
    #[prop(optional, into)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let error_id = format!("{name}-error");

    view! {
        <div class="field">
            <label class="label" for=name>
                {label}
                {required.then(|| view! { <span class="required">"*"</span> })}
            </label>
            <input
                id=name
                name=name
                type=input_type
                class="input-base"
                class:input-invalid=move || has_error(error)
                aria-invalid=move || has_error(error).to_string()
                aria-describedby=error_id.clone()
                autocomplete=autocomplete
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=disabled
            />
            <FieldError id=error_id error=error/>
        </div>
    }
}

/// Labelled multi-line input
#[component]
pub fn TextAreaField(
    name: &'static str,
    label: &'static str,
    #[prop(default = false)]
    required: bool,
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 5)]
    rows: u32,
    #[prop(default = false.into(), into)]
    disabled: Signal<bool>,
    #[prop(optional, into)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let error_id = format!("{name}-error");

    view! {
        <div class="field">
            <label class="label" for=name>
                {label}
                {required.then(|| view! { <span class="required">"*"</span> })}
            </label>
            <textarea
                id=name
                name=name
                class="input-base resize-y"
                class:input-invalid=move || has_error(error)
                aria-invalid=move || has_error(error).to_string()
                aria-describedby=error_id.clone()
                placeholder=placeholder
                rows=rows
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=disabled
            />
            <FieldError id=error_id error=error/>
        </div>
    }
}

/// Labelled dropdown
#[component]
pub fn SelectField(
    name: &'static str,
    label: &'static str,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Change event callback
    #[prop(into)]
    on_change: Callback<String>,
    /// Options as (value, display_text) pairs
    options: Vec<(&'static str, &'static str)>,
    #[prop(default = false.into(), into)]
    disabled: Signal<bool>,
    #[prop(optional, into)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let error_id = format!("{name}-error");

    view! {
        <div class="field">
            <label class="label" for=name>{label}</label>
            <select
                id=name
                name=name
                class="select-base"
                class:input-invalid=move || has_error(error)
                aria-describedby=error_id.clone()
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
                disabled=disabled
            >
                {options
                    .into_iter()
                    .map(|(val, text)| {
                        view! { <option value=val selected=move || value.get() == val>{text}</option> }
                    })
                    .collect_view()}
            </select>
            <FieldError id=error_id error=error/>
        </div>
    }
}
