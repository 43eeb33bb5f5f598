//! Labeled text input with inline error and helper text.
//!
//! The error replaces the helper text while it is non-empty.

#[cfg(test)]
#[path = "text_field_test.rs"]
mod text_field_test;

use leptos::prelude::*;

/// CSS class for the input element.
pub fn input_class(has_error: bool) -> &'static str {
    if has_error { "field__input field__input--error" } else { "field__input" }
}

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] helper_text: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    let id = format!("field-{name}");
    let has_error = move || !error.get().is_empty();

    view! {
        <div class="field">
            <label class="field__label" for=id.clone()>
                {label}
            </label>
            <input
                id=id
                name=name
                type=input_type
                placeholder=placeholder
                class=move || input_class(has_error())
                aria-invalid=move || if has_error() { "true" } else { "false" }
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <Show
                when=has_error
                fallback=move || view! { <span class="field__helper">{helper_text.clone()}</span> }
            >
                <span class="field__error">{move || error.get()}</span>
            </Show>
        </div>
    }
}

