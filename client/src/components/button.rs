//! Button with variant/size styling and a loading spinner.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Medium,
    Large,
}

impl ButtonVariant {
    fn modifier(self) -> &'static str {
        match self {
            Self::Primary => "btn--primary",
            Self::Outline => "btn--outline",
        }
    }
}

impl ButtonSize {
    fn modifier(self) -> &'static str {
        match self {
            Self::Medium => "btn--medium",
            Self::Large => "btn--large",
        }
    }
}

/// CSS class list for a button in the given configuration.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, loading: bool) -> String {
    let mut class = format!("btn {} {}", variant.modifier(), size.modifier());
    if loading {
        class.push_str(" btn--loading");
    }
    class
}

/// A button that is disabled while `loading` or `disabled` is true.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(default = "button")] kind: &'static str,
    #[prop(into, default = Signal::stored(false))] loading: Signal<bool>,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=kind
            class=move || button_class(variant, size, loading.get())
            disabled=move || disabled.get() || loading.get()
            on:click=move |_| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.run(());
                }
            }
        >
            <Show when=move || loading.get()>
                <span class="btn__spinner" aria-hidden="true"></span>
            </Show>
            <span class="btn__content">{children()}</span>
        </button>
    }
}
