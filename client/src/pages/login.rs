//! Login page: phone number in, mock user profile out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs the login flow from `state::login` against the random-user
//! directory. A successful fetch logs the user into the shared session and
//! navigates to the dashboard; failures stay on this page as a message.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::text_field::TextField;
use crate::state::login::LoginForm;
use crate::state::session::SharedSession;

#[component]
pub fn LoginPage(session: SharedSession) -> impl IntoView {
    let form = RwSignal::new(LoginForm::default());
    let navigate = use_navigate();

    let on_input = Callback::new(move |value: String| form.update(|f| f.set_phone(value)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(phone)) = form.try_update(LoginForm::begin_submit) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let directory = crate::net::api::RandomUserDirectory::default();
                let outcome = crate::state::login::authenticate(&phone, &directory).await;
                let Some(user) = form.try_update(|f| f.complete(outcome)).flatten() else {
                    return;
                };
                session.update(|s| s.login(user));
                navigate(crate::util::auth::DASHBOARD_PATH, leptos_router::NavigateOptions::default());
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (phone, session, &navigate);
        }
    };

    let phone = Signal::derive(move || form.with(|f| f.phone.clone()));
    let field_error = Signal::derive(move || form.with(|f| f.field_error().to_owned()));
    let submit_error = move || form.with(|f| f.error.clone());
    let pending = Signal::derive(move || form.with(|f| f.pending));
    let blocked = Signal::derive(move || form.with(|f| !f.can_submit()));

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <header class="auth-card__header">
                    <h1 class="auth-card__brand">"AuthFlow"</h1>
                    <h2 class="auth-card__title">"Welcome Back"</h2>
                    <p class="auth-card__subtitle">
                        "Enter your phone number to access your dashboard"
                    </p>
                </header>

                <form class="auth-form" on:submit=on_submit>
                    <TextField
                        label="Phone Number"
                        name="phoneNumber"
                        input_type="tel"
                        placeholder="e.g., 09123456789"
                        helper_text="Iranian mobile or landline number"
                        value=phone
                        error=field_error
                        on_input=on_input
                    />

                    {move || {
                        submit_error()
                            .map(|message| {
                                view! {
                                    <div class="auth-form__error" role="alert">
                                        <p>{message}</p>
                                    </div>
                                }
                            })
                    }}

                    <Button
                        kind="submit"
                        variant=ButtonVariant::Primary
                        size=ButtonSize::Large
                        loading=pending
                        disabled=blocked
                    >
                        {move || form.with(LoginForm::submit_label)}
                    </Button>
                </form>
            </div>
        </div>
    }
}
