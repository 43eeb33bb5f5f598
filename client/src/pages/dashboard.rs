//! Dashboard page showing the signed-in user's profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It waits for the session to
//! settle, sends unauthenticated visitors to `/auth`, and owns the sign-out
//! action.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::profile_card::{ProfileCard, ProfileHeader};
use crate::state::session::SharedSession;
use crate::util::auth::{DashboardView, install_unauth_redirect};

/// Dashboard page. Redirects to `/auth` if the user is not authenticated.
#[component]
pub fn DashboardPage(session: SharedSession) -> impl IntoView {
    let navigate = use_navigate();
    let signing_out = RwSignal::new(false);

    // Also performs the post-logout navigation: clearing the session
    // settles it as unauthenticated.
    install_unauth_redirect(session, navigate);

    let on_logout = Callback::new(move |()| {
        signing_out.set(true);
        session.update(|s| s.logout());
    });

    let view_state = Memo::new(move |_| session.with(|s| DashboardView::resolve(s.state(), signing_out.get())));
    let busy = Signal::derive(move || signing_out.get());

    move || match view_state.get() {
        DashboardView::Waiting => view! {
            <div class="dashboard-page dashboard-page--loading">
                <div class="spinner" aria-hidden="true"></div>
                <p>"Checking authentication..."</p>
            </div>
        }
        .into_any(),
        DashboardView::Redirect => ().into_any(),
        DashboardView::SigningOut => view! {
            <div class="dashboard-page">
                <header class="dashboard-page__header">
                    <h1>"Welcome to Dashboard"</h1>
                    <div class="profile-header">
                        <div class="spinner" aria-hidden="true"></div>
                        <div class="profile-header__details">
                            <h2 class="profile-header__name">"Signing Out..."</h2>
                            <p class="profile-header__email">"Please wait"</p>
                        </div>
                    </div>
                </header>
                <p class="dashboard-page__status">"Signing out of system..."</p>
            </div>
        }
        .into_any(),
        DashboardView::Profile(user) => {
            let header_user = user.clone();
            view! {
                <div class="dashboard-page">
                    <header class="dashboard-page__header">
                        <h1>"Welcome to Dashboard"</h1>
                        <ProfileHeader user=header_user/>
                        <Button
                            variant=ButtonVariant::Outline
                            size=ButtonSize::Medium
                            disabled=busy
                            on_click=on_logout
                        >
                            "Sign Out"
                        </Button>
                    </header>
                    <main class="dashboard-page__main">
                        <ProfileCard user=user/>
                    </main>
                </div>
            }
            .into_any()
        }
    }
}
