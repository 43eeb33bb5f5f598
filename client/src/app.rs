//! Root application component with routing and the shared session.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::session::{SessionStore, SharedSession};
use crate::util::auth::DASHBOARD_PATH;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session store and hands it to each page. The stored session is
/// read in an effect, which only runs in the browser, so the server render
/// and the first client render agree on the loading state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session: SharedSession = RwSignal::new(SessionStore::new(BrowserStorage));
    Effect::new(move || session.update(SessionStore::initialize));

    view! {
        <Stylesheet id="leptos" href="/pkg/authflow.css"/>
        <Title text="Auth System"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("auth") view=move || view! { <LoginPage session/> }/>
                <Route path=StaticSegment("dashboard") view=move || view! { <DashboardPage session/> }/>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=DASHBOARD_PATH/> }/>
            </Routes>
        </Router>
    }
}
