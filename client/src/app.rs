//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! This route tree is the only one: the server renders it through
//! `leptos_axum` and the browser hydrates the same tree.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::constants::APP_NAME;
use crate::pages::{
    admin_layout::AdminLayout, all_users::AllUsersPage, auth_callback::AuthCallbackPage,
    create_trip::CreateTripPage, dashboard::DashboardPage, home::HomePage, sign_in::SignInPage,
    trips::TripsPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" href="/favicon.ico"/>
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
/// Auth starts in `loading` so guarded pages wait for the bootstrap loader
/// instead of redirecting on the first render.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState { user: None, loading: true });
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/tourvisto.css"/>
        <Title text=APP_NAME/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("sign-in") view=SignInPage/>
                <Route path=StaticSegment("auth-callback") view=AuthCallbackPage/>
                <ParentRoute path=StaticSegment("dashboard") view=AdminLayout>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("all-users") view=AllUsersPage/>
                    <Route path=(StaticSegment("trips"), StaticSegment("create")) view=CreateTripPage/>
                    <Route path=StaticSegment("trips") view=TripsPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
