//! OAuth callback page: turns the URL fragment into a server session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity provider redirects here with tokens in the fragment, which
//! never reaches the server. The page posts them to `/api/auth/session` and
//! then reloads into the dashboard so the server guard sees the new cookie.
//!
//! ERROR HANDLING
//! ==============
//! Provider errors and rejected tokens are shown with a link back to sign-in.
//! A fragment without tokens sends the browser back to sign-in.

use leptos::prelude::*;

use crate::components::banner::ErrorBanner;
use crate::components::skeletons::AuthSkeleton;
use crate::util::auth::SIGN_IN_PATH;

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::util::auth::{DASHBOARD_PATH, hard_redirect, parse_callback_fragment};

        if crate::net::api::fetch_current_user().await.is_some() {
            hard_redirect(DASHBOARD_PATH);
            return;
        }
        let fragment = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        match parse_callback_fragment(&fragment) {
            Ok(Some(tokens)) => match crate::net::api::establish_session(&tokens).await {
                Ok(user) => {
                    log::info!("signed in as {}", user.id);
                    hard_redirect(DASHBOARD_PATH);
                }
                Err(e) => {
                    log::warn!("session exchange failed: {e}");
                    error.set(Some(e));
                }
            },
            Ok(None) => hard_redirect(SIGN_IN_PATH),
            Err(e) => error.set(Some(e)),
        }
    });

    view! {
        <main class="auth">
            <Show
                when=move || error.get().is_some()
                fallback=|| view! { <AuthSkeleton message="Processing authentication..."/> }
            >
                <section class="sign-in-card">
                    <ErrorBanner message=error.get().unwrap_or_default()/>
                    <a href=SIGN_IN_PATH class="button-class">"Back to sign in"</a>
                </section>
            </Show>
        </main>
    }
}
