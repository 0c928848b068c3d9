//! Admin layout: runs the bootstrap loader and frames every dashboard page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Parent route of `/dashboard/*`. After hydration it asks the server for the
//! bootstrap outcome (session → profile lookup → profile creation → role
//! check) and either renders the sidebar with the nested page, leaves for
//! another route, or shows why the profile could not be prepared.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::banner::ErrorBanner;
use crate::components::mobile_sidebar::MobileSidebar;
use crate::components::nav_items::NavItems;
use crate::components::skeletons::LayoutSkeleton;
use crate::net::types::Profile;
use crate::state::auth::AuthState;
use crate::state::loader::Loadable;

#[component]
pub fn AdminLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let profile = RwSignal::new(Loadable::<Profile>::Loading);

    #[cfg(feature = "hydrate")]
    {
        use crate::net::types::BootstrapOutcome;
        use crate::util::auth::hard_redirect;

        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_bootstrap().await {
                Ok(BootstrapOutcome::Ready { profile: loaded }) => {
                    auth.set(AuthState { user: Some(loaded.clone()), loading: false });
                    profile.set(Loadable::Ready(loaded));
                }
                Ok(BootstrapOutcome::Redirect { to }) => hard_redirect(&to),
                // Auth stays loading so the sign-out redirect below cannot hide the error.
                Ok(BootstrapOutcome::Failed { message }) | Err(message) => {
                    log::error!("bootstrap failed: {message}");
                    profile.set(Loadable::Failed(message));
                }
            }
        });

        crate::util::auth::install_unauth_redirect(auth, |path, _| hard_redirect(path));
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = auth;

    let failure = move || profile.with(|p| p.error().map(str::to_owned));

    view! {
        <Show
            when=move || profile.with(|p| p.ready().is_some())
            fallback=move || match failure() {
                Some(message) => view! {
                    <main class="admin-layout admin-layout--failed">
                        <ErrorBanner message=format!("Could not load your profile: {message}")/>
                    </main>
                }
                .into_any(),
                None => view! { <LayoutSkeleton/> }.into_any(),
            }
        >
            <div class="admin-layout">
                <MobileSidebar/>
                <aside class="sidebar">
                    <NavItems/>
                </aside>
                <aside class="children">
                    <Outlet/>
                </aside>
            </div>
        </Show>
    }
}
