//! Sidebar navigation links with the signed-in profile footer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the desktop sidebar and inside the mobile drawer. The footer
//! reads the profile from the shared `AuthState` context and owns sign-out.

#[cfg(test)]
#[path = "nav_items_test.rs"]
mod nav_items_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::constants::{APP_NAME, LOGO_URL, NAV_FALLBACK_AVATAR, SIDEBAR_ITEMS};
use crate::state::auth::AuthState;
use crate::util::auth::{DASHBOARD_PATH, SIGN_IN_PATH, hard_redirect};

/// Whether the link at `href` should be highlighted for `pathname`.
///
/// The dashboard root only matches exactly; other links also match their
/// sub-pages (`/dashboard/trips/create` highlights "AI Trips").
pub fn is_nav_active(pathname: &str, href: &str) -> bool {
    let pathname = if pathname.len() > 1 { pathname.trim_end_matches('/') } else { pathname };
    if href == DASHBOARD_PATH {
        return pathname == href;
    }
    pathname == href
        || pathname
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn NavItems(
    /// Called after a link is clicked (the mobile drawer closes itself).
    #[prop(optional, into)]
    on_navigate: Option<Callback<()>>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();

    let avatar = move || {
        auth.get()
            .user
            .map_or_else(|| NAV_FALLBACK_AVATAR.to_owned(), |p| p.avatar_url().to_owned())
    };
    let name = move || auth.get().display_name();
    let email = move || auth.get().user.map(|p| p.email).unwrap_or_default();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            auth.update(|a| a.user = None);
            hard_redirect(SIGN_IN_PATH);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = auth;
            hard_redirect(SIGN_IN_PATH);
        }
    };

    view! {
        <section class="nav-items">
            <a href=DASHBOARD_PATH class="link-logo">
                <img src=LOGO_URL alt="logo" class="size-[30px]"/>
                <h1>{APP_NAME}</h1>
            </a>

            <div class="container">
                <nav>
                    {SIDEBAR_ITEMS
                        .iter()
                        .map(|item| {
                            let href = item.href;
                            view! {
                                <a
                                    href=href
                                    class="nav-item"
                                    class:nav-item--active=move || {
                                        is_nav_active(&location.pathname.get(), href)
                                    }
                                    on:click=move |_| {
                                        if let Some(cb) = on_navigate {
                                            cb.run(());
                                        }
                                    }
                                >
                                    <img src=item.icon alt=item.label class="size-5"/>
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                <footer class="nav-footer">
                    <img src=avatar alt=name referrerpolicy="no-referrer"/>
                    <article>
                        <h2>{name}</h2>
                        <p>{email}</p>
                    </article>
                    <button class="cursor-pointer" title="Sign out" on:click=on_logout>
                        <img src="/assets/icons/logout.svg" alt="logout" class="size-6"/>
                    </button>
                </footer>
            </div>
        </section>
    }
}
