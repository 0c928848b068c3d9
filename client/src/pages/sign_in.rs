//! Sign-in page offering OAuth through the hosted auth service.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server guard already redirects visitors with a session to the
//! dashboard. After hydration the page re-checks `/api/auth/me` so a session
//! created in another tab is honoured too.

use leptos::prelude::*;

use crate::components::skeletons::AuthSkeleton;
use crate::constants::{APP_NAME, LOGO_URL};
use crate::util::auth::{DASHBOARD_PATH, hard_redirect};

#[component]
pub fn SignInPage() -> impl IntoView {
    let checking = RwSignal::new(true);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if crate::net::api::fetch_current_user().await.is_some() {
            hard_redirect(DASHBOARD_PATH);
        } else {
            checking.set(false);
        }
    });

    let on_google = move |_| {
        busy.set(true);
        hard_redirect("/auth/google");
    };

    view! {
        <main class="auth">
            <Show when=move || !checking.get() fallback=|| view! { <AuthSkeleton/> }>
                <section class="size-full glassmorphism flex-center px-6">
                    <div class="sign-in-card">
                        <header class="header">
                            <a href=DASHBOARD_PATH>
                                <img src=LOGO_URL alt="logo" class="size-[30px]"/>
                            </a>
                            <h1 class="p-28-bold text-dark-100">{APP_NAME}</h1>
                        </header>
                        <article>
                            <h2 class="p-28-semibold text-dark-100 text-center">
                                "Start Your Travel Journey"
                            </h2>
                            <p class="p-18-regular text-center text-gray-100 !leading-7">
                                "Sign in with Google to manage destinations, itineraries, and user activity with ease."
                            </p>
                        </article>
                        <button
                            type="button"
                            class="button-class !h-11 !w-full"
                            disabled=move || busy.get()
                            on:click=on_google
                        >
                            <img src="/assets/icons/google.svg" alt="google" class="size-5"/>
                            <span class="p-18-semibold text-white">"Sign in with Google"</span>
                        </button>
                    </div>
                </section>
            </Show>
        </main>
    }
}
