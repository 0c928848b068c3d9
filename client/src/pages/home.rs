//! Landing page for signed-in users without admin access.

use leptos::prelude::*;

use crate::constants::{APP_NAME, LOGO_URL};
use crate::util::auth::{SIGN_IN_PATH, hard_redirect};

#[component]
pub fn HomePage() -> impl IntoView {
    let signing_out = RwSignal::new(false);

    let on_sign_out = move |_| {
        signing_out.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            hard_redirect(SIGN_IN_PATH);
        });
        #[cfg(not(feature = "hydrate"))]
        hard_redirect(SIGN_IN_PATH);
    };

    view! {
        <main class="home">
            <section class="home__card">
                <img src=LOGO_URL alt="logo" class="size-[30px]"/>
                <h1 class="p-28-bold">{APP_NAME}</h1>
                <p class="p-18-regular">
                    "The admin dashboard is only available to administrators."
                </p>
                <div class="home__actions">
                    <a href=SIGN_IN_PATH class="button-class">"Sign in"</a>
                    <button
                        class="button-class button-class--secondary"
                        disabled=move || signing_out.get()
                        on:click=on_sign_out
                    >
                        "Sign out"
                    </button>
                </div>
            </section>
        </main>
    }
}
