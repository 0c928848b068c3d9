//! Collapsible navigation drawer for narrow screens.

#[cfg(test)]
#[path = "mobile_sidebar_test.rs"]
mod mobile_sidebar_test;

use leptos::prelude::*;

use crate::components::nav_items::NavItems;
use crate::constants::{APP_NAME, LOGO_URL};
use crate::util::auth::DASHBOARD_PATH;

#[component]
pub fn MobileSidebar() -> impl IntoView {
    let open = RwSignal::new(false);
    let close = Callback::new(move |()| open.set(false));

    view! {
        <div class="mobile-sidebar wrapper">
            <header>
                <a href=DASHBOARD_PATH>
                    <img src=LOGO_URL alt="logo" class="size-[30px]"/>
                    <h1>{APP_NAME}</h1>
                </a>
                <button
                    class="cursor-pointer"
                    title="Open menu"
                    on:click=move |_| open.update(|o| *o = !*o)
                >
                    <img src="/assets/icons/menu.svg" alt="menu" class="size-7"/>
                </button>
            </header>

            <Show when=move || open.get()>
                <div class="mobile-sidebar__backdrop" on:click=move |_| open.set(false)></div>
                <aside class="mobile-sidebar__drawer">
                    <NavItems on_navigate=close/>
                </aside>
            </Show>
        </div>
    }
}
