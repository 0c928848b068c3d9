//! Placeholder views rendered during SSR and while a page loader runs.

use leptos::prelude::*;

fn blocks(count: usize, class: &'static str) -> impl IntoView {
    (0..count).map(|_| view! { <div class=class></div> }).collect_view()
}

/// Shown by the admin layout until bootstrap settles.
#[component]
pub fn LayoutSkeleton() -> impl IntoView {
    view! {
        <div class="admin-layout skeleton">
            <aside class="skeleton__sidebar">{blocks(4, "skeleton__line")}</aside>
            <main class="skeleton__main">
                <div class="skeleton__title"></div>
                {blocks(3, "skeleton__card")}
            </main>
        </div>
    }
}

#[component]
pub fn DashboardSkeleton() -> impl IntoView {
    view! {
        <section class="dashboard wrapper skeleton">
            <div class="skeleton__title"></div>
            <div class="stats-grid">{blocks(3, "skeleton__card")}</div>
            <div class="trip-grid">{blocks(4, "skeleton__trip")}</div>
        </section>
    }
}

#[component]
pub fn UsersGridSkeleton() -> impl IntoView {
    view! {
        <div class="users-grid skeleton">
            <div class="skeleton__line skeleton__line--header"></div>
            {blocks(5, "skeleton__line")}
        </div>
    }
}

#[component]
pub fn TripsSkeleton() -> impl IntoView {
    view! { <div class="trip-grid skeleton">{blocks(8, "skeleton__trip")}</div> }
}

#[component]
pub fn FormSkeleton() -> impl IntoView {
    view! { <div class="trip-form skeleton">{blocks(6, "skeleton__line")}</div> }
}

/// Shown on the sign-in and callback pages before hydration.
#[component]
pub fn AuthSkeleton(#[prop(optional)] message: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="auth skeleton">
            <div class="skeleton__card"></div>
            {message.map(|m| view! { <p class="p-18-regular">{m}</p> })}
        </div>
    }
}
