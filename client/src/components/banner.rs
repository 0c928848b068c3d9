//! Inline error and empty-state messages.

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="banner banner--error" role="alert">
            <p>{message}</p>
        </div>
    }
}

#[component]
pub fn EmptyState(message: &'static str) -> impl IntoView {
    view! {
        <div class="banner banner--empty">
            <p>{message}</p>
        </div>
    }
}
