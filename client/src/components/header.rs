//! Page header with title, description, and an optional call to action.

use leptos::prelude::*;

#[component]
pub fn Header(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] description: String,
    #[prop(optional)] cta_label: Option<&'static str>,
    #[prop(optional)] cta_href: Option<&'static str>,
) -> impl IntoView {
    view! {
        <header class="header">
            <article>
                <h1 class="p-28-bold text-dark-100">{move || title.get()}</h1>
                <p class="p-18-regular text-gray-100">{description}</p>
            </article>
            {cta_label.zip(cta_href).map(|(label, href)| {
                view! {
                    <a href=href class="button-class header__cta">
                        <img src="/assets/icons/plus.svg" alt="" class="size-5"/>
                        <span class="p-16-semibold text-white">{label}</span>
                    </a>
                }
            })}
        </header>
    }
}
