//! Previous/next controls for offset-paged lists.

use leptos::prelude::*;

use crate::util::paging::{has_next_page, page_label};

#[component]
pub fn Pager(page: RwSignal<u32>, #[prop(into)] total: Signal<u64>, page_size: u32) -> impl IntoView {
    view! {
        <nav class="pager">
            <button
                class="pager__button"
                disabled=move || page.get() == 0
                on:click=move |_| page.update(|p| *p = p.saturating_sub(1))
            >
                "Previous"
            </button>
            <span class="pager__label">{move || page_label(page.get(), total.get(), page_size)}</span>
            <button
                class="pager__button"
                disabled=move || !has_next_page(page.get(), total.get(), page_size)
                on:click=move |_| page.update(|p| *p += 1)
            >
                "Next"
            </button>
        </nav>
    }
}
