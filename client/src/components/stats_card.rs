//! Dashboard statistic with a month-over-month trend badge.

use leptos::prelude::*;

use crate::util::format::{TrendKind, calculate_trend};

#[component]
pub fn StatsCard(
    header_title: &'static str,
    total: u64,
    current_month_count: u64,
    last_month_count: u64,
) -> impl IntoView {
    let trend = calculate_trend(current_month_count, last_month_count);
    let (badge_class, arrow) = match trend.kind {
        TrendKind::Increment => ("trend trend--up", "/assets/icons/arrow-up-green.svg"),
        TrendKind::Decrement => ("trend trend--down", "/assets/icons/arrow-down-red.svg"),
        TrendKind::NoChange => ("trend trend--flat", "/assets/icons/arrow-up-green.svg"),
    };
    let chart = if trend.kind == TrendKind::Decrement {
        "/assets/icons/decrement.svg"
    } else {
        "/assets/icons/increment.svg"
    };

    view! {
        <article class="stats-card">
            <h3 class="text-base font-medium">{header_title}</h3>
            <div class="content">
                <div class="flex flex-col gap-4">
                    <h2 class="text-4xl font-semibold">{total}</h2>
                    <div class="flex items-center gap-2">
                        <figure class=badge_class>
                            <img src=arrow alt="arrow" class="size-5"/>
                            <figcaption>{trend.label()}</figcaption>
                        </figure>
                        <p class="text-sm font-medium text-gray-100 truncate">"vs last month"</p>
                    </div>
                </div>
                <img src=chart alt="trend graph" class="xl:w-32 w-full h-full md:h-32 xl:h-full"/>
            </div>
        </article>
    }
}
