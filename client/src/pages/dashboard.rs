//! Dashboard page: greeting, monthly stats, and the latest trips.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::banner::{EmptyState, ErrorBanner};
use crate::components::header::Header;
use crate::components::skeletons::DashboardSkeleton;
use crate::components::stats_card::StatsCard;
use crate::components::trip_card::TripCard;
use crate::net::types::DashboardSummary;
use crate::state::auth::AuthState;
use crate::state::loader::Loadable;

pub const DASHBOARD_DESCRIPTION: &str = "Track activity, trends and popular destinations in real time.";

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let summary = RwSignal::new(Loadable::<DashboardSummary>::Loading);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_dashboard().await;
        summary.set(Loadable::from_result(crate::util::auth::track_session(auth, result)));
    });

    let title = Signal::derive(move || format!("Welcome {} 👋", auth.get().display_name()));

    view! {
        <main class="dashboard wrapper">
            <Header
                title=title
                description=DASHBOARD_DESCRIPTION
            />
            {move || match summary.get() {
                Loadable::Loading => view! { <DashboardSkeleton/> }.into_any(),
                Loadable::Failed(message) => view! { <ErrorBanner message=message/> }.into_any(),
                Loadable::Ready(data) => dashboard_body(data).into_any(),
            }}
        </main>
    }
}

fn dashboard_body(data: DashboardSummary) -> impl IntoView {
    let stats = data.stats;
    let has_trips = !data.trips.is_empty();
    let trips = data.trips.into_iter().take(4).map(|trip| view! { <TripCard trip=trip/> }).collect_view();

    view! {
        <section class="flex flex-col gap-6">
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6 w-full">
                <StatsCard
                    header_title="Total Users"
                    total=stats.total_users
                    current_month_count=stats.users_joined.current_month
                    last_month_count=stats.users_joined.last_month
                />
                <StatsCard
                    header_title="Total Trips"
                    total=stats.total_trips
                    current_month_count=stats.trips_created.current_month
                    last_month_count=stats.trips_created.last_month
                />
                <StatsCard
                    header_title="Active Users"
                    total=stats.active_users
                    current_month_count=stats.active_users_joined.current_month
                    last_month_count=stats.active_users_joined.last_month
                />
            </div>
        </section>
        <section class="container">
            <h1 class="text-xl font-semibold text-dark-100">"Created Trips"</h1>
            {if has_trips {
                view! { <div class="trip-grid">{trips}</div> }.into_any()
            } else {
                view! { <EmptyState message="No trips created yet."/> }.into_any()
            }}
        </section>
    }
}
