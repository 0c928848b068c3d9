//! Trips list page.

use leptos::prelude::*;

use crate::components::banner::{EmptyState, ErrorBanner};
use crate::components::header::Header;
use crate::components::pager::Pager;
use crate::components::skeletons::TripsSkeleton;
use crate::components::trip_card::TripCard;
use crate::constants::TRIPS_PAGE_SIZE;
use crate::net::types::TripsPage;
use crate::state::auth::AuthState;
use crate::state::loader::Loadable;

#[component]
pub fn TripsPage() -> impl IntoView {
    let page = RwSignal::new(0_u32);
    let auth = expect_context::<RwSignal<AuthState>>();
    let trips = RwSignal::new(Loadable::<TripsPage>::Loading);

    Effect::new(move || {
        let offset = crate::util::paging::page_offset(page.get(), TRIPS_PAGE_SIZE);
        trips.set(Loadable::Loading);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_trips(TRIPS_PAGE_SIZE, offset).await;
            trips.set(Loadable::from_result(crate::util::auth::track_session(auth, result)));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (offset, auth);
    });

    let total = Signal::derive(move || trips.with(|t| t.ready().map_or(0, |p| p.total)));

    view! {
        <main class="trips wrapper">
            <Header
                title="Trips".to_owned()
                description="View and edit AI-generated travel plans"
                cta_label="Create a trip"
                cta_href="/dashboard/trips/create"
            />
            {move || match trips.get() {
                Loadable::Loading => view! { <TripsSkeleton/> }.into_any(),
                Loadable::Failed(message) => view! { <ErrorBanner message=message/> }.into_any(),
                Loadable::Ready(data) if data.trips.is_empty() => {
                    view! { <EmptyState message="No trips yet. Create the first one."/> }.into_any()
                }
                Loadable::Ready(data) => view! {
                    <div class="trip-grid">
                        {data.trips.into_iter().map(|trip| view! { <TripCard trip=trip/> }).collect_view()}
                    </div>
                }
                .into_any(),
            }}
            <Pager page=page total=total page_size=TRIPS_PAGE_SIZE/>
        </main>
    }
}
