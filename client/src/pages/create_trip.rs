//! Create-trip form.
//!
//! Fields are parsed and validated locally with `TripForm`; the server
//! validates again before inserting. Success navigates to the trips list; a
//! lost session hands off to the sign-in redirect.

use leptos::prelude::*;

use crate::components::banner::ErrorBanner;
use crate::components::header::Header;
use crate::components::skeletons::FormSkeleton;
use crate::state::auth::AuthState;
use crate::util::trip_form::{MAX_DURATION_DAYS, MIN_DURATION_DAYS, TripField, TripForm};

const TRIPS_PATH: &str = "/dashboard/trips";

#[component]
pub fn CreateTripPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let form = RwSignal::new(TripForm::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    // Effects only run in the browser, so SSR keeps the skeleton.
    let hydrated = RwSignal::new(false);
    Effect::new(move || hydrated.set(true));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match form.with(TripForm::to_request) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::util::auth::track_session(auth, crate::net::api::create_trip(&request).await) {
                Ok(trip) => {
                    log::info!("created trip {}", trip.id);
                    crate::util::auth::hard_redirect(TRIPS_PATH);
                }
                Err(message) => {
                    error.set(Some(message));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, auth);
    };

    view! {
        <main class="create-trip wrapper">
            <Header title="Add a New Trip".to_owned() description="View and edit AI generated travel plans"/>
            <section class="wrapper-md">
                <Show when=move || hydrated.get() fallback=|| view! { <FormSkeleton/> }>
                    <form class="trip-form" on:submit=on_submit>
                        {text_field("name", "Trip name", form, TripField::Name)}
                        {text_field("country", "Country", form, TripField::Country)}
                        <div>
                            <label for="duration">"Duration (days)"</label>
                            <input
                                id="duration"
                                type="number"
                                min=MIN_DURATION_DAYS.to_string()
                                max=MAX_DURATION_DAYS.to_string()
                                placeholder="Enter a number of days (5, 12 ...)"
                                class="form-input"
                                prop:value=move || current(form, TripField::Duration)
                                on:input=move |ev| form.update(|f| f.set_field(TripField::Duration, event_target_value(&ev)))
                            />
                        </div>
                        {text_area("description", "Description", form, TripField::Description)}
                        {text_field("tags", "Tags (comma separated)", form, TripField::Tags)}
                        {text_field("estimated_price", "Estimated price", form, TripField::EstimatedPrice)}
                        {text_area("image_urls", "Image URLs (one per line)", form, TripField::ImageUrls)}
                        {text_area("itinerary", "Itinerary stops (one per line)", form, TripField::Itinerary)}

                        <Show when=move || error.get().is_some()>
                            <ErrorBanner message=error.get().unwrap_or_default()/>
                        </Show>

                        <footer class="px-6 w-full">
                            <button type="submit" class="button-class !h-12 !w-full" disabled=move || busy.get()>
                                <span class="p-16-semibold text-white">
                                    {move || if busy.get() { "Saving..." } else { "Create trip" }}
                                </span>
                            </button>
                        </footer>
                    </form>
                </Show>
            </section>
        </main>
    }
}

fn current(form: RwSignal<TripForm>, field: TripField) -> String {
    form.with(|f| f.field(field).to_owned())
}

fn text_field(id: &'static str, label: &'static str, form: RwSignal<TripForm>, field: TripField) -> impl IntoView {
    view! {
        <div>
            <label for=id>{label}</label>
            <input
                id=id
                type="text"
                class="form-input"
                prop:value=move || current(form, field)
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            />
        </div>
    }
}

fn text_area(id: &'static str, label: &'static str, form: RwSignal<TripForm>, field: TripField) -> impl IntoView {
    view! {
        <div>
            <label for=id>{label}</label>
            <textarea
                id=id
                rows="3"
                class="form-input"
                prop:value=move || current(form, field)
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            ></textarea>
        </div>
    }
}
