//! Summary card for one trip.

use leptos::prelude::*;

use crate::net::types::Trip;

#[component]
pub fn TripCard(trip: Trip) -> impl IntoView {
    let cover = trip
        .cover_image()
        .unwrap_or("/assets/images/sample-trip.svg")
        .to_owned();
    let location = trip.first_location().to_owned();
    let name = trip.name.clone();
    let price = trip.estimated_price.clone();
    let tags = trip.tags.clone();

    view! {
        <article class="trip-card">
            <img src=cover alt=name.clone()/>
            <article>
                <h2>{name}</h2>
                <figure>
                    <img src="/assets/icons/location-mark.svg" alt="location" class="size-4"/>
                    <figcaption>{location}</figcaption>
                </figure>
            </article>
            <div class="mt-5 pl-[18px] pr-3.5 pb-5">
                <ul class="tags">
                    {tags
                        .into_iter()
                        .enumerate()
                        .map(|(index, tag)| {
                            view! {
                                <li class="tag" class:tag--alt=index % 2 == 1>
                                    {tag}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
            <article class="tripCard-pill">{price}</article>
        </article>
    }
}
