use leptos::{prelude::*, task::spawn_local};
use shared_types::{Coordinate, Place, PlaceCategory, PlaceSummary};
use thaw::{Button, ButtonAppearance};

use crate::{
    components::{ErrorView, LoadingView},
    server::{fetch_place_summary, search_nearby_places},
    utils::geolocation::request_current_position,
    views::map::{
        map_renderer::PlacesMap, place_details::PlaceDetails, place_list::PlaceList,
    },
};

pub const DEFAULT_LOCATION: Coordinate = Coordinate::new(40.7128, -74.0060);
pub const PLACES_LIMIT: usize = 30;

#[component]
pub fn NearbyPlaces() -> impl IntoView {
    let category = RwSignal::new(None::<PlaceCategory>);
    let location = RwSignal::new(DEFAULT_LOCATION);
    let places = RwSignal::new(Vec::<Place>::new());
    let selected = RwSignal::new(None::<Place>);
    let summary = RwSignal::new(None::<PlaceSummary>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // Refetch whenever the category or the location changes
    Effect::new(move |_| {
        let Some(category) = category.get() else {
            return;
        };
        let here = location.get();

        loading.set(true);
        error.set(None);

        spawn_local(async move {
            match search_nearby_places(category.query().to_string(), here.lat, here.lng, PLACES_LIMIT)
                .await
            {
                Ok(results) => {
                    places.set(results);
                    selected.set(None);
                    summary.set(None);
                }
                Err(e) => {
                    leptos::logging::error!("Failed to fetch places: {}", e);
                    error.set(Some("Failed to load places".to_string()));
                }
            }
            loading.set(false);
        });
    });

    Effect::new(move |_| {
        let Some(place) = selected.get() else {
            return;
        };
        summary.set(None);
        let title = place.short_name().to_string();

        spawn_local(async move {
            let details = match fetch_place_summary(title).await {
                Ok(details) => details,
                Err(e) => {
                    leptos::logging::log!("No summary for {}: {}", place.name, e);
                    None
                }
            };
            // A newer selection may have landed while this was in flight
            if selected.with_untracked(|s| s.as_ref().map(|p| p.id)) == Some(place.id) {
                summary.set(details);
            }
        });
    });

    let locate_me = move |_ev: web_sys::MouseEvent| {
        request_current_position(
            move |coords| location.set(coords),
            move |message| {
                leptos::logging::warn!("{}", message);
                error.set(Some(message));
                location.set(DEFAULT_LOCATION);
            },
        );
    };

    view! {
        <div class="container">
            <h1>"Smart Nearby Places"</h1>

            <div class="buttons">
                <Button on_click=locate_me>"📍 Get My Location"</Button>
                {PlaceCategory::ALL
                    .into_iter()
                    .map(|c| {
                        view! {
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_ev: web_sys::MouseEvent| category.set(Some(c))
                            >
                                {c.label()}
                            </Button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || loading.get().then(|| view! { <LoadingView /> })}
            {move || error.get().map(|message| view! { <ErrorView message=message /> })}

            <PlacesMap location=location places=places selected=selected summary=summary />
            <PlaceList places=places selected=selected />
            <PlaceDetails summary=summary />
        </div>
    }
}
