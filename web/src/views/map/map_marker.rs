use crate::views::map::map_marker_popup::PlacePopup;
use leptos::prelude::*;
use leptos_leaflet::prelude::*;
use shared_types::{Place, PlaceSummary};

const PIN_FILL: &str = "%235b21b6";

#[component]
pub fn PlaceMarker(
    place: Place,
    selected: RwSignal<Option<Place>>,
    summary: RwSignal<Option<PlaceSummary>>,
) -> impl IntoView {
    let icon_svg = format!(
        "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='28' height='42' viewBox='0 0 28 42'%3E%3Cpath fill='{}' stroke='%23ffffff' stroke-width='1.5' d='M14 2C8.5 2 4 6.5 4 12c0 8.5 10 26 10 26s10-17.5 10-26c0-5.5-4.5-10-10-10zm0 13.5c-1.9 0-3.5-1.6-3.5-3.5s1.6-3.5 3.5-3.5 3.5 1.6 3.5 3.5-1.6 3.5-3.5 3.5z'/%3E%3C/svg%3E",
        PIN_FILL
    );

    // Selecting the place loads its summary into this marker's popup
    let clicked = place.clone();
    let mouse_events = MouseEvents::new().on_click(move |_| selected.set(Some(clicked.clone())));

    view! {
        <Marker
            position=Position::new(place.lat, place.lng)
            draggable=false
            mouse_events=mouse_events
            icon_url=Some(icon_svg)
            icon_size=Some((28.0, 42.0))
            icon_anchor=Some((14.0, 42.0))
        >
            <Popup>
                <PlacePopup place=place selected=selected summary=summary />
            </Popup>
        </Marker>
    }
}
