use crate::views::map::map_marker::PlaceMarker;
use leptos::prelude::*;
use leptos_leaflet::{leaflet::Map, prelude::*};
use shared_types::{Coordinate, Place, PlaceSummary};

#[component]
pub fn PlacesMap(
    location: RwSignal<Coordinate>,
    places: RwSignal<Vec<Place>>,
    selected: RwSignal<Option<Place>>,
    summary: RwSignal<Option<PlaceSummary>>,
) -> impl IntoView {
    let center: Memo<Position> = Memo::new(move |_| {
        let Coordinate { lat, lng } = location.get();
        Position::new(lat, lng)
    });

    let map: JsRwSignal<Option<Map>> = JsRwSignal::new_local(None::<Map>);

    // Keep the zoom the user picked, move only the center
    Effect::new(move |_| {
        let new_pos = center.get();
        if let Some(map) = map.get_untracked() {
            map.set_view(&new_pos.as_lat_lng(), map.get_zoom());
        }
    });

    view! {
        <MapContainer
            style="height: 400px; width: 100%"
            center=center.get_untracked()
            zoom=13.0
            set_view=true
            map=map.write_only()
        >
            <TileLayer
                url="https://tile.openstreetmap.org/{z}/{x}/{y}.png"
                attribution="&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
            />
            {move || {
                let here = location.get();
                view! {
                    <Marker position=Position::new(here.lat, here.lng) draggable=false>
                        <Popup>"You are here"</Popup>
                    </Marker>
                }
            }}
            {move || {
                places
                    .get()
                    .into_iter()
                    .map(|place| view! { <PlaceMarker place=place selected=selected summary=summary /> })
                    .collect_view()
            }}
        </MapContainer>
    }
}
