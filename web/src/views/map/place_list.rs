use leptos::prelude::*;
use shared_types::Place;

#[component]
pub fn PlaceList(places: RwSignal<Vec<Place>>, selected: RwSignal<Option<Place>>) -> impl IntoView {
    view! {
        <Show when=move || places.with(|p| !p.is_empty())>
            <div class="places-list">
                <h2>"Recommended Places"</h2>
                <ul>
                    <For
                        each=move || places.get()
                        key=|place| place.id
                        children=move |place: Place| {
                            let id = place.id;
                            let label = place.name.clone();
                            let distance = place.distance_km();
                            view! {
                                <li
                                    class="clickable"
                                    class:selected=move || {
                                        selected.with(|s| s.as_ref().map(|p| p.id) == Some(id))
                                    }
                                    on:click=move |_| selected.set(Some(place.clone()))
                                >
                                    {label}
                                    <span class="distance">" – " {distance}</span>
                                </li>
                            }
                        }
                    />
                </ul>
            </div>
        </Show>
    }
}
