use leptos::prelude::*;
use shared_types::{Place, PlaceSummary};
use thaw::{Label, LabelSize};

const POPUP_EXTRACT_CHARS: usize = 200;

#[component]
pub fn PlacePopup(
    place: Place,
    selected: RwSignal<Option<Place>>,
    summary: RwSignal<Option<PlaceSummary>>,
) -> impl IntoView {
    let id = place.id;
    let title = place.short_name().to_string();
    let distance = place.distance_km();

    // Summary details belong to whichever place is selected
    let details = move || {
        let is_selected = selected.with(|s| s.as_ref().map(|p| p.id) == Some(id));
        if is_selected {
            summary.get()
        } else {
            None
        }
    };

    view! {
        <div class="popup-content">
            <Label size=LabelSize::Large>{title}</Label>
            <p class="popup-distance">{distance}</p>

            {move || {
                details().and_then(|s| {
                    s.thumbnail_url.map(|src| {
                        view! { <img src=src alt=s.title style="width: 100%; border-radius: 8px;" /> }
                    })
                })
            }}
            {move || {
                details().and_then(|s| s.short_extract(POPUP_EXTRACT_CHARS)).map(|extract| {
                    view! { <p style="font-size: 0.85rem;">{extract}</p> }
                })
            }}
            {move || {
                details().and_then(|s| s.page_url).map(|page| {
                    view! {
                        <a href=page target="_blank" rel="noreferrer">
                            "Read more"
                        </a>
                    }
                })
            }}
        </div>
    }
}
