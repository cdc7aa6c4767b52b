use leptos::prelude::*;
use shared_types::PlaceSummary;

/// Full summary card for the selected place.
#[component]
pub fn PlaceDetails(summary: RwSignal<Option<PlaceSummary>>) -> impl IntoView {
    move || {
        summary.get().map(|details| {
            let PlaceSummary {
                title,
                extract,
                thumbnail_url,
                page_url,
            } = details;

            view! {
                <div class="details-card">
                    <h2>{title.clone()}</h2>
                    {thumbnail_url.map(|src| view! { <img src=src alt=title /> })}
                    {extract.map(|text| view! { <p>{text}</p> })}
                    {page_url.map(|page| {
                        view! {
                            <a href=page target="_blank" rel="noreferrer">
                                "Read more on Wikipedia"
                            </a>
                        }
                    })}
                </div>
            }
        })
    }
}
