use leptos::prelude::*;
use leptos::server;
use shared_types::{Place, PlaceSummary};

#[server]
pub async fn search_nearby_places(
    query: String,
    lat: f64,
    lng: f64,
    limit: usize,
) -> Result<Vec<Place>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::services::get_services;
        use shared_types::Coordinate;

        let services = get_services().map_err(|e| ServerFnError::new(e.to_string()))?;
        let request = services
            .places
            .request(Some(query.as_str()), Coordinate::new(lat, lng), limit)
            .map_err(|e| {
                tracing::warn!("Rejected nearby search: {}", e);
                ServerFnError::new(e.to_string())
            })?;

        match services.places.search(&request).await {
            Ok(places) => Ok(places),
            Err(e) => {
                tracing::error!("Nearby search failed: {}", e);
                Err(ServerFnError::new(format!("Failed to fetch places: {}", e)))
            }
        }
    }
    #[cfg(not(feature = "ssr"))]
    {
        let _ = (query, lat, lng, limit);
        Ok(vec![])
    }
}

/// Summary for the part of a place name before the first comma.
#[server]
pub async fn fetch_place_summary(title: String) -> Result<Option<PlaceSummary>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::services::get_services;

        let services = get_services().map_err(|e| ServerFnError::new(e.to_string()))?;
        services
            .summaries
            .summary(&title)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to fetch summary: {}", e)))
    }
    #[cfg(not(feature = "ssr"))]
    {
        let _ = title;
        Ok(None)
    }
}
