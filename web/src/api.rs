use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use shared_types::PlacesResponse;

use crate::error::PlacesError;
use crate::gateway::{PlacesParams, PlacesService, SearchProvider};

/// `GET /places`, mergeable into a router of any state type.
pub fn places_routes<P, S>(service: Arc<PlacesService<P>>) -> Router<S>
where
    P: SearchProvider + 'static,
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/places", get(get_places::<P>))
        .with_state(service)
}

async fn get_places<P: SearchProvider + 'static>(
    State(service): State<Arc<PlacesService<P>>>,
    params: Result<Query<PlacesParams>, QueryRejection>,
) -> Result<Json<PlacesResponse>, PlacesError> {
    let Query(params) = params.map_err(|rejection| {
        tracing::warn!("Malformed places query: {}", rejection.body_text());
        PlacesError::invalid("params", rejection.body_text())
    })?;

    match service.search_params(&params).await {
        Ok(results) => Ok(Json(PlacesResponse { results })),
        Err(e) if e.is_client_error() => {
            tracing::warn!("Rejected places request: {}", e);
            Err(e)
        }
        Err(e) => {
            tracing::error!("Backend error (retryable: {}): {}", e.is_retryable(), e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchSettings;
    use crate::gateway::ProviderQuery;
    use crate::geo::Candidate;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use shared_types::{Coordinate, ErrorResponse};
    use std::time::Duration;
    use tower::ServiceExt;

    enum Canned {
        Candidates(Vec<Candidate>),
        Timeout,
        Network,
    }

    struct CannedProvider(Canned);

    impl SearchProvider for CannedProvider {
        async fn search(&self, _query: &ProviderQuery) -> Result<Vec<Candidate>, PlacesError> {
            match &self.0 {
                Canned::Candidates(c) => Ok(c.clone()),
                Canned::Timeout => Err(PlacesError::Timeout(Duration::from_secs(10))),
                Canned::Network => Err(PlacesError::Network("connection refused".into())),
            }
        }
    }

    fn candidate(id: u64, lat: f64, lng: f64) -> Candidate {
        Candidate {
            id,
            name: format!("Place {}, New Delhi", id),
            coordinate: Coordinate::new(lat, lng),
        }
    }

    async fn call(canned: Canned, uri: &str) -> (StatusCode, serde_json::Value) {
        let service = Arc::new(PlacesService::new(
            CannedProvider(canned),
            SearchSettings::default(),
        ));
        let app: Router = places_routes(service);

        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_places_are_filtered_and_sorted() {
        let canned = Canned::Candidates(vec![
            candidate(1, 28.62, 77.21),
            candidate(2, 28.70, 77.30),
            candidate(3, 28.615, 77.205),
        ]);

        let (status, body) = call(canned, "/places?query=cafe&lat=28.6139&lng=77.2090").await;

        assert_eq!(status, StatusCode::OK);
        let response: PlacesResponse = serde_json::from_value(body).unwrap();
        let ids: Vec<u64> = response.results.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert!(response.results.iter().all(|p| p.distance <= 5000.0));
    }

    #[tokio::test]
    async fn test_limit_is_applied() {
        let canned = Canned::Candidates(vec![
            candidate(1, 28.62, 77.21),
            candidate(3, 28.615, 77.205),
        ]);

        let (status, body) = call(canned, "/places?lat=28.6139&lng=77.2090&limit=1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["results"].as_array().unwrap().len(), 1);
        assert_eq!(body["results"][0]["id"], 3);
    }

    #[tokio::test]
    async fn test_empty_provider_result_is_ok() {
        let (status, body) = call(Canned::Candidates(vec![]), "/places").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({"results": []}));
    }

    #[tokio::test]
    async fn test_provider_failure_is_internal_error() {
        for canned in [Canned::Network, Canned::Timeout] {
            let (status, body) = call(canned, "/places?query=cafe").await;

            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            let error: ErrorResponse = serde_json::from_value(body).unwrap();
            assert!(!error.error.is_empty());
        }
    }

    #[tokio::test]
    async fn test_invalid_coordinates_are_bad_request() {
        let (status, body) = call(Canned::Candidates(vec![]), "/places?lat=abc&lng=77.2").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("lat"));
    }

    #[tokio::test]
    async fn test_malformed_query_string_is_json_bad_request() {
        let (status, body) =
            call(Canned::Candidates(vec![]), "/places?lat=1&lat=2&lng=77.2").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ErrorResponse = serde_json::from_value(body).unwrap();
        assert!(error.error.contains("params"));
    }
}
