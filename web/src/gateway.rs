//! Turns an inbound search into a bounded provider query and ranks what comes
//! back.

use std::future::Future;

use serde::Deserialize;
use shared_types::{Coordinate, Place};

use crate::config::SearchSettings;
use crate::error::PlacesError;
use crate::geo::{rank_candidates, Candidate, RankingOptions, Viewbox};

/// Raw `GET /places` query string. Everything stays a string until
/// [`PlacesService::parse_request`] validates it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlacesParams {
    pub query: Option<String>,
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    pub center: Coordinate,
    pub limit: usize,
}

/// What gets sent to the search provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderQuery {
    pub text: String,
    pub viewbox: Viewbox,
    /// Restrict results to the viewbox instead of merely preferring it.
    pub bounded: bool,
    pub limit: usize,
}

pub trait SearchProvider: Send + Sync {
    fn search(
        &self,
        query: &ProviderQuery,
    ) -> impl Future<Output = Result<Vec<Candidate>, PlacesError>> + Send;
}

pub struct PlacesService<P> {
    provider: P,
    settings: SearchSettings,
}

impl<P: SearchProvider> PlacesService<P> {
    pub fn new(provider: P, settings: SearchSettings) -> Self {
        Self { provider, settings }
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// Validates already-typed inputs. A missing or blank query takes the
    /// default; a non-finite center is rejected.
    pub fn request(
        &self,
        query: Option<&str>,
        center: Coordinate,
        limit: usize,
    ) -> Result<SearchRequest, PlacesError> {
        if !center.is_finite() {
            let (field, value) = if center.lat.is_finite() {
                ("lng", center.lng)
            } else {
                ("lat", center.lat)
            };
            return Err(PlacesError::invalid(field, value.to_string()));
        }

        let query = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .unwrap_or(self.settings.default_query.as_str())
            .to_string();

        Ok(SearchRequest {
            query,
            center,
            limit,
        })
    }

    pub fn parse_request(&self, params: &PlacesParams) -> Result<SearchRequest, PlacesError> {
        let lat = match params.lat.as_deref() {
            Some(raw) => parse_degrees("lat", raw)?,
            None => self.settings.default_center.lat,
        };
        let lng = match params.lng.as_deref() {
            Some(raw) => parse_degrees("lng", raw)?,
            None => self.settings.default_center.lng,
        };
        let limit = match params.limit.as_deref() {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| PlacesError::invalid("limit", raw))?,
            None => self.settings.ranking.limit,
        };

        self.request(params.query.as_deref(), Coordinate::new(lat, lng), limit)
    }

    pub fn provider_query(&self, request: &SearchRequest) -> ProviderQuery {
        ProviderQuery {
            text: request.query.clone(),
            viewbox: Viewbox::around(request.center, self.settings.viewbox_delta),
            bounded: true,
            limit: self.settings.upstream_limit,
        }
    }

    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<Place>, PlacesError> {
        let provider_query = self.provider_query(request);
        let candidates = self.provider.search(&provider_query).await?;
        let candidate_count = candidates.len();

        let options = RankingOptions {
            radius_m: self.settings.ranking.radius_m,
            limit: request.limit,
        };
        let places = rank_candidates(request.center, candidates, options);

        tracing::debug!(
            query = %request.query,
            candidates = candidate_count,
            returned = places.len(),
            "Ranked provider candidates"
        );

        Ok(places)
    }

    pub async fn search_params(&self, params: &PlacesParams) -> Result<Vec<Place>, PlacesError> {
        let request = self.parse_request(params)?;
        self.search(&request).await
    }
}

fn parse_degrees(field: &'static str, raw: &str) -> Result<f64, PlacesError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| PlacesError::invalid(field, raw))
}
