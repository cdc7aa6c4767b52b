use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::Deserialize;
use shared_types::Coordinate;

use crate::error::PlacesError;
use crate::gateway::{ProviderQuery, SearchProvider};
use crate::geo::Candidate;

/// One record of a `/search?format=json` response. Nominatim sends the
/// coordinates as strings; everything else it sends is ignored.
#[derive(Debug, Deserialize)]
pub struct NominatimPlace {
    pub place_id: u64,
    pub display_name: String,
    pub lat: String,
    pub lon: String,
}

impl NominatimPlace {
    /// `None` when either coordinate is not a number.
    pub fn into_candidate(self) -> Option<Candidate> {
        let lat = self.lat.trim().parse::<f64>().ok()?;
        let lng = self.lon.trim().parse::<f64>().ok()?;
        Some(Candidate {
            id: self.place_id,
            name: self.display_name,
            coordinate: Coordinate::new(lat, lng),
        })
    }
}

#[derive(Clone)]
pub struct NominatimClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl NominatimClient {
    pub fn new(client: Client, base_url: String, timeout: Duration) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    async fn fetch(&self, query: &ProviderQuery) -> Result<Vec<NominatimPlace>, PlacesError> {
        let viewbox = query.viewbox.to_string();
        let limit = query.limit.to_string();
        let bounded = if query.bounded { "1" } else { "0" };

        let request = self
            .client
            .get(format!("{}/search", self.base_url))
            .header(ACCEPT, "application/json")
            .query(&[
                ("format", "json"),
                ("q", query.text.as_str()),
                ("viewbox", viewbox.as_str()),
                ("bounded", bounded),
                ("limit", limit.as_str()),
            ])
            .build()
            .map_err(|e| PlacesError::from_reqwest(e, self.timeout))?;

        tracing::debug!("Nominatim URL: {}", request.url());

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| PlacesError::from_reqwest(e, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Nominatim returned error status: {}", status);
            return Err(PlacesError::Upstream {
                status: status.as_u16(),
            });
        }

        response
            .json::<Vec<NominatimPlace>>()
            .await
            .map_err(|e| PlacesError::from_reqwest(e, self.timeout))
    }
}

impl SearchProvider for NominatimClient {
    async fn search(&self, query: &ProviderQuery) -> Result<Vec<Candidate>, PlacesError> {
        let records = self.fetch(query).await?;
        let total = records.len();

        let candidates: Vec<Candidate> = records
            .into_iter()
            .filter_map(NominatimPlace::into_candidate)
            .collect();

        if candidates.len() < total {
            tracing::warn!(
                "Dropped {} Nominatim records with unparseable coordinates",
                total - candidates.len()
            );
        }

        Ok(candidates)
    }
}
