// HTTP clients for the search and summary providers, shared by the
// `/places` route and the server functions.

pub mod nominatim;
pub mod wikipedia;

use std::sync::{Arc, OnceLock};

use crate::config::{AppConfig, ProviderSettings};
use crate::error::PlacesError;
use crate::gateway::PlacesService;

pub use nominatim::NominatimClient;
pub use wikipedia::WikipediaClient;

pub struct AppServices {
    pub places: Arc<PlacesService<NominatimClient>>,
    pub summaries: WikipediaClient,
}

static SERVICES: OnceLock<Arc<AppServices>> = OnceLock::new();

/// One client for both providers. The timeout bounds the whole exchange,
/// body included.
pub fn build_http_client(settings: &ProviderSettings) -> Result<reqwest::Client, PlacesError> {
    reqwest::Client::builder()
        .user_agent(settings.user_agent.as_str())
        .timeout(settings.timeout)
        .build()
        .map_err(|e| PlacesError::Config(format!("Failed to build HTTP client: {}", e)))
}

pub fn init_services(config: &AppConfig) -> Result<Arc<AppServices>, PlacesError> {
    let client = build_http_client(&config.providers)?;

    let provider = NominatimClient::new(
        client.clone(),
        config.providers.nominatim_url.clone(),
        config.providers.timeout,
    );
    let services = Arc::new(AppServices {
        places: Arc::new(PlacesService::new(provider, config.search.clone())),
        summaries: WikipediaClient::new(
            client,
            config.providers.wikipedia_url.clone(),
            config.providers.timeout,
        ),
    });

    SERVICES
        .set(services.clone())
        .map_err(|_| PlacesError::Config("Place services already initialized".to_string()))?;

    Ok(services)
}

pub fn get_services() -> Result<Arc<AppServices>, PlacesError> {
    SERVICES.get().cloned().ok_or(PlacesError::NotInitialized)
}
