use std::str::FromStr;
use std::time::Duration;

use shared_types::Coordinate;

use crate::error::PlacesError;
use crate::geo::ranking::{DEFAULT_LIMIT, DEFAULT_RADIUS_M};
use crate::geo::viewbox::DEFAULT_VIEWBOX_DELTA;
use crate::geo::RankingOptions;

pub const DEFAULT_QUERY: &str = "cafe";
pub const DEFAULT_CENTER: Coordinate = Coordinate::new(28.6139, 77.2090);
pub const DEFAULT_UPSTREAM_LIMIT: usize = 50;
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Defaults and constants applied by the gateway to every search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSettings {
    pub default_query: String,
    pub default_center: Coordinate,
    /// `limit` here is the default used when a request gives none.
    pub ranking: RankingOptions,
    pub viewbox_delta: f64,
    /// How many raw records to ask the provider for.
    pub upstream_limit: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_query: DEFAULT_QUERY.to_string(),
            default_center: DEFAULT_CENTER,
            ranking: RankingOptions {
                radius_m: DEFAULT_RADIUS_M,
                limit: DEFAULT_LIMIT,
            },
            viewbox_delta: DEFAULT_VIEWBOX_DELTA,
            upstream_limit: DEFAULT_UPSTREAM_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSettings {
    pub nominatim_url: String,
    pub wikipedia_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            nominatim_url: "https://nominatim.openstreetmap.org".to_string(),
            wikipedia_url: "https://en.wikipedia.org/api/rest_v1".to_string(),
            user_agent: "nearby-places/0.1 (education)".to_string(),
            timeout: DEFAULT_UPSTREAM_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppConfig {
    pub search: SearchSettings,
    pub providers: ProviderSettings,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, PlacesError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source, falling back to the
    /// defaults for missing keys. Present but unparseable values are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PlacesError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();

        let search = SearchSettings {
            default_query: lookup("PLACES_DEFAULT_QUERY")
                .unwrap_or(defaults.search.default_query),
            default_center: Coordinate::new(
                parse_var(&lookup, "PLACES_DEFAULT_LAT", defaults.search.default_center.lat)?,
                parse_var(&lookup, "PLACES_DEFAULT_LNG", defaults.search.default_center.lng)?,
            ),
            ranking: RankingOptions {
                radius_m: parse_var(&lookup, "PLACES_RADIUS_M", defaults.search.ranking.radius_m)?,
                limit: parse_var(&lookup, "PLACES_DEFAULT_LIMIT", defaults.search.ranking.limit)?,
            },
            viewbox_delta: parse_var(
                &lookup,
                "PLACES_VIEWBOX_DELTA",
                defaults.search.viewbox_delta,
            )?,
            upstream_limit: parse_var(
                &lookup,
                "PLACES_UPSTREAM_LIMIT",
                defaults.search.upstream_limit,
            )?,
        };

        let timeout_secs = parse_var(
            &lookup,
            "PLACES_UPSTREAM_TIMEOUT_SECS",
            defaults.providers.timeout.as_secs(),
        )?;

        let providers = ProviderSettings {
            nominatim_url: lookup("NOMINATIM_URL").unwrap_or(defaults.providers.nominatim_url),
            wikipedia_url: lookup("WIKIPEDIA_URL").unwrap_or(defaults.providers.wikipedia_url),
            user_agent: lookup("PLACES_USER_AGENT").unwrap_or(defaults.providers.user_agent),
            timeout: Duration::from_secs(timeout_secs),
        };

        Ok(AppConfig { search, providers })
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, PlacesError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| PlacesError::invalid(key, raw)),
        None => Ok(default),
    }
}
