use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// A ranked search result as served by `GET /places`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Place {
    pub id: u64,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    /// Meters from the search center.
    pub distance: f64,
}

impl Place {
    /// The display name up to the first comma, e.g. "Blue Tokai" out of
    /// "Blue Tokai, Connaught Place, New Delhi".
    pub fn short_name(&self) -> &str {
        self.name.split(',').next().unwrap_or(&self.name).trim()
    }

    pub fn distance_km(&self) -> String {
        format!("{:.1} km", self.distance / 1000.0)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct PlacesResponse {
    pub results: Vec<Place>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

/// Encyclopedia summary shown for a selected place.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct PlaceSummary {
    pub title: String,
    pub extract: Option<String>,
    pub thumbnail_url: Option<String>,
    pub page_url: Option<String>,
}

impl PlaceSummary {
    /// First `max_chars` characters of the extract, with an ellipsis when cut.
    pub fn short_extract(&self, max_chars: usize) -> Option<String> {
        let extract = self.extract.as_deref()?;
        if extract.chars().count() <= max_chars {
            return Some(extract.to_string());
        }
        let cut: String = extract.chars().take(max_chars).collect();
        Some(format!("{}...", cut))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceCategory {
    DateCafe,
    Restaurant,
    QuickBite,
}

impl PlaceCategory {
    pub const ALL: [PlaceCategory; 3] = [
        PlaceCategory::DateCafe,
        PlaceCategory::Restaurant,
        PlaceCategory::QuickBite,
    ];

    /// Search term sent upstream for this category.
    pub fn query(&self) -> &'static str {
        match self {
            PlaceCategory::DateCafe => "cafe",
            PlaceCategory::Restaurant => "restaurant",
            PlaceCategory::QuickBite => "fast_food",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlaceCategory::DateCafe => "💖 Date Cafes",
            PlaceCategory::Restaurant => "🍽 Restaurants",
            PlaceCategory::QuickBite => "⚡ Quick Bite",
        }
    }
}
