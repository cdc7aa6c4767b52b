use shared_types::Coordinate;
use std::fmt;

/// Degrees added on each side of the center. Roughly 5 km at mid latitudes,
/// shrinking in longitude toward the poles.
pub const DEFAULT_VIEWBOX_DELTA: f64 = 0.05;

/// Search rectangle handed to the provider as a pre-filter. It does not
/// enforce the radius cutoff; [`rank_candidates`](super::rank_candidates) does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewbox {
    pub min_lng: f64,
    pub max_lat: f64,
    pub max_lng: f64,
    pub min_lat: f64,
}

impl Viewbox {
    pub fn around(center: Coordinate, delta: f64) -> Self {
        Self {
            min_lng: center.lng - delta,
            max_lat: center.lat + delta,
            max_lng: center.lng + delta,
            min_lat: center.lat - delta,
        }
    }
}

/// `min_lng,max_lat,max_lng,min_lat`, the order Nominatim expects.
impl fmt::Display for Viewbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.min_lng, self.max_lat, self.max_lng, self.min_lat
        )
    }
}
