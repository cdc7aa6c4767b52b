//! Great-circle distance, provider viewboxes, and the radius filter that
//! turns raw provider candidates into ranked places.

pub mod distance;
pub mod ranking;
pub mod viewbox;

pub use distance::{haversine_distance, EARTH_RADIUS_M};
pub use ranking::{rank_candidates, Candidate, RankingOptions};
pub use viewbox::Viewbox;
