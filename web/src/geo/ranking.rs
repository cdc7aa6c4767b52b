use shared_types::{Coordinate, Place};

use super::distance::haversine_distance;

pub const DEFAULT_RADIUS_M: f64 = 5_000.0;
pub const DEFAULT_LIMIT: usize = 20;

/// A provider record reduced to what ranking needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub id: u64,
    pub name: String,
    pub coordinate: Coordinate,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingOptions {
    /// Hard cutoff in meters; candidates farther away are dropped.
    pub radius_m: f64,
    pub limit: usize,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            radius_m: DEFAULT_RADIUS_M,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Measures every candidate from `center`, keeps those within the radius,
/// sorts nearest first and keeps at most `limit`.
///
/// The sort is stable, so candidates at equal distance keep provider order.
/// A candidate whose distance is NaN never passes the radius check.
pub fn rank_candidates<I>(center: Coordinate, candidates: I, options: RankingOptions) -> Vec<Place>
where
    I: IntoIterator<Item = Candidate>,
{
    let mut places: Vec<Place> = candidates
        .into_iter()
        .filter_map(|candidate| {
            let distance = haversine_distance(center, candidate.coordinate);
            (distance <= options.radius_m).then(|| Place {
                id: candidate.id,
                name: candidate.name,
                lat: candidate.coordinate.lat,
                lng: candidate.coordinate.lng,
                distance,
            })
        })
        .collect();

    places.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    places.truncate(options.limit);
    places
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEW_DELHI: Coordinate = Coordinate::new(28.6139, 77.2090);

    fn candidate(id: u64, lat: f64, lng: f64) -> Candidate {
        Candidate {
            id,
            name: format!("place {}", id),
            coordinate: Coordinate::new(lat, lng),
        }
    }

    fn ids(places: &[Place]) -> Vec<u64> {
        places.iter().map(|p| p.id).collect()
    }

    fn delhi_candidates() -> Vec<Candidate> {
        vec![
            candidate(1, 28.62, 77.21),
            candidate(2, 28.70, 77.30),
            candidate(3, 28.615, 77.205),
        ]
    }

    #[test]
    fn test_far_candidates_are_excluded_and_rest_sorted() {
        let ranked = rank_candidates(NEW_DELHI, delhi_candidates(), RankingOptions::default());

        assert_eq!(ids(&ranked), vec![3, 1]);
        assert!(ranked[0].distance <= ranked[1].distance);
        assert!(ranked.iter().all(|p| p.distance <= DEFAULT_RADIUS_M));
    }

    #[test]
    fn test_limit_one_returns_nearest() {
        let candidates = vec![
            candidate(1, 28.62, 77.21),
            candidate(2, 28.6139, 77.2091),
            candidate(3, 28.615, 77.205),
        ];
        let options = RankingOptions {
            limit: 1,
            ..Default::default()
        };

        let ranked = rank_candidates(NEW_DELHI, candidates, options);

        assert_eq!(ids(&ranked), vec![2]);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let ranked = rank_candidates(NEW_DELHI, Vec::new(), RankingOptions::default());
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_limit_larger_than_survivors() {
        let options = RankingOptions {
            limit: 10_000,
            ..Default::default()
        };
        let ranked = rank_candidates(NEW_DELHI, delhi_candidates(), options);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_limit_zero_yields_nothing() {
        let options = RankingOptions {
            limit: 0,
            ..Default::default()
        };
        assert!(rank_candidates(NEW_DELHI, delhi_candidates(), options).is_empty());
    }

    #[test]
    fn test_ties_keep_provider_order() {
        let candidates = vec![
            candidate(9, 28.62, 77.21),
            candidate(4, 28.62, 77.21),
            candidate(7, 28.615, 77.205),
            candidate(5, 28.62, 77.21),
        ];

        let ranked = rank_candidates(NEW_DELHI, candidates, RankingOptions::default());

        assert_eq!(ids(&ranked), vec![7, 9, 4, 5]);
    }

    #[test]
    fn test_nan_coordinates_are_dropped() {
        let candidates = vec![candidate(1, f64::NAN, 77.21), candidate(3, 28.615, 77.205)];
        let ranked = rank_candidates(NEW_DELHI, candidates, RankingOptions::default());
        assert_eq!(ids(&ranked), vec![3]);
    }

    #[test]
    fn test_custom_radius() {
        let options = RankingOptions {
            radius_m: 20_000.0,
            ..Default::default()
        };
        let ranked = rank_candidates(NEW_DELHI, delhi_candidates(), options);
        assert_eq!(ids(&ranked), vec![3, 1, 2]);
    }

    #[test]
    fn test_output_is_sorted_and_bounded_for_a_grid() {
        let candidates: Vec<Candidate> = (0..400u64)
            .map(|i| {
                let lat = 28.5 + (i % 20) as f64 * 0.012;
                let lng = 77.1 + (i / 20) as f64 * 0.012;
                candidate(i, lat, lng)
            })
            .collect();
        let options = RankingOptions {
            limit: 25,
            ..Default::default()
        };

        let ranked = rank_candidates(NEW_DELHI, candidates, options);

        assert!(ranked.len() <= 25);
        assert!(!ranked.is_empty());
        assert!(ranked.iter().all(|p| p.distance <= DEFAULT_RADIUS_M));
        assert!(ranked.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn test_ranked_place_keeps_candidate_fields() {
        let ranked = rank_candidates(
            NEW_DELHI,
            vec![candidate(3, 28.615, 77.205)],
            RankingOptions::default(),
        );
        let place = &ranked[0];
        assert_eq!(place.name, "place 3");
        assert_eq!((place.lat, place.lng), (28.615, 77.205));
        assert!(place.distance > 0.0);
    }
}
