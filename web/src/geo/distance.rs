use shared_types::Coordinate;

/// Mean Earth radius. Spherical approximation, not ellipsoidal.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Surface distance in meters between two points using the haversine formula.
///
/// NaN coordinates yield NaN.
pub fn haversine_distance(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_M * a.sqrt().atan2((1.0 - a).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEW_DELHI: Coordinate = Coordinate::new(28.6139, 77.2090);
    const NEW_YORK: Coordinate = Coordinate::new(40.7128, -74.0060);

    #[test]
    fn test_distance_to_self_is_zero() {
        assert_eq!(haversine_distance(NEW_DELHI, NEW_DELHI), 0.0);
        assert_eq!(haversine_distance(NEW_YORK, NEW_YORK), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let pairs = [
            (NEW_DELHI, NEW_YORK),
            (Coordinate::new(0.0, 0.0), Coordinate::new(-33.8688, 151.2093)),
            (Coordinate::new(89.9, 10.0), Coordinate::new(-89.9, -170.0)),
        ];
        for (a, b) in pairs {
            assert_eq!(haversine_distance(a, b), haversine_distance(b, a));
        }
    }

    #[test]
    fn test_one_degree_of_longitude_on_equator() {
        let d = haversine_distance(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0));
        assert!((d - 111_195.0).abs() < 1.0, "got {}", d);
    }

    #[test]
    fn test_antipodal_points_are_half_circumference_apart() {
        let d = haversine_distance(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0));
        let half = std::f64::consts::PI * EARTH_RADIUS_M;
        assert!((d - half).abs() < 1.0, "got {}", d);
    }

    #[test]
    fn test_triangle_inequality() {
        let a = NEW_DELHI;
        let b = Coordinate::new(28.70, 77.30);
        let c = NEW_YORK;
        let ab = haversine_distance(a, b);
        let bc = haversine_distance(b, c);
        let ac = haversine_distance(a, c);
        assert!(ac <= ab + bc + 1e-6);
    }

    #[test]
    fn test_nan_propagates() {
        let d = haversine_distance(NEW_DELHI, Coordinate::new(f64::NAN, 77.0));
        assert!(d.is_nan());
    }
}
