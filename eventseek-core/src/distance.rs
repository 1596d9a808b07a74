//! Great-circle distance between WGS84 coordinates.

use geo::Coord;

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates, in kilometres.
///
/// Coordinates use `x = longitude` and `y = latitude` in degrees. The
/// function is symmetric and returns zero for coincident points. Callers
/// must supply valid coordinates; range checking happens upstream when a
/// venue position is parsed.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use eventseek_core::distance_km;
///
/// let san_francisco = Coord { x: -122.4194, y: 37.7749 };
/// let los_angeles = Coord { x: -118.2437, y: 34.0522 };
///
/// let d = distance_km(san_francisco, los_angeles);
/// assert!((500.0..600.0).contains(&d));
/// ```
#[must_use]
pub fn distance_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let d_lat = (b.y - a.y).to_radians();
    let d_lon = (b.x - a.x).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.y.to_radians().cos() * b.y.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    EARTH_RADIUS_KM * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SAN_FRANCISCO: Coord<f64> = Coord {
        x: -122.4194,
        y: 37.7749,
    };
    const LOS_ANGELES: Coord<f64> = Coord {
        x: -118.2437,
        y: 34.0522,
    };

    #[test]
    fn coincident_points_are_zero_distance() {
        assert_eq!(distance_km(SAN_FRANCISCO, SAN_FRANCISCO), 0.0);
    }

    #[test]
    fn san_francisco_to_los_angeles_is_roughly_560_km() {
        let d = distance_km(SAN_FRANCISCO, LOS_ANGELES);
        assert!((550.0..570.0).contains(&d), "got {d}");
    }

    #[test]
    fn one_degree_of_latitude_is_roughly_111_km() {
        let equator = Coord { x: 0.0, y: 0.0 };
        let north = Coord { x: 0.0, y: 1.0 };
        let d = distance_km(equator, north);
        assert!((d - 111.19).abs() < 0.1, "got {d}");
    }

    #[rstest]
    #[case(SAN_FRANCISCO, LOS_ANGELES)]
    #[case(Coord { x: 179.9, y: 0.0 }, Coord { x: -179.9, y: 0.0 })]
    #[case(Coord { x: 0.0, y: 89.0 }, Coord { x: 90.0, y: 89.0 })]
    fn distance_is_symmetric(#[case] a: Coord<f64>, #[case] b: Coord<f64>) {
        let forward = distance_km(a, b);
        let backward = distance_km(b, a);
        assert!((forward - backward).abs() <= 1e-9 * forward.max(1.0));
    }
}
