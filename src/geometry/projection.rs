use std::f64::consts::PI;

/// Half the equatorial circumference in spherical Web Mercator, in meters
pub const MERCATOR_HALF_EXTENT: f64 = 20037508.34;

/// Inverse spherical Web Mercator: EPSG:3857 meters to EPSG:4326 degrees
///
/// - lon = x * 180 / R
/// - lat = atan(exp(y * PI / R)) * 360 / PI - 90
///
/// Inputs are not range checked. NaN and infinities propagate.
///
/// # Returns
/// * `[lon, lat]` in degrees
pub fn project(x: f64, y: f64) -> [f64; 2] {
    let lon = x * 180.0 / MERCATOR_HALF_EXTENT;
    let lat = (y * PI / MERCATOR_HALF_EXTENT).exp().atan() * 360.0 / PI - 90.0;
    [lon, lat]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_origin() {
        let [lon, lat] = project(0.0, 0.0);
        assert!(lon.abs() < 1e-9);
        assert!(lat.abs() < 1e-9);
    }

    #[test]
    fn test_project_antimeridian() {
        let [lon, lat] = project(MERCATOR_HALF_EXTENT, 0.0);
        assert!((lon - 180.0).abs() < 1e-9);
        assert!(lat.abs() < 1e-9);

        let [lon, _] = project(-MERCATOR_HALF_EXTENT, 0.0);
        assert!((lon + 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_longitude_linear_and_independent_of_y() {
        for &x in &[-1.5e7, -1234.5, 0.0, 42.0, 9.9e6] {
            let expected = x * 180.0 / MERCATOR_HALF_EXTENT;
            for &y in &[-1.0e7, 0.0, 3.3e6] {
                assert_eq!(project(x, y)[0], expected);
            }
        }
    }

    #[test]
    fn test_latitude_monotonic_and_bounded() {
        let mut previous = f64::NEG_INFINITY;
        for i in -40..=40 {
            let y = i as f64 * 1.0e6;
            let [_, lat] = project(0.0, y);
            assert!(lat > previous, "latitude not increasing at y={}", y);
            assert!(lat > -90.0 && lat < 90.0);
            previous = lat;
        }
    }

    #[test]
    fn test_web_mercator_extent_latitude() {
        // The square world tile tops out at ~85.0511 degrees
        let [_, lat] = project(0.0, MERCATOR_HALF_EXTENT);
        assert!((lat - 85.0511).abs() < 1e-4);
    }

    #[test]
    fn test_non_finite_propagates() {
        let [lon, lat] = project(f64::NAN, f64::NAN);
        assert!(lon.is_nan());
        assert!(lat.is_nan());

        let [lon, _] = project(f64::INFINITY, 0.0);
        assert!(lon.is_infinite());
    }
}
