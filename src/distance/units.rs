//! Unit constants and raw spherical formulas.
//!
//! The spherical distance functions here work in radians on the unit
//! sphere; the calculators convert degrees in and out.

use std::f64::consts::PI;

/// Mean radius of the earth in kilometers.
pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0087714;

/// Kilometers per degree of arc at the mean radius.
pub const DEG_TO_KM: f64 = EARTH_MEAN_RADIUS_KM * PI / 180.0;

/// Degrees of arc per kilometer at the mean radius.
pub const KM_TO_DEG: f64 = 1.0 / DEG_TO_KM;

/// Fold a longitude into the standard range.
///
/// Values already within `[-180, 180]` come back untouched, which keeps
/// `180` as `180` and avoids precision drift. Anything else wraps into
/// `[-180, 180)`.
pub fn norm_lon_deg(lon: f64) -> f64 {
    if (-180.0..=180.0).contains(&lon) {
        return lon;
    }
    (lon + 180.0).rem_euclid(360.0) - 180.0
}

/// Convert a distance along the sphere to degrees of arc.
pub fn dist_to_degrees(dist: f64, radius: f64) -> f64 {
    (dist / radius).to_degrees()
}

/// Convert degrees of arc to a distance along a sphere of `radius`.
pub fn degrees_to_dist(degrees: f64, radius: f64) -> f64 {
    degrees.to_radians() * radius
}

/// Great-circle distance in radians using the haversine formula.
pub fn dist_haversine_rad(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    if lat1 == lat2 && lon1 == lon2 {
        return 0.0;
    }
    let hsin_x = ((lon1 - lon2) * 0.5).sin();
    let hsin_y = ((lat1 - lat2) * 0.5).sin();
    let h = (hsin_y * hsin_y + lat1.cos() * lat2.cos() * hsin_x * hsin_x).min(1.0);
    2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Great-circle distance in radians using the spherical law of cosines.
pub fn dist_law_of_cosines_rad(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    if lat1 == lat2 && lon1 == lon2 {
        return 0.0;
    }
    let cos_b = lat1.cos() * lat2.cos() * (lon1 - lon2).cos() + lat1.sin() * lat2.sin();
    if cos_b < -1.0 {
        PI
    } else if cos_b >= 1.0 {
        0.0
    } else {
        cos_b.acos()
    }
}

/// Great-circle distance in radians using Vincenty's formula for a sphere.
pub fn dist_vincenty_rad(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    if lat1 == lat2 && lon1 == lon2 {
        return 0.0;
    }
    let (sin_lat1, cos_lat1) = lat1.sin_cos();
    let (sin_lat2, cos_lat2) = lat2.sin_cos();
    let (sin_dlon, cos_dlon) = (lon2 - lon1).sin_cos();

    let a = cos_lat2 * sin_dlon;
    let b = cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_dlon;
    let c = sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_dlon;

    (a * a + b * b).sqrt().atan2(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn norm_lon_examples() {
        assert_eq!(norm_lon_deg(181.0), -179.0);
        assert_eq!(norm_lon_deg(-181.0), 179.0);
        assert_eq!(norm_lon_deg(180.0), 180.0);
        assert_eq!(norm_lon_deg(-180.0), -180.0);
        assert_eq!(norm_lon_deg(540.0), -180.0);
        assert_eq!(norm_lon_deg(359.0), -1.0);
        assert_eq!(norm_lon_deg(-359.0), 1.0);
        assert!(norm_lon_deg(f64::NAN).is_nan());
    }

    #[test]
    fn norm_lon_is_idempotent() {
        for x in [-721.5, -360.0, -180.0, -1.0, 0.0, 90.0, 180.0, 181.0, 400.25, 1e6] {
            let once = norm_lon_deg(x);
            assert_eq!(norm_lon_deg(once), once, "x = {x}");
        }
    }

    #[test]
    fn formulas_agree() {
        let (lat1, lon1) = (40.7_f64.to_radians(), (-74.0_f64).to_radians());
        let (lat2, lon2) = (51.5_f64.to_radians(), (-0.1_f64).to_radians());
        let h = dist_haversine_rad(lat1, lon1, lat2, lon2);
        let l = dist_law_of_cosines_rad(lat1, lon1, lat2, lon2);
        let v = dist_vincenty_rad(lat1, lon1, lat2, lon2);
        assert!((h - l).abs() < 1e-9);
        assert!((h - v).abs() < 1e-9);
    }

    #[test]
    fn degree_km_round_trip() {
        assert!((DEG_TO_KM * KM_TO_DEG - 1.0).abs() < 1e-12);
        let d = degrees_to_dist(1.0, EARTH_MEAN_RADIUS_KM);
        assert!((d - DEG_TO_KM).abs() < 1e-9);
        assert!((dist_to_degrees(d, EARTH_MEAN_RADIUS_KM) - 1.0).abs() < 1e-12);
    }
}
