//! Great-circle distance on a sphere
//!
//! x is longitude and y is latitude, both in degrees. Results are degrees
//! of arc, the same unit used for geodetic circle radii.

use std::fmt;

use super::DistanceCalculator;
use super::units::{dist_haversine_rad, dist_law_of_cosines_rad, dist_vincenty_rad};
use crate::shape::Point;

/// Convert to radians, run a unit-sphere formula, convert back to degrees
#[inline]
fn sphere_distance(
    formula: fn(f64, f64, f64, f64) -> f64,
    from: &Point,
    to_x: f64,
    to_y: f64,
) -> f64 {
    formula(
        from.y().to_radians(),
        from.x().to_radians(),
        to_y.to_radians(),
        to_x.to_radians(),
    )
    .to_degrees()
}

/// Haversine formula. The default for geodetic contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Haversine;

impl DistanceCalculator for Haversine {
    fn distance_to(&self, from: &Point, to_x: f64, to_y: f64) -> f64 {
        sphere_distance(dist_haversine_rad, from, to_x, to_y)
    }
}

/// Spherical law of cosines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LawOfCosines;

impl DistanceCalculator for LawOfCosines {
    fn distance_to(&self, from: &Point, to_x: f64, to_y: f64) -> f64 {
        sphere_distance(dist_law_of_cosines_rad, from, to_x, to_y)
    }
}

/// Vincenty's formula specialised to a sphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VincentySphere;

impl DistanceCalculator for VincentySphere {
    fn distance_to(&self, from: &Point, to_x: f64, to_y: f64) -> f64 {
        sphere_distance(dist_vincenty_rad, from, to_x, to_y)
    }
}

impl fmt::Display for Haversine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Haversine")
    }
}

impl fmt::Display for LawOfCosines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LawOfCosines")
    }
}

impl fmt::Display for VincentySphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VincentySphere")
    }
}
