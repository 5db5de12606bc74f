//! Planar Euclidean distance

use glam::dvec2;
use std::fmt;

use super::DistanceCalculator;
use crate::shape::Point;

/// Euclidean distance in the native units of x and y.
///
/// The squared variant skips the square root; it orders points the same
/// way and is cheaper when only comparisons are needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cartesian {
    squared: bool,
}

impl Cartesian {
    pub const fn new() -> Self {
        Cartesian { squared: false }
    }

    pub const fn squared() -> Self {
        Cartesian { squared: true }
    }

    pub fn is_squared(&self) -> bool {
        self.squared
    }
}

impl DistanceCalculator for Cartesian {
    fn distance_to(&self, from: &Point, to_x: f64, to_y: f64) -> f64 {
        let a = dvec2(from.x(), from.y());
        let b = dvec2(to_x, to_y);
        if self.squared {
            a.distance_squared(b)
        } else {
            a.distance(b)
        }
    }
}

impl fmt::Display for Cartesian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.squared {
            f.write_str("Cartesian^2")
        } else {
            f.write_str("Cartesian")
        }
    }
}
