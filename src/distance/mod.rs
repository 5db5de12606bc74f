//! Distance calculators
//!
//! A context holds exactly one [`DistanceCalc`], chosen when the context is
//! resolved: [`Haversine`] for geodetic contexts and [`Cartesian`] for
//! planar ones, unless the configuration supplies one explicitly.

use enum_dispatch::enum_dispatch;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::errors::SpatialError;
use crate::shape::Point;

pub use self::cartesian::Cartesian;
pub use self::sphere::{Haversine, LawOfCosines, VincentySphere};

mod cartesian;
mod sphere;
pub mod units;

/// Computes the distance between two coordinate pairs.
///
/// Geodetic implementations return degrees of arc so that a distance and
/// a circle radius are directly comparable.
#[enum_dispatch]
pub trait DistanceCalculator: fmt::Debug + Send + Sync {
    /// Distance from `from` to the coordinate `(to_x, to_y)`.
    fn distance_to(&self, from: &Point, to_x: f64, to_y: f64) -> f64;

    /// Distance between two points.
    fn distance(&self, from: &Point, to: &Point) -> f64 {
        self.distance_to(from, to.x(), to.y())
    }
}

impl<T: DistanceCalculator + ?Sized> DistanceCalculator for Arc<T> {
    fn distance_to(&self, from: &Point, to_x: f64, to_y: f64) -> f64 {
        (**self).distance_to(from, to_x, to_y)
    }

    fn distance(&self, from: &Point, to: &Point) -> f64 {
        (**self).distance(from, to)
    }
}

/// The calculator held by a context.
#[enum_dispatch(DistanceCalculator)]
#[derive(Debug, Clone)]
pub enum DistanceCalc {
    Cartesian(Cartesian),
    Haversine(Haversine),
    LawOfCosines(LawOfCosines),
    VincentySphere(VincentySphere),
    /// A caller supplied implementation
    Custom(Arc<dyn DistanceCalculator>),
}

impl DistanceCalc {
    /// The calculator a context uses when none is configured
    pub fn default_for(geo: bool) -> DistanceCalc {
        if geo {
            Haversine.into()
        } else {
            Cartesian::new().into()
        }
    }

    pub fn custom(calc: impl DistanceCalculator + 'static) -> DistanceCalc {
        DistanceCalc::Custom(Arc::new(calc))
    }
}

impl PartialEq for DistanceCalc {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (DistanceCalc::Cartesian(a), DistanceCalc::Cartesian(b)) => a == b,
            (DistanceCalc::Haversine(_), DistanceCalc::Haversine(_)) => true,
            (DistanceCalc::LawOfCosines(_), DistanceCalc::LawOfCosines(_)) => true,
            (DistanceCalc::VincentySphere(_), DistanceCalc::VincentySphere(_)) => true,
            (DistanceCalc::Custom(a), DistanceCalc::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for DistanceCalc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceCalc::Cartesian(c) => fmt::Display::fmt(c, f),
            DistanceCalc::Haversine(c) => fmt::Display::fmt(c, f),
            DistanceCalc::LawOfCosines(c) => fmt::Display::fmt(c, f),
            DistanceCalc::VincentySphere(c) => fmt::Display::fmt(c, f),
            DistanceCalc::Custom(c) => write!(f, "{:?}", c),
        }
    }
}

/// Parses the configuration names `haversine`, `lawOfCosines`,
/// `vincentySphere`, `cartesian` and `cartesian^2`.
impl FromStr for DistanceCalc {
    type Err = SpatialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "haversine" => Ok(Haversine.into()),
            "lawOfCosines" => Ok(LawOfCosines.into()),
            "vincentySphere" => Ok(VincentySphere.into()),
            "cartesian" => Ok(Cartesian::new().into()),
            "cartesian^2" => Ok(Cartesian::squared().into()),
            other => Err(SpatialError::invalid_configuration(format!(
                "unknown distCalculator: {other}"
            ))),
        }
    }
}
