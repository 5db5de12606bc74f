//! Plain value types shared by the context and the shapes.
//!
//! An [`Extent`] is four numbers and nothing else: it carries no context
//! and performs no validation. The context stores its world bounds as an
//! extent because it cannot hold a [`Rectangle`](crate::Rectangle) that
//! points back at itself.

use std::fmt;

/// Axis-aligned bounds `[min_x, max_x] × [min_y, max_y]`.
///
/// `min_x > max_x` encodes a span crossing the antimeridian.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Extent {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Extent {
    /// The whole globe in degrees.
    pub const GEO_WORLD: Extent = Extent::new(-180.0, 180.0, -90.0, 90.0);

    /// The largest representable planar extent.
    pub const MAX_WORLD: Extent = Extent::new(-f64::MAX, f64::MAX, -f64::MAX, f64::MAX);

    /// Create an extent (unchecked).
    #[inline]
    pub const fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Extent {
        Extent {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Whether the x span wraps across the antimeridian
    #[inline]
    pub fn crosses_dateline(&self) -> bool {
        self.min_x > self.max_x
    }

    /// Width of the x span, accounting for a dateline crossing
    pub fn width(&self) -> f64 {
        let w = self.max_x - self.min_x;
        if w < 0.0 { w + 360.0 } else { w }
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Whether `x` lies within `[min_x, max_x]`. NaN is reported as inside.
    #[inline]
    pub(crate) fn admits_x(&self, x: f64) -> bool {
        !(x < self.min_x || x > self.max_x)
    }

    /// Whether `y` lies within `[min_y, max_y]`. NaN is reported as inside.
    #[inline]
    pub(crate) fn admits_y(&self, y: f64) -> bool {
        !(y < self.min_y || y > self.max_y)
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect(minX={},maxX={},minY={},maxY={})",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}
