use std::fmt;
use std::sync::Arc;

use super::Shape;
use crate::context::SpatialContext;
use crate::types::Extent;

/// An axis-aligned rectangle.
///
/// In a geodetic context `min_x > max_x` is a valid rectangle that spans
/// the antimeridian; see [`crosses_dateline`](Self::crosses_dateline).
#[derive(Clone)]
pub struct Rectangle {
    extent: Extent,
    ctx: Arc<SpatialContext>,
}

impl Rectangle {
    pub(crate) fn new(extent: Extent, ctx: Arc<SpatialContext>) -> Self {
        Self { extent, ctx }
    }

    pub fn min_x(&self) -> f64 {
        self.extent.min_x
    }

    pub fn max_x(&self) -> f64 {
        self.extent.max_x
    }

    pub fn min_y(&self) -> f64 {
        self.extent.min_y
    }

    pub fn max_y(&self) -> f64 {
        self.extent.max_y
    }

    /// The four coordinates without the context
    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn crosses_dateline(&self) -> bool {
        self.extent.crosses_dateline()
    }

    /// Width of the x span; a dateline-crossing span wraps through ±180
    pub fn width(&self) -> f64 {
        self.extent.width()
    }

    pub fn height(&self) -> f64 {
        self.extent.height()
    }
}

impl Shape for Rectangle {
    fn context(&self) -> &Arc<SpatialContext> {
        &self.ctx
    }

    fn has_area(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    fn is_empty(&self) -> bool {
        self.extent.min_x.is_nan()
    }
}

impl From<&Rectangle> for Extent {
    fn from(rect: &Rectangle) -> Extent {
        rect.extent
    }
}

impl From<Rectangle> for Extent {
    fn from(rect: Rectangle) -> Extent {
        rect.extent
    }
}

/// Coordinates only; the owning context is not compared
impl PartialEq for Rectangle {
    fn eq(&self, other: &Self) -> bool {
        self.extent == other.extent
    }
}

impl fmt::Debug for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rectangle")
            .field("min_x", &self.extent.min_x)
            .field("max_x", &self.extent.max_x)
            .field("min_y", &self.extent.min_y)
            .field("max_y", &self.extent.max_y)
            .finish()
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.extent, f)
    }
}
