use std::fmt;
use std::sync::Arc;

use super::Shape;
use crate::context::SpatialContext;

/// A point. x is longitude and y is latitude in a geodetic context.
#[derive(Clone)]
pub struct Point {
    x: f64,
    y: f64,
    ctx: Arc<SpatialContext>,
}

impl Point {
    pub(crate) fn new(x: f64, y: f64, ctx: Arc<SpatialContext>) -> Self {
        Self { x, y, ctx }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }
}

impl Shape for Point {
    fn context(&self) -> &Arc<SpatialContext> {
        &self.ctx
    }

    fn has_area(&self) -> bool {
        false
    }

    fn is_empty(&self) -> bool {
        self.x.is_nan()
    }
}

/// Coordinates only; the owning context is not compared
impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Point")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pt(x={},y={})", self.x, self.y)
    }
}
