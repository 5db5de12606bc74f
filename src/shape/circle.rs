use std::fmt;
use std::sync::Arc;

use super::{Point, Shape};
use crate::context::SpatialContext;

/// Which geometry a circle's radius is measured in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircleKind {
    /// Radius in degrees of arc on the sphere, at most 180.
    Geodetic,
    /// Radius in the plane's native units.
    Planar,
}

/// A circle around a center point.
#[derive(Clone)]
pub struct Circle {
    center: Point,
    radius: f64,
    kind: CircleKind,
    ctx: Arc<SpatialContext>,
}

impl Circle {
    pub(crate) fn new(center: Point, radius: f64, kind: CircleKind, ctx: Arc<SpatialContext>) -> Self {
        Self {
            center,
            radius,
            kind,
            ctx,
        }
    }

    pub fn center(&self) -> &Point {
        &self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn kind(&self) -> CircleKind {
        self.kind
    }

    pub fn is_geodetic(&self) -> bool {
        self.kind == CircleKind::Geodetic
    }
}

impl Shape for Circle {
    fn context(&self) -> &Arc<SpatialContext> {
        &self.ctx
    }

    fn has_area(&self) -> bool {
        self.radius > 0.0
    }

    fn is_empty(&self) -> bool {
        self.center.is_empty()
    }
}

impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.radius == other.radius && self.center == other.center
    }
}

impl fmt::Debug for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Circle")
            .field("center", &self.center)
            .field("radius", &self.radius)
            .field("kind", &self.kind)
            .finish()
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CircleKind::Geodetic => write!(f, "Circle({}, d={}°)", self.center, self.radius),
            CircleKind::Planar => write!(f, "Circle({}, d={})", self.center, self.radius),
        }
    }
}
