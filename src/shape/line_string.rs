use std::fmt;
use std::sync::Arc;

use super::{Point, Shape};
use crate::context::SpatialContext;

/// An ordered sequence of connected vertices with an optional buffer
/// distance around the line in all directions.
///
/// A plain line string is a buffered line string with a zero buffer.
#[derive(Clone)]
pub struct BufferedLineString {
    points: Vec<Point>,
    buf: f64,
    geo: bool,
    ctx: Arc<SpatialContext>,
}

impl BufferedLineString {
    pub(crate) fn new(points: Vec<Point>, buf: f64, geo: bool, ctx: Arc<SpatialContext>) -> Self {
        Self {
            points,
            buf,
            geo,
            ctx,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The buffer distance, in the same units as a circle radius
    pub fn buf(&self) -> f64 {
        self.buf
    }

    /// Whether the buffer is measured geodetically
    pub fn is_geo(&self) -> bool {
        self.geo
    }
}

impl Shape for BufferedLineString {
    fn context(&self) -> &Arc<SpatialContext> {
        &self.ctx
    }

    fn has_area(&self) -> bool {
        self.buf > 0.0
    }

    fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl PartialEq for BufferedLineString {
    fn eq(&self, other: &Self) -> bool {
        self.buf == other.buf && self.geo == other.geo && self.points == other.points
    }
}

impl fmt::Debug for BufferedLineString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferedLineString")
            .field("points", &self.points)
            .field("buf", &self.buf)
            .field("geo", &self.geo)
            .finish()
    }
}

impl fmt::Display for BufferedLineString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BufferedLineString(buf={} pts=", self.buf)?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} {}", p.x(), p.y())?;
        }
        f.write_str(")")
    }
}
