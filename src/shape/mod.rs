//! Shape value types
//!
//! Every shape is created by a [`SpatialContext`] and keeps a shared
//! reference to it. Shapes are immutable; their constructors are private to
//! the crate so a shape value is always one the context has validated.
//!
//! [`AnyShape`] wraps the concrete types for code that handles shapes of
//! unknown kind, such as codecs and indexing strategies.

use enum_dispatch::enum_dispatch;
use std::fmt;
use std::sync::Arc;

use crate::context::SpatialContext;

pub use self::circle::{Circle, CircleKind};
pub use self::collection::ShapeCollection;
pub use self::line_string::BufferedLineString;
pub use self::point::Point;
pub use self::rectangle::Rectangle;

mod circle;
mod collection;
mod line_string;
mod point;
mod rectangle;

/// Common behavior for all shapes
#[enum_dispatch]
pub trait Shape: fmt::Debug + fmt::Display {
    /// The context that created this shape
    fn context(&self) -> &Arc<SpatialContext>;

    /// Whether the shape covers a non-zero area
    fn has_area(&self) -> bool;

    /// Whether the shape holds no geometry at all
    fn is_empty(&self) -> bool;
}

/// Discriminant of [`AnyShape`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Point,
    Rectangle,
    Circle,
    LineString,
    Collection,
}

/// A shape enum wrapping all shape types
#[enum_dispatch(Shape)]
#[derive(Debug, Clone, PartialEq)]
pub enum AnyShape {
    Point(Point),
    Rectangle(Rectangle),
    Circle(Circle),
    LineString(BufferedLineString),
    Collection(ShapeCollection<AnyShape>),
}

impl AnyShape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            AnyShape::Point(_) => ShapeKind::Point,
            AnyShape::Rectangle(_) => ShapeKind::Rectangle,
            AnyShape::Circle(_) => ShapeKind::Circle,
            AnyShape::LineString(_) => ShapeKind::LineString,
            AnyShape::Collection(_) => ShapeKind::Collection,
        }
    }

    pub fn as_point(&self) -> Option<&Point> {
        match self {
            AnyShape::Point(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_rectangle(&self) -> Option<&Rectangle> {
        match self {
            AnyShape::Rectangle(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            AnyShape::Circle(c) => Some(c),
            _ => None,
        }
    }
}

impl fmt::Display for AnyShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyShape::Point(s) => fmt::Display::fmt(s, f),
            AnyShape::Rectangle(s) => fmt::Display::fmt(s, f),
            AnyShape::Circle(s) => fmt::Display::fmt(s, f),
            AnyShape::LineString(s) => fmt::Display::fmt(s, f),
            AnyShape::Collection(s) => fmt::Display::fmt(s, f),
        }
    }
}
