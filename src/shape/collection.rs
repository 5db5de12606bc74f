use std::fmt;
use std::slice;
use std::sync::Arc;

use super::Shape;
use crate::context::SpatialContext;

/// An ordered collection of shapes of one element type, analogous to an
/// OGC GeometryCollection.
///
/// Use `ShapeCollection<AnyShape>` for mixed shapes. The collection does
/// not validate its elements against each other.
#[derive(Clone)]
pub struct ShapeCollection<S> {
    shapes: Vec<S>,
    ctx: Arc<SpatialContext>,
}

impl<S> ShapeCollection<S> {
    pub(crate) fn new(shapes: Vec<S>, ctx: Arc<SpatialContext>) -> Self {
        Self { shapes, ctx }
    }

    pub fn shapes(&self) -> &[S] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn get(&self, index: usize) -> Option<&S> {
        self.shapes.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, S> {
        self.shapes.iter()
    }

    pub fn into_shapes(self) -> Vec<S> {
        self.shapes
    }
}

impl<S: Shape> Shape for ShapeCollection<S> {
    fn context(&self) -> &Arc<SpatialContext> {
        &self.ctx
    }

    fn has_area(&self) -> bool {
        self.shapes.iter().any(Shape::has_area)
    }

    fn is_empty(&self) -> bool {
        self.shapes.iter().all(Shape::is_empty)
    }
}

impl<'a, S> IntoIterator for &'a ShapeCollection<S> {
    type Item = &'a S;
    type IntoIter = slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: PartialEq> PartialEq for ShapeCollection<S> {
    fn eq(&self, other: &Self) -> bool {
        self.shapes == other.shapes
    }
}

impl<S: fmt::Debug> fmt::Debug for ShapeCollection<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ShapeCollection").field(&self.shapes).finish()
    }
}

impl<S: fmt::Display> fmt::Display for ShapeCollection<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ShapeCollection(")?;
        for (i, shape) in self.shapes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", shape)?;
        }
        f.write_str(")")
    }
}
