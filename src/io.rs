//! Legacy textual shape codec boundary
//!
//! The context does not parse shape text itself. A codec can be attached
//! with [`SpatialContextFactory::shape_codec`](crate::SpatialContextFactory::shape_codec)
//! to back the deprecated [`SpatialContext::read_shape`](crate::SpatialContext::read_shape)
//! and [`SpatialContext::format_shape`](crate::SpatialContext::format_shape) calls.

use std::fmt;
use std::sync::Arc;

use crate::context::SpatialContext;
use crate::errors::Result;
use crate::shape::AnyShape;

/// Reads and writes shapes in some textual syntax.
pub trait ShapeCodec: fmt::Debug + Send + Sync {
    /// Parse `text` into a shape built through `ctx`.
    ///
    /// Syntax errors and out-of-bounds coordinates are both reported as
    /// [`SpatialError::InvalidShape`](crate::SpatialError::InvalidShape).
    fn read_shape(&self, ctx: &Arc<SpatialContext>, text: &str) -> Result<AnyShape>;

    fn write_shape(&self, shape: &AnyShape) -> String;
}
