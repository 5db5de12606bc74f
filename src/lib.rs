//! Spatial context and shape factory
//!
//! A [`SpatialContext`] fixes the coordinate system shapes live in:
//! geodetic (longitude/latitude degrees on a sphere) or planar. It owns the
//! distance calculator and world bounds, validates coordinates, and is the
//! only way to construct [`Point`], [`Rectangle`], [`Circle`],
//! [`BufferedLineString`] and [`ShapeCollection`] values.
//!
//! ```
//! use spatialctx::{GEO, SpatialContextFactory};
//!
//! let p = GEO.make_point(-71.06, 42.36)?;
//! let r = GEO.make_rectangle(170.0, -170.0, -10.0, 10.0)?;
//! assert!(r.crosses_dateline());
//!
//! let planar = SpatialContextFactory::new().geo(false).build()?;
//! assert_eq!(planar.make_circle_xy(0.0, 0.0, 200.0)?.radius(), 200.0);
//! # let _ = p;
//! # Ok::<(), spatialctx::SpatialError>(())
//! ```
//!
//! Shape text codecs and indexing strategies are external; [`ShapeCodec`]
//! and [`SpatialStrategy`] define the seams they plug into.

pub mod context;
pub mod distance;
pub mod errors;
pub mod io;
pub mod log;
pub mod shape;
pub mod strategy;
pub mod types;

pub use context::{GEO, SpatialContext, SpatialContextFactory};
pub use distance::{DistanceCalc, DistanceCalculator};
pub use errors::{Result, SpatialError};
pub use io::ShapeCodec;
pub use shape::{
    AnyShape, BufferedLineString, Circle, CircleKind, Point, Rectangle, Shape, ShapeCollection,
    ShapeKind,
};
pub use strategy::{SpatialArgs, SpatialOperation, SpatialStrategy};
pub use types::Extent;
