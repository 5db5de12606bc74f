//! The spatial context
//!
//! A [`SpatialContext`] holds the distance calculator, the world bounds and
//! the longitude wrap setting, and is the only way to create shapes. It is
//! resolved once from a [`SpatialContextFactory`] and never changes after
//! that, so it can be shared freely between threads.
//!
//! For a typical geodetic context use [`GEO`].

use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::distance::{DistanceCalc, DistanceCalculator, units};
use crate::errors::{Result, SpatialError};
use crate::io::ShapeCodec;
use crate::log;
use crate::shape::{
    AnyShape, BufferedLineString, Circle, CircleKind, Point, Rectangle, Shape, ShapeCollection,
};
use crate::types::Extent;

pub use self::factory::SpatialContextFactory;

mod factory;

/// The shared geodetic context with default settings.
pub static GEO: LazyLock<Arc<SpatialContext>> =
    LazyLock::new(|| Arc::new(SpatialContext::resolve(SpatialContextFactory::new())));

/// Largest geodetic circle radius, in degrees: a full hemisphere.
const MAX_GEO_RADIUS: f64 = 180.0;

/// Validates coordinates and constructs shapes for one coordinate system.
pub struct SpatialContext {
    geo: bool,
    calculator: DistanceCalc,
    world_bounds: Extent,
    norm_wrap_longitude: bool,
    codec: Option<Arc<dyn ShapeCodec>>,
}

impl SpatialContext {
    /// The one place a factory's settings turn into a context.
    ///
    /// World bounds that cross the dateline must already have been rejected
    /// by [`SpatialContextFactory::build`].
    pub(crate) fn resolve(factory: SpatialContextFactory) -> SpatialContext {
        let geo = factory.geo;
        let calculator = factory
            .distance_calculator
            .unwrap_or_else(|| DistanceCalc::default_for(geo));
        let world_bounds = match factory.world_bounds {
            Some(bounds) => {
                if geo && bounds != Extent::GEO_WORLD {
                    log::warn!(%bounds, "geodetic context with non-global world bounds");
                }
                bounds
            }
            None if geo => Extent::GEO_WORLD,
            None => Extent::MAX_WORLD,
        };
        let norm_wrap_longitude = factory.norm_wrap_longitude && geo;

        log::debug!(
            geo,
            %calculator,
            %world_bounds,
            norm_wrap_longitude,
            "resolved spatial context"
        );

        SpatialContext {
            geo,
            calculator,
            world_bounds,
            norm_wrap_longitude,
            codec: factory.shape_codec,
        }
    }

    /// Read a context from string key/value pairs; see
    /// [`SpatialContextFactory::from_args`].
    pub fn from_args(args: &std::collections::HashMap<String, String>) -> Result<Arc<Self>> {
        SpatialContextFactory::from_args(args)?.build()
    }

    /// Build a context from the old three-argument form.
    ///
    /// `calculator` defaults to haversine or cartesian depending on `geo`;
    /// `world_bounds` defaults to the globe or the maximal plane.
    #[deprecated(note = "use SpatialContextFactory")]
    pub fn from_legacy(
        geo: bool,
        calculator: Option<DistanceCalc>,
        world_bounds: Option<&Rectangle>,
    ) -> Result<Arc<Self>> {
        let mut factory = SpatialContextFactory::new().geo(geo);
        factory.distance_calculator = calculator;
        factory.world_bounds = world_bounds.map(Extent::from);
        factory.build()
    }

    #[deprecated(note = "use SpatialContextFactory")]
    pub fn with_geo(geo: bool) -> Arc<Self> {
        Arc::new(Self::resolve(SpatialContextFactory::new().geo(geo)))
    }

    /// Is this a geospatial context (true) or simply 2d spatial (false)
    pub fn is_geo(&self) -> bool {
        self.geo
    }

    pub fn calculator(&self) -> &DistanceCalc {
        &self.calculator
    }

    /// Whether [`norm_x`](Self::norm_x) wraps longitudes, e.g. 181 to -179
    pub fn is_norm_wrap_longitude(&self) -> bool {
        self.norm_wrap_longitude
    }

    /// The world bounds as a plain extent
    pub fn world_extent(&self) -> Extent {
        self.world_bounds
    }

    /// The world bounds as a rectangle owned by this context
    pub fn world_bounds(self: &Arc<Self>) -> Rectangle {
        Rectangle::new(self.world_bounds, Arc::clone(self))
    }

    pub fn distance_between(&self, from: &Point, to: &Point) -> f64 {
        self.calculator.distance(from, to)
    }

    pub fn distance_to(&self, from: &Point, to_x: f64, to_y: f64) -> f64 {
        self.calculator.distance_to(from, to_x, to_y)
    }

    /// Normalize the x dimension, wrapping longitudes when enabled.
    pub fn norm_x(&self, x: f64) -> f64 {
        if self.norm_wrap_longitude {
            units::norm_lon_deg(x)
        } else {
            x
        }
    }

    /// Normalize the y dimension. Currently the identity.
    pub fn norm_y(&self, y: f64) -> f64 {
        y
    }

    /// Ensure `x` fits within the world bounds. NaN passes.
    pub fn verify_x(&self, x: f64) -> Result<()> {
        if !self.world_bounds.admits_x(x) {
            return Err(SpatialError::invalid_shape(format!(
                "Bad X value {x} is not in boundary {}",
                self.world_bounds
            )));
        }
        Ok(())
    }

    /// Ensure `y` fits within the world bounds. NaN passes.
    pub fn verify_y(&self, y: f64) -> Result<()> {
        if !self.world_bounds.admits_y(y) {
            return Err(SpatialError::invalid_shape(format!(
                "Bad Y value {y} is not in boundary {}",
                self.world_bounds
            )));
        }
        Ok(())
    }

    pub fn make_point(self: &Arc<Self>, x: f64, y: f64) -> Result<Point> {
        self.verify_x(x)?;
        self.verify_y(y)?;
        Ok(Point::new(x, y, Arc::clone(self)))
    }

    pub fn make_rectangle_from_corners(
        self: &Arc<Self>,
        lower_left: &Point,
        upper_right: &Point,
    ) -> Result<Rectangle> {
        self.make_rectangle(lower_left.x(), upper_right.x(), lower_left.y(), upper_right.y())
    }

    /// Construct a rectangle.
    ///
    /// In a geodetic context `min_x > max_x` describes a rectangle crossing
    /// the dateline. If exactly one x edge sits on ±180 its sign is adjusted
    /// so that a rectangle merely touching the dateline does not cross it.
    pub fn make_rectangle(
        self: &Arc<Self>,
        mut min_x: f64,
        mut max_x: f64,
        min_y: f64,
        max_y: f64,
    ) -> Result<Rectangle> {
        let bounds = self.world_bounds;

        if min_y < bounds.min_y || max_y > bounds.max_y {
            return Err(SpatialError::invalid_shape(format!(
                "Y values [{min_y} to {max_y}] not in boundary {bounds}"
            )));
        }
        if min_y > max_y {
            return Err(SpatialError::invalid_shape(format!(
                "maxY must be >= minY: {min_y} to {max_y}"
            )));
        }

        if self.geo {
            self.verify_x(min_x)?;
            self.verify_x(max_x)?;
            if min_x == 180.0 && min_x != max_x {
                min_x = -180.0;
            } else if max_x == -180.0 && min_x != max_x {
                max_x = 180.0;
            }
        } else {
            if min_x < bounds.min_x || max_x > bounds.max_x {
                return Err(SpatialError::invalid_shape(format!(
                    "X values [{min_x} to {max_x}] not in boundary {bounds}"
                )));
            }
            if min_x > max_x {
                return Err(SpatialError::invalid_shape(format!(
                    "maxX must be >= minX: {min_x} to {max_x}"
                )));
            }
        }

        Ok(Rectangle::new(
            Extent::new(min_x, max_x, min_y, max_y),
            Arc::clone(self),
        ))
    }

    pub fn make_circle_xy(self: &Arc<Self>, x: f64, y: f64, radius: f64) -> Result<Circle> {
        let center = self.make_point(x, y)?;
        self.make_circle(center, radius)
    }

    /// Construct a circle. The radius is in the same units as x and y.
    ///
    /// Geodetic radii above 180 degrees are clamped to 180: a circle can at
    /// most cover a hemisphere around its center.
    pub fn make_circle(self: &Arc<Self>, center: Point, radius: f64) -> Result<Circle> {
        if radius < 0.0 {
            return Err(SpatialError::invalid_shape(format!(
                "distance must be >= 0; got {radius}"
            )));
        }
        if !self.geo {
            return Ok(Circle::new(center, radius, CircleKind::Planar, Arc::clone(self)));
        }
        let radius = if radius > MAX_GEO_RADIUS {
            log::debug!(radius, "clamping geodetic circle radius to 180 degrees");
            MAX_GEO_RADIUS
        } else {
            radius
        };
        Ok(Circle::new(center, radius, CircleKind::Geodetic, Arc::clone(self)))
    }

    /// An ordered sequence of connected vertices
    pub fn make_line_string(self: &Arc<Self>, points: Vec<Point>) -> BufferedLineString {
        BufferedLineString::new(points, 0.0, false, Arc::clone(self))
    }

    /// An ordered sequence of connected vertices with a buffer distance
    /// around the line in all directions
    pub fn make_buffered_line_string(
        self: &Arc<Self>,
        points: Vec<Point>,
        buf: f64,
    ) -> Result<BufferedLineString> {
        if buf < 0.0 {
            return Err(SpatialError::invalid_shape(format!(
                "buffer must be >= 0; got {buf}"
            )));
        }
        Ok(BufferedLineString::new(points, buf, self.geo, Arc::clone(self)))
    }

    pub fn make_collection<S: Shape>(self: &Arc<Self>, shapes: Vec<S>) -> ShapeCollection<S> {
        ShapeCollection::new(shapes, Arc::clone(self))
    }

    /// Parse a shape with the configured codec.
    #[deprecated(note = "use a ShapeCodec directly")]
    pub fn read_shape(self: &Arc<Self>, text: &str) -> Result<AnyShape> {
        self.codec()?.read_shape(self, text)
    }

    /// Format a shape with the configured codec.
    #[deprecated(note = "use a ShapeCodec directly")]
    pub fn format_shape(&self, shape: &AnyShape) -> Result<String> {
        Ok(self.codec()?.write_shape(shape))
    }

    fn codec(&self) -> Result<&Arc<dyn ShapeCodec>> {
        self.codec
            .as_ref()
            .ok_or_else(|| SpatialError::invalid_configuration("no shape codec configured"))
    }
}

/// Two contexts are equal when they resolve to the same settings
impl PartialEq for SpatialContext {
    fn eq(&self, other: &Self) -> bool {
        let same_codec = match (&self.codec, &other.codec) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        };
        self.geo == other.geo
            && self.calculator == other.calculator
            && self.world_bounds == other.world_bounds
            && self.norm_wrap_longitude == other.norm_wrap_longitude
            && same_codec
    }
}

impl fmt::Debug for SpatialContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpatialContext")
            .field("geo", &self.geo)
            .field("calculator", &self.calculator)
            .field("world_bounds", &self.world_bounds)
            .field("norm_wrap_longitude", &self.norm_wrap_longitude)
            .field("codec", &self.codec)
            .finish()
    }
}

impl fmt::Display for SpatialContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if std::ptr::eq(self, &**GEO) {
            return f.write_str("SpatialContext.GEO");
        }
        write!(
            f,
            "SpatialContext{{geo={}, calculator={}, worldBounds={}}}",
            self.geo, self.calculator, self.world_bounds
        )
    }
}
