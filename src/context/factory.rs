//! Context configuration
//!
//! [`SpatialContextFactory`] collects optional overrides and is consumed
//! once by [`build`](SpatialContextFactory::build). Nothing is validated
//! until then.

use std::collections::HashMap;
use std::sync::Arc;

use super::SpatialContext;
use crate::distance::DistanceCalc;
use crate::errors::{Result, SpatialError};
use crate::io::ShapeCodec;
use crate::types::Extent;

/// Builder for a [`SpatialContext`]
#[derive(Debug, Clone)]
pub struct SpatialContextFactory {
    pub(crate) geo: bool,
    pub(crate) distance_calculator: Option<DistanceCalc>,
    pub(crate) world_bounds: Option<Extent>,
    pub(crate) norm_wrap_longitude: bool,
    pub(crate) shape_codec: Option<Arc<dyn ShapeCodec>>,
}

impl Default for SpatialContextFactory {
    fn default() -> Self {
        Self {
            geo: true,
            distance_calculator: None,
            world_bounds: None,
            norm_wrap_longitude: false,
            shape_codec: None,
        }
    }
}

impl SpatialContextFactory {
    /// A geodetic configuration with every other setting left to default
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a configuration from string key/value pairs.
    ///
    /// Recognised keys are `geo`, `distCalculator`, `worldBounds` and
    /// `normWrapLongitude`; anything else is ignored. `worldBounds` holds
    /// four numbers in the order `minX minY maxX maxY`.
    pub fn from_args(args: &HashMap<String, String>) -> Result<Self> {
        let mut factory = Self::new();
        if let Some(value) = args.get("geo") {
            factory.geo = parse_bool("geo", value)?;
        }
        if let Some(value) = args.get("distCalculator") {
            factory.distance_calculator = Some(value.trim().parse()?);
        }
        if let Some(value) = args.get("worldBounds") {
            factory.world_bounds = Some(parse_world_bounds(value)?);
        }
        if let Some(value) = args.get("normWrapLongitude") {
            factory.norm_wrap_longitude = parse_bool("normWrapLongitude", value)?;
        }
        Ok(factory)
    }

    /// Geodetic (`true`, the default) or planar coordinates
    pub fn geo(mut self, geo: bool) -> Self {
        self.geo = geo;
        self
    }

    /// Override the calculator the mode would otherwise pick
    pub fn distance_calculator(mut self, calc: impl Into<DistanceCalc>) -> Self {
        self.distance_calculator = Some(calc.into());
        self
    }

    /// Override the world bounds. The bounds are copied into the new
    /// context; a rectangle from another context may be passed.
    pub fn world_bounds(mut self, bounds: impl Into<Extent>) -> Self {
        self.world_bounds = Some(bounds.into());
        self
    }

    /// Wrap longitudes outside ±180 back into range. Ignored when planar.
    pub fn norm_wrap_longitude(mut self, wrap: bool) -> Self {
        self.norm_wrap_longitude = wrap;
        self
    }

    /// Attach a codec for the legacy textual read/format calls
    pub fn shape_codec(mut self, codec: Arc<dyn ShapeCodec>) -> Self {
        self.shape_codec = Some(codec);
        self
    }

    /// Resolve into an immutable context.
    ///
    /// Fails with [`SpatialError::InvalidConfiguration`] when the configured
    /// world bounds cross the dateline.
    pub fn build(self) -> Result<Arc<SpatialContext>> {
        if let Some(bounds) = self.world_bounds {
            if bounds.crosses_dateline() {
                return Err(SpatialError::invalid_configuration(format!(
                    "worldBounds shouldn't cross dateline: {bounds}"
                )));
            }
        }
        Ok(Arc::new(SpatialContext::resolve(self)))
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(SpatialError::invalid_configuration(format!(
            "{key} must be true or false, got {value:?}"
        )))
    }
}

fn parse_world_bounds(value: &str) -> Result<Extent> {
    let numbers = value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<f64>().map_err(|e| {
                SpatialError::invalid_configuration(format!(
                    "worldBounds value {part:?} is not a number: {e}"
                ))
            })
        })
        .collect::<Result<Vec<f64>>>()?;

    match *numbers.as_slice() {
        [min_x, min_y, max_x, max_y] => Ok(Extent::new(min_x, max_x, min_y, max_y)),
        _ => Err(SpatialError::invalid_configuration(format!(
            "worldBounds needs 4 numbers (minX minY maxX maxY), got {value:?}"
        ))),
    }
}
