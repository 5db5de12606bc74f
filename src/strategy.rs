//! Indexing-strategy boundary
//!
//! A strategy turns shapes into index fields and query arguments into
//! queries. Strategies live outside this crate; this module fixes the
//! contract they implement and the arguments they receive.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::context::SpatialContext;
use crate::errors::{Result, SpatialError};
use crate::shape::{AnyShape, Shape};

/// A spatial predicate between indexed shapes and a query shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpatialOperation {
    BBoxIntersects,
    BBoxWithin,
    Contains,
    Intersects,
    IsEqualTo,
    IsDisjointTo,
    IsWithin,
    Overlaps,
}

impl SpatialOperation {
    pub const ALL: [SpatialOperation; 8] = [
        SpatialOperation::BBoxIntersects,
        SpatialOperation::BBoxWithin,
        SpatialOperation::Contains,
        SpatialOperation::Intersects,
        SpatialOperation::IsEqualTo,
        SpatialOperation::IsDisjointTo,
        SpatialOperation::IsWithin,
        SpatialOperation::Overlaps,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SpatialOperation::BBoxIntersects => "BBoxIntersects",
            SpatialOperation::BBoxWithin => "BBoxWithin",
            SpatialOperation::Contains => "Contains",
            SpatialOperation::Intersects => "Intersects",
            SpatialOperation::IsEqualTo => "IsEqualTo",
            SpatialOperation::IsDisjointTo => "IsDisjointTo",
            SpatialOperation::IsWithin => "IsWithin",
            SpatialOperation::Overlaps => "Overlaps",
        }
    }

    /// Whether a relevance score for this operation means anything
    pub fn score_is_meaningful(self) -> bool {
        !matches!(
            self,
            SpatialOperation::IsEqualTo | SpatialOperation::IsDisjointTo
        )
    }

    /// Whether the indexed shapes must have area
    pub fn source_needs_area(self) -> bool {
        matches!(self, SpatialOperation::Contains)
    }

    /// Whether the query shape must have area
    pub fn target_needs_area(self) -> bool {
        matches!(self, SpatialOperation::IsWithin | SpatialOperation::Overlaps)
    }
}

impl fmt::Display for SpatialOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-insensitive lookup by name
impl FromStr for SpatialOperation {
    type Err = SpatialError;

    fn from_str(s: &str) -> Result<Self> {
        SpatialOperation::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SpatialError::invalid_shape(format!("unknown spatial operation: {s}")))
    }
}

/// An operation, the query shape, and precision hints
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialArgs {
    operation: SpatialOperation,
    shape: AnyShape,
    dist_err_pct: Option<f64>,
    dist_err: Option<f64>,
}

impl SpatialArgs {
    /// Largest accepted `dist_err_pct`
    pub const MAX_DIST_ERR_PCT: f64 = 0.5;

    /// Pair an operation with its query shape.
    ///
    /// Fails when the operation needs a query shape with area and `shape`
    /// has none.
    pub fn new(operation: SpatialOperation, shape: AnyShape) -> Result<Self> {
        if operation.target_needs_area() && !shape.has_area() {
            return Err(SpatialError::invalid_shape(format!(
                "{operation} only supports geometry with area, got {shape}"
            )));
        }
        Ok(Self {
            operation,
            shape,
            dist_err_pct: None,
            dist_err: None,
        })
    }

    /// Set the allowed error as a fraction of the shape's size
    pub fn with_dist_err_pct(mut self, pct: f64) -> Result<Self> {
        if !(0.0..=Self::MAX_DIST_ERR_PCT).contains(&pct) {
            return Err(SpatialError::invalid_shape(format!(
                "distErrPct {pct} must be between 0 and {}",
                Self::MAX_DIST_ERR_PCT
            )));
        }
        self.dist_err_pct = Some(pct);
        Ok(self)
    }

    /// Set the allowed error as an absolute distance
    pub fn with_dist_err(mut self, dist: f64) -> Result<Self> {
        if dist < 0.0 {
            return Err(SpatialError::invalid_shape(format!(
                "distErr must be >= 0; got {dist}"
            )));
        }
        self.dist_err = Some(dist);
        Ok(self)
    }

    pub fn operation(&self) -> SpatialOperation {
        self.operation
    }

    pub fn shape(&self) -> &AnyShape {
        &self.shape
    }

    pub fn dist_err_pct(&self) -> Option<f64> {
        self.dist_err_pct
    }

    pub fn dist_err(&self) -> Option<f64> {
        self.dist_err
    }
}

impl fmt::Display for SpatialArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.operation, self.shape)?;
        if let Some(pct) = self.dist_err_pct {
            write!(f, " distErrPct={pct}")?;
        }
        if let Some(dist) = self.dist_err {
            write!(f, " distErr={dist}")?;
        }
        Ok(())
    }
}

/// Turns shapes into index fields and query arguments into queries
pub trait SpatialStrategy {
    /// Per-field configuration, such as the field name
    type FieldInfo;
    /// An indexable field descriptor
    type Field;
    /// An executable query
    type Query;

    fn context(&self) -> &Arc<SpatialContext>;

    /// Build the index fields for `shape`.
    ///
    /// A `None` entry means the geometry is incompatible with this field
    /// type and was skipped on purpose; it is not an error.
    fn create_fields(
        &self,
        info: &Self::FieldInfo,
        shape: &AnyShape,
        index: bool,
        store: bool,
    ) -> Vec<Option<Self::Field>>;

    fn make_query(&self, args: &SpatialArgs, info: &Self::FieldInfo) -> Result<Self::Query>;
}
