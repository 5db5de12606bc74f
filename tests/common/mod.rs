//! Shared test fixtures: a small shape codec and a brute-force bbox index
#![allow(dead_code)]

use std::sync::Arc;

use spatialctx::{
    AnyShape, Extent, Result, ShapeCodec, SpatialArgs, SpatialContext, SpatialError,
    SpatialOperation, SpatialStrategy,
};
use spatialctx_oracle::{Document, SearchBackend};

/// Reads `x y` points, `minX minY maxX maxY` rectangles and
/// `Circle(x y d=r)` circles
#[derive(Debug)]
pub struct TestCodec;

impl ShapeCodec for TestCodec {
    fn read_shape(&self, ctx: &Arc<SpatialContext>, text: &str) -> Result<AnyShape> {
        let text = text.trim();
        if let Some(inner) = text
            .strip_prefix("Circle(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let (center, radius) = inner
                .split_once("d=")
                .ok_or_else(|| SpatialError::invalid_shape(format!("circle without d=: {text}")))?;
            let [x, y] = numbers::<2>(center)?;
            let [radius] = numbers::<1>(radius)?;
            return Ok(ctx.make_circle_xy(x, y, radius)?.into());
        }

        match text.split_whitespace().count() {
            2 => {
                let [x, y] = numbers::<2>(text)?;
                Ok(ctx.make_point(x, y)?.into())
            }
            4 => {
                let [min_x, min_y, max_x, max_y] = numbers::<4>(text)?;
                Ok(ctx.make_rectangle(min_x, max_x, min_y, max_y)?.into())
            }
            _ => Err(SpatialError::invalid_shape(format!(
                "unrecognized shape: {text:?}"
            ))),
        }
    }

    fn write_shape(&self, shape: &AnyShape) -> String {
        match shape {
            AnyShape::Point(p) => format!("{} {}", p.x(), p.y()),
            AnyShape::Rectangle(r) => {
                format!("{} {} {} {}", r.min_x(), r.min_y(), r.max_x(), r.max_y())
            }
            AnyShape::Circle(c) => format!(
                "Circle({} {} d={})",
                c.center().x(),
                c.center().y(),
                c.radius()
            ),
            other => other.to_string(),
        }
    }
}

fn numbers<const N: usize>(text: &str) -> Result<[f64; N]> {
    let mut out = [0.0; N];
    let mut parts = text.split_whitespace();
    for slot in &mut out {
        let part = parts
            .next()
            .ok_or_else(|| SpatialError::invalid_shape(format!("expected {N} numbers: {text:?}")))?;
        *slot = part
            .parse()
            .map_err(|e| SpatialError::invalid_shape(format!("{part:?}: {e}")))?;
    }
    if parts.next().is_some() {
        return Err(SpatialError::invalid_shape(format!(
            "expected {N} numbers: {text:?}"
        )));
    }
    Ok(out)
}

/// The bounding extent of points and rectangles; other shapes have none
pub fn bbox(shape: &AnyShape) -> Option<Extent> {
    match shape {
        AnyShape::Point(p) => Some(Extent::new(p.x(), p.x(), p.y(), p.y())),
        AnyShape::Rectangle(r) => Some(r.extent()),
        _ => None,
    }
}

fn intersects(a: &Extent, b: &Extent) -> bool {
    a.min_x <= b.max_x && a.max_x >= b.min_x && a.min_y <= b.max_y && a.max_y >= b.min_y
}

fn within(inner: &Extent, outer: &Extent) -> bool {
    inner.min_x >= outer.min_x
        && inner.max_x <= outer.max_x
        && inner.min_y >= outer.min_y
        && inner.max_y <= outer.max_y
}

/// Whether an indexed extent satisfies `op` against the query extent
pub fn satisfies(op: SpatialOperation, indexed: &Extent, query: &Extent) -> bool {
    match op {
        SpatialOperation::BBoxIntersects | SpatialOperation::Intersects => {
            intersects(indexed, query)
        }
        SpatialOperation::BBoxWithin | SpatialOperation::IsWithin => within(indexed, query),
        SpatialOperation::Contains => within(query, indexed),
        SpatialOperation::IsEqualTo => indexed == query,
        SpatialOperation::IsDisjointTo => !intersects(indexed, query),
        SpatialOperation::Overlaps => {
            intersects(indexed, query) && !within(indexed, query) && !within(query, indexed)
        }
    }
}

/// Indexes each shape's bounding extent. Shapes without one are skipped.
pub struct BBoxStrategy {
    ctx: Arc<SpatialContext>,
}

impl BBoxStrategy {
    pub fn new(ctx: Arc<SpatialContext>) -> Self {
        Self { ctx }
    }
}

impl SpatialStrategy for BBoxStrategy {
    type FieldInfo = String;
    type Field = Extent;
    type Query = (SpatialOperation, Extent);

    fn context(&self) -> &Arc<SpatialContext> {
        &self.ctx
    }

    fn create_fields(
        &self,
        _info: &String,
        shape: &AnyShape,
        _index: bool,
        _store: bool,
    ) -> Vec<Option<Extent>> {
        vec![bbox(shape)]
    }

    fn make_query(&self, args: &SpatialArgs, info: &String) -> Result<(SpatialOperation, Extent)> {
        let extent = bbox(args.shape()).ok_or_else(|| {
            SpatialError::invalid_shape(format!("{info} cannot query by {}", args.shape()))
        })?;
        Ok((args.operation(), extent))
    }
}

/// Scans every document; results come back in insertion order
#[derive(Default)]
pub struct ScanBackend {
    docs: Vec<Document<Extent>>,
}

impl SearchBackend for ScanBackend {
    type Field = Extent;
    type Query = (SpatialOperation, Extent);

    fn add_document(&mut self, document: Document<Extent>) {
        self.docs.push(document);
    }

    fn num_docs(&self) -> usize {
        self.docs.len()
    }

    fn execute(&self, query: &Self::Query, limit: usize) -> Vec<String> {
        let (op, extent) = query;
        self.docs
            .iter()
            .filter(|doc| doc.fields.iter().any(|field| satisfies(*op, field, extent)))
            .take(limit)
            .map(|doc| doc.id.clone())
            .collect()
    }
}
