//! Test queries: expected ids, then the query arguments
//!
//! ```text
//! # comment
//! G1 G3 @ Intersects(-10 -10 10 10)
//! @ IsWithin(0 0 1 1) distErrPct=0.1
//! ```
//!
//! Ids come before the `@`; a query expecting no results has none.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::sync::Arc;

use camino::Utf8Path;
use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;
use spatialctx::{ShapeCodec, SpatialArgs, SpatialContext, SpatialOperation};

use crate::OracleError;

#[derive(Parser)]
#[grammar = "query.pest"]
struct QueryParser;

/// One query line and the ids it should find
#[derive(Debug, Clone)]
pub struct TestQuery {
    /// The line as written, for failure messages
    pub line: String,
    pub line_number: usize,
    pub ids: Vec<String>,
    pub args: SpatialArgs,
}

impl TestQuery {
    /// Parse one non-comment query line.
    pub fn parse(
        line: &str,
        line_number: usize,
        ctx: &Arc<SpatialContext>,
        codec: &dyn ShapeCodec,
    ) -> Result<Self, OracleError> {
        let query = QueryParser::parse(Rule::query, line)
            .map_err(|e| OracleError::parse(line_number, e.to_string()))?
            .next()
            .ok_or_else(|| OracleError::parse(line_number, "empty query"))?;

        let mut ids = Vec::new();
        let mut args = None;
        for pair in query.into_inner() {
            match pair.as_rule() {
                Rule::ids => ids = pair.into_inner().map(|id| id.as_str().to_string()).collect(),
                Rule::args => args = Some(read_args(pair, line_number, ctx, codec)?),
                _ => {}
            }
        }
        let args = args.ok_or_else(|| OracleError::parse(line_number, "missing query arguments"))?;

        Ok(TestQuery {
            line: line.to_string(),
            line_number,
            ids,
            args,
        })
    }
}

fn read_args(
    pair: Pair<'_, Rule>,
    line_number: usize,
    ctx: &Arc<SpatialContext>,
    codec: &dyn ShapeCodec,
) -> Result<SpatialArgs, OracleError> {
    let mut inner = pair.into_inner();
    let (Some(operation), Some(shape)) = (inner.next(), inner.next()) else {
        return Err(OracleError::parse(line_number, "expected Operation(shape)"));
    };
    let operation: SpatialOperation = operation.as_str().parse()?;
    let shape = codec.read_shape(ctx, shape.as_str().trim())?;
    let mut args = SpatialArgs::new(operation, shape)?;

    for param in inner {
        let mut kv = param.into_inner();
        let (Some(key), Some(value)) = (kv.next(), kv.next()) else {
            continue;
        };
        let number = value.as_str().parse::<f64>().map_err(|e| {
            OracleError::parse(
                line_number,
                format!("{} value {:?}: {e}", key.as_str(), value.as_str()),
            )
        })?;
        args = match key.as_str() {
            "distErrPct" => args.with_dist_err_pct(number)?,
            "distErr" => args.with_dist_err(number)?,
            other => {
                return Err(OracleError::parse(
                    line_number,
                    format!("unknown query parameter {other:?}"),
                ));
            }
        };
    }
    Ok(args)
}

/// Iterates over the queries in a query stream
pub struct TestQueryReader<'a, R> {
    lines: Lines<R>,
    line_number: usize,
    ctx: Arc<SpatialContext>,
    codec: &'a dyn ShapeCodec,
}

impl<'a, R: BufRead> TestQueryReader<'a, R> {
    pub fn new(reader: R, ctx: Arc<SpatialContext>, codec: &'a dyn ShapeCodec) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
            ctx,
            codec,
        }
    }
}

impl<'a> TestQueryReader<'a, BufReader<File>> {
    pub fn open(
        path: &Utf8Path,
        ctx: Arc<SpatialContext>,
        codec: &'a dyn ShapeCodec,
    ) -> Result<Self, OracleError> {
        let file = File::open(path).map_err(|source| OracleError::Io {
            path: path.to_string(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file), ctx, codec))
    }
}

impl<R: BufRead> Iterator for TestQueryReader<'_, R> {
    type Item = Result<TestQuery, OracleError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(source) => {
                    return Some(Err(OracleError::Io {
                        path: format!("<query line {}>", self.line_number + 1),
                        source,
                    }));
                }
            };
            self.line_number += 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            return Some(TestQuery::parse(
                trimmed,
                self.line_number,
                &self.ctx,
                self.codec,
            ));
        }
    }
}
