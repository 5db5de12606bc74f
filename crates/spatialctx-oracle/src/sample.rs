//! Sample data: one indexed document per line
//!
//! ```text
//! # comment
//! id<TAB>name<TAB>shape
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};

use camino::Utf8Path;

use crate::OracleError;

/// One sample document. The shape is kept as text for a codec to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleData {
    pub id: String,
    pub name: String,
    pub shape: String,
}

impl SampleData {
    fn parse(line: &str, line_number: usize) -> Result<Self, OracleError> {
        let mut parts = line.splitn(3, '\t');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(id), Some(name), Some(shape)) => Ok(SampleData {
                id: id.trim().to_string(),
                name: name.trim().to_string(),
                shape: shape.trim().to_string(),
            }),
            _ => Err(OracleError::parse(
                line_number,
                format!("expected id<TAB>name<TAB>shape, got {line:?}"),
            )),
        }
    }
}

/// Iterates over the documents in a sample data stream
pub struct SampleDataReader<R> {
    lines: Lines<R>,
    line_number: usize,
}

impl<R: BufRead> SampleDataReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
        }
    }
}

impl SampleDataReader<BufReader<File>> {
    pub fn open(path: &Utf8Path) -> Result<Self, OracleError> {
        let file = File::open(path).map_err(|source| OracleError::Io {
            path: path.to_string(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> Iterator for SampleDataReader<R> {
    type Item = Result<SampleData, OracleError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(source) => {
                    return Some(Err(OracleError::Io {
                        path: format!("<sample data line {}>", self.line_number + 1),
                        source,
                    }));
                }
            };
            self.line_number += 1;
            let trimmed = line.trim_end();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            return Some(SampleData::parse(trimmed, self.line_number));
        }
    }
}
