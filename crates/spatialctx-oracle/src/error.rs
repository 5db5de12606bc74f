use miette::Diagnostic;
use spatialctx::SpatialError;
use thiserror::Error;

/// Why a data file could not be read or a query did not match
#[derive(Debug, Error, Diagnostic)]
pub enum OracleError {
    #[error("failed to read {path}")]
    #[diagnostic(code(spatialctx_oracle::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {message}")]
    #[diagnostic(code(spatialctx_oracle::parse))]
    Parse { line: usize, message: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Shape(#[from] SpatialError),

    #[error("expected {expected} indexed documents, found {found}")]
    #[diagnostic(code(spatialctx_oracle::indexed_count))]
    IndexedCount { expected: usize, found: usize },

    #[error("out of order: {query} :: expected {expected}, found {found}")]
    #[diagnostic(code(spatialctx_oracle::out_of_order))]
    OutOfOrder {
        query: String,
        expected: String,
        found: String,
    },

    #[error("{query} :: got a result past the expected ids: {found}")]
    #[diagnostic(code(spatialctx_oracle::unexpected_result))]
    UnexpectedResult { query: String, found: String },

    #[error("{query} :: expected more results than we got: {next}")]
    #[diagnostic(code(spatialctx_oracle::missing_results))]
    MissingResults { query: String, next: String },

    #[error("Results are missing id: {id} :: {found:?}")]
    #[diagnostic(code(spatialctx_oracle::missing_id))]
    MissingId {
        query: String,
        id: String,
        found: Vec<String>,
    },

    #[error("{query} :: expected {expected:?}, found {found:?}")]
    #[diagnostic(code(spatialctx_oracle::set_mismatch))]
    SetMismatch {
        query: String,
        expected: Vec<String>,
        found: Vec<String>,
        #[help]
        diff: String,
    },
}

impl OracleError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        OracleError::Parse {
            line,
            message: message.into(),
        }
    }

    /// Whether this is a result mismatch rather than a setup failure
    pub fn is_mismatch(&self) -> bool {
        matches!(
            self,
            OracleError::OutOfOrder { .. }
                | OracleError::UnexpectedResult { .. }
                | OracleError::MissingResults { .. }
                | OracleError::MissingId { .. }
                | OracleError::SetMismatch { .. }
        )
    }
}
