use camino::Utf8Path;
use spatialctx::{ShapeCodec, SpatialStrategy};

use crate::{
    MatchConcern, OracleError, SampleData, SampleDataReader, TestQuery, TestQueryReader,
    check_results,
};

/// Results fetched per query
pub const QUERY_LIMIT: usize = 100;

/// An indexed sample document
#[derive(Debug, Clone)]
pub struct Document<F> {
    pub id: String,
    pub name: String,
    pub fields: Vec<F>,
}

/// The index a strategy writes to and queries
pub trait SearchBackend {
    type Field;
    type Query;

    fn add_document(&mut self, document: Document<Self::Field>);

    fn num_docs(&self) -> usize;

    /// Ids of the best `limit` matches, best first
    fn execute(&self, query: &Self::Query, limit: usize) -> Vec<String>;
}

/// Indexes sample data through a strategy and checks query results
pub struct StrategyTestCase<'a, S: SpatialStrategy, B> {
    strategy: &'a S,
    field_info: S::FieldInfo,
    codec: &'a dyn ShapeCodec,
    backend: B,
}

impl<'a, S, B> StrategyTestCase<'a, S, B>
where
    S: SpatialStrategy,
    B: SearchBackend<Field = S::Field, Query = S::Query>,
{
    pub fn new(
        strategy: &'a S,
        field_info: S::FieldInfo,
        codec: &'a dyn ShapeCodec,
        backend: B,
    ) -> Self {
        Self {
            strategy,
            field_info,
            codec,
            backend,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Load `data_path`, then run every query file under `concern`.
    pub fn execute_queries(
        &mut self,
        concern: MatchConcern,
        data_path: &Utf8Path,
        query_paths: &[&Utf8Path],
    ) -> Result<(), OracleError> {
        self.add_sample_data(SampleDataReader::open(data_path)?)?;
        for path in query_paths {
            let ctx = self.strategy.context().clone();
            let queries = TestQueryReader::open(path, ctx, self.codec)?;
            self.run_queries(concern, queries)?;
        }
        Ok(())
    }

    /// Index every sample and check the backend now holds them all.
    /// Returns the number of documents added.
    pub fn add_sample_data(
        &mut self,
        samples: impl IntoIterator<Item = Result<SampleData, OracleError>>,
    ) -> Result<usize, OracleError> {
        let before = self.backend.num_docs();
        let mut added = 0;
        for sample in samples {
            let sample = sample?;
            let shape = self.codec.read_shape(self.strategy.context(), &sample.shape)?;
            let fields = self
                .strategy
                .create_fields(&self.field_info, &shape, true, true)
                .into_iter()
                .flatten()
                .collect();
            self.backend.add_document(Document {
                id: sample.id,
                name: sample.name,
                fields,
            });
            added += 1;
        }

        let found = self.backend.num_docs();
        if found != before + added {
            return Err(OracleError::IndexedCount {
                expected: before + added,
                found,
            });
        }
        Ok(added)
    }

    /// Run each query and check its results. Returns the number of queries run.
    pub fn run_queries(
        &self,
        concern: MatchConcern,
        queries: impl IntoIterator<Item = Result<TestQuery, OracleError>>,
    ) -> Result<usize, OracleError> {
        let mut count = 0;
        for query in queries {
            let query = query?;
            let compiled = self.strategy.make_query(&query.args, &self.field_info)?;
            let found = self.backend.execute(&compiled, QUERY_LIMIT);
            check_results(concern, &query.ids, &found, &query.line)?;
            count += 1;
        }
        Ok(count)
    }
}
