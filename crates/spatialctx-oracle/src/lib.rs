//! Query/result oracle for spatial indexing strategies.
//!
//! This crate reads sample documents and test queries from text files,
//! runs the queries through a [`SpatialStrategy`](spatialctx::SpatialStrategy)
//! and a [`SearchBackend`], and checks the returned ids under a
//! [`MatchConcern`].

mod error;
mod query;
mod runner;
mod sample;

pub use error::OracleError;
pub use query::{TestQuery, TestQueryReader};
pub use runner::{Document, QUERY_LIMIT, SearchBackend, StrategyTestCase};
pub use sample::{SampleData, SampleDataReader};

use std::collections::HashSet;

/// How returned ids are compared against the expected ids
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchConcern {
    /// Same ids in the same order, nothing extra
    Ordered,
    /// Every expected id is present; extra results are fine
    Superset,
    /// Same ids in any order
    Unordered,
}

/// Compare `found` against `expected`. `query` is the query line, used in
/// failure messages.
pub fn check_results(
    concern: MatchConcern,
    expected: &[String],
    found: &[String],
    query: &str,
) -> Result<(), OracleError> {
    match concern {
        MatchConcern::Ordered => {
            let mut expected_ids = expected.iter();
            for id in found {
                match expected_ids.next() {
                    Some(want) if want == id => {}
                    Some(want) => {
                        return Err(OracleError::OutOfOrder {
                            query: query.to_string(),
                            expected: want.clone(),
                            found: id.clone(),
                        });
                    }
                    None => {
                        return Err(OracleError::UnexpectedResult {
                            query: query.to_string(),
                            found: id.clone(),
                        });
                    }
                }
            }
            if let Some(next) = expected_ids.next() {
                return Err(OracleError::MissingResults {
                    query: query.to_string(),
                    next: next.clone(),
                });
            }
            Ok(())
        }
        MatchConcern::Superset => {
            let found_set: HashSet<&String> = found.iter().collect();
            match expected.iter().find(|id| !found_set.contains(id)) {
                Some(missing) => {
                    let mut found = found.to_vec();
                    found.sort();
                    Err(OracleError::MissingId {
                        query: query.to_string(),
                        id: missing.clone(),
                        found,
                    })
                }
                None => Ok(()),
            }
        }
        MatchConcern::Unordered => {
            let mut expected = expected.to_vec();
            let mut found = found.to_vec();
            expected.sort();
            found.sort();
            if expected == found {
                return Ok(());
            }
            let diff = render_diff(&expected.join("\n"), &found.join("\n"));
            Err(OracleError::SetMismatch {
                query: query.to_string(),
                expected,
                found,
                diff,
            })
        }
    }
}

/// Line-oriented diff, `-` for expected only and `+` for found only
fn render_diff(expected: &str, found: &str) -> String {
    let mut out = String::new();
    for chunk in dissimilar::diff(expected, found) {
        let (prefix, text) = match chunk {
            dissimilar::Chunk::Equal(text) => (' ', text),
            dissimilar::Chunk::Delete(text) => ('-', text),
            dissimilar::Chunk::Insert(text) => ('+', text),
        };
        for line in text.split('\n').filter(|line| !line.is_empty()) {
            out.push(prefix);
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn ordered_fails_at_first_mismatch() {
        let err = check_results(
            MatchConcern::Ordered,
            &ids(&["id1", "id2", "id3"]),
            &ids(&["id3", "id1"]),
            "q",
        )
        .unwrap_err();
        match &err {
            OracleError::OutOfOrder { expected, found, .. } => {
                assert_eq!((expected.as_str(), found.as_str()), ("id1", "id3"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        insta::assert_snapshot!(err.to_string(), @"out of order: q :: expected id1, found id3");
    }

    #[test]
    fn ordered_extra_and_missing() {
        let expected = ids(&["a", "b"]);
        assert!(check_results(MatchConcern::Ordered, &expected, &ids(&["a", "b"]), "q").is_ok());
        assert!(matches!(
            check_results(MatchConcern::Ordered, &expected, &ids(&["a", "b", "c"]), "q"),
            Err(OracleError::UnexpectedResult { found, .. }) if found == "c"
        ));
        let err = check_results(MatchConcern::Ordered, &expected, &ids(&["a"]), "q").unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"q :: expected more results than we got: b");
    }

    #[test]
    fn superset_allows_extras() {
        let found = ids(&["A", "B", "C"]);
        assert!(check_results(MatchConcern::Superset, &ids(&["A", "B"]), &found, "q").is_ok());
        let err = check_results(MatchConcern::Superset, &ids(&["A", "D"]), &found, "q").unwrap_err();
        assert!(matches!(&err, OracleError::MissingId { id, .. } if id == "D"));
        insta::assert_snapshot!(err.to_string(), @r#"Results are missing id: D :: ["A", "B", "C"]"#);
    }

    #[test]
    fn unordered_sorts_both_sides() {
        let found = ids(&["C", "A", "B"]);
        assert!(check_results(MatchConcern::Unordered, &ids(&["B", "A", "C"]), &found, "q").is_ok());

        let err = check_results(MatchConcern::Unordered, &ids(&["A", "B"]), &found, "q").unwrap_err();
        assert!(err.is_mismatch());
        match err {
            OracleError::SetMismatch {
                expected,
                found,
                diff,
                ..
            } => {
                assert_eq!(expected, ["A", "B"]);
                assert_eq!(found, ["A", "B", "C"]);
                assert!(diff.contains("+C"), "{diff}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_expectations() {
        for concern in [MatchConcern::Ordered, MatchConcern::Superset, MatchConcern::Unordered] {
            assert!(check_results(concern, &[], &[], "q").is_ok());
        }
        assert!(check_results(MatchConcern::Superset, &[], &ids(&["x"]), "q").is_ok());
        assert!(check_results(MatchConcern::Unordered, &[], &ids(&["x"]), "q").is_err());
    }
}
