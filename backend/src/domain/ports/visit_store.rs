//! Port for visit persistence and per-pet reads.

use async_trait::async_trait;

use crate::domain::{NewVisit, Visit};

/// Errors raised by visit store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VisitStoreError {
    /// Store connection could not be established.
    #[error("visit store connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("visit store query failed: {message}")]
    Query { message: String },
}

impl VisitStoreError {
    /// Construct a [`VisitStoreError::Connection`].
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Construct a [`VisitStoreError::Query`].
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for persisting visits and reading them back by pet.
///
/// Implementations own their concurrency control; callers issue a single
/// awaited call per request with no retry or timeout of their own.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitStore: Send + Sync {
    /// Persist a validated visit, returning the stored record with its
    /// store-assigned identifier.
    async fn save(&self, visit: NewVisit) -> Result<Visit, VisitStoreError>;

    /// List visits recorded for one pet. An empty list is a normal outcome.
    async fn find_by_pet_id(&self, pet_id: i32) -> Result<Vec<Visit>, VisitStoreError>;

    /// List visits recorded for any of the given pets. Identifiers are
    /// forwarded verbatim; unknown or non-positive ids simply match nothing.
    async fn find_by_pet_id_in(&self, pet_ids: Vec<i32>) -> Result<Vec<Visit>, VisitStoreError>;
}

/// Fixture implementation for tests that do not exercise persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureVisitStore;

#[async_trait]
impl VisitStore for FixtureVisitStore {
    async fn save(&self, visit: NewVisit) -> Result<Visit, VisitStoreError> {
        Ok(visit.into_persisted(1))
    }

    async fn find_by_pet_id(&self, _pet_id: i32) -> Result<Vec<Visit>, VisitStoreError> {
        Ok(Vec::new())
    }

    async fn find_by_pet_id_in(&self, _pet_ids: Vec<i32>) -> Result<Vec<Visit>, VisitStoreError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use chrono::NaiveDate;
    use rstest::rstest;

    use super::*;

    fn build_visit() -> NewVisit {
        let date = NaiveDate::from_ymd_opt(2025, 4, 7).expect("valid date");
        NewVisit::new(111, Some(date), Some("Routine checkup".to_owned())).expect("valid visit")
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_save_assigns_first_id() {
        let store = FixtureVisitStore;
        let saved = store.save(build_visit()).await.expect("fixture save succeeds");
        assert_eq!(saved.id(), 1);
        assert_eq!(saved.pet_id(), 111);
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_find_returns_empty() {
        let store = FixtureVisitStore;
        let listed = store
            .find_by_pet_id(111)
            .await
            .expect("fixture lookup succeeds");
        assert!(listed.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_find_in_returns_empty() {
        let store = FixtureVisitStore;
        let listed = store
            .find_by_pet_id_in(vec![111, 222])
            .await
            .expect("fixture lookup succeeds");
        assert!(listed.is_empty());
    }

    #[rstest]
    fn query_error_formats_message() {
        let err = VisitStoreError::query("broken statement");
        assert!(err.to_string().contains("broken statement"));
    }

    #[rstest]
    fn connection_error_formats_message() {
        let err = VisitStoreError::connection("refused");
        assert!(err.to_string().contains("refused"));
    }
}
