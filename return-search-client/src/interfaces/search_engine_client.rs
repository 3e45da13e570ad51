//! Search engine client trait definition.
//!
//! This module defines the abstract interface for search engine operations,
//! allowing for different backend implementations (OpenSearch, mock, etc.).

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::SearchError;
use return_search_shared::{ReturnReasonDocument, SearchContext};

/// The engine's native representation of one matched document.
#[derive(Debug, Clone, PartialEq)]
pub struct RawHit {
    /// The stored `_source` payload of the matched document.
    pub source: Value,
    /// Relevance score assigned by the engine.
    pub score: Option<f64>,
}

impl RawHit {
    /// Create a raw hit from a stored source payload.
    pub fn new(source: Value) -> Self {
        Self {
            source,
            score: None,
        }
    }
}

/// Raw response returned by the engine before formatting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSearchResponse {
    /// Matched documents in engine order (typically relevance-ranked).
    pub hits: Vec<RawHit>,
    /// Total number of matches in the index, which may exceed `hits.len()`
    /// when the query is paginated.
    pub total_hits: u64,
}

/// Abstract interface for search engine operations.
///
/// Implementations can be swapped for different backends (OpenSearch, mock,
/// etc.), enabling easy testing and potential future migrations. All
/// implementations must be `Send + Sync` to allow use across async tasks,
/// and all methods return `Result<T, SearchError>` for consistent error
/// handling.
#[async_trait]
pub trait SearchEngineClient: Send + Sync {
    /// Execute a query body against the index identified by the context.
    ///
    /// # Arguments
    ///
    /// * `context` - The search context selecting the target index
    /// * `body` - The fully built and expanded query body
    ///
    /// # Returns
    ///
    /// * `Ok(RawSearchResponse)` - Raw hits plus the total match count
    /// * `Err(SearchError)` - If execution fails; the error is propagated
    ///   unmodified to the caller, with no retry on this side
    async fn execute(
        &self,
        context: &SearchContext,
        body: &Value,
    ) -> Result<RawSearchResponse, SearchError>;

    /// Index multiple return-reason documents in a single bulk operation.
    ///
    /// Documents with the same identifier replace the existing index entry.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If all documents were indexed successfully
    /// * `Err(SearchError::BulkIndexError)` - If any documents failed to index
    async fn bulk_index(&self, documents: &[ReturnReasonDocument]) -> Result<(), SearchError>;

    /// Ensure the return-reason index exists with proper mappings.
    ///
    /// This should be called during application startup.
    async fn ensure_index_exists(&self) -> Result<(), SearchError>;

    /// Check if the search engine is healthy and reachable.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - If the search engine is healthy
    /// * `Ok(false)` - If the search engine is unhealthy
    /// * `Err(SearchError)` - If the health check fails to execute
    async fn health_check(&self) -> Result<bool, SearchError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_hit_new() {
        let hit = RawHit::new(json!({"search-result-data": {"reason": "damaged"}}));

        assert!(hit.score.is_none());
        assert_eq!(hit.source["search-result-data"]["reason"], "damaged");
    }

    #[test]
    fn test_raw_response_default() {
        let response = RawSearchResponse::default();

        assert!(response.hits.is_empty());
        assert_eq!(response.total_hits, 0);
    }
}
