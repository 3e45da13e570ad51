//! Write facade for return-reason republishing.
//!
//! Resolves the entity ids named in a write-event batch to current domain
//! state through the read facade, maps them to index documents and
//! bulk-indexes them.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::errors::PublishError;
use crate::events::ReturnReasonPublishEvent;
use return_search_client::{index_map, SearchEngineClient};
use return_search_shared::{ReturnReason, ReturnReasonDocument};

/// Write facade resolving write events into index documents.
#[async_trait]
pub trait ReturnReasonWriteFacade: Send + Sync {
    /// Republish the return reasons named by the given events.
    async fn write_collection_by_events(
        &self,
        events: &[ReturnReasonPublishEvent],
    ) -> Result<(), PublishError>;
}

/// Read facade supplying current return-reason state.
///
/// Implemented outside this crate by whatever owns the domain records
/// (typically a database-backed facade).
#[async_trait]
pub trait ReturnReasonReader: Send + Sync {
    /// Load the return reasons with the given ids. Ids without a matching
    /// record are silently absent from the result.
    async fn get_return_reasons(&self, ids: &[i64]) -> Result<Vec<ReturnReason>, PublishError>;
}

/// Concrete write facade: read facade in, search index out.
pub struct ReturnReasonWriter {
    reader: Arc<dyn ReturnReasonReader>,
    engine: Arc<dyn SearchEngineClient>,
}

impl ReturnReasonWriter {
    /// Create a writer over the given read facade and engine client.
    pub fn new(reader: Arc<dyn ReturnReasonReader>, engine: Arc<dyn SearchEngineClient>) -> Self {
        Self { reader, engine }
    }

    /// Distinct entity ids named in a batch, preserving first-seen order.
    fn collect_ids(events: &[ReturnReasonPublishEvent]) -> Vec<i64> {
        let mut ids = Vec::with_capacity(events.len());
        for event in events {
            if !ids.contains(&event.id_sales_return_reason) {
                ids.push(event.id_sales_return_reason);
            }
        }
        ids
    }
}

#[async_trait]
impl ReturnReasonWriteFacade for ReturnReasonWriter {
    #[instrument(skip(self, events), fields(event_count = events.len()))]
    async fn write_collection_by_events(
        &self,
        events: &[ReturnReasonPublishEvent],
    ) -> Result<(), PublishError> {
        if events.is_empty() {
            return Ok(());
        }

        let ids = Self::collect_ids(events);
        let return_reasons = self.reader.get_return_reasons(&ids).await?;

        let documents: Vec<ReturnReasonDocument> = return_reasons
            .iter()
            .map(|return_reason| {
                ReturnReasonDocument::from_return_reason(
                    return_reason,
                    index_map::RETURN_REASON_RESOURCE_NAME,
                )
            })
            .collect();

        debug!(
            id_count = ids.len(),
            document_count = documents.len(),
            "Resolved write events to documents"
        );

        self.engine.bulk_index(&documents).await?;

        info!(count = documents.len(), "Republished return reasons");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use return_search_client::{RawSearchResponse, SearchError};
    use return_search_shared::SearchContext;
    use serde_json::Value;
    use std::sync::Mutex;

    struct StubReader {
        return_reasons: Vec<ReturnReason>,
        requested_ids: Mutex<Vec<Vec<i64>>>,
    }

    impl StubReader {
        fn new(return_reasons: Vec<ReturnReason>) -> Self {
            Self {
                return_reasons,
                requested_ids: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ReturnReasonReader for StubReader {
        async fn get_return_reasons(&self, ids: &[i64]) -> Result<Vec<ReturnReason>, PublishError> {
            self.requested_ids.lock().unwrap().push(ids.to_vec());
            Ok(self
                .return_reasons
                .iter()
                .filter(|r| ids.contains(&r.id_sales_return_reason))
                .cloned()
                .collect())
        }
    }

    struct RecordingEngine {
        indexed: Mutex<Vec<Vec<ReturnReasonDocument>>>,
        fail: bool,
    }

    impl RecordingEngine {
        fn new(fail: bool) -> Self {
            Self {
                indexed: Mutex::new(Vec::new()),
                fail,
            }
        }
    }

    #[async_trait]
    impl SearchEngineClient for RecordingEngine {
        async fn execute(
            &self,
            _context: &SearchContext,
            _body: &Value,
        ) -> Result<RawSearchResponse, SearchError> {
            Ok(RawSearchResponse::default())
        }

        async fn bulk_index(&self, documents: &[ReturnReasonDocument]) -> Result<(), SearchError> {
            if self.fail {
                return Err(SearchError::bulk_index("engine down"));
            }
            self.indexed.lock().unwrap().push(documents.to_vec());
            Ok(())
        }

        async fn ensure_index_exists(&self) -> Result<(), SearchError> {
            Ok(())
        }

        async fn health_check(&self) -> Result<bool, SearchError> {
            Ok(true)
        }
    }

    fn return_reason(id: i64) -> ReturnReason {
        ReturnReason {
            id_sales_return_reason: id,
            glossary_key_reason: format!("return_reasons.{id}"),
        }
    }

    #[tokio::test]
    async fn test_resolves_and_indexes_batch() {
        let reader = Arc::new(StubReader::new(vec![return_reason(1), return_reason(2)]));
        let engine = Arc::new(RecordingEngine::new(false));
        let writer = ReturnReasonWriter::new(reader.clone(), engine.clone());

        let events = vec![
            ReturnReasonPublishEvent::create(1),
            ReturnReasonPublishEvent::update(2),
        ];
        writer.write_collection_by_events(&events).await.unwrap();

        let indexed = engine.indexed.lock().unwrap();
        assert_eq!(indexed.len(), 1);
        assert_eq!(indexed[0].len(), 2);
        assert_eq!(indexed[0][0].document_type, "return_reason");
        assert_eq!(
            indexed[0][0].search_result_data.id_sales_return_reason,
            Some(1)
        );
    }

    #[tokio::test]
    async fn test_duplicate_ids_resolved_once() {
        let reader = Arc::new(StubReader::new(vec![return_reason(1)]));
        let engine = Arc::new(RecordingEngine::new(false));
        let writer = ReturnReasonWriter::new(reader.clone(), engine.clone());

        let events = vec![
            ReturnReasonPublishEvent::create(1),
            ReturnReasonPublishEvent::update(1),
            ReturnReasonPublishEvent::reindex(1),
        ];
        writer.write_collection_by_events(&events).await.unwrap();

        let requested = reader.requested_ids.lock().unwrap();
        assert_eq!(requested[0], vec![1]);

        let indexed = engine.indexed.lock().unwrap();
        assert_eq!(indexed[0].len(), 1);
    }

    #[tokio::test]
    async fn test_empty_batch_is_noop() {
        let reader = Arc::new(StubReader::new(vec![]));
        let engine = Arc::new(RecordingEngine::new(false));
        let writer = ReturnReasonWriter::new(reader.clone(), engine.clone());

        writer.write_collection_by_events(&[]).await.unwrap();

        assert!(reader.requested_ids.lock().unwrap().is_empty());
        assert!(engine.indexed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_engine_failure_propagates() {
        let reader = Arc::new(StubReader::new(vec![return_reason(1)]));
        let engine = Arc::new(RecordingEngine::new(true));
        let writer = ReturnReasonWriter::new(reader, engine);

        let error = writer
            .write_collection_by_events(&[ReturnReasonPublishEvent::create(1)])
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            PublishError::SearchError(SearchError::BulkIndexError(_))
        ));
    }
}
