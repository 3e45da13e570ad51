//! Write publisher adapter for return reasons.
//!
//! Subscribes to the return-reason write events and forwards each batch
//! unmodified to the write facade.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::errors::PublishError;
use crate::events::{
    ReturnReasonPublishEvent, ENTITY_RETURN_REASON_CREATE, ENTITY_RETURN_REASON_UPDATE,
    RETURN_REASON_PUBLISH_WRITE,
};
use crate::facade::ReturnReasonWriteFacade;

/// Handler for batches of write events, invoked by the external event
/// dispatcher.
///
/// Implementations declare which event names they subscribe to; the
/// dispatcher owns batching, retry and backpressure.
#[async_trait]
pub trait BulkEventHandler: Send + Sync {
    /// Handle one batch of events. Failures propagate to the dispatcher.
    async fn handle_bulk(&self, events: &[ReturnReasonPublishEvent]) -> Result<(), PublishError>;

    /// Event names this handler subscribes to.
    fn subscribed_events(&self) -> &'static [&'static str];
}

/// Publisher adapter that forwards return-reason write events to the write
/// facade.
///
/// No per-event filtering, dedup or ordering is imposed here; the write
/// facade owns those responsibilities.
pub struct ReturnReasonWritePublisher {
    facade: Arc<dyn ReturnReasonWriteFacade>,
}

impl ReturnReasonWritePublisher {
    /// Create a publisher forwarding to the given write facade.
    pub fn new(facade: Arc<dyn ReturnReasonWriteFacade>) -> Self {
        Self { facade }
    }
}

#[async_trait]
impl BulkEventHandler for ReturnReasonWritePublisher {
    #[instrument(skip(self, events), fields(event_count = events.len()))]
    async fn handle_bulk(&self, events: &[ReturnReasonPublishEvent]) -> Result<(), PublishError> {
        debug!("Forwarding write-event batch to facade");
        self.facade.write_collection_by_events(events).await
    }

    fn subscribed_events(&self) -> &'static [&'static str] {
        &[
            RETURN_REASON_PUBLISH_WRITE,
            ENTITY_RETURN_REASON_CREATE,
            ENTITY_RETURN_REASON_UPDATE,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Write facade that records forwarded batches.
    struct RecordingFacade {
        batches: Mutex<Vec<Vec<ReturnReasonPublishEvent>>>,
        fail: bool,
    }

    impl RecordingFacade {
        fn new(fail: bool) -> Self {
            Self {
                batches: Mutex::new(Vec::new()),
                fail,
            }
        }
    }

    #[async_trait]
    impl ReturnReasonWriteFacade for RecordingFacade {
        async fn write_collection_by_events(
            &self,
            events: &[ReturnReasonPublishEvent],
        ) -> Result<(), PublishError> {
            if self.fail {
                return Err(PublishError::writer("index unavailable"));
            }
            self.batches.lock().unwrap().push(events.to_vec());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_forwards_batch_unmodified() {
        let facade = Arc::new(RecordingFacade::new(false));
        let publisher = ReturnReasonWritePublisher::new(facade.clone());

        let events = vec![
            ReturnReasonPublishEvent::create(1),
            ReturnReasonPublishEvent::update(2),
            ReturnReasonPublishEvent::reindex(1),
        ];
        publisher.handle_bulk(&events).await.unwrap();

        let batches = facade.batches.lock().unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0], events);
    }

    #[tokio::test]
    async fn test_facade_error_propagates() {
        let facade = Arc::new(RecordingFacade::new(true));
        let publisher = ReturnReasonWritePublisher::new(facade);

        let error = publisher
            .handle_bulk(&[ReturnReasonPublishEvent::create(1)])
            .await
            .unwrap_err();

        assert!(matches!(error, PublishError::WriterError(_)));
    }

    #[test]
    fn test_subscribed_events() {
        let facade = Arc::new(RecordingFacade::new(false));
        let publisher = ReturnReasonWritePublisher::new(facade);

        let subscribed = publisher.subscribed_events();
        assert_eq!(subscribed.len(), 3);
        assert!(subscribed.contains(&RETURN_REASON_PUBLISH_WRITE));
        assert!(subscribed.contains(&ENTITY_RETURN_REASON_CREATE));
        assert!(subscribed.contains(&ENTITY_RETURN_REASON_UPDATE));
    }
}
