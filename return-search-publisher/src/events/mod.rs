//! Publish event types for return reasons.
//!
//! Defines the event structures handed to the publisher by the external
//! event dispatcher, and the event names it subscribes to.

/// Event name for an explicit return-reason reindex request.
pub const RETURN_REASON_PUBLISH_WRITE: &str = "ReturnReason.return_reason.publish.write";

/// Event name emitted when a return-reason entity is created.
pub const ENTITY_RETURN_REASON_CREATE: &str = "Entity.sales_return_reason.create";

/// Event name emitted when a return-reason entity is updated.
pub const ENTITY_RETURN_REASON_UPDATE: &str = "Entity.sales_return_reason.update";

/// Kinds of write events that trigger republishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishEventKind {
    /// Entity was created.
    Create,
    /// Entity was updated.
    Update,
    /// Explicit reindex request.
    Reindex,
}

/// A return-reason write event received from the event dispatcher.
///
/// Events carry only the entity id; current state is resolved by the write
/// facade at publish time. Events are consumed in batches and never
/// persisted here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnReasonPublishEvent {
    /// The return reason the event refers to.
    pub id_sales_return_reason: i64,
    /// The kind of event.
    pub kind: PublishEventKind,
}

impl ReturnReasonPublishEvent {
    /// Create a new create event.
    pub fn create(id_sales_return_reason: i64) -> Self {
        Self {
            id_sales_return_reason,
            kind: PublishEventKind::Create,
        }
    }

    /// Create a new update event.
    pub fn update(id_sales_return_reason: i64) -> Self {
        Self {
            id_sales_return_reason,
            kind: PublishEventKind::Update,
        }
    }

    /// Create a new reindex event.
    pub fn reindex(id_sales_return_reason: i64) -> Self {
        Self {
            id_sales_return_reason,
            kind: PublishEventKind::Reindex,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_constructors() {
        assert_eq!(
            ReturnReasonPublishEvent::create(1).kind,
            PublishEventKind::Create
        );
        assert_eq!(
            ReturnReasonPublishEvent::update(2).kind,
            PublishEventKind::Update
        );
        assert_eq!(
            ReturnReasonPublishEvent::reindex(3).id_sales_return_reason,
            3
        );
    }
}
