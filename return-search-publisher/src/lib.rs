//! # Return Search Publisher
//!
//! This crate provides the write path for return-reason search. Domain write
//! events (create, update, explicit reindex) arrive in batches from an
//! external event dispatcher; the publisher forwards them to a write facade
//! that resolves current entity state through a read facade and republishes
//! it to the search index.

pub mod errors;
pub mod events;
pub mod facade;
pub mod publisher;

pub use errors::PublishError;
pub use events::{PublishEventKind, ReturnReasonPublishEvent};
pub use facade::{ReturnReasonReader, ReturnReasonWriteFacade, ReturnReasonWriter};
pub use publisher::{BulkEventHandler, ReturnReasonWritePublisher};
