//! # Return Search Shared
//!
//! Shared types and data structures for the return-reason search module.
//! These types cross crate boundaries: the filter and context flow through
//! the read path, the document types through the write path.

pub mod context;
pub mod document;
pub mod filter;

pub use context::SearchContext;
pub use document::{
    ReturnReason, ReturnReasonDocument, ReturnReasonSearchCollection, ReturnReasonSearchItem,
};
pub use filter::ReturnReasonFilter;
