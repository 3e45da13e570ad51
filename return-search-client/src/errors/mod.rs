//! Error types for the return-reason search client.

mod search_error;

pub use search_error::SearchError;
