//! Error types for the return-reason search publisher.

use return_search_client::SearchError;
use thiserror::Error;

/// Errors that can occur while republishing return reasons to the index.
#[derive(Error, Debug)]
pub enum PublishError {
    /// The read facade failed to resolve current entity state.
    #[error("Reader error: {0}")]
    ReaderError(String),

    /// The write facade failed to republish the batch.
    #[error("Writer error: {0}")]
    WriterError(String),

    /// Error from the search engine.
    #[error("Search error: {0}")]
    SearchError(#[from] SearchError),
}

impl PublishError {
    /// Create a reader error.
    pub fn reader(msg: impl Into<String>) -> Self {
        Self::ReaderError(msg.into())
    }

    /// Create a writer error.
    pub fn writer(msg: impl Into<String>) -> Self {
        Self::WriterError(msg.into())
    }
}
