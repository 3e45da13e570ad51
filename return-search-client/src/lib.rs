//! # Return Search Client
//!
//! This crate provides the read path for return-reason search. It builds the
//! engine query from a filter, runs it through pluggable expansion hooks,
//! executes it against the search engine and formats the raw hits into a
//! typed collection. The engine itself is behind the [`SearchEngineClient`]
//! trait, with a concrete OpenSearch implementation.

pub mod client;
pub mod config;
pub mod errors;
pub mod formatter;
pub mod index_map;
pub mod interfaces;
pub mod opensearch;
pub mod query;

pub use client::ReturnReasonSearchClient;
pub use config::ReturnSearchConfig;
pub use errors::SearchError;
pub use interfaces::{QueryExpander, RawHit, RawSearchResponse, SearchEngineClient};
pub use opensearch::OpenSearchClient;
pub use query::ReturnReasonSearchQuery;
