//! Interface definitions for the return-reason search client.
//!
//! This module defines the abstract seams of the read path: the engine
//! client trait for swappable search backends, and the query expander trait
//! for pluggable query expansion hooks.

mod query_expander;
mod search_engine_client;

pub use query_expander::QueryExpander;
pub use search_engine_client::{RawHit, RawSearchResponse, SearchEngineClient};
