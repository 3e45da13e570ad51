//! Return-reason query building.
//!
//! Builds the engine query body from a filter and carries the search context
//! for one request. Each query instance is owned by the single search
//! invocation that created it.

use serde_json::{json, Value};

use crate::config::ReturnSearchConfig;
use crate::index_map;
use return_search_shared::{ReturnReasonFilter, SearchContext};

/// A built return-reason search query.
///
/// Holds the query body (a bool must clause restricting the document type,
/// source-field selection, and the pagination window) plus the search
/// context. The context is materialized with the configured default source
/// identifier on first read unless the caller sets one explicitly.
#[derive(Debug, Clone)]
pub struct ReturnReasonSearchQuery {
    body: Value,
    context: Option<SearchContext>,
    default_source_identifier: String,
}

impl ReturnReasonSearchQuery {
    /// Build the query for the given filter.
    ///
    /// Pagination fields are applied only when present and positive; a zero
    /// limit or offset is treated as unset and the engine defaults apply.
    pub fn new(filter: &ReturnReasonFilter, config: &ReturnSearchConfig) -> Self {
        Self {
            body: build_body(filter, config),
            context: None,
            default_source_identifier: config.source_identifier.clone(),
        }
    }

    /// The query body to hand to expansion and execution.
    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Consume the query, returning the body for the expansion phase.
    pub fn into_body(self) -> Value {
        self.body
    }

    /// The search context for this query.
    ///
    /// Constructs the default context exactly once on first access if none
    /// was explicitly set; subsequent calls return the same instance until
    /// it is overwritten.
    pub fn search_context(&mut self) -> &SearchContext {
        let default_source_identifier = self.default_source_identifier.clone();
        self.context
            .get_or_insert_with(|| SearchContext::new(default_source_identifier))
    }

    /// Overwrite the search context for this query.
    pub fn set_search_context(&mut self, context: SearchContext) {
        self.context = Some(context);
    }
}

/// Build the query body: type filter, source-field selection, pagination.
fn build_body(filter: &ReturnReasonFilter, config: &ReturnSearchConfig) -> Value {
    let mut body = json!({
        "query": {
            "bool": {
                "must": [
                    { "match": { (index_map::TYPE): config.resource_type } }
                ]
            }
        },
        "_source": [index_map::SEARCH_RESULT_DATA]
    });

    if let Some(size) = filter.page_size() {
        body["size"] = json!(size);
    }
    if let Some(from) = filter.page_start() {
        body["from"] = json!(from);
    }

    body
}
