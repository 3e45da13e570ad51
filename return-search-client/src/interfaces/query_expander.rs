//! Query expander trait definition.

use std::collections::HashMap;

use serde_json::Value;

use crate::errors::SearchError;

/// A pluggable hook that may alter a query body before execution.
///
/// Expanders are registered on the search client and applied in registration
/// order; each expander's output becomes the next expander's input. Request
/// parameters from the filter are passed through so expanders can add
/// parameter-driven clauses (facets, locale filters, etc.).
pub trait QueryExpander: Send + Sync {
    /// Expand the query body, returning the possibly-modified body.
    fn expand(
        &self,
        body: Value,
        request_parameters: &HashMap<String, String>,
    ) -> Result<Value, SearchError>;
}
