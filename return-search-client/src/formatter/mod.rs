//! Result formatting for return-reason search.
//!
//! Maps each raw hit's stored payload into a typed record and aggregates the
//! engine's total match count.

use tracing::debug;

use crate::errors::SearchError;
use crate::index_map;
use crate::interfaces::RawSearchResponse;
use return_search_shared::{ReturnReasonSearchCollection, ReturnReasonSearchItem};

/// Formatter name, used by registries keyed on formatter identity.
pub const FORMATTER_NAME: &str = "ReturnReasonCollection";

/// Formats raw engine hits into a [`ReturnReasonSearchCollection`].
///
/// Engine-provided ordering is preserved. Decoding of the payload is
/// permissive (unknown or missing fields do not fail), but a hit without the
/// payload container at all violates the index contract and fails with a
/// mapping error naming the offending hit.
#[derive(Debug, Clone, Default)]
pub struct ReturnReasonResultFormatter;

impl ReturnReasonResultFormatter {
    /// Create a new formatter.
    pub fn new() -> Self {
        Self
    }

    /// Name identifying this formatter.
    pub fn name(&self) -> &'static str {
        FORMATTER_NAME
    }

    /// Format a raw response into the typed collection.
    pub fn format(
        &self,
        response: &RawSearchResponse,
    ) -> Result<ReturnReasonSearchCollection, SearchError> {
        let mut return_reasons = Vec::with_capacity(response.hits.len());

        for (hit_index, hit) in response.hits.iter().enumerate() {
            let payload = hit
                .source
                .get(index_map::SEARCH_RESULT_DATA)
                .ok_or_else(|| {
                    SearchError::mapping(
                        hit_index,
                        format!("missing '{}' field in hit source", index_map::SEARCH_RESULT_DATA),
                    )
                })?;

            let item: ReturnReasonSearchItem = serde_json::from_value(payload.clone())
                .map_err(|e| SearchError::mapping(hit_index, e.to_string()))?;

            return_reasons.push(item);
        }

        debug!(
            item_count = return_reasons.len(),
            total = response.total_hits,
            "Formatted search result"
        );

        Ok(ReturnReasonSearchCollection {
            return_reasons,
            total: response.total_hits,
        })
    }
}
