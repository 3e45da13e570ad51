//! Document and result types for return-reason search.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current domain state of a return reason, as resolved by the read facade.
///
/// This is the source of truth loaded when write events are republished to
/// the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnReason {
    /// The return reason's unique identifier.
    pub id_sales_return_reason: i64,
    /// Glossary key resolving to the customer-facing reason text.
    pub glossary_key_reason: String,
}

/// One return reason decoded from a search hit's stored payload.
///
/// Decoding is permissive: unknown payload fields are ignored and missing
/// fields stay `None`, so index schema evolution does not break the read path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnReasonSearchItem {
    /// The return reason's unique identifier.
    #[serde(default)]
    pub id_sales_return_reason: Option<i64>,
    /// The reason text or glossary key stored in the index.
    #[serde(default)]
    pub reason: Option<String>,
}

/// Formatted result of a return-reason search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnReasonSearchCollection {
    /// Matched items in engine-provided order.
    pub return_reasons: Vec<ReturnReasonSearchItem>,
    /// Total number of matches in the index, independent of the page size.
    pub total: u64,
}

/// A return-reason document as stored in the search index.
///
/// The index holds a type tag for filtering plus a ready-to-map payload blob;
/// the read path never reassembles documents from individual columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnReasonDocument {
    /// Document type tag used by the type filter.
    #[serde(rename = "type")]
    pub document_type: String,
    /// Ready-to-map result payload returned to the read path.
    #[serde(rename = "search-result-data")]
    pub search_result_data: ReturnReasonSearchItem,
    /// When this document was (re)published to the index.
    pub indexed_at: DateTime<Utc>,
}

impl ReturnReasonDocument {
    /// Build an index document from current domain state.
    pub fn from_return_reason(return_reason: &ReturnReason, document_type: &str) -> Self {
        Self {
            document_type: document_type.to_string(),
            search_result_data: ReturnReasonSearchItem {
                id_sales_return_reason: Some(return_reason.id_sales_return_reason),
                reason: Some(return_reason.glossary_key_reason.clone()),
            },
            indexed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_item_decodes_permissively() {
        let payload = serde_json::json!({
            "id_sales_return_reason": 7,
            "reason": "return_reasons.damaged",
            "unknown_field": true
        });

        let item: ReturnReasonSearchItem = serde_json::from_value(payload).unwrap();

        assert_eq!(item.id_sales_return_reason, Some(7));
        assert_eq!(item.reason, Some("return_reasons.damaged".to_string()));
    }

    #[test]
    fn test_search_item_missing_fields_stay_none() {
        let item: ReturnReasonSearchItem = serde_json::from_value(serde_json::json!({})).unwrap();

        assert!(item.id_sales_return_reason.is_none());
        assert!(item.reason.is_none());
    }

    #[test]
    fn test_document_from_return_reason() {
        let return_reason = ReturnReason {
            id_sales_return_reason: 3,
            glossary_key_reason: "return_reasons.wrong-item".to_string(),
        };

        let document = ReturnReasonDocument::from_return_reason(&return_reason, "return_reason");

        assert_eq!(document.document_type, "return_reason");
        assert_eq!(document.search_result_data.id_sales_return_reason, Some(3));
        assert_eq!(
            document.search_result_data.reason,
            Some("return_reasons.wrong-item".to_string())
        );
    }

    #[test]
    fn test_document_serializes_index_field_names() {
        let return_reason = ReturnReason {
            id_sales_return_reason: 1,
            glossary_key_reason: "return_reasons.damaged".to_string(),
        };
        let document = ReturnReasonDocument::from_return_reason(&return_reason, "return_reason");

        let value = serde_json::to_value(&document).unwrap();

        assert_eq!(value["type"], "return_reason");
        assert!(value["search-result-data"].is_object());
    }
}
