//! Return-reason index schema.
//!
//! Field names available on the indexed document, the resource type value
//! and the index settings/mappings used at index creation time.

use serde_json::{json, Value};

/// Field holding the document type tag.
pub const TYPE: &str = "type";

/// Field holding the ready-to-map result payload.
pub const SEARCH_RESULT_DATA: &str = "search-result-data";

/// Document type value for return-reason documents.
pub const RETURN_REASON_RESOURCE_NAME: &str = "return_reason";

/// Default source identifier for return-reason queries.
pub const RETURN_REASON_SOURCE_IDENTIFIER: &str = "return_reason";

/// Get the index settings and mappings for the return-reason index.
///
/// The type tag is a keyword for exact filtering. The result payload is
/// stored but not indexed for search; the read path returns it as-is.
pub fn get_index_settings() -> Value {
    json!({
        "settings": {
            "number_of_shards": 1,
            "number_of_replicas": 1
        },
        "mappings": {
            "properties": {
                (TYPE): {
                    "type": "keyword"
                },
                (SEARCH_RESULT_DATA): {
                    "type": "object",
                    "enabled": false
                },
                "indexed_at": {
                    "type": "date"
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_settings_structure() {
        let settings = get_index_settings();

        assert!(settings["settings"]["number_of_shards"].is_number());
        assert!(settings["settings"]["number_of_replicas"].is_number());

        assert_eq!(settings["mappings"]["properties"][TYPE]["type"], "keyword");
        assert_eq!(
            settings["mappings"]["properties"][SEARCH_RESULT_DATA]["enabled"],
            false
        );
    }

    #[test]
    fn test_field_names() {
        assert_eq!(TYPE, "type");
        assert_eq!(SEARCH_RESULT_DATA, "search-result-data");
        assert_eq!(RETURN_REASON_RESOURCE_NAME, "return_reason");
    }
}
