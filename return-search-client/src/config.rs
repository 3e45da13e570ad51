//! Configuration for the return-reason search client.

/// Pagination settings exposed to callers building paginated search UIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Page size used when the filter does not request one.
    pub default_items_per_page: u32,
    /// Upper bound on the page size a caller may request.
    pub max_items_per_page: u32,
    /// Query-string parameter carrying the page number.
    pub page_parameter_name: String,
    /// Query-string parameter carrying the items-per-page value.
    pub items_per_page_parameter_name: String,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_items_per_page: 10,
            max_items_per_page: 10000,
            page_parameter_name: "page".to_string(),
            items_per_page_parameter_name: "ipp".to_string(),
        }
    }
}

/// Configuration for the return-reason search client.
///
/// Built once at startup and passed into constructors; nothing reads it
/// through globals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnSearchConfig {
    /// Value of the document type tag return-reason queries must match.
    pub resource_type: String,
    /// Default source identifier attached to queries without an explicit context.
    pub source_identifier: String,
    /// Pagination settings.
    pub pagination: PaginationConfig,
}

impl Default for ReturnSearchConfig {
    fn default() -> Self {
        Self {
            resource_type: crate::index_map::RETURN_REASON_RESOURCE_NAME.to_string(),
            source_identifier: crate::index_map::RETURN_REASON_SOURCE_IDENTIFIER.to_string(),
            pagination: PaginationConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_defaults() {
        let pagination = PaginationConfig::default();

        assert_eq!(pagination.default_items_per_page, 10);
        assert_eq!(pagination.max_items_per_page, 10000);
        assert_eq!(pagination.page_parameter_name, "page");
        assert_eq!(pagination.items_per_page_parameter_name, "ipp");
    }

    #[test]
    fn test_config_defaults() {
        let config = ReturnSearchConfig::default();

        assert_eq!(config.resource_type, "return_reason");
        assert_eq!(config.source_identifier, "return_reason");
    }
}
