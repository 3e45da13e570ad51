//! Filter type for return-reason search requests.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Filter for a return-reason search request.
///
/// All fields are optional and treated permissively: absent pagination fields
/// mean "use the engine defaults", and request parameters are an opaque bag
/// handed to query expansion hooks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnReasonFilter {
    /// Maximum number of items to return. `None` (or zero) uses the engine default.
    pub limit: Option<u32>,
    /// Number of items to skip. `None` (or zero) starts at the beginning.
    pub offset: Option<u32>,
    /// Raw request parameters forwarded to query expansion hooks.
    #[serde(default)]
    pub request_parameters: HashMap<String, String>,
}

impl ReturnReasonFilter {
    /// Create an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the page start offset.
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Add a request parameter for query expansion hooks.
    pub fn with_request_parameter(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.request_parameters.insert(key.into(), value.into());
        self
    }

    /// Effective page size, if one was requested.
    ///
    /// A limit of zero is treated the same as an absent limit: no explicit
    /// size is sent and the engine default applies.
    pub fn page_size(&self) -> Option<u32> {
        self.limit.filter(|&limit| limit > 0)
    }

    /// Effective page start offset, if one was requested.
    ///
    /// An offset of zero is treated the same as an absent offset.
    pub fn page_start(&self) -> Option<u32> {
        self.offset.filter(|&offset| offset > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_zero_is_unset() {
        let explicit_zero = ReturnReasonFilter::new().with_limit(0).with_offset(0);
        let absent = ReturnReasonFilter::new();

        assert_eq!(explicit_zero.page_size(), absent.page_size());
        assert_eq!(explicit_zero.page_start(), absent.page_start());
        assert!(explicit_zero.page_size().is_none());
    }

    #[test]
    fn test_page_size_positive() {
        let filter = ReturnReasonFilter::new().with_limit(5).with_offset(10);

        assert_eq!(filter.page_size(), Some(5));
        assert_eq!(filter.page_start(), Some(10));
    }

    #[test]
    fn test_request_parameters() {
        let filter = ReturnReasonFilter::new().with_request_parameter("locale", "en_US");

        assert_eq!(
            filter.request_parameters.get("locale"),
            Some(&"en_US".to_string())
        );
    }
}
