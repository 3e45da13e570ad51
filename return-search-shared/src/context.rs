//! Search context identifying the origin of a query.

use serde::{Deserialize, Serialize};

/// Context attached to a search query.
///
/// The source identifier tells the engine client which index definition the
/// query targets. Each query owns its own context; it is created lazily with
/// the entity's default identifier unless the caller sets one explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchContext {
    /// Identifier of the index source this query targets.
    pub source_identifier: String,
}

impl SearchContext {
    /// Create a context for the given source identifier.
    pub fn new(source_identifier: impl Into<String>) -> Self {
        Self {
            source_identifier: source_identifier.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let context = SearchContext::new("return_reason");
        assert_eq!(context.source_identifier, "return_reason");
    }
}
