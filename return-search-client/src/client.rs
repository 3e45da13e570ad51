//! Return-reason search facade.
//!
//! Orchestrates the read path: build the query from the filter, run it
//! through the registered expansion hooks, execute it against the engine and
//! format the raw hits into the typed collection.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::config::ReturnSearchConfig;
use crate::errors::SearchError;
use crate::formatter::ReturnReasonResultFormatter;
use crate::interfaces::{QueryExpander, SearchEngineClient};
use crate::query::ReturnReasonSearchQuery;
use return_search_shared::{ReturnReasonFilter, ReturnReasonSearchCollection};

/// Search facade for return reasons.
///
/// Each `search` call builds its own query and context; no state is shared
/// across requests, so independent searches can be fanned out concurrently.
/// Expansion hooks are applied in registration order, and engine errors
/// propagate to the caller unmodified.
pub struct ReturnReasonSearchClient {
    config: ReturnSearchConfig,
    engine: Arc<dyn SearchEngineClient>,
    expanders: Vec<Arc<dyn QueryExpander>>,
    formatter: ReturnReasonResultFormatter,
}

impl ReturnReasonSearchClient {
    /// Create a search client with no expansion hooks.
    pub fn new(config: ReturnSearchConfig, engine: Arc<dyn SearchEngineClient>) -> Self {
        Self {
            config,
            engine,
            expanders: Vec::new(),
            formatter: ReturnReasonResultFormatter::new(),
        }
    }

    /// Create a search client with the given expansion hooks.
    pub fn with_expanders(
        config: ReturnSearchConfig,
        engine: Arc<dyn SearchEngineClient>,
        expanders: Vec<Arc<dyn QueryExpander>>,
    ) -> Self {
        Self {
            config,
            engine,
            expanders,
            formatter: ReturnReasonResultFormatter::new(),
        }
    }

    /// Search return reasons matching the given filter.
    ///
    /// Runs the linear pipeline build → expand → execute → format. Any phase
    /// failure aborts the remaining phases; no partial results are returned.
    #[instrument(skip(self, filter))]
    pub async fn search(
        &self,
        filter: &ReturnReasonFilter,
    ) -> Result<ReturnReasonSearchCollection, SearchError> {
        let mut query = ReturnReasonSearchQuery::new(filter, &self.config);
        let context = query.search_context().clone();

        let mut body = query.into_body();
        for expander in &self.expanders {
            body = expander.expand(body, &filter.request_parameters)?;
        }

        debug!(
            expander_count = self.expanders.len(),
            source_identifier = %context.source_identifier,
            formatter = self.formatter.name(),
            "Executing return-reason search"
        );

        let response = self.engine.execute(&context, &body).await?;

        self.formatter.format(&response)
    }
}
