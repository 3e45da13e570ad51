//! Dependency initialization and wiring for the return-reason search module.

use std::env;
use std::sync::Arc;

use tracing::info;

use crate::ReturnSearchError;
use return_search_client::{
    OpenSearchClient, QueryExpander, ReturnReasonSearchClient, ReturnSearchConfig,
    SearchEngineClient,
};
use return_search_publisher::{
    ReturnReasonReader, ReturnReasonWritePublisher, ReturnReasonWriter,
};

/// Default OpenSearch URL.
const DEFAULT_OPENSEARCH_URL: &str = "http://localhost:9200";

/// Initialize the search engine client from environment variables.
///
/// Verifies that the cluster is healthy and ensures the return-reason index
/// exists with its mappings.
///
/// # Environment Variables
///
/// - `OPENSEARCH_URL`: OpenSearch server URL (default: http://localhost:9200)
/// - `RETURN_REASON_INDEX_PREFIX`: optional prefix for resolved index names
pub async fn init_engine() -> Result<Arc<dyn SearchEngineClient>, ReturnSearchError> {
    let opensearch_url =
        env::var("OPENSEARCH_URL").unwrap_or_else(|_| DEFAULT_OPENSEARCH_URL.to_string());
    let index_prefix = env::var("RETURN_REASON_INDEX_PREFIX").ok();

    info!(
        opensearch_url = %opensearch_url,
        index_prefix = ?index_prefix,
        "Initializing search engine client"
    );

    let engine: Arc<dyn SearchEngineClient> =
        Arc::new(OpenSearchClient::new(&opensearch_url, index_prefix).map_err(|e| {
            ReturnSearchError::config(format!("Failed to create OpenSearch client: {}", e))
        })?);

    let healthy = engine
        .health_check()
        .await
        .map_err(|e| ReturnSearchError::config(format!("OpenSearch health check failed: {}", e)))?;

    if !healthy {
        return Err(ReturnSearchError::config("OpenSearch cluster is unhealthy"));
    }

    info!("OpenSearch connection verified");

    engine.ensure_index_exists().await?;

    Ok(engine)
}

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// Read-path search client.
    pub search_client: ReturnReasonSearchClient,
    /// Write-path publisher, to be registered with the event dispatcher.
    pub write_publisher: ReturnReasonWritePublisher,
    /// The shared engine client.
    pub engine: Arc<dyn SearchEngineClient>,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// # Environment Variables
    ///
    /// See [`init_engine`].
    ///
    /// # Arguments
    ///
    /// * `reader` - Read facade resolving return-reason state for republishing
    /// * `expanders` - Query expansion hooks, applied in the given order
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies, with the index
    ///   verified to exist and the cluster verified healthy
    /// * `Err(ReturnSearchError)` - If initialization fails
    pub async fn new(
        reader: Arc<dyn ReturnReasonReader>,
        expanders: Vec<Arc<dyn QueryExpander>>,
    ) -> Result<Self, ReturnSearchError> {
        let engine = init_engine().await?;

        let config = ReturnSearchConfig::default();
        let search_client =
            ReturnReasonSearchClient::with_expanders(config, engine.clone(), expanders);

        let writer = Arc::new(ReturnReasonWriter::new(reader, engine.clone()));
        let write_publisher = ReturnReasonWritePublisher::new(writer);

        Ok(Self {
            search_client,
            write_publisher,
            engine,
        })
    }
}
