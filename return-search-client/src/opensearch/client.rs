//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `SearchEngineClient`
//! using the OpenSearch Rust client.

use async_trait::async_trait;
use opensearch::{
    cluster::ClusterHealthParts,
    http::request::JsonBody,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::{IndicesCreateParts, IndicesExistsParts},
    BulkParts, OpenSearch, SearchParts,
};
use serde_json::{json, Value};
use tracing::{debug, error, info};
use url::Url;

use crate::errors::SearchError;
use crate::index_map;
use crate::interfaces::{RawHit, RawSearchResponse, SearchEngineClient};
use return_search_shared::{ReturnReasonDocument, SearchContext};

/// OpenSearch implementation of the search engine client.
///
/// The target index is resolved from the query's search context: the
/// context's source identifier is the index name, optionally prefixed (e.g.
/// per store or environment).
pub struct OpenSearchClient {
    client: OpenSearch,
    index_prefix: Option<String>,
}

impl OpenSearchClient {
    /// Create a new OpenSearch client connected to the specified URL.
    ///
    /// # Arguments
    ///
    /// * `url` - The OpenSearch server URL (e.g., "http://localhost:9200")
    /// * `index_prefix` - Optional prefix prepended to resolved index names
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchClient)` - A new client instance
    /// * `Err(SearchError)` - If connection setup fails
    pub fn new(url: &str, index_prefix: Option<String>) -> Result<Self, SearchError> {
        let parsed_url = Url::parse(url).map_err(|e| SearchError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let transport = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .build()
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        info!(url = %url, prefix = ?index_prefix, "Created OpenSearch client");

        Ok(Self {
            client,
            index_prefix,
        })
    }

    /// Resolve the index name for a search context.
    fn index_name(&self, context: &SearchContext) -> String {
        match &self.index_prefix {
            Some(prefix) => format!("{}_{}", prefix, context.source_identifier),
            None => context.source_identifier.clone(),
        }
    }

    /// Index name for write operations, which always target the default
    /// return-reason index.
    fn write_index_name(&self) -> String {
        self.index_name(&SearchContext::new(
            index_map::RETURN_REASON_SOURCE_IDENTIFIER,
        ))
    }

    /// Parse an OpenSearch search response body into raw hits plus the total.
    fn parse_response(body: &Value) -> Result<RawSearchResponse, SearchError> {
        let total_hits = body["hits"]["total"]["value"]
            .as_u64()
            .ok_or_else(|| SearchError::parse("missing hits.total.value in response"))?;

        let raw_hits = body["hits"]["hits"]
            .as_array()
            .ok_or_else(|| SearchError::parse("missing hits.hits array in response"))?;

        let hits = raw_hits
            .iter()
            .map(|hit| RawHit {
                source: hit["_source"].clone(),
                score: hit["_score"].as_f64(),
            })
            .collect();

        Ok(RawSearchResponse { hits, total_hits })
    }
}

#[async_trait]
impl SearchEngineClient for OpenSearchClient {
    async fn execute(
        &self,
        context: &SearchContext,
        body: &Value,
    ) -> Result<RawSearchResponse, SearchError> {
        let index = self.index_name(context);

        let response = self
            .client
            .search(SearchParts::Index(&[&index]))
            .body(body.clone())
            .send()
            .await
            .map_err(|e| SearchError::query(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Search request failed");
            return Err(SearchError::query(format!(
                "Search failed with status {}: {}",
                status, error_body
            )));
        }

        let response_body: Value = response
            .json()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))?;

        let parsed = Self::parse_response(&response_body)?;
        debug!(
            index = %index,
            hit_count = parsed.hits.len(),
            total = parsed.total_hits,
            "Search executed"
        );

        Ok(parsed)
    }

    async fn bulk_index(&self, documents: &[ReturnReasonDocument]) -> Result<(), SearchError> {
        if documents.is_empty() {
            return Ok(());
        }

        let index = self.write_index_name();

        let mut body: Vec<JsonBody<Value>> = Vec::with_capacity(documents.len() * 2);
        for document in documents {
            let id = document
                .search_result_data
                .id_sales_return_reason
                .ok_or_else(|| {
                    SearchError::serialization("document payload has no id_sales_return_reason")
                })?;
            let doc_id = format!("{}:{}", document.document_type, id);

            body.push(json!({"index": {"_index": index, "_id": doc_id}}).into());
            body.push(
                serde_json::to_value(document)
                    .map_err(|e| SearchError::serialization(e.to_string()))?
                    .into(),
            );
        }

        let response = self
            .client
            .bulk(BulkParts::Index(&index))
            .body(body)
            .send()
            .await
            .map_err(|e| SearchError::bulk_index(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Bulk index request failed");
            return Err(SearchError::bulk_index(format!(
                "Bulk index failed with status {}: {}",
                status, error_body
            )));
        }

        let response_body: Value = response
            .json()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))?;

        if response_body["errors"].as_bool().unwrap_or(false) {
            let failed = response_body["items"]
                .as_array()
                .map(|items| {
                    items
                        .iter()
                        .filter(|item| item["index"]["error"].is_object())
                        .count()
                })
                .unwrap_or(0);
            error!(failed = failed, "Bulk index had item failures");
            return Err(SearchError::bulk_index(format!(
                "Bulk index had {} failed items",
                failed
            )));
        }

        debug!(count = documents.len(), index = %index, "Bulk indexed documents");
        Ok(())
    }

    async fn ensure_index_exists(&self) -> Result<(), SearchError> {
        let index = self.write_index_name();

        let exists = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[&index]))
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        if exists.status_code().is_success() {
            debug!(index = %index, "Index already exists");
            return Ok(());
        }

        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(&index))
            .body(index_map::get_index_settings())
            .send()
            .await
            .map_err(|e| SearchError::index_creation(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(SearchError::index_creation(format!(
                "Index creation failed with status {}: {}",
                status, error_body
            )));
        }

        info!(index = %index, "Created return-reason index");
        Ok(())
    }

    async fn health_check(&self) -> Result<bool, SearchError> {
        let response = self
            .client
            .cluster()
            .health(ClusterHealthParts::None)
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        if !response.status_code().is_success() {
            return Ok(false);
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))?;

        let status = body["status"].as_str().unwrap_or("red");
        Ok(status == "green" || status == "yellow")
    }
}
