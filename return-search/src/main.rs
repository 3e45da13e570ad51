//! Bootstrap binary for the return-reason search module.
//!
//! Loads environment configuration, verifies the OpenSearch cluster is
//! reachable and ensures the return-reason index exists with its mappings.
//! Intended to run at deploy time, before the embedding application starts
//! serving searches or handling write events.

use tracing::info;

use return_search::ReturnSearchError;

#[tokio::main]
async fn main() -> Result<(), ReturnSearchError> {
    dotenv::dotenv().ok();
    return_search::init_tracing();

    info!("Starting return-reason search bootstrap");

    return_search::config::init_engine().await?;

    info!("Return-reason index ready");
    Ok(())
}
