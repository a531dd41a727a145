pub mod cache;
pub mod error;
pub mod http;

use crate::domain::{PredictionResult, SuggestionItem};

pub use error::{Endpoint, FetchDiagnosticsError};
pub use http::HttpBackendClient;

#[async_trait::async_trait]
pub trait PredictionClient: Send + Sync {
    /// One request per call: no retry, no dedup, no cancellation.
    async fn fetch_prediction(&self, symbol: &str) -> anyhow::Result<PredictionResult>;
}

#[async_trait::async_trait]
pub trait SearchClient: Send + Sync {
    /// Results come back in backend order; ranking is the caller's job.
    async fn search_symbols(&self, query: &str) -> anyhow::Result<Vec<SuggestionItem>>;
}
