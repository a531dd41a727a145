use crate::client::cache;
use crate::client::error::{Endpoint, FetchDiagnosticsError};
use crate::client::{PredictionClient, SearchClient};
use crate::config::Settings;
use crate::domain::contract::{
    into_suggestions, PredictRequest, WireErrorBody, WirePrediction, WireSuggestion,
};
use crate::domain::{PredictionResult, SuggestionItem};
use anyhow::{Context, Result};
use reqwest::{Response, StatusCode};
use std::time::Duration;

const DEFAULT_PREDICT_PATH: &str = "/predict";
const DEFAULT_SEARCH_PATH: &str = "/search";
const CACHE_BUST_PARAM: &str = "nocache";

/// Client for the prediction backend. Implements both [`PredictionClient`] and
/// [`SearchClient`] over one shared connection pool.
#[derive(Debug, Clone)]
pub struct HttpBackendClient {
    http: reqwest::Client,
    base_url: String,
    predict_path: String,
    search_path: String,
}

impl HttpBackendClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let base_url = settings.require_backend_base_url()?.to_string();

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = settings.http_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .context("failed to build backend http client")?;

        let mut client = Self::with_http(http, base_url);
        if let Some(path) = &settings.predict_path {
            client.predict_path = path.clone();
        }
        if let Some(path) = &settings.search_path {
            client.search_path = path.clone();
        }
        Ok(client)
    }

    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .context("failed to build backend http client")?;
        Ok(Self::with_http(http, base_url.into()))
    }

    fn with_http(http: reqwest::Client, base_url: String) -> Self {
        Self {
            http,
            base_url,
            predict_path: DEFAULT_PREDICT_PATH.to_string(),
            search_path: DEFAULT_SEARCH_PATH.to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Reads the body and turns a non-2xx status into diagnostics, keeping the backend's
    /// `{"error": ...}` message when there is one.
    async fn read_body(endpoint: Endpoint, res: Response) -> Result<String> {
        let status = res.status();
        let text = res.text().await.map_err(|e| {
            FetchDiagnosticsError::new(endpoint, "transport", format!("failed to read body: {e}"))
        })?;

        if !status.is_success() {
            return Err(http_error(endpoint, status, text).into());
        }
        Ok(text)
    }
}

fn http_error(endpoint: Endpoint, status: StatusCode, text: String) -> FetchDiagnosticsError {
    let detail = match serde_json::from_str::<WireErrorBody>(&text) {
        Ok(body) => format!("status={status}, error={}", body.error),
        Err(_) => format!("status={status}"),
    };
    FetchDiagnosticsError::new(endpoint, "http", detail).with_raw_body(text)
}

#[async_trait::async_trait]
impl PredictionClient for HttpBackendClient {
    async fn fetch_prediction(&self, symbol: &str) -> Result<PredictionResult> {
        let endpoint = Endpoint::Predict;
        let token = cache::next_token();
        let url = self.url(&self.predict_path);

        tracing::debug!(%symbol, token, "requesting prediction");

        let res = self
            .http
            .post(url)
            .query(&[(CACHE_BUST_PARAM, token.to_string())])
            .json(&PredictRequest { symbol })
            .send()
            .await
            .map_err(|e| FetchDiagnosticsError::new(endpoint, "transport", e.to_string()))?;

        let text = Self::read_body(endpoint, res).await?;

        let wire = serde_json::from_str::<WirePrediction>(&text).map_err(|e| {
            FetchDiagnosticsError::new(endpoint, "decode", e.to_string()).with_raw_body(text.clone())
        })?;

        let result = wire.validate_and_into_result().map_err(|e| {
            FetchDiagnosticsError::new(endpoint, "validate", format!("{e:#}")).with_raw_body(text)
        })?;

        Ok(result)
    }
}

#[async_trait::async_trait]
impl SearchClient for HttpBackendClient {
    async fn search_symbols(&self, query: &str) -> Result<Vec<SuggestionItem>> {
        let endpoint = Endpoint::Search;
        let url = self.url(&self.search_path);

        let res = self
            .http
            .get(url)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| FetchDiagnosticsError::new(endpoint, "transport", e.to_string()))?;

        let text = Self::read_body(endpoint, res).await?;

        let wire = serde_json::from_str::<Vec<WireSuggestion>>(&text).map_err(|e| {
            FetchDiagnosticsError::new(endpoint, "decode", e.to_string()).with_raw_body(text.clone())
        })?;

        Ok(into_suggestions(wire))
    }
}
