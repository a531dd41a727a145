use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Predict,
    Search,
}

#[derive(Debug, Clone)]
pub struct FetchDiagnosticsError {
    pub endpoint: Endpoint,
    pub stage: &'static str,
    pub detail: String,
    pub raw_body: Option<String>,
}

impl FetchDiagnosticsError {
    pub(crate) fn new(endpoint: Endpoint, stage: &'static str, detail: impl Into<String>) -> Self {
        Self {
            endpoint,
            stage,
            detail: detail.into(),
            raw_body: None,
        }
    }

    pub(crate) fn with_raw_body(mut self, body: String) -> Self {
        self.raw_body = Some(body);
        self
    }
}

impl fmt::Display for FetchDiagnosticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "backend error (endpoint={:?}, stage={}): {}",
            self.endpoint, self.stage, self.detail
        )
    }
}

impl std::error::Error for FetchDiagnosticsError {}
