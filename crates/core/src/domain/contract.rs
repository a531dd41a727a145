use crate::domain::prediction::{ChartSeries, PredictionResult};
use crate::domain::suggestion::SuggestionItem;
use anyhow::ensure;
use serde::{Deserialize, Serialize};

/// `POST /predict` request body.
#[derive(Debug, Clone, Serialize)]
pub struct PredictRequest<'a> {
    pub symbol: &'a str,
}

/// `POST /predict` response body as it comes off the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WirePrediction {
    pub symbol: String,
    pub latest_price: f64,
    pub change: f64,
    pub change_pct: f64,
    pub trend_prediction: String,
    pub ml_prediction: String,
    pub recommendation: String,
    pub confidence: f64,
    pub reason: Vec<String>,
    pub explanation: Vec<String>,
    pub chart: WireChart,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireChart {
    pub dates: Vec<String>,
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
}

/// Error body the backend sends alongside a 4xx, e.g. `{"error": "Data not available"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct WireErrorBody {
    pub error: String,
}

/// One `GET /search` entry. The backend may send `null` for a missing short name.
#[derive(Debug, Clone, Deserialize)]
pub struct WireSuggestion {
    pub symbol: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl WirePrediction {
    pub fn validate_and_into_result(self) -> anyhow::Result<PredictionResult> {
        let symbol = self.symbol.trim().to_string();
        ensure!(!symbol.is_empty(), "symbol must be non-empty");

        for (field, value) in [
            ("latest_price", self.latest_price),
            ("change", self.change),
            ("change_pct", self.change_pct),
            ("confidence", self.confidence),
        ] {
            ensure!(value.is_finite(), "{field} must be a finite number (got {value})");
        }

        let chart = self.chart.validate_and_into_series()?;

        Ok(PredictionResult {
            symbol,
            latest_price: self.latest_price,
            change: self.change,
            change_pct: self.change_pct,
            trend_prediction: self.trend_prediction,
            ml_prediction: self.ml_prediction,
            recommendation: self.recommendation,
            confidence: self.confidence,
            reason: self.reason,
            explanation: self.explanation,
            chart,
        })
    }
}

impl WireChart {
    fn validate_and_into_series(self) -> anyhow::Result<ChartSeries> {
        let n = self.dates.len();
        for (field, len) in [
            ("open", self.open.len()),
            ("high", self.high.len()),
            ("low", self.low.len()),
            ("close", self.close.len()),
        ] {
            ensure!(
                len == n,
                "chart.{field} has {len} entries but chart.dates has {n}"
            );
        }

        Ok(ChartSeries {
            dates: self.dates,
            open: self.open,
            high: self.high,
            low: self.low,
            close: self.close,
        })
    }
}

/// Drops entries without a usable symbol; the rest keep their delivered order.
pub fn into_suggestions(items: Vec<WireSuggestion>) -> Vec<SuggestionItem> {
    items
        .into_iter()
        .filter_map(|item| {
            let symbol = item.symbol?.trim().to_string();
            if symbol.is_empty() {
                return None;
            }
            Some(SuggestionItem {
                symbol,
                name: item.name.unwrap_or_default(),
            })
        })
        .collect()
}
