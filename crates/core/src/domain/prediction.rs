use serde::{Deserialize, Serialize};

/// One prediction as served by the backend, after boundary validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
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
    pub chart: ChartSeries,
}

impl PredictionResult {
    pub fn recommendation_style(&self) -> RecommendationStyle {
        RecommendationStyle::classify(&self.recommendation)
    }
}

/// Daily OHLC candles as parallel sequences. Every sequence has `dates.len()` entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub dates: Vec<String>,
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationStyle {
    Buy,
    Sell,
    Hold,
}

impl RecommendationStyle {
    /// "BUY" wins over "SELL"; anything else is a hold.
    pub fn classify(recommendation: &str) -> Self {
        if recommendation.contains("BUY") {
            Self::Buy
        } else if recommendation.contains("SELL") {
            Self::Sell
        } else {
            Self::Hold
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::Hold => "hold",
        }
    }
}
