use crate::domain::{PredictionResult, RecommendationStyle};
use crate::view::chart::CandlestickSpec;
use crate::view::display_number;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeTone {
    Positive,
    Negative,
}

impl ChangeTone {
    pub fn of(change: f64) -> Self {
        if change >= 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Positive => "#4cd137",
            Self::Negative => "#e84118",
        }
    }
}

/// Everything the single-stock page shows for one prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleResultView {
    pub symbol: String,
    pub price_text: String,
    pub change_text: String,
    pub change_tone: ChangeTone,
    pub trend_text: String,
    pub ml_text: String,
    pub recommendation_text: String,
    pub recommendation_style: RecommendationStyle,
    pub confidence_text: String,
    pub reasons: Vec<String>,
    pub explanations: Vec<String>,
    pub chart: CandlestickSpec,
}

impl SingleResultView {
    pub fn from_result(result: &PredictionResult) -> Self {
        Self {
            symbol: result.symbol.clone(),
            price_text: format!("₹ {}", display_number(result.latest_price)),
            change_text: format!(
                "{} ({}%)",
                display_number(result.change),
                display_number(result.change_pct)
            ),
            change_tone: ChangeTone::of(result.change),
            trend_text: format!("Trend (SMA): {}", result.trend_prediction),
            ml_text: format!("ML Prediction: {}", result.ml_prediction),
            recommendation_text: result.recommendation.clone(),
            recommendation_style: result.recommendation_style(),
            confidence_text: display_number(result.confidence),
            reasons: result.reason.clone(),
            explanations: result.explanation.clone(),
            chart: CandlestickSpec::from_series(&result.chart),
        }
    }
}
