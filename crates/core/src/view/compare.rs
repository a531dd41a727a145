use crate::domain::PredictionResult;
use crate::view::display_number;

pub const COMPARISON_LABELS: [&str; 5] = [
    "Latest Price",
    "Trend (SMA)",
    "ML Prediction",
    "Recommendation",
    "Confidence (%)",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    pub label: &'static str,
    pub value_a: String,
    pub value_b: String,
}

/// Side-by-side table. Column A always holds the first symbol's values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonView {
    pub symbol_a: String,
    pub symbol_b: String,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonView {
    pub fn from_results(a: &PredictionResult, b: &PredictionResult) -> Self {
        let values_a = row_values(a);
        let values_b = row_values(b);

        let rows = COMPARISON_LABELS
            .into_iter()
            .zip(values_a.into_iter().zip(values_b))
            .map(|(label, (value_a, value_b))| ComparisonRow {
                label,
                value_a,
                value_b,
            })
            .collect();

        Self {
            symbol_a: a.symbol.clone(),
            symbol_b: b.symbol.clone(),
            rows,
        }
    }
}

// Same order as COMPARISON_LABELS.
fn row_values(r: &PredictionResult) -> [String; 5] {
    [
        display_number(r.latest_price),
        r.trend_prediction.clone(),
        r.ml_prediction.clone(),
        r.recommendation.clone(),
        display_number(r.confidence),
    ]
}
