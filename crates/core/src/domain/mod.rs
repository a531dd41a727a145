pub mod contract;
pub mod prediction;
pub mod suggestion;

pub use prediction::{ChartSeries, PredictionResult, RecommendationStyle};
pub use suggestion::SuggestionItem;
