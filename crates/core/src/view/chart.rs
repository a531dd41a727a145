use crate::domain::ChartSeries;

pub const INCREASING_COLOR: &str = "#26a69a";
pub const DECREASING_COLOR: &str = "#ef5350";
pub const MARGIN_TOP: u32 = 30;

/// Everything the charting collaborator needs to draw one candlestick trace.
///
/// Candle colors are fixed; they never depend on the data.
#[derive(Debug, Clone, PartialEq)]
pub struct CandlestickSpec {
    pub dates: Vec<String>,
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
    pub increasing_color: &'static str,
    pub decreasing_color: &'static str,
    pub margin_top: u32,
}

impl CandlestickSpec {
    pub fn from_series(series: &ChartSeries) -> Self {
        Self {
            dates: series.dates.clone(),
            open: series.open.clone(),
            high: series.high.clone(),
            low: series.low.clone(),
            close: series.close.clone(),
            increasing_color: INCREASING_COLOR,
            decreasing_color: DECREASING_COLOR,
            margin_top: MARGIN_TOP,
        }
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// True when the candle at `idx` closed at or above its open.
    pub fn is_increasing(&self, idx: usize) -> Option<bool> {
        Some(self.close.get(idx)? >= self.open.get(idx)?)
    }
}
