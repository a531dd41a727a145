//! Pure projections from fetch results to what a page shows.
//!
//! Nothing here touches a display; [`crate::page::Surface`] applies these values.

pub mod chart;
pub mod compare;
pub mod notice;
pub mod single;
pub mod suggest;

pub use chart::CandlestickSpec;
pub use compare::{ComparisonRow, ComparisonView, COMPARISON_LABELS};
pub use notice::{Notice, NoticeKind, NoticeStyle};
pub use single::{ChangeTone, SingleResultView};
pub use suggest::SuggestionList;

/// Prints a number the way the page does: whole values without a fractional part, no `-0`.
pub fn display_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}
