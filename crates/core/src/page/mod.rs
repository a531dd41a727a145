//! Page controllers: fetch, build view state, hand it to a [`Surface`].

pub mod compare;
pub mod error;
pub mod input;
pub mod result;

use crate::location::Navigation;
use crate::view::{CandlestickSpec, ComparisonView, Notice, SingleResultView, SuggestionList};

pub use compare::ComparePage;
pub use error::PageError;
pub use input::{InputOrchestrator, SearchOutcome};
pub use result::ResultPage;

/// The display a page writes to.
///
/// Every render replaces its region wholesale (clear, then populate) so two renders of the same
/// region never interleave. Methods take `&self`; implementations own their interior locking.
pub trait Surface: Send + Sync {
    fn show_notice(&self, notice: &Notice);

    fn set_loading(&self, loading: bool);

    fn render_single(&self, view: &SingleResultView);

    /// Column headers, taken from the URL before anything is fetched.
    fn set_comparison_headers(&self, symbol_a: &str, symbol_b: &str);

    /// Clears the table body once, then appends every row.
    fn render_comparison(&self, view: &ComparisonView);

    fn render_suggestions(&self, list: &SuggestionList);

    fn set_input_value(&self, value: &str);

    fn navigate(&self, to: &Navigation);
}

/// External chart renderer. Drawing and interaction are entirely its business.
pub trait ChartCollaborator: Send + Sync {
    fn plot_candlestick(&self, spec: &CandlestickSpec) -> anyhow::Result<()>;
}

/// Result of a load that completed without error.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Applied(T),
    /// A later load on the same page claimed the display first; nothing was rendered.
    Superseded,
}

impl<T> Outcome<T> {
    pub fn applied(self) -> Option<T> {
        match self {
            Outcome::Applied(v) => Some(v),
            Outcome::Superseded => None,
        }
    }
}

fn report(surface: &dyn Surface, err: &PageError) {
    if let Some(notice) = err.notice() {
        surface.show_notice(&notice);
    }
}
