use crate::client::SearchClient;
use crate::config::InputOptions;
use crate::domain::SuggestionItem;
use crate::location::Navigation;
use crate::page::{report, PageError, Surface};
use crate::sync::SequenceGate;
use crate::view::notice::{ENTER_FIRST_SYMBOL_MESSAGE, ENTER_SYMBOL_MESSAGE};
use crate::view::SuggestionList;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Query too short; the list was cleared without a network call.
    Cleared,
    Rendered(SuggestionList),
    /// Search failed; an empty list was shown.
    Failed,
    /// A newer keystroke owns the list; this one changed nothing.
    Superseded,
}

/// Search box behaviour on the home page: suggestions while typing, and the two buttons that
/// navigate away.
pub struct InputOrchestrator {
    search: Arc<dyn SearchClient>,
    surface: Arc<dyn Surface>,
    gate: SequenceGate,
    options: InputOptions,
}

impl InputOrchestrator {
    pub fn new(
        search: Arc<dyn SearchClient>,
        surface: Arc<dyn Surface>,
        options: InputOptions,
    ) -> Self {
        Self {
            search,
            surface,
            gate: SequenceGate::new(),
            options,
        }
    }

    /// Handles the input box's value after a keystroke.
    ///
    /// Overlapping calls are expected. Each takes a ticket up front and only the most recently
    /// issued ticket may change the list; every older response is dropped, early or late.
    pub async fn on_input(&self, raw: &str) -> SearchOutcome {
        let query = raw.trim();
        let ticket = self.gate.issue();

        if query.chars().count() < self.options.min_query_chars {
            if !self.gate.try_apply(ticket) {
                return SearchOutcome::Superseded;
            }
            self.surface.render_suggestions(&SuggestionList::empty());
            return SearchOutcome::Cleared;
        }

        if !self.options.search_debounce.is_zero() {
            tokio::time::sleep(self.options.search_debounce).await;
            if !self.gate.is_latest(ticket) {
                return SearchOutcome::Superseded;
            }
        }

        let fetched = self.search.search_symbols(query).await;

        if !self.gate.try_apply(ticket) {
            tracing::debug!(%query, seq = ticket.seq(), "dropping superseded search response");
            return SearchOutcome::Superseded;
        }

        match fetched {
            Ok(items) => {
                let list = SuggestionList::from_response(query, items, self.options.suggestion_limit);
                self.surface.render_suggestions(&list);
                SearchOutcome::Rendered(list)
            }
            Err(source) => {
                let err = PageError::SearchFailed {
                    query: query.to_string(),
                    source,
                };
                tracing::warn!(error = %err, "search failed; showing no suggestions");
                self.surface.render_suggestions(&SuggestionList::empty());
                SearchOutcome::Failed
            }
        }
    }

    /// A suggestion was clicked: it becomes the input value and the list closes.
    pub fn on_pick(&self, item: &SuggestionItem) {
        self.gate.invalidate();
        self.surface.set_input_value(&item.symbol);
        self.surface.render_suggestions(&SuggestionList::empty());
    }

    /// A click outside the input closes the list.
    pub fn on_dismiss(&self) {
        self.gate.invalidate();
        self.surface.render_suggestions(&SuggestionList::empty());
    }

    /// Form submission: go to the single-stock page.
    pub fn on_submit(&self, raw: &str) -> Result<Navigation, PageError> {
        let symbol = raw.trim();
        if symbol.is_empty() {
            let err = PageError::EmptyInput {
                message: ENTER_SYMBOL_MESSAGE,
            };
            report(self.surface.as_ref(), &err);
            return Err(err);
        }

        let nav = Navigation::Result {
            symbol: symbol.to_string(),
        };
        self.gate.invalidate();
        self.surface.navigate(&nav);
        Ok(nav)
    }

    /// Compare button. `second` is the answer to the "second symbol" prompt; `None` or blank
    /// means the prompt was cancelled, which is not an error.
    pub fn on_compare(
        &self,
        raw_first: &str,
        second: Option<&str>,
    ) -> Result<Option<Navigation>, PageError> {
        let first = raw_first.trim();
        if first.is_empty() {
            let err = PageError::EmptyInput {
                message: ENTER_FIRST_SYMBOL_MESSAGE,
            };
            report(self.surface.as_ref(), &err);
            return Err(err);
        }

        let Some(second) = second.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(None);
        };

        let nav = Navigation::Compare {
            a: first.to_string(),
            b: second.to_string(),
        };
        self.gate.invalidate();
        self.surface.navigate(&nav);
        Ok(Some(nav))
    }
}
