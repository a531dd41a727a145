use crate::domain::SuggestionItem;
use crate::rank::rank_suggestions;

/// The dropdown under the search box. Each search replaces it; lists are never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionList {
    pub items: Vec<SuggestionItem>,
}

impl SuggestionList {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_response(query: &str, items: Vec<SuggestionItem>, limit: usize) -> Self {
        let mut items = rank_suggestions(query, items);
        items.truncate(limit);
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&SuggestionItem> {
        self.items.get(idx)
    }
}
