use crate::domain::SuggestionItem;

/// Moves suggestions whose symbol starts with the upper-cased query to the front.
///
/// `sort_by_key` is a stable sort, so each partition keeps the order the backend delivered.
pub fn rank_suggestions(query: &str, mut items: Vec<SuggestionItem>) -> Vec<SuggestionItem> {
    let prefix = query.to_uppercase();
    items.sort_by_key(|item| !item.symbol.starts_with(&prefix));
    items
}
