use comfy_table::Table;
use std::sync::Mutex;
use stockview_core::domain::SuggestionItem;
use stockview_core::location::Navigation;
use stockview_core::page::Surface;
use stockview_core::view::{
    ChangeTone, ComparisonView, Notice, NoticeStyle, SingleResultView, SuggestionList,
};

#[derive(Debug, Default)]
struct TerminalState {
    input_value: String,
    suggestions: SuggestionList,
    headers: (String, String),
}

/// Prints page updates to stdout. Diagnostics go to stderr through `tracing`.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    state: Mutex<TerminalState>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut TerminalState) -> T) -> T {
        let mut guard = match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut guard)
    }

    pub fn input_value(&self) -> String {
        self.with_state(|s| s.input_value.clone())
    }

    /// Records what the user typed without echoing it back.
    pub fn type_input(&self, value: &str) {
        self.with_state(|s| s.input_value = value.to_string());
    }

    /// One-based, as printed in the suggestion table.
    pub fn suggestion(&self, n: usize) -> Option<SuggestionItem> {
        let idx = n.checked_sub(1)?;
        self.with_state(|s| s.suggestions.get(idx).cloned())
    }
}

impl Surface for TerminalSurface {
    fn show_notice(&self, notice: &Notice) {
        match notice.style {
            NoticeStyle::Alert => println!("[alert] {}", notice.message),
            NoticeStyle::Banner { ttl } => {
                println!("[notice] {} (hides after {}s)", notice.message, ttl.as_secs())
            }
        }
    }

    fn set_loading(&self, loading: bool) {
        if loading {
            println!("loading...");
        }
    }

    fn render_single(&self, view: &SingleResultView) {
        let arrow = match view.change_tone {
            ChangeTone::Positive => "▲",
            ChangeTone::Negative => "▼",
        };

        println!();
        println!("{}  {}  {arrow} {}", view.symbol, view.price_text, view.change_text);
        println!("{}", view.trend_text);
        println!("{}", view.ml_text);
        println!(
            "Recommendation: {} [{}]  confidence {}",
            view.recommendation_text,
            view.recommendation_style.css_class(),
            view.confidence_text
        );

        println!("Reasons:");
        for (i, reason) in view.reasons.iter().enumerate() {
            println!("  {}. {reason}", i + 1);
        }
        println!("Explanation:");
        for (i, line) in view.explanations.iter().enumerate() {
            println!("  {}. {line}", i + 1);
        }
    }

    fn set_comparison_headers(&self, symbol_a: &str, symbol_b: &str) {
        self.with_state(|s| s.headers = (symbol_a.to_string(), symbol_b.to_string()));
    }

    fn render_comparison(&self, view: &ComparisonView) {
        let (a, b) = self.with_state(|s| s.headers.clone());

        let mut table = Table::new();
        table.set_header(vec!["".to_string(), a, b]);
        for row in &view.rows {
            table.add_row(vec![row.label, row.value_a.as_str(), row.value_b.as_str()]);
        }
        println!("{table}");
    }

    fn render_suggestions(&self, list: &SuggestionList) {
        let was_open = self.with_state(|s| {
            let was_open = !s.suggestions.is_empty();
            s.suggestions = list.clone();
            was_open
        });

        if list.is_empty() {
            if was_open {
                println!("(suggestions closed)");
            }
            return;
        }

        let mut table = Table::new();
        table.set_header(vec!["#", "Symbol", "Name"]);
        for (i, item) in list.items.iter().enumerate() {
            table.add_row(vec![(i + 1).to_string(), item.symbol.clone(), item.name.clone()]);
        }
        println!("{table}");
    }

    fn set_input_value(&self, value: &str) {
        self.type_input(value);
        println!("input: {value}");
    }

    fn navigate(&self, to: &Navigation) {
        println!("-> {}", to.location());
    }
}
