use std::time::Duration;

pub const NO_SYMBOL_MESSAGE: &str = "No stock symbol provided";
pub const MISSING_PAIR_MESSAGE: &str = "Stock symbols missing in URL";
pub const STOCK_LOAD_FAILED_MESSAGE: &str = "Error loading stock data";
pub const COMPARISON_LOAD_FAILED_MESSAGE: &str = "Error loading comparison data";
pub const ENTER_SYMBOL_MESSAGE: &str = "Please enter a stock symbol";
pub const ENTER_FIRST_SYMBOL_MESSAGE: &str = "Enter first stock symbol";

/// How long the search form keeps its inline banner up.
pub const BANNER_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    MissingInput,
    FetchFailed,
    EmptyInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeStyle {
    /// Modal, stays until dismissed.
    Alert,
    /// Inline, hides itself after `ttl`.
    Banner { ttl: Duration },
}

/// A user-visible, dismissible message. None of them end the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub style: NoticeStyle,
    pub message: String,
}

impl Notice {
    pub fn alert(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            style: NoticeStyle::Alert,
            message: message.into(),
        }
    }

    pub fn banner(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            style: NoticeStyle::Banner { ttl: BANNER_TTL },
            message: message.into(),
        }
    }
}
