use crate::location::SYMBOL_PARAM;
use crate::sync::Side;
use crate::view::notice::{
    Notice, NoticeKind, COMPARISON_LOAD_FAILED_MESSAGE, MISSING_PAIR_MESSAGE, NO_SYMBOL_MESSAGE,
    STOCK_LOAD_FAILED_MESSAGE,
};
use std::fmt;

/// Everything that can go wrong on a page. None of these are fatal: the page stays usable.
#[derive(Debug)]
pub enum PageError {
    /// Required URL parameters were absent or empty.
    MissingInput { params: Vec<&'static str> },

    /// The single-stock fetch failed in transport, status, decode or validation.
    FetchFailed {
        symbol: String,
        source: anyhow::Error,
    },

    /// One side of a comparison failed, so the whole comparison is dropped.
    PartialComparisonFailure {
        side: Side,
        symbol: String,
        source: anyhow::Error,
    },

    /// Search failures are logged only.
    SearchFailed {
        query: String,
        source: anyhow::Error,
    },

    /// The search form was submitted blank.
    EmptyInput { message: &'static str },
}

impl PageError {
    /// What the user sees, or `None` for failures that stay in the logs.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            PageError::MissingInput { params } => {
                let message = if params.contains(&SYMBOL_PARAM) {
                    NO_SYMBOL_MESSAGE
                } else {
                    MISSING_PAIR_MESSAGE
                };
                Some(Notice::alert(NoticeKind::MissingInput, message))
            }
            PageError::FetchFailed { .. } => Some(Notice::alert(
                NoticeKind::FetchFailed,
                STOCK_LOAD_FAILED_MESSAGE,
            )),
            PageError::PartialComparisonFailure { .. } => Some(Notice::alert(
                NoticeKind::FetchFailed,
                COMPARISON_LOAD_FAILED_MESSAGE,
            )),
            PageError::SearchFailed { .. } => None,
            PageError::EmptyInput { message } => {
                Some(Notice::banner(NoticeKind::EmptyInput, *message))
            }
        }
    }
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::MissingInput { params } => {
                write!(f, "missing URL parameter(s): {}", params.join(", "))
            }
            PageError::FetchFailed { symbol, source } => {
                write!(f, "failed to load prediction for {symbol}: {source:#}")
            }
            PageError::PartialComparisonFailure {
                side,
                symbol,
                source,
            } => write!(
                f,
                "comparison aborted, side {side} ({symbol}) failed: {source:#}"
            ),
            PageError::SearchFailed { query, source } => {
                write!(f, "search for {query:?} failed: {source:#}")
            }
            PageError::EmptyInput { message } => f.write_str(message),
        }
    }
}

impl std::error::Error for PageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PageError::FetchFailed { source, .. }
            | PageError::PartialComparisonFailure { source, .. }
            | PageError::SearchFailed { source, .. } => Some(&**source),
            PageError::MissingInput { .. } | PageError::EmptyInput { .. } => None,
        }
    }
}
