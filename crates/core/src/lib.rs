pub mod client;
pub mod domain;
pub mod location;
pub mod page;
pub mod rank;
pub mod sync;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub mod config {
    use anyhow::Context;
    use std::time::Duration;

    const DEFAULT_MIN_QUERY_CHARS: usize = 2;
    const DEFAULT_SUGGESTION_LIMIT: usize = 5;
    const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 150;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub backend_base_url: Option<String>,
        pub sentry_dsn: Option<String>,
        pub http_timeout_secs: Option<u64>,
        pub predict_path: Option<String>,
        pub search_path: Option<String>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Ok(Self {
                backend_base_url: std::env::var("STOCKVIEW_BACKEND_URL").ok(),
                sentry_dsn: std::env::var("SENTRY_DSN").ok(),
                http_timeout_secs: std::env::var("STOCKVIEW_HTTP_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse::<u64>().ok()),
                predict_path: non_blank_env("STOCKVIEW_PREDICT_PATH"),
                search_path: non_blank_env("STOCKVIEW_SEARCH_PATH"),
            })
        }

        pub fn require_backend_base_url(&self) -> anyhow::Result<&str> {
            self.backend_base_url
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .context("STOCKVIEW_BACKEND_URL is required")
        }
    }

    /// Tuning for the search box: when a keystroke is worth a network call and how many
    /// suggestions are shown.
    #[derive(Debug, Clone)]
    pub struct InputOptions {
        /// Trimmed queries shorter than this clear the list without searching.
        pub min_query_chars: usize,

        /// Number of ranked suggestions rendered.
        pub suggestion_limit: usize,

        /// Quiet period after a keystroke before the search is issued. Zero disables it.
        pub search_debounce: Duration,
    }

    impl Default for InputOptions {
        fn default() -> Self {
            Self {
                min_query_chars: DEFAULT_MIN_QUERY_CHARS,
                suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
                search_debounce: Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS),
            }
        }
    }

    impl InputOptions {
        pub fn from_env() -> Self {
            let mut out = Self::default();

            if let Ok(s) = std::env::var("STOCKVIEW_SEARCH_MIN_CHARS") {
                if let Ok(n) = s.parse::<usize>() {
                    out.min_query_chars = n;
                }
            }

            if let Ok(s) = std::env::var("STOCKVIEW_SUGGESTION_LIMIT") {
                if let Ok(n) = s.parse::<usize>() {
                    out.suggestion_limit = n;
                }
            }

            if let Ok(s) = std::env::var("STOCKVIEW_SEARCH_DEBOUNCE_MS") {
                if let Ok(n) = s.parse::<u64>() {
                    out.search_debounce = Duration::from_millis(n);
                }
            }

            out
        }
    }

    fn non_blank_env(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.trim().is_empty())
    }
}
