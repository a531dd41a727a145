//! In-crate fakes for page and orchestrator tests.

use crate::client::{PredictionClient, SearchClient};
use crate::domain::{ChartSeries, PredictionResult, SuggestionItem};
use crate::location::Navigation;
use crate::page::{ChartCollaborator, Surface};
use crate::view::{
    CandlestickSpec, ComparisonView, Notice, SingleResultView, SuggestionList,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub fn tcs_prediction() -> PredictionResult {
    PredictionResult {
        symbol: "TCS".to_string(),
        latest_price: 3500.0,
        change: 12.0,
        change_pct: 0.34,
        trend_prediction: "UP".to_string(),
        ml_prediction: "UP".to_string(),
        recommendation: "BUY".to_string(),
        confidence: 78.0,
        reason: vec!["r1".to_string()],
        explanation: vec!["e1".to_string()],
        chart: ChartSeries {
            dates: vec!["d1".to_string()],
            open: vec![1.0],
            high: vec![2.0],
            low: vec![0.0],
            close: vec![1.0],
        },
    }
}

/// A neutral prediction for `symbol`.
pub fn prediction(symbol: &str) -> PredictionResult {
    PredictionResult {
        symbol: symbol.to_string(),
        latest_price: 100.0,
        change: -1.0,
        change_pct: -1.0,
        trend_prediction: "DOWN".to_string(),
        ml_prediction: "UP".to_string(),
        recommendation: "HOLD".to_string(),
        confidence: 50.0,
        reason: vec!["Trend and ML prediction are not aligned".to_string()],
        explanation: Vec::new(),
        chart: ChartSeries::default(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    Notice(Notice),
    Loading(bool),
    Single(SingleResultView),
    Headers(String, String),
    Comparison(ComparisonView),
    Suggestions(SuggestionList),
    InputValue(String),
    Navigate(Navigation),
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    events: Mutex<Vec<SurfaceEvent>>,
}

impl RecordingSurface {
    fn push(&self, event: SurfaceEvent) {
        self.events.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events.lock().unwrap().clone()
    }

    fn collect<T>(&self, f: impl Fn(&SurfaceEvent) -> Option<T>) -> Vec<T> {
        self.events.lock().unwrap().iter().filter_map(f).collect()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.collect(|e| match e {
            SurfaceEvent::Notice(n) => Some(n.clone()),
            _ => None,
        })
    }

    pub fn singles(&self) -> Vec<SingleResultView> {
        self.collect(|e| match e {
            SurfaceEvent::Single(v) => Some(v.clone()),
            _ => None,
        })
    }

    pub fn headers(&self) -> Vec<(String, String)> {
        self.collect(|e| match e {
            SurfaceEvent::Headers(a, b) => Some((a.clone(), b.clone())),
            _ => None,
        })
    }

    pub fn comparisons(&self) -> Vec<ComparisonView> {
        self.collect(|e| match e {
            SurfaceEvent::Comparison(v) => Some(v.clone()),
            _ => None,
        })
    }

    pub fn suggestions(&self) -> Vec<SuggestionList> {
        self.collect(|e| match e {
            SurfaceEvent::Suggestions(l) => Some(l.clone()),
            _ => None,
        })
    }

    pub fn navigations(&self) -> Vec<Navigation> {
        self.collect(|e| match e {
            SurfaceEvent::Navigate(n) => Some(n.clone()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn show_notice(&self, notice: &Notice) {
        self.push(SurfaceEvent::Notice(notice.clone()));
    }

    fn set_loading(&self, loading: bool) {
        self.push(SurfaceEvent::Loading(loading));
    }

    fn render_single(&self, view: &SingleResultView) {
        self.push(SurfaceEvent::Single(view.clone()));
    }

    fn set_comparison_headers(&self, symbol_a: &str, symbol_b: &str) {
        self.push(SurfaceEvent::Headers(
            symbol_a.to_string(),
            symbol_b.to_string(),
        ));
    }

    fn render_comparison(&self, view: &ComparisonView) {
        self.push(SurfaceEvent::Comparison(view.clone()));
    }

    fn render_suggestions(&self, list: &SuggestionList) {
        self.push(SurfaceEvent::Suggestions(list.clone()));
    }

    fn set_input_value(&self, value: &str) {
        self.push(SurfaceEvent::InputValue(value.to_string()));
    }

    fn navigate(&self, to: &Navigation) {
        self.push(SurfaceEvent::Navigate(to.clone()));
    }
}

#[derive(Debug, Default)]
pub struct RecordingChart {
    plots: Mutex<Vec<CandlestickSpec>>,
    fail_next: AtomicBool,
}

impl RecordingChart {
    pub fn plots(&self) -> Vec<CandlestickSpec> {
        self.plots.lock().unwrap().clone()
    }

    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }
}

impl ChartCollaborator for RecordingChart {
    fn plot_candlestick(&self, spec: &CandlestickSpec) -> anyhow::Result<()> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            anyhow::bail!("chart backend unavailable");
        }
        self.plots.lock().unwrap().push(spec.clone());
        Ok(())
    }
}

#[derive(Debug, Clone)]
struct Script<T> {
    delay: Duration,
    outcome: Result<T, String>,
}

/// Answers each key after its scripted delay, recording issue and completion order.
#[derive(Debug)]
struct Scripted<T> {
    scripts: HashMap<String, Script<T>>,
    calls: Mutex<Vec<String>>,
    completions: Mutex<Vec<String>>,
}

impl<T: Clone> Scripted<T> {
    fn new() -> Self {
        Self {
            scripts: HashMap::new(),
            calls: Mutex::new(Vec::new()),
            completions: Mutex::new(Vec::new()),
        }
    }

    fn insert(&mut self, key: &str, delay: Duration, outcome: Result<T, String>) {
        self.scripts
            .insert(key.to_string(), Script { delay, outcome });
    }

    async fn answer(&self, key: &str) -> anyhow::Result<T> {
        self.calls.lock().unwrap().push(key.to_string());
        let script = self
            .scripts
            .get(key)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no script for {key}"))?;

        if !script.delay.is_zero() {
            tokio::time::sleep(script.delay).await;
        }
        self.completions.lock().unwrap().push(key.to_string());
        script.outcome.map_err(anyhow::Error::msg)
    }
}

#[derive(Debug)]
pub struct ScriptedPredictionClient {
    inner: Scripted<PredictionResult>,
}

impl ScriptedPredictionClient {
    pub fn new() -> Self {
        Self {
            inner: Scripted::new(),
        }
    }

    pub fn ok(self, symbol: &str, result: PredictionResult) -> Self {
        self.ok_after(symbol, result, Duration::ZERO)
    }

    pub fn ok_after(mut self, symbol: &str, result: PredictionResult, delay: Duration) -> Self {
        self.inner.insert(symbol, delay, Ok(result));
        self
    }

    pub fn fail(self, symbol: &str, message: &str) -> Self {
        self.fail_after(symbol, message, Duration::ZERO)
    }

    pub fn fail_after(mut self, symbol: &str, message: &str, delay: Duration) -> Self {
        self.inner.insert(symbol, delay, Err(message.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.inner.calls.lock().unwrap().clone()
    }

    pub fn completions(&self) -> Vec<String> {
        self.inner.completions.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl PredictionClient for ScriptedPredictionClient {
    async fn fetch_prediction(&self, symbol: &str) -> anyhow::Result<PredictionResult> {
        self.inner.answer(symbol).await
    }
}

#[derive(Debug)]
pub struct ScriptedSearchClient {
    inner: Scripted<Vec<SuggestionItem>>,
}

impl ScriptedSearchClient {
    pub fn new() -> Self {
        Self {
            inner: Scripted::new(),
        }
    }

    pub fn ok(self, query: &str, symbols: &[&str]) -> Self {
        self.ok_after(query, symbols, Duration::ZERO)
    }

    pub fn ok_after(mut self, query: &str, symbols: &[&str], delay: Duration) -> Self {
        let items = symbols
            .iter()
            .map(|s| SuggestionItem::new(*s, ""))
            .collect();
        self.inner.insert(query, delay, Ok(items));
        self
    }

    pub fn fail(mut self, query: &str, message: &str) -> Self {
        self.inner
            .insert(query, Duration::ZERO, Err(message.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.inner.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl SearchClient for ScriptedSearchClient {
    async fn search_symbols(&self, query: &str) -> anyhow::Result<Vec<SuggestionItem>> {
        self.inner.answer(query).await
    }
}
