use crate::client::PredictionClient;
use crate::location::{QueryParams, SYMBOL_PARAM};
use crate::page::{report, ChartCollaborator, Outcome, PageError, Surface};
use crate::sync::SequenceGate;
use crate::view::SingleResultView;
use std::sync::Arc;

/// `/result?symbol=...`: one prediction, its recommendation and a candlestick chart.
pub struct ResultPage {
    client: Arc<dyn PredictionClient>,
    surface: Arc<dyn Surface>,
    chart: Arc<dyn ChartCollaborator>,
    gate: SequenceGate,
}

impl ResultPage {
    pub fn new(
        client: Arc<dyn PredictionClient>,
        surface: Arc<dyn Surface>,
        chart: Arc<dyn ChartCollaborator>,
    ) -> Self {
        Self {
            client,
            surface,
            chart,
            gate: SequenceGate::new(),
        }
    }

    /// Page start-up: read `symbol` from the URL and load it.
    ///
    /// A missing symbol raises a notice and leaves the page blank but usable.
    pub async fn open(&self, params: &QueryParams) -> Result<Outcome<SingleResultView>, PageError> {
        let [symbol] = match params.require([SYMBOL_PARAM]) {
            Ok(values) => values,
            Err(err) => {
                tracing::warn!(error = %err, "result page opened without a symbol");
                report(self.surface.as_ref(), &err);
                return Err(err);
            }
        };

        self.load(&symbol).await
    }

    pub async fn load(&self, symbol: &str) -> Result<Outcome<SingleResultView>, PageError> {
        let ticket = self.gate.issue();
        self.surface.set_loading(true);

        let fetched = self.client.fetch_prediction(symbol).await;

        if !self.gate.try_apply(ticket) {
            tracing::debug!(%symbol, seq = ticket.seq(), "dropping superseded prediction");
            return Ok(Outcome::Superseded);
        }
        self.surface.set_loading(false);

        let result = match fetched {
            Ok(result) => result,
            Err(source) => {
                let err = PageError::FetchFailed {
                    symbol: symbol.to_string(),
                    source,
                };
                tracing::error!(%symbol, error = %err, "prediction load failed");
                report(self.surface.as_ref(), &err);
                return Err(err);
            }
        };

        let view = SingleResultView::from_result(&result);
        self.surface.render_single(&view);

        if let Err(err) = self.chart.plot_candlestick(&view.chart) {
            tracing::warn!(%symbol, error = %err, "chart rendering failed");
        }

        tracing::info!(
            %symbol,
            recommendation = %view.recommendation_text,
            candles = view.chart.len(),
            "rendered prediction"
        );
        Ok(Outcome::Applied(view))
    }
}
