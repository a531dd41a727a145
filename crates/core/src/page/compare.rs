use crate::client::PredictionClient;
use crate::location::{QueryParams, COMPARE_A_PARAM, COMPARE_B_PARAM};
use crate::page::{report, Outcome, PageError, Surface};
use crate::sync::{join_both, JoinFailure, SequenceGate, Side};
use crate::view::ComparisonView;
use std::sync::Arc;

/// `/compare?A=...&B=...`: two predictions in one fixed table.
pub struct ComparePage {
    client: Arc<dyn PredictionClient>,
    surface: Arc<dyn Surface>,
    gate: SequenceGate,
}

impl ComparePage {
    pub fn new(client: Arc<dyn PredictionClient>, surface: Arc<dyn Surface>) -> Self {
        Self {
            client,
            surface,
            gate: SequenceGate::new(),
        }
    }

    /// Page start-up. Headers come straight from the URL, even when one is missing.
    pub async fn open(&self, params: &QueryParams) -> Result<Outcome<ComparisonView>, PageError> {
        self.surface.set_comparison_headers(
            params.get(COMPARE_A_PARAM).unwrap_or_default(),
            params.get(COMPARE_B_PARAM).unwrap_or_default(),
        );

        let [a, b] = match params.require([COMPARE_A_PARAM, COMPARE_B_PARAM]) {
            Ok(values) => values,
            Err(err) => {
                tracing::warn!(error = %err, "compare page opened without both symbols");
                report(self.surface.as_ref(), &err);
                return Err(err);
            }
        };

        self.load(&a, &b).await
    }

    /// Fetches both sides concurrently and renders only if both succeed.
    pub async fn load(&self, a: &str, b: &str) -> Result<Outcome<ComparisonView>, PageError> {
        let ticket = self.gate.issue();
        self.surface.set_loading(true);

        let joined = join_both(
            self.client.fetch_prediction(a),
            self.client.fetch_prediction(b),
        )
        .await;

        if !self.gate.try_apply(ticket) {
            tracing::debug!(%a, %b, seq = ticket.seq(), "dropping superseded comparison");
            return Ok(Outcome::Superseded);
        }
        self.surface.set_loading(false);

        let (result_a, result_b) = match joined {
            Ok(results) => results,
            Err(JoinFailure { side, error }) => {
                let symbol = match side {
                    Side::A => a,
                    Side::B => b,
                };
                let err = PageError::PartialComparisonFailure {
                    side,
                    symbol: symbol.to_string(),
                    source: error,
                };
                tracing::error!(%a, %b, error = %err, "comparison load failed");
                report(self.surface.as_ref(), &err);
                return Err(err);
            }
        };

        let view = ComparisonView::from_results(&result_a, &result_b);
        self.surface.render_comparison(&view);

        tracing::info!(%a, %b, rows = view.rows.len(), "rendered comparison");
        Ok(Outcome::Applied(view))
    }
}
