use super::*;
use crate::scoring::{Prediction, ScoringError};
use crate::transaction::{FeatureField, SampleTransaction, TransactionFeatures};

impl EguiController {
    /// Store the raw text typed into `field`.
    pub fn update_field(&mut self, field: FeatureField, raw: impl Into<String>) {
        self.ui.form.set(field, raw);
    }

    /// The last raw text written to `field`.
    pub fn field(&self, field: FeatureField) -> &str {
        self.ui.form.get(field)
    }

    /// Copy a catalog sample into the form, replacing all six fields.
    pub fn apply_sample(&mut self, sample: &SampleTransaction) {
        self.apply_features(&sample.features());
    }

    pub fn apply_features(&mut self, features: &TransactionFeatures) {
        self.ui.form.fill_from(features);
    }

    pub fn outcome(&self) -> &SubmissionOutcome {
        &self.ui.outcome
    }

    /// Validate the form and send it for scoring.
    ///
    /// Ignored while a request is pending. Invalid input fails without a request.
    pub fn submit(&mut self) {
        if self.ui.outcome.is_pending() || self.jobs.scoring_in_progress() {
            return;
        }
        let features = match self.ui.form.parse() {
            Ok(features) => features,
            Err(err) => {
                tracing::info!(field = %err.field, "Rejected submission with invalid input");
                self.ui.outcome = SubmissionOutcome::Failed(err.to_string());
                self.set_status("Every field needs a number", StatusTone::Warning);
                return;
            }
        };
        let Some((request_id, _handle)) = self.jobs.begin_scoring(features) else {
            return;
        };
        tracing::debug!(request_id, "Submitted transaction for scoring");
        self.ui.outcome = SubmissionOutcome::Pending;
        self.set_status("Analyzing transaction...", StatusTone::Busy);
    }

    pub(super) fn handle_score_result(
        &mut self,
        request_id: u64,
        result: Result<Prediction, ScoringError>,
    ) {
        if !self.jobs.finish_scoring(request_id) {
            tracing::debug!(request_id, "Ignoring stale scoring result");
            return;
        }
        match result {
            Ok(prediction) => {
                tracing::info!(
                    verdict = ?prediction.verdict,
                    probability = prediction.fraud_probability,
                    "Transaction scored"
                );
                self.ui.outcome = SubmissionOutcome::Succeeded {
                    verdict: prediction.verdict,
                    probability: prediction.fraud_probability,
                };
                self.set_status("Analysis complete", StatusTone::Info);
            }
            Err(err) => {
                tracing::warn!(error = %err, "Scoring request failed");
                self.ui.outcome = SubmissionOutcome::Failed(err.failure_message());
                self.set_status("Analysis failed", StatusTone::Error);
            }
        }
    }
}
