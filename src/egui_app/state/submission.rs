use crate::transaction::{Verdict, format_probability};

/// Result of the most recent scoring request.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmissionOutcome {
    /// Nothing submitted yet.
    #[default]
    Unset,
    /// A scoring request is in flight.
    Pending,
    Succeeded { verdict: Verdict, probability: f64 },
    Failed(String),
}

impl SubmissionOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Probability as shown to the user, e.g. `"87.00%"`.
    pub fn probability_label(&self) -> Option<String> {
        match self {
            Self::Succeeded { probability, .. } => Some(format_probability(*probability)),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
