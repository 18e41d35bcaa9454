//! Helpers to convert controller data into egui-facing view structs.

use crate::transaction::{
    FieldExplanations, SampleTransaction, TransactionClass, format_feature,
};

/// One catalog row with every cell already formatted.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleRowView {
    pub time: String,
    pub amount: String,
    pub v: [String; 4],
    pub fraud: bool,
}

pub fn sample_row(sample: &SampleTransaction) -> SampleRowView {
    let features = sample.features();
    SampleRowView {
        time: format_feature(features.time),
        amount: format!("${}", format_feature(features.amount)),
        v: [features.v1, features.v2, features.v3, features.v4].map(format_feature),
        fraud: sample.class == TransactionClass::Fraud,
    }
}

/// Explanation lines in display order, as `"<key>: <text>"`.
pub fn explanation_lines(explanations: &FieldExplanations) -> Vec<String> {
    explanations
        .in_display_order()
        .into_iter()
        .map(|(key, text)| format!("{key}: {text}"))
        .collect()
}
