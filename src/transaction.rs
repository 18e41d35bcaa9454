//! Transaction features, sample records, and the raw form buffer.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the six numeric inputs accepted by the scoring service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeatureField {
    Time,
    V1,
    V2,
    V3,
    V4,
    Amount,
}

impl FeatureField {
    /// All fields in wire order.
    pub const ALL: [FeatureField; 6] = [
        FeatureField::Time,
        FeatureField::V1,
        FeatureField::V2,
        FeatureField::V3,
        FeatureField::V4,
        FeatureField::Amount,
    ];

    /// JSON key used by the scoring and catalog services.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Time => "Time",
            Self::V1 => "V1",
            Self::V2 => "V2",
            Self::V3 => "V3",
            Self::V4 => "V4",
            Self::Amount => "Amount",
        }
    }

    /// Label shown above the form input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Time => "Time (seconds)",
            Self::V1 => "V1 Value",
            Self::V2 => "V2 Value",
            Self::V3 => "V3 Value",
            Self::V4 => "V4 Value",
            Self::Amount => "Transaction Amount ($)",
        }
    }

    /// Placeholder text for an empty input.
    pub fn hint(self) -> &'static str {
        match self {
            Self::Time => "Enter time in seconds",
            Self::V1 => "Enter V1 value",
            Self::V2 => "Enter V2 value",
            Self::V3 => "Enter V3 value",
            Self::V4 => "Enter V4 value",
            Self::Amount => "Enter amount",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FeatureField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// A field name outside the six recognized ones.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown transaction field {0:?}")]
pub struct UnknownField(pub String);

impl FromStr for FeatureField {
    type Err = UnknownField;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.wire_name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| UnknownField(name.to_string()))
    }
}

/// The six numeric features sent to the scoring service.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionFeatures {
    #[serde(rename = "Time")]
    pub time: f64,
    #[serde(rename = "V1")]
    pub v1: f64,
    #[serde(rename = "V2")]
    pub v2: f64,
    #[serde(rename = "V3")]
    pub v3: f64,
    #[serde(rename = "V4")]
    pub v4: f64,
    #[serde(rename = "Amount")]
    pub amount: f64,
}

impl TransactionFeatures {
    pub fn get(&self, field: FeatureField) -> f64 {
        match field {
            FeatureField::Time => self.time,
            FeatureField::V1 => self.v1,
            FeatureField::V2 => self.v2,
            FeatureField::V3 => self.v3,
            FeatureField::V4 => self.v4,
            FeatureField::Amount => self.amount,
        }
    }

    fn set(&mut self, field: FeatureField, value: f64) {
        let slot = match field {
            FeatureField::Time => &mut self.time,
            FeatureField::V1 => &mut self.v1,
            FeatureField::V2 => &mut self.v2,
            FeatureField::V3 => &mut self.v3,
            FeatureField::V4 => &mut self.v4,
            FeatureField::Amount => &mut self.amount,
        };
        *slot = value;
    }

    fn zeroed() -> Self {
        Self {
            time: 0.0,
            v1: 0.0,
            v2: 0.0,
            v3: 0.0,
            v4: 0.0,
            amount: 0.0,
        }
    }
}

/// Known label of a historical transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TransactionClass {
    Legitimate,
    Fraud,
}

impl TryFrom<u8> for TransactionClass {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Legitimate),
            1 => Ok(Self::Fraud),
            other => Err(format!("class must be 0 or 1, got {other}")),
        }
    }
}

impl From<TransactionClass> for u8 {
    fn from(class: TransactionClass) -> Self {
        match class {
            TransactionClass::Legitimate => 0,
            TransactionClass::Fraud => 1,
        }
    }
}

/// A labelled historical transaction from the sample catalog.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleTransaction {
    #[serde(flatten)]
    pub features: TransactionFeatures,
    #[serde(rename = "Class")]
    pub class: TransactionClass,
}

impl SampleTransaction {
    /// Drop the label, keeping only what the scoring service accepts.
    pub fn features(&self) -> TransactionFeatures {
        self.features
    }
}

/// Human-readable descriptions keyed by field or field-group name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldExplanations(BTreeMap<String, String>);

impl FieldExplanations {
    const LEADING_KEYS: [&'static str; 3] = ["Time", "V1-V4", "Amount"];

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries with `Time`, `V1-V4`, `Amount` first and the rest by name.
    pub fn in_display_order(&self) -> Vec<(&str, &str)> {
        let leading = Self::LEADING_KEYS
            .iter()
            .filter_map(|key| self.0.get_key_value(*key));
        let rest = self
            .0
            .iter()
            .filter(|(key, _)| !Self::LEADING_KEYS.contains(&key.as_str()));
        leading
            .chain(rest)
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect()
    }
}

impl FromIterator<(String, String)> for FieldExplanations {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Binary scoring outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Fraud,
    Legitimate,
}

impl Verdict {
    /// Map the service's `prediction` field.
    pub fn from_prediction(prediction: i64) -> Option<Self> {
        match prediction {
            0 => Some(Self::Legitimate),
            1 => Some(Self::Fraud),
            _ => None,
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Self::Fraud => "Potential Fraud Detected",
            Self::Legitimate => "Transaction Appears Legitimate",
        }
    }
}

/// Format a probability in `[0, 1]` as a percentage with two decimals.
pub fn format_probability(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

/// Format a feature value the way it is written back into the form.
pub fn format_feature(value: f64) -> String {
    value.to_string()
}

/// A form field that did not hold a finite number at submit time.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid input")]
pub struct InvalidInput {
    /// First offending field.
    pub field: FeatureField,
}

/// Raw text of the six form inputs, kept exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    values: [String; 6],
}

impl FormFields {
    pub fn get(&self, field: FeatureField) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: FeatureField, raw: impl Into<String>) {
        self.values[field.index()] = raw.into();
    }

    /// Overwrite every field with the given values.
    pub fn fill_from(&mut self, features: &TransactionFeatures) {
        for field in FeatureField::ALL {
            self.set(field, format_feature(features.get(field)));
        }
    }

    /// Parse every field as a finite number.
    pub fn parse(&self) -> Result<TransactionFeatures, InvalidInput> {
        let mut features = TransactionFeatures::zeroed();
        for field in FeatureField::ALL {
            let value = self
                .get(field)
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or(InvalidInput { field })?;
            features.set(field, value);
        }
        Ok(features)
    }
}
