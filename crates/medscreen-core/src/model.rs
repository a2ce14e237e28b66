use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Low/Normal/High bucket for a reading, relative to its metric's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Low,
    Normal,
    High,
}

impl Classification {
    pub fn is_abnormal(&self) -> bool {
        !matches!(self, Classification::Normal)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Low => write!(f, "Low"),
            Classification::Normal => write!(f, "Normal"),
            Classification::High => write!(f, "High"),
        }
    }
}

/// Result of one match attempt for one metric.
///
/// `ParseFailed` is kept distinct from `NotFound` so downstream fallback
/// logic works from an explicit tally rather than list emptiness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MatchOutcome {
    /// A numeric token followed the metric name and parsed cleanly.
    Matched { value: Decimal },
    /// The metric name was absent, or no number followed it.
    NotFound,
    /// A numeric token was found but did not parse (e.g. digit overflow).
    ParseFailed { token: String },
}

/// One metric's match attempt against a report text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricOutcome {
    /// Metric name as defined in the reference table.
    pub metric: String,
    /// Display unit from the reference table (possibly empty).
    pub unit: String,
    pub outcome: MatchOutcome,
}

impl MetricOutcome {
    pub fn is_matched(&self) -> bool {
        matches!(self.outcome, MatchOutcome::Matched { .. })
    }
}
