use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A reference table defining normal ranges for lab metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceTableDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Ordered list of metrics. Iteration order here drives output order.
    pub metrics: Vec<MetricDef>,
}

/// A single metric within a reference table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricDef {
    /// Human-readable metric name, possibly with a qualifier in
    /// parentheses, e.g. "Glucose (Fasting)". Matched case-insensitively.
    pub metric: String,
    /// Ordered range entries. Selection always takes the first entry;
    /// the age slots are carried for forward compatibility.
    pub ranges: Vec<RangeDef>,
    /// Display unit (may be empty, e.g. for BMI).
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// One normal-range entry for a metric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeDef {
    pub age_min: u8,
    pub age_max: u8,
    /// Threshold values are JSON strings for exact decimal precision.
    pub low: Decimal,
    pub high: Decimal,
}

impl MetricDef {
    /// The range entry used for classification.
    pub fn primary_range(&self) -> Option<&RangeDef> {
        self.ranges.first()
    }
}
