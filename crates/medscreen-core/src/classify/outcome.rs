use crate::model::Classification;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A metric paired with the value extracted for it, classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedReading {
    /// Metric name as defined in the reference table.
    pub metric: String,
    pub value: Decimal,
    /// Display unit (possibly empty).
    pub unit: String,
    pub classification: Classification,
}

impl fmt::Display for ExtractedReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.is_empty() {
            write!(f, "{}: {} ({})", self.metric, self.value, self.classification)
        } else {
            write!(
                f,
                "{}: {} {} ({})",
                self.metric, self.value, self.unit, self.classification
            )
        }
    }
}

/// Overall report verdict: Abnormal iff any reading is Low or High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Normal,
    Abnormal,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Normal => write!(f, "Normal"),
            Verdict::Abnormal => write!(f, "Abnormal"),
        }
    }
}

/// Why a report produced zero readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fallback {
    /// No numeric tokens anywhere in the text.
    NotAReport,
    /// Numbers were present but none could be attributed to a known metric.
    NoMetricsMatched,
}

impl Fallback {
    pub fn message(&self) -> &'static str {
        match self {
            Fallback::NotAReport => "This does not appear to be a health report.",
            Fallback::NoMetricsMatched => {
                "No known lab metrics could be matched to the numbers in this document. \
                 Please verify that it is a lab report."
            }
        }
    }
}

/// Per-table tally of match outcomes, kept explicit so fallback decisions
/// and diagnostics never depend on incidental list emptiness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeTally {
    pub matched: usize,
    pub not_found: usize,
    pub parse_failed: usize,
}

/// The result of summarizing one report against one reference table.
///
/// `Findings` and `Unrecognized` are mutually exclusive by construction:
/// a summary either has readings and a verdict, or a fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportSummary {
    Findings {
        /// Abnormal readings first, then normal, both in table order.
        readings: Vec<ExtractedReading>,
        abnormal_count: usize,
        verdict: Verdict,
        tally: OutcomeTally,
    },
    Unrecognized {
        fallback: Fallback,
        tally: OutcomeTally,
    },
}

impl ReportSummary {
    pub fn verdict(&self) -> Option<Verdict> {
        match self {
            ReportSummary::Findings { verdict, .. } => Some(*verdict),
            ReportSummary::Unrecognized { .. } => None,
        }
    }

    pub fn readings(&self) -> &[ExtractedReading] {
        match self {
            ReportSummary::Findings { readings, .. } => readings,
            ReportSummary::Unrecognized { .. } => &[],
        }
    }

    pub fn tally(&self) -> OutcomeTally {
        match self {
            ReportSummary::Findings { tally, .. } => *tally,
            ReportSummary::Unrecognized { tally, .. } => *tally,
        }
    }
}

impl fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportSummary::Findings {
                readings, verdict, ..
            } => {
                for reading in readings {
                    writeln!(f, "{reading}")?;
                }
                writeln!(f)?;
                write!(f, "Report Status: {verdict}")
            }
            ReportSummary::Unrecognized { fallback, .. } => write!(f, "{}", fallback.message()),
        }
    }
}
