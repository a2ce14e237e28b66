use crate::classify::outcome::{ExtractedReading, Fallback, OutcomeTally, ReportSummary, Verdict};
use crate::model::{Classification, MatchOutcome, MetricOutcome};
use crate::parsing::numeric;
use crate::reference::schema::{RangeDef, ReferenceTableDef};
use rust_decimal::Decimal;

/// Classify a value against a range. Both boundaries are inclusive-normal.
pub fn classify_value(value: Decimal, range: &RangeDef) -> Classification {
    if value < range.low {
        Classification::Low
    } else if value > range.high {
        Classification::High
    } else {
        Classification::Normal
    }
}

/// Build the report summary from per-metric match outcomes.
///
/// Matched values are classified against their metric's primary range and
/// bucketed abnormal-first. With zero readings, a secondary scan over the
/// whole normalized text decides which fallback applies.
pub fn build_summary(
    normalized: &str,
    outcomes: &[MetricOutcome],
    table: &ReferenceTableDef,
) -> ReportSummary {
    let mut abnormal = Vec::new();
    let mut normal = Vec::new();
    let mut tally = OutcomeTally::default();

    for outcome in outcomes {
        match &outcome.outcome {
            MatchOutcome::Matched { value } => {
                let range = table
                    .metrics
                    .iter()
                    .find(|m| m.metric == outcome.metric)
                    .and_then(|m| m.primary_range());
                let Some(range) = range else {
                    // Outcome for a metric the table doesn't define; skip.
                    tally.not_found += 1;
                    continue;
                };

                tally.matched += 1;
                let classification = classify_value(*value, range);
                let reading = ExtractedReading {
                    metric: outcome.metric.clone(),
                    value: *value,
                    unit: outcome.unit.clone(),
                    classification,
                };
                if classification.is_abnormal() {
                    abnormal.push(reading);
                } else {
                    normal.push(reading);
                }
            }
            MatchOutcome::NotFound => tally.not_found += 1,
            MatchOutcome::ParseFailed { token } => {
                tracing::debug!(metric = %outcome.metric, token = %token, "unparseable numeric token skipped");
                tally.parse_failed += 1;
            }
        }
    }

    if tally.matched == 0 {
        let fallback = if numeric::contains_number(normalized) {
            Fallback::NoMetricsMatched
        } else {
            Fallback::NotAReport
        };
        return ReportSummary::Unrecognized { fallback, tally };
    }

    let abnormal_count = abnormal.len();
    let verdict = if abnormal_count > 0 {
        Verdict::Abnormal
    } else {
        Verdict::Normal
    };

    let mut readings = abnormal;
    readings.append(&mut normal);

    ReportSummary::Findings {
        readings,
        abnormal_count,
        verdict,
        tally,
    }
}
