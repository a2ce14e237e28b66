pub mod normalize;
pub mod numeric;

pub use normalize::normalize_text;

use crate::model::{MatchOutcome, MetricOutcome};
use crate::reference::schema::{MetricDef, ReferenceTableDef};

/// Match every metric in the table against already-normalized text.
///
/// One outcome per table entry, in table order. Each entry is matched
/// independently by its own full name; overlapping names (one a substring
/// of another) are not disambiguated -- table authors use qualified names
/// like "Glucose (Fasting)" to keep entries distinct.
pub fn match_metrics(normalized: &str, table: &ReferenceTableDef) -> Vec<MetricOutcome> {
    table
        .metrics
        .iter()
        .map(|def| match_metric(normalized, def))
        .collect()
}

/// Two-stage scan for a single metric: locate the first occurrence of the
/// metric name, then take the first numeric token anywhere after it.
///
/// The forward scan is deliberately unbounded -- the first number after
/// the name wins even when unrelated text sits between them. This mirrors
/// how values trail their labels in flattened report text, and is an
/// accepted tolerance: interleaved metrics can capture a neighbour's
/// number, and nothing downstream detects that case.
fn match_metric(normalized: &str, def: &MetricDef) -> MetricOutcome {
    let name = def.metric.to_lowercase();

    let outcome = match normalized.find(&name) {
        None => MatchOutcome::NotFound,
        Some(idx) => match numeric::find_numeric_token(normalized, idx + name.len()) {
            None => MatchOutcome::NotFound,
            Some(token) => match numeric::parse_decimal(token) {
                Some(value) => MatchOutcome::Matched { value },
                None => MatchOutcome::ParseFailed {
                    token: token.to_string(),
                },
            },
        },
    };

    MetricOutcome {
        metric: def.metric.clone(),
        unit: def.unit.clone(),
        outcome,
    }
}
