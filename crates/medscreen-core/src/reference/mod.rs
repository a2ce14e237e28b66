pub mod builtin;
pub mod schema;

use crate::error::MedscreenError;
use schema::ReferenceTableDef;
use std::collections::HashSet;
use std::path::Path;

/// Load a reference table from a JSON file.
pub fn load_table(path: &Path) -> Result<ReferenceTableDef, MedscreenError> {
    let content = std::fs::read_to_string(path).map_err(|e| MedscreenError::TableLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let table: ReferenceTableDef =
        serde_json::from_str(&content).map_err(|e| MedscreenError::TableLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_table(&table)?;
    Ok(table)
}

/// Parse a reference table from a JSON string.
pub fn parse_table_str(json: &str) -> Result<ReferenceTableDef, MedscreenError> {
    let table: ReferenceTableDef = serde_json::from_str(json).map_err(MedscreenError::Json)?;
    validate_table(&table)?;
    Ok(table)
}

/// Validate that a reference table is well-formed.
pub fn validate_table(table: &ReferenceTableDef) -> Result<(), MedscreenError> {
    if table.name.trim().is_empty() {
        return Err(MedscreenError::TableInvalid(
            "table name must not be empty".into(),
        ));
    }

    if table.metrics.is_empty() {
        return Err(MedscreenError::TableInvalid(
            "metrics must not be empty".into(),
        ));
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for metric in &table.metrics {
        if metric.metric.trim().is_empty() {
            return Err(MedscreenError::TableInvalid(
                "metric name must not be empty".into(),
            ));
        }

        if !seen.insert(metric.metric.as_str()) {
            return Err(MedscreenError::TableInvalid(format!(
                "duplicate metric '{}'",
                metric.metric
            )));
        }

        if metric.ranges.is_empty() {
            return Err(MedscreenError::TableInvalid(format!(
                "metric '{}' has no range entries",
                metric.metric
            )));
        }

        for range in &metric.ranges {
            if range.low > range.high {
                return Err(MedscreenError::TableInvalid(format!(
                    "metric '{}' has low {} > high {}",
                    metric.metric, range.low, range.high
                )));
            }
            if range.age_min > range.age_max {
                return Err(MedscreenError::TableInvalid(format!(
                    "metric '{}' has age_min {} > age_max {}",
                    metric.metric, range.age_min, range.age_max
                )));
            }
        }
    }

    Ok(())
}
