use medscreen_core::error::MedscreenError;
use medscreen_core::reference::{builtin, load_table};
use std::path::Path;

pub fn list() -> Result<(), MedscreenError> {
    println!("Available reference panels:\n");
    for name in builtin::PRESETS {
        let table = builtin::load_preset(name)?;
        println!(
            "  {:<10} {} (v{}), {} metrics",
            name,
            table.name,
            table.version,
            table.metrics.len()
        );
        if let Some(ref desc) = table.description {
            println!("             {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn explain(panel: &str) -> Result<(), MedscreenError> {
    let table = builtin::load_preset(panel)?;

    println!("{} (version {})\n", table.name, table.version);

    if let Some(ref desc) = table.description {
        println!("{}\n", desc);
    }

    println!(
        "Readings at or inside [low, high] classify as Normal; below low as\n\
         Low; above high as High. Any Low or High reading makes the overall\n\
         report status Abnormal.\n"
    );

    // Find max metric name length for alignment
    let max_name_len = table
        .metrics
        .iter()
        .map(|m| m.metric.len())
        .max()
        .unwrap_or(20);

    println!(
        "  {:<width$}  {:<12} {:<12} Unit",
        "Metric",
        "Low",
        "High",
        width = max_name_len + 2
    );
    println!("  {}", "-".repeat(max_name_len + 2 + 26 + 10));

    for metric in &table.metrics {
        let Some(range) = metric.primary_range() else {
            continue;
        };
        print!(
            "  {:<width$}  {:<12} {:<12} {}",
            metric.metric,
            range.low,
            range.high,
            metric.unit,
            width = max_name_len + 2
        );
        println!();
        if let Some(ref note) = metric.note {
            println!("  {:<width$}  note: {}", "", note, width = max_name_len + 2);
        }
    }

    println!();

    Ok(())
}

pub fn schema() -> Result<(), MedscreenError> {
    print!(
        r#"JSON Reference Table Schema
===========================

A reference table defines normal ranges for lab metrics. When you run
`medscreen summarize`, each metric in the table is looked up in the
report text and its value classified against these ranges.

Top-level fields:
  name          (string, required)  Human-readable name of the table
  description   (string, optional)  What this table is for
  version       (string, required)  Version identifier (e.g., "2025.1")
  metrics       (array, required)   Ordered list of metrics (see below).
                                    Output lines follow this order, so
                                    put related metrics together.

Each metric in the "metrics" array:
  metric        (string, required)  Metric name as it appears in reports.
                                    Matched case-insensitively. Use a
                                    parenthesized qualifier to keep
                                    variants distinct, e.g.
                                    "Glucose (Fasting)".
  ranges        (array, required)   Range entries, each with:
                                      age_min  (integer, 0-99)
                                      age_max  (integer, 0-99)
                                      low      (string, decimal)
                                      high     (string, decimal)
                                    Only the first entry is applied; the
                                    age slots are reserved for future
                                    age-stratified selection.
  unit          (string, optional)  Unit for display. May be empty
                                    (e.g., for BMI). Default: ""
  note          (string, optional)  Clinical or sourcing remark.

Example:
{{
  "name": "Site panel",
  "description": "Custom ranges for an in-house analyzer",
  "version": "1.0",
  "metrics": [
    {{
      "metric": "Hemoglobin",
      "unit": "g/dL",
      "ranges": [
        {{ "age_min": 0, "age_max": 99, "low": "12", "high": "16" }}
      ]
    }},
    {{
      "metric": "Glucose (Fasting)",
      "unit": "mg/dL",
      "ranges": [
        {{ "age_min": 0, "age_max": 99, "low": "70", "high": "100" }}
      ],
      "note": "ADA 2024 guidance"
    }}
  ]
}}

Note: low/high values must be quoted strings, not bare numbers, to
preserve exact decimal precision (e.g., "0.25" not 0.25).
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), MedscreenError> {
    let table = load_table(file)?;

    println!("Reference table '{}' (v{}) is valid.", table.name, table.version);
    println!("  Metrics: {}", table.metrics.len());

    // Check for potential issues (warnings, not errors)
    let mut warnings = Vec::new();
    for metric in &table.metrics {
        if metric.ranges.len() > 1 {
            warnings.push(format!(
                "metric '{}' has {} range entries; only the first is applied",
                metric.metric,
                metric.ranges.len()
            ));
        }
        if let Some(range) = metric.primary_range() {
            if (range.age_min, range.age_max) != (0, 99) {
                warnings.push(format!(
                    "metric '{}' restricts ages {}-{}, but age-stratified selection is not applied",
                    metric.metric, range.age_min, range.age_max
                ));
            }
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
