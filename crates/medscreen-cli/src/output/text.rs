use medscreen_core::{MatchOutcome, MetricOutcome, ReportSummary};

pub fn print_summary(summary: &ReportSummary, verbose: bool) {
    println!("{summary}");

    if verbose {
        let tally = summary.tally();
        println!();
        println!(
            "Metrics matched: {}, not found: {}, unparseable: {}",
            tally.matched, tally.not_found, tally.parse_failed
        );
    }
}

pub fn print_outcomes(outcomes: &[MetricOutcome]) {
    let max_name = outcomes.iter().map(|o| o.metric.len()).max().unwrap_or(10);

    for outcome in outcomes {
        match &outcome.outcome {
            MatchOutcome::Matched { value } => {
                println!(
                    "  {:<width$}  {} {}",
                    outcome.metric,
                    value,
                    outcome.unit,
                    width = max_name
                );
            }
            MatchOutcome::NotFound => {
                println!("  {:<width$}  -", outcome.metric, width = max_name);
            }
            MatchOutcome::ParseFailed { token } => {
                println!(
                    "  {:<width$}  unparseable: {}",
                    outcome.metric,
                    token,
                    width = max_name
                );
            }
        }
    }
}
