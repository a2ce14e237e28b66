mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "medscreen",
    version,
    about = "Lab-report triage: classify recognized metrics against reference ranges"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a report (PDF, image, or extracted text) with an overall verdict
    Summarize {
        /// Path to a PDF, image, or plain-text report
        input_file: PathBuf,

        /// Predefined reference panel: standard, cbc, lipid
        #[arg(short, long, default_value = "standard")]
        panel: String,

        /// Custom JSON reference table (overrides --panel)
        #[arg(short, long, value_name = "FILE")]
        table: Option<PathBuf>,

        /// Output format: text (default) or json
        #[arg(short, long, default_value = "text")]
        output: String,

        /// Also report metrics that were not found or failed to parse
        #[arg(long)]
        verbose: bool,
    },
    /// Extract per-metric match outcomes without classifying
    Extract {
        /// Path to a PDF, image, or plain-text report
        input_file: PathBuf,

        /// Predefined reference panel: standard, cbc, lipid
        #[arg(short, long, default_value = "standard")]
        panel: String,

        /// Custom JSON reference table (overrides --panel)
        #[arg(short, long, value_name = "FILE")]
        table: Option<PathBuf>,

        /// Output format: text (default) or json
        #[arg(short, long, default_value = "text")]
        output: String,

        /// Write outcomes to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Manage and inspect reference tables
    Metrics {
        #[command(subcommand)]
        action: MetricsAction,
    },
}

#[derive(Subcommand)]
enum MetricsAction {
    /// List predefined reference panels
    List,
    /// Print a panel's metrics and normal ranges
    Explain {
        /// Panel name (e.g., "standard")
        panel: String,
    },
    /// Print the JSON table schema with field descriptions and example
    Schema,
    /// Validate a custom reference table file
    Validate {
        /// Path to JSON reference table file
        file: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Summarize {
            input_file,
            panel,
            table,
            output,
            verbose,
        } => commands::summarize::run(input_file, table, &panel, &output, verbose),
        Commands::Extract {
            input_file,
            panel,
            table,
            output,
            out,
        } => commands::extract::run(input_file, table, &panel, &output, out),
        Commands::Metrics { action } => match action {
            MetricsAction::List => commands::metrics::list(),
            MetricsAction::Explain { panel } => commands::metrics::explain(&panel),
            MetricsAction::Schema => commands::metrics::schema(),
            MetricsAction::Validate { file } => commands::metrics::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
