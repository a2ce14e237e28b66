pub mod engine;
pub mod outcome;

pub use engine::{build_summary, classify_value};
pub use outcome::{ExtractedReading, Fallback, OutcomeTally, ReportSummary, Verdict};
