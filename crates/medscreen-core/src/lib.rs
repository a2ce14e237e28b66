pub mod classify;
pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod reference;

pub use classify::outcome::{ExtractedReading, Fallback, OutcomeTally, ReportSummary, Verdict};
pub use model::{Classification, MatchOutcome, MetricOutcome};

use error::MedscreenError;
use extraction::{ImageOcr, PdfExtractor};
use reference::schema::ReferenceTableDef;

/// Main API entry point: summarize already-extracted report text against
/// a reference table.
///
/// Total over all inputs; unrecognizable text degrades to a fallback
/// message inside the summary rather than an error.
pub fn summarize_text(text: &str, table: &ReferenceTableDef) -> ReportSummary {
    let normalized = parsing::normalize_text(text);
    let outcomes = parsing::match_metrics(&normalized, table);
    let summary = classify::build_summary(&normalized, &outcomes, table);
    tracing::debug!(
        matched = summary.tally().matched,
        not_found = summary.tally().not_found,
        parse_failed = summary.tally().parse_failed,
        "summarized report text"
    );
    summary
}

/// Match every table metric against report text without classifying.
///
/// One outcome per table entry, in table order.
pub fn extract_outcomes(text: &str, table: &ReferenceTableDef) -> Vec<MetricOutcome> {
    let normalized = parsing::normalize_text(text);
    parsing::match_metrics(&normalized, table)
}

/// Summarize a PDF report: recover its text via the given extractor
/// (text layer, with OCR fallback for scanned documents), then run the
/// text pipeline.
pub fn summarize_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    table: &ReferenceTableDef,
) -> Result<ReportSummary, MedscreenError> {
    let document = extractor.extract_text(pdf_bytes)?;
    tracing::debug!(
        backend = extractor.backend_name(),
        method = ?document.method,
        "extracted PDF text"
    );
    Ok(summarize_text(&document.text, table))
}

/// Summarize a standalone report image via OCR.
pub fn summarize_image(
    image_bytes: &[u8],
    ocr: &dyn ImageOcr,
    table: &ReferenceTableDef,
) -> Result<ReportSummary, MedscreenError> {
    let text = ocr.recognize(image_bytes)?;
    tracing::debug!(backend = ocr.backend_name(), "recognized image text");
    Ok(summarize_text(&text, table))
}
