//! Integration tests for the summarize_* end-to-end pipeline.
//!
//! Uses mock extraction backends that return pre-built text without
//! invoking poppler or tesseract, so these tests run without either
//! tool installed.

use medscreen_core::error::MedscreenError;
use medscreen_core::extraction::{DocumentText, ExtractionMethod, ImageOcr, PdfExtractor};
use medscreen_core::reference::builtin::load_preset;
use medscreen_core::{
    summarize_image, summarize_pdf, summarize_text, Classification, Fallback, ReportSummary,
    Verdict,
};
use rust_decimal_macros::dec;

struct MockExtractor {
    text: String,
    method: ExtractionMethod,
}

impl PdfExtractor for MockExtractor {
    fn extract_text(&self, _pdf_bytes: &[u8]) -> Result<DocumentText, MedscreenError> {
        Ok(DocumentText {
            text: self.text.clone(),
            method: self.method,
        })
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

struct MockOcr {
    text: String,
}

impl ImageOcr for MockOcr {
    fn recognize(&self, _image_bytes: &[u8]) -> Result<String, MedscreenError> {
        Ok(self.text.clone())
    }

    fn backend_name(&self) -> &str {
        "mock-ocr"
    }
}

// ---------------------------------------------------------------------------
// Test 1: Low hemoglobin drives an Abnormal verdict
// ---------------------------------------------------------------------------
#[test]
fn low_hemoglobin_is_abnormal() {
    let table = load_preset("standard").unwrap();
    let summary = summarize_text("Hemoglobin 11.0 g/dL", &table);

    let text = summary.to_string();
    assert!(text.contains("Hemoglobin: 11.0 g/dL (Low)"));
    assert!(text.ends_with("Report Status: Abnormal"));
}

// ---------------------------------------------------------------------------
// Test 2: Full in-range report is Normal, abnormal lines would come first
// ---------------------------------------------------------------------------
#[test]
fn multi_metric_report_orders_abnormal_first() {
    let table = load_preset("standard").unwrap();
    let report = "Patient Report\n\
                  Hemoglobin: 14.2 g/dL\n\
                  Heart Rate: 120 bpm\n\
                  Creatinine: 0.9 mg/dL\n\
                  BMI: 27.4";
    let summary = summarize_text(report, &table);

    assert_eq!(summary.verdict(), Some(Verdict::Abnormal));
    // Heart Rate 120 is boundary-Normal; BMI 27.4 is High and leads.
    let names: Vec<&str> = summary
        .readings()
        .iter()
        .map(|r| r.metric.as_str())
        .collect();
    assert_eq!(names, vec!["BMI", "Hemoglobin", "Heart Rate", "Creatinine"]);
    assert_eq!(summary.readings()[0].classification, Classification::High);
}

// ---------------------------------------------------------------------------
// Test 3: Boundary values classify as Normal
// ---------------------------------------------------------------------------
#[test]
fn boundary_values_are_normal() {
    let table = load_preset("standard").unwrap();
    let summary = summarize_text("Hemoglobin 12 g/dL AST 40 U/L", &table);

    assert_eq!(summary.verdict(), Some(Verdict::Normal));
    for reading in summary.readings() {
        assert_eq!(reading.classification, Classification::Normal);
    }
    assert!(summary.to_string().ends_with("Report Status: Normal"));
}

// ---------------------------------------------------------------------------
// Test 4: Qualified glucose entries are classified independently
// ---------------------------------------------------------------------------
#[test]
fn qualified_glucose_entries_extracted_independently() {
    let table = load_preset("standard").unwrap();
    let report = "Glucose (Fasting) 85 mg/dL\nGlucose (Postprandial) 95 mg/dL";
    let summary = summarize_text(report, &table);

    let fasting = summary
        .readings()
        .iter()
        .find(|r| r.metric == "Glucose (Fasting)")
        .unwrap();
    assert_eq!(fasting.value, dec!(85));

    let postprandial = summary
        .readings()
        .iter()
        .find(|r| r.metric == "Glucose (Postprandial)")
        .unwrap();
    assert_eq!(postprandial.value, dec!(95));
}

// ---------------------------------------------------------------------------
// Test 5: Comma decimal separator
// ---------------------------------------------------------------------------
#[test]
fn comma_decimal_separator_parses() {
    let table = load_preset("standard").unwrap();
    let summary = summarize_text("Creatinine 1,0 mg/dL", &table);

    let creatinine = summary
        .readings()
        .iter()
        .find(|r| r.metric == "Creatinine")
        .unwrap();
    assert_eq!(creatinine.value, dec!(1.0));
    assert_eq!(creatinine.classification, Classification::Normal);
}

// ---------------------------------------------------------------------------
// Test 6: Fallback messages
// ---------------------------------------------------------------------------
#[test]
fn text_without_digits_is_not_a_report() {
    let table = load_preset("standard").unwrap();
    let summary = summarize_text("A short story about nothing in particular.", &table);

    assert_eq!(
        summary.to_string(),
        "This does not appear to be a health report."
    );
    assert_eq!(summary.verdict(), None);
}

#[test]
fn digits_without_metrics_get_hint_message() {
    let table = load_preset("standard").unwrap();
    let summary = summarize_text("Sample ID 492837", &table);

    assert!(matches!(
        summary,
        ReportSummary::Unrecognized {
            fallback: Fallback::NoMetricsMatched,
            ..
        }
    ));
    assert_ne!(
        summary.to_string(),
        "This does not appear to be a health report."
    );
}

#[test]
fn empty_input_is_not_a_report() {
    let table = load_preset("standard").unwrap();
    let summary = summarize_text("", &table);

    assert_eq!(
        summary.to_string(),
        "This does not appear to be a health report."
    );
}

// ---------------------------------------------------------------------------
// Test 7: PDF pipeline with a mock extractor (both recovery methods)
// ---------------------------------------------------------------------------
#[test]
fn pdf_pipeline_with_text_layer() {
    let table = load_preset("standard").unwrap();
    let extractor = MockExtractor {
        text: "Laboratory Report\nWBC 12500 cells/uL\nPlatelet 300000 cells/uL".into(),
        method: ExtractionMethod::PdfText,
    };

    let summary = summarize_pdf(b"%PDF-", &extractor, &table).unwrap();

    assert_eq!(summary.verdict(), Some(Verdict::Abnormal));
    let wbc = summary.readings().iter().find(|r| r.metric == "WBC").unwrap();
    assert_eq!(wbc.classification, Classification::High);
}

#[test]
fn pdf_pipeline_with_ocr_text() {
    // OCR text is noisier; the pipeline doesn't care which path produced it.
    let table = load_preset("cbc").unwrap();
    let extractor = MockExtractor {
        text: "HEMOGLOBIN   13.1  g/dL\r\nRBC  5.2   million/uL".into(),
        method: ExtractionMethod::PdfOcr,
    };

    let summary = summarize_pdf(b"%PDF-", &extractor, &table).unwrap();

    assert_eq!(summary.verdict(), Some(Verdict::Normal));
    assert_eq!(summary.readings().len(), 2);
}

// ---------------------------------------------------------------------------
// Test 8: Image pipeline with a mock OCR backend
// ---------------------------------------------------------------------------
#[test]
fn image_pipeline_classifies_ocr_text() {
    let table = load_preset("lipid").unwrap();
    let ocr = MockOcr {
        text: "Cholesterol 220 mg/dL\nTriglycerides 140 mg/dL".into(),
    };

    let summary = summarize_image(b"\x89PNG", &ocr, &table).unwrap();

    assert_eq!(summary.verdict(), Some(Verdict::Abnormal));
    let cholesterol = summary
        .readings()
        .iter()
        .find(|r| r.metric == "Cholesterol")
        .unwrap();
    assert_eq!(cholesterol.classification, Classification::High);
}

// ---------------------------------------------------------------------------
// Test 9: Panel choice scopes which metrics are recognized
// ---------------------------------------------------------------------------
#[test]
fn panel_scopes_recognized_metrics() {
    let cbc = load_preset("cbc").unwrap();
    // Cholesterol is not a CBC metric; only numbers remain unattributed.
    let summary = summarize_text("Cholesterol 220 mg/dL", &cbc);

    assert!(matches!(
        summary,
        ReportSummary::Unrecognized {
            fallback: Fallback::NoMetricsMatched,
            ..
        }
    ));
}
