pub mod poppler;
pub mod tesseract;

use crate::error::MedscreenError;
use std::process::{Command, Output};

/// How a document's text was recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMethod {
    /// Embedded PDF text layer.
    PdfText,
    /// OCR over rendered PDF page images (scanned PDF).
    PdfOcr,
    /// OCR over a standalone image file.
    ImageOcr,
}

/// Text recovered from a document, with the path that produced it.
#[derive(Debug, Clone)]
pub struct DocumentText {
    pub text: String,
    pub method: ExtractionMethod,
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Recover text from PDF bytes, falling back to OCR as needed.
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<DocumentText, MedscreenError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Trait for image OCR backends.
pub trait ImageOcr: Send + Sync {
    /// Recognize text in image bytes.
    fn recognize(&self, image_bytes: &[u8]) -> Result<String, MedscreenError>;

    /// Name of this OCR backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Run an external tool, mapping a missing binary and non-zero exit into
/// the shared error variants.
pub(crate) fn run_tool(tool: &'static str, cmd: &mut Command) -> Result<Output, MedscreenError> {
    let output = cmd.output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            MedscreenError::ToolNotFound { tool }
        } else {
            MedscreenError::Extraction(format!("{tool} failed: {e}"))
        }
    })?;

    if !output.status.success() {
        let code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        return Err(MedscreenError::ToolFailed {
            tool,
            code,
            stderr,
        });
    }

    Ok(output)
}
