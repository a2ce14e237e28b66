use crate::error::MedscreenError;
use crate::extraction::{run_tool, tesseract, DocumentText, ExtractionMethod, PdfExtractor};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

/// PDF extraction backend using poppler-utils.
///
/// Reads the embedded text layer with `pdftotext -layout`. When the layer
/// is blank (scanned PDF), renders each page to PNG with `pdftoppm` and
/// runs tesseract over the page images.
pub struct PopplerExtractor;

impl PopplerExtractor {
    pub fn new() -> Self {
        PopplerExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PopplerExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PopplerExtractor {
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<DocumentText, MedscreenError> {
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| MedscreenError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| MedscreenError::Extraction(e.to_string()))?;

        let text = pdf_text_layer(tmpfile.path())?;
        if !text.trim().is_empty() {
            tracing::debug!(bytes = text.len(), "recovered text from PDF text layer");
            return Ok(DocumentText {
                text,
                method: ExtractionMethod::PdfText,
            });
        }

        // Blank text layer: treat as a scanned PDF and OCR the pages.
        tracing::debug!("PDF text layer blank, falling back to page OCR");
        let text = ocr_rendered_pages(tmpfile.path())?;
        Ok(DocumentText {
            text,
            method: ExtractionMethod::PdfOcr,
        })
    }

    fn backend_name(&self) -> &str {
        "poppler"
    }
}

fn pdf_text_layer(pdf_path: &Path) -> Result<String, MedscreenError> {
    let output = run_tool(
        "pdftotext",
        Command::new("pdftotext")
            .arg("-layout")
            .arg(pdf_path)
            .arg("-"), // output to stdout
    )?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Render every page to PNG in a temp dir and OCR them in page order.
fn ocr_rendered_pages(pdf_path: &Path) -> Result<String, MedscreenError> {
    let dir = tempfile::tempdir().map_err(|e| MedscreenError::Extraction(e.to_string()))?;
    let root = dir.path().join("page");

    let _ = run_tool(
        "pdftoppm",
        Command::new("pdftoppm")
            .arg("-png")
            .arg("-r")
            .arg("300")
            .arg(pdf_path)
            .arg(&root),
    )?;

    let pages = sorted_page_images(dir.path())?;
    if pages.is_empty() {
        return Err(MedscreenError::EmptyDocument);
    }

    let mut text = String::new();
    for page in &pages {
        text.push_str(&tesseract::ocr_image_file(page)?);
        text.push('\n');
    }

    Ok(text)
}

/// Page images produced by pdftoppm, in page order. pdftoppm zero-pads
/// page numbers uniformly, so lexicographic order is page order.
fn sorted_page_images(dir: &Path) -> Result<Vec<PathBuf>, MedscreenError> {
    let mut pages: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.extension().map(|e| e == "png").unwrap_or(false))
        .collect();
    pages.sort();
    Ok(pages)
}
