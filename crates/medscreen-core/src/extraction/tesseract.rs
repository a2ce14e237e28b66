use crate::error::MedscreenError;
use crate::extraction::{run_tool, ImageOcr};
use std::io::Write;
use std::path::Path;
use std::process::Command;

/// Image OCR backend using the tesseract CLI.
pub struct TesseractOcr;

impl TesseractOcr {
    pub fn new() -> Self {
        TesseractOcr
    }

    /// Check if tesseract is available on the system.
    pub fn is_available() -> bool {
        Command::new("tesseract")
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}

impl Default for TesseractOcr {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageOcr for TesseractOcr {
    fn recognize(&self, image_bytes: &[u8]) -> Result<String, MedscreenError> {
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| MedscreenError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(image_bytes)
            .map_err(|e| MedscreenError::Extraction(e.to_string()))?;

        ocr_image_file(tmpfile.path())
    }

    fn backend_name(&self) -> &str {
        "tesseract"
    }
}

/// OCR a single image file to text. Tesseract sniffs the format from the
/// file content, so no extension is needed on the path.
pub(crate) fn ocr_image_file(path: &Path) -> Result<String, MedscreenError> {
    let output = run_tool(
        "tesseract",
        Command::new("tesseract").arg(path).arg("stdout"),
    )?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
