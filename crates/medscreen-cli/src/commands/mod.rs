pub mod extract;
pub mod metrics;
pub mod summarize;

use medscreen_core::error::MedscreenError;
use medscreen_core::extraction::poppler::PopplerExtractor;
use medscreen_core::extraction::tesseract::TesseractOcr;
use medscreen_core::extraction::{ImageOcr, PdfExtractor};
use medscreen_core::reference::schema::ReferenceTableDef;
use medscreen_core::reference::{builtin, load_table};
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "tif", "tiff", "bmp", "gif", "webp"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputKind {
    Pdf,
    Image,
    Text,
}

/// Determine how to read an input file from its extension.
pub(crate) fn detect_input_kind(path: &Path) -> Result<InputKind, MedscreenError> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if ext == "pdf" {
        Ok(InputKind::Pdf)
    } else if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Ok(InputKind::Image)
    } else if ext == "txt" || ext == "text" {
        Ok(InputKind::Text)
    } else {
        Err(MedscreenError::UnsupportedInput(format!(
            "{} (expected .pdf, an image, or .txt)",
            path.display()
        )))
    }
}

/// Resolve the reference table: explicit file wins over panel name.
pub(crate) fn load_table_choice(
    table_file: Option<PathBuf>,
    panel: &str,
) -> Result<ReferenceTableDef, MedscreenError> {
    match table_file {
        Some(path) => load_table(&path),
        None => builtin::load_preset(panel),
    }
}

/// Recover report text from an input file, whatever its kind.
pub(crate) fn read_document_text(
    path: &Path,
    kind: InputKind,
) -> Result<String, MedscreenError> {
    match kind {
        InputKind::Pdf => {
            let bytes = std::fs::read(path)?;
            let extractor = PopplerExtractor::new();
            Ok(extractor.extract_text(&bytes)?.text)
        }
        InputKind::Image => {
            let bytes = std::fs::read(path)?;
            let ocr = TesseractOcr::new();
            ocr.recognize(&bytes)
        }
        InputKind::Text => Ok(std::fs::read_to_string(path)?),
    }
}
