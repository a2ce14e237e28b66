use medscreen_core::error::MedscreenError;
use medscreen_core::extraction::poppler::PopplerExtractor;
use medscreen_core::extraction::tesseract::TesseractOcr;
use std::path::PathBuf;

use crate::commands::{detect_input_kind, load_table_choice, InputKind};
use crate::output;

pub fn run(
    input_file: PathBuf,
    table_file: Option<PathBuf>,
    panel: &str,
    output_format: &str,
    verbose: bool,
) -> Result<(), MedscreenError> {
    let table = load_table_choice(table_file, panel)?;
    let kind = detect_input_kind(&input_file)?;

    let summary = match kind {
        InputKind::Pdf => {
            let bytes = std::fs::read(&input_file)?;
            let extractor = PopplerExtractor::new();
            medscreen_core::summarize_pdf(&bytes, &extractor, &table)?
        }
        InputKind::Image => {
            let bytes = std::fs::read(&input_file)?;
            let ocr = TesseractOcr::new();
            medscreen_core::summarize_image(&bytes, &ocr, &table)?
        }
        InputKind::Text => {
            let text = std::fs::read_to_string(&input_file)?;
            medscreen_core::summarize_text(&text, &table)
        }
    };

    match output_format {
        "json" => output::json::print(&summary)?,
        _ => output::text::print_summary(&summary, verbose),
    }

    Ok(())
}
