use medscreen_core::error::MedscreenError;
use std::path::PathBuf;

use crate::commands::{detect_input_kind, load_table_choice, read_document_text};
use crate::output;

pub fn run(
    input_file: PathBuf,
    table_file: Option<PathBuf>,
    panel: &str,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), MedscreenError> {
    let table = load_table_choice(table_file, panel)?;
    let kind = detect_input_kind(&input_file)?;
    let text = read_document_text(&input_file, kind)?;

    let outcomes = medscreen_core::extract_outcomes(&text, &table);

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&outcomes)?;
            std::fs::write(&path, json)?;
            let matched = outcomes.iter().filter(|o| o.is_matched()).count();
            eprintln!(
                "Matched {} of {} metrics, written to {}",
                matched,
                outcomes.len(),
                path.display()
            );
        }
        None => match output_format {
            "json" => output::json::print(&outcomes)?,
            _ => output::text::print_outcomes(&outcomes),
        },
    }

    Ok(())
}
