use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum MedscreenError {
    #[error("text extraction failed: {0}")]
    Extraction(String),

    #[error("{tool} not found. Install poppler and tesseract: brew install poppler tesseract (macOS) or apt install poppler-utils tesseract-ocr (Linux)")]
    ToolNotFound { tool: &'static str },

    #[error("{tool} failed with exit code {code}: {stderr}")]
    ToolFailed {
        tool: &'static str,
        code: i32,
        stderr: String,
    },

    #[error("no text could be recovered from the document")]
    EmptyDocument,

    #[error("unsupported input type: {0}")]
    UnsupportedInput(String),

    #[error("failed to load reference table from {path}: {reason}")]
    TableLoad { path: PathBuf, reason: String },

    #[error("invalid reference table: {0}")]
    TableInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
