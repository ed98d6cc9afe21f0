pub mod pdf;
pub mod url;

pub use pdf::{PdfExtractor, PdfStore, PdftotextExtractor};

use crate::Config;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Failure to obtain text from any input source. These carry the message
/// shown to the user; the analyzer itself never sees them.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Invalid URL format. Please enter a complete URL (e.g., https://example.com).")]
    InvalidUrl,

    #[error("Error fetching URL: {0}")]
    Fetch(String),

    #[error("Could not extract meaningful text content from the provided URL.")]
    EmptyPage,

    #[error("Invalid file type: {0}. Supported types are .txt and .pdf.")]
    UnsupportedType(String),

    #[error("Input exceeds the maximum size of {limit} bytes ({actual} bytes).")]
    TooLarge { limit: u64, actual: u64 },

    #[error("Failed to extract text from PDF: {0}")]
    PdfExtraction(String),

    #[error("Error reading file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    PlainText,
    Pdf,
}

impl InputKind {
    /// Detect input kind from file extension. Unknown extensions are
    /// rejected rather than guessed at.
    pub fn from_path(path: &Path) -> Result<Self, SourceError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "txt" | "text" | "" => Ok(InputKind::PlainText),
            "pdf" => Ok(InputKind::Pdf),
            other => Err(SourceError::UnsupportedType(format!(".{}", other))),
        }
    }
}

/// Read the text content of a file, dispatching on its type. PDFs are
/// kept in the store after a successful extraction so they stay
/// available for viewing until they expire.
pub fn read_file(
    path: &Path,
    config: &Config,
    pdf_store: &mut PdfStore,
) -> Result<String, SourceError> {
    let kind = InputKind::from_path(path)?;

    let metadata = fs::metadata(path)?;
    if metadata.len() > config.max_input_bytes {
        return Err(SourceError::TooLarge {
            limit: config.max_input_bytes,
            actual: metadata.len(),
        });
    }

    match kind {
        InputKind::PlainText => Ok(fs::read_to_string(path)?),
        InputKind::Pdf => {
            let bytes = fs::read(path)?;
            extract_and_store(&bytes, &PdftotextExtractor, pdf_store)
        }
    }
}

/// Extract the text of a PDF, then register the document in the store.
/// Extraction failures carry the backend name so the user can tell which
/// extractor gave up; nothing is stored for a document that yields no
/// text.
fn extract_and_store(
    bytes: &[u8],
    extractor: &dyn PdfExtractor,
    store: &mut PdfStore,
) -> Result<String, SourceError> {
    let text = extractor.extract(bytes).map_err(|e| match e {
        SourceError::PdfExtraction(msg) => {
            SourceError::PdfExtraction(format!("{}: {}", extractor.backend_name(), msg))
        }
        other => other,
    })?;
    store.store(bytes)?;
    Ok(text)
}
