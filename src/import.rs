// src/import.rs
use std::path::Path;

use ansidoc_core::{parse_with_options, Page, ParseOptions, ParseSummary};
use ansidoc_core::{DEFAULT_ROW_LIMIT, DEFAULT_WIDTH};
use tracing::debug;

use crate::document::Document;
use crate::error::{DocumentError, DocumentResult};

/// Options controlling a document import.
///
/// Unlike the interpreter options these are validated, not clamped:
/// a zero width is a caller mistake and surfaces as an error.
#[derive(Clone, Debug)]
pub struct ImportOptions {
    pub width: usize,
    pub row_limit: usize,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            row_limit: DEFAULT_ROW_LIMIT,
        }
    }
}

impl ImportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_row_limit(mut self, row_limit: usize) -> Self {
        self.row_limit = row_limit;
        self
    }
}

/// Interpret a document into a page.
///
/// The interpreter stops at the document's SUB marker on its own, so a
/// SAUCE trailer never reaches the page.
pub fn import(
    document: &Document,
    options: &ImportOptions,
) -> DocumentResult<(Page, ParseSummary)> {
    if options.width == 0 {
        return Err(DocumentError::InvalidWidth {
            width: options.width,
        });
    }

    let parse_options = ParseOptions::new()
        .with_width(options.width)
        .with_row_limit(options.row_limit);
    let (page, summary) = parse_with_options(document.bytes(), &parse_options);

    debug!(
        "Imported {}: {} rows, {} commands ({} unknown, {} malformed)",
        document.name(),
        summary.rows,
        summary.commands,
        summary.unknown_commands,
        summary.malformed_sequences
    );

    Ok((page, summary))
}

/// Read a file and interpret it with default options.
pub fn load(path: impl AsRef<Path>) -> DocumentResult<Page> {
    load_with_options(path, &ImportOptions::default())
}

/// Read a file and interpret it.
pub fn load_with_options(path: impl AsRef<Path>, options: &ImportOptions) -> DocumentResult<Page> {
    let document = Document::from_file(path)?;
    let (page, _) = import(&document, options)?;
    Ok(page)
}

// ---------- tests ----------
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imports_in_memory_document() {
        let doc = Document::from("\x1B[1;34mhi");
        let (page, summary) = import(&doc, &ImportOptions::default()).unwrap();
        assert_eq!(page.height(), 1);
        assert_eq!(summary.commands, 1);
        assert_eq!(page.row_text(0).trim_end(), "hi");
    }

    #[test]
    fn zero_width_is_rejected() {
        let doc = Document::from("x");
        let err = import(&doc, &ImportOptions::new().with_width(0)).unwrap_err();
        assert!(matches!(err, DocumentError::InvalidWidth { width: 0 }));
    }

    #[test]
    fn row_limit_is_forwarded() {
        let doc = Document::from_bytes(b"a\r\nb\r\nc\r\nd".to_vec());
        let options = ImportOptions::new().with_row_limit(2);
        let (page, summary) = import(&doc, &options).unwrap();
        assert_eq!(page.height(), 2);
        assert!(summary.truncated);
    }

    #[test]
    fn sauce_trailer_stays_out_of_the_page() {
        let doc = Document::from_bytes(b"art\x1ASAUCE00junk".to_vec());
        let (page, summary) = import(&doc, &ImportOptions::default()).unwrap();
        assert_eq!(page.height(), 1);
        assert_eq!(page.row_text(0).trim_end(), "art");
        assert!(summary.stopped_at_sub);
    }

    #[test]
    fn default_options_match_documented_values() {
        let options = ImportOptions::default();
        assert_eq!(options.width, 80);
        assert_eq!(options.row_limit, DEFAULT_ROW_LIMIT);
    }
}
