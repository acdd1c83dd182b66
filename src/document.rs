// src/document.rs
use std::path::Path;

use tracing::debug;

use crate::error::DocumentResult;

/// DOS end-of-file marker separating art bytes from any SAUCE trailer.
const SUB: u8 = 0x1A;

/// Raw bytes of one ANSI art source, file-backed or in-memory.
#[derive(Clone, Debug)]
pub struct Document {
    name: String,
    bytes: Vec<u8>,
}

impl Document {
    /// Read a document from disk.
    pub fn from_file(path: impl AsRef<Path>) -> DocumentResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let name = path.display().to_string();
        debug!("Loaded document {} ({} bytes)", name, bytes.len());
        Ok(Self { name, bytes })
    }

    /// Wrap bytes already in memory.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            name: String::from("<memory>"),
            bytes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Everything, art and trailer alike.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The interpretable prefix: bytes before the first SUB marker.
    pub fn art_bytes(&self) -> &[u8] {
        match memchr::memchr(SUB, &self.bytes) {
            Some(pos) => &self.bytes[..pos],
            None => &self.bytes,
        }
    }

    /// The trailer after the first SUB marker, usually a SAUCE record.
    /// `None` when the document has no marker at all.
    pub fn sauce_bytes(&self) -> Option<&[u8]> {
        memchr::memchr(SUB, &self.bytes).map(|pos| &self.bytes[pos + 1..])
    }
}

impl From<Vec<u8>> for Document {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::from_bytes(text.as_bytes().to_vec())
    }
}

// ---------- tests ----------
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_art_from_sauce_trailer() {
        let doc = Document::from_bytes(b"art\x1ASAUCE00".to_vec());
        assert_eq!(doc.art_bytes(), b"art");
        assert_eq!(doc.sauce_bytes(), Some(&b"SAUCE00"[..]));
        assert_eq!(doc.bytes().len(), 11);
    }

    #[test]
    fn no_marker_means_no_trailer() {
        let doc = Document::from_bytes(b"plain art".to_vec());
        assert_eq!(doc.art_bytes(), b"plain art");
        assert_eq!(doc.sauce_bytes(), None);
    }

    #[test]
    fn marker_at_end_gives_empty_trailer() {
        let doc = Document::from_bytes(b"art\x1A".to_vec());
        assert_eq!(doc.art_bytes(), b"art");
        assert_eq!(doc.sauce_bytes(), Some(&b""[..]));
    }

    #[test]
    fn only_the_first_marker_splits() {
        let doc = Document::from_bytes(b"a\x1Ab\x1Ac".to_vec());
        assert_eq!(doc.art_bytes(), b"a");
        assert_eq!(doc.sauce_bytes(), Some(&b"b\x1Ac"[..]));
    }

    #[test]
    fn from_str_wraps_text() {
        let doc = Document::from("hello");
        assert_eq!(doc.bytes(), b"hello");
        assert_eq!(doc.name(), "<memory>");
    }
}
