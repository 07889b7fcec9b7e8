//! Reading input documents

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// A text file loaded for hyphenation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDocument {
    /// Label used in formatted output
    pub source: String,
    /// File contents without a leading byte order mark
    pub text: String,
}

/// Reads UTF-8 input files
pub struct FileReader;

impl FileReader {
    /// Read `path` as an input document
    ///
    /// Input must be UTF-8. A leading byte order mark would otherwise be
    /// copied into the hyphenated output, so it is dropped.
    pub fn read_document(path: &Path) -> Result<InputDocument> {
        let mut text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        if text.starts_with(BYTE_ORDER_MARK) {
            text.drain(..BYTE_ORDER_MARK.len_utf8());
        }
        log::debug!("Read {} ({} bytes)", path.display(), text.len());

        Ok(InputDocument {
            source: path.display().to_string(),
            text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_read_document() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "doc.txt", "Übung macht den Meister.\n".as_bytes());

        let document = FileReader::read_document(&path).unwrap();
        assert_eq!(document.text, "Übung macht den Meister.\n");
        assert!(document.source.ends_with("doc.txt"));
    }

    #[test]
    fn test_byte_order_mark_is_dropped() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "bom.txt", "\u{feff}hyphenation".as_bytes());

        let document = FileReader::read_document(&path).unwrap();
        assert_eq!(document.text, "hyphenation");
    }

    #[test]
    fn test_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "empty.txt", b"");

        assert_eq!(FileReader::read_document(&path).unwrap().text, "");
    }

    #[test]
    fn test_missing_file() {
        let err = FileReader::read_document(Path::new("/nonexistent/file.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "latin1.txt", &[0x48, 0xfc, 0x62]);

        assert!(FileReader::read_document(&path).is_err());
    }
}
