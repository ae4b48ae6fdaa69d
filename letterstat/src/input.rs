// letterstat/src/input.rs
//! Reads corpus files and hands the core a decoded string.
//!
//! Files are checked for existence, sniffed for binary content and decoded
//! from whatever charset `chardetng` guesses (UTF-8, windows-1251, KOI8-R, ...).

use std::fs;
use std::path::Path;

use encoding_rs::{Encoding, UTF_8};
use log::debug;

use letterstat_core::LetterstatError;

/// How many leading bytes are inspected for NUL bytes.
pub const SNIFF_LEN: usize = 8192;

/// A decoded text file.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedText {
    pub text: String,
    /// Name of the encoding the bytes were decoded from.
    pub encoding: &'static str,
}

/// True if the first [`SNIFF_LEN`] bytes contain a NUL byte.
pub fn looks_binary(bytes: &[u8]) -> bool {
    bytes.iter().take(SNIFF_LEN).any(|&b| b == 0)
}

/// Guesses the charset of `bytes`.
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }
    if std::str::from_utf8(bytes).is_ok() {
        return UTF_8;
    }
    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}

/// Decodes raw bytes, rejecting binary data and malformed sequences.
pub fn decode_bytes(bytes: &[u8], source: &str) -> Result<DecodedText, LetterstatError> {
    if looks_binary(bytes) {
        return Err(LetterstatError::UnreadableInput(format!("{} looks like a binary file", source)));
    }

    let encoding = detect_encoding(bytes);
    let (text, actual, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(LetterstatError::UnreadableInput(format!(
            "{} could not be decoded as {}",
            source,
            actual.name()
        )));
    }
    debug!("Decoded {} as {} ({} bytes).", source, actual.name(), bytes.len());

    Ok(DecodedText { text: text.into_owned(), encoding: actual.name() })
}

/// Reads and decodes the file at `path`.
pub fn read_text(path: &Path) -> Result<DecodedText, LetterstatError> {
    let source = path.display().to_string();
    if !path.exists() {
        return Err(LetterstatError::UnreadableInput(format!("{} does not exist", source)));
    }
    if !path.is_file() {
        return Err(LetterstatError::UnreadableInput(format!("{} is not a regular file", source)));
    }

    let bytes = fs::read(path)?;
    decode_bytes(&bytes, &source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "Съешь же ещё этих мягких французских булок, да выпей же чаю. \
        В чащах юга жил бы цитрус? Да, но фальшивый экземпляр!";

    #[test]
    fn utf8_fast_path() {
        let decoded = decode_bytes("привет".as_bytes(), "mem").unwrap();
        assert_eq!(decoded.text, "привет");
        assert_eq!(decoded.encoding, "UTF-8");
    }

    #[test]
    fn detects_windows_1251() {
        let (bytes, _, _) = encoding_rs::WINDOWS_1251.encode(SAMPLE);
        let decoded = decode_bytes(&bytes, "mem").unwrap();
        assert_eq!(decoded.encoding, "windows-1251");
        assert_eq!(decoded.text, SAMPLE);
    }

    #[test]
    fn rejects_binary_content() {
        let err = decode_bytes(b"\x89PNG\r\n\x1a\n\0\0\0", "image.png").unwrap_err();
        assert!(matches!(err, LetterstatError::UnreadableInput(ref m) if m.contains("binary")));
    }

    #[test]
    fn nul_after_sniff_window_is_not_binary() {
        let mut bytes = vec![b'a'; SNIFF_LEN];
        bytes.push(0);
        assert!(!looks_binary(&bytes));
    }

    #[test]
    fn missing_file_is_unreadable() {
        let err = read_text(Path::new("/no/such/corpus.txt")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn reads_file_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all("абв".as_bytes()).unwrap();
        let decoded = read_text(file.path()).unwrap();
        assert_eq!(decoded.text, "абв");
    }
}
