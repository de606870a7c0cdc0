//! Source encoding detection and transcoding.
//!
//! Archive files ship in whatever encoding their transcriber used: most
//! often Shift_JIS, sometimes EUC-JP, ISO-2022-JP, or UTF-8 with or without
//! a BOM. This module sniffs the encoding and decodes everything to a single
//! UTF-8 `String` before any other stage runs. The detected label is kept
//! for diagnostics only; it never influences later stages.

use chardetng::EncodingDetector;

use crate::error::{Error, Result};

/// Decoded input text together with the encoding it was decoded from.
#[derive(Debug, Clone)]
pub struct DecodedText {
    /// The full input, transcoded to UTF-8 with LF line endings.
    pub text: String,
    /// Canonical name of the encoding actually used for decoding.
    pub encoding: &'static str,
}

/// Detect the encoding of `bytes` and decode them to UTF-8.
///
/// Detection feeds the complete input to the detector, so short files and
/// files whose distinguishing bytes sit near the end are handled the same as
/// streams. A byte-order mark, when present, overrides the guess. Line
/// endings are normalized to LF so that downstream per-line character
/// counting is stable across CRLF and CR sources.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the input contains byte sequences that are
/// malformed under the detected encoding. The run aborts; no partial text is
/// produced.
pub fn detect_and_decode(bytes: &[u8]) -> Result<DecodedText> {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let guessed = detector.guess(None, true);
    log::debug!("encoding guess: {}", guessed.name());

    // decode() sniffs a BOM first, falling back to the guess, and reports
    // the encoding it actually used.
    let (text, used, had_errors) = guessed.decode(bytes);
    if had_errors {
        return Err(Error::Decode {
            encoding: used.name().to_string(),
        });
    }

    let text = normalize_newlines(&text);
    Ok(DecodedText {
        text,
        encoding: used.name(),
    })
}

/// Rewrite CRLF and lone CR line endings to LF.
fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
