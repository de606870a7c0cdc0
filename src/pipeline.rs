//! The archive cleaning pipeline.
//!
//! Stages run strictly in order, each fully consuming its input before the
//! next begins:
//!
//! ```text
//! raw bytes
//!     ↓
//! [encoding::detect_and_decode]  (bytes → UTF-8 text)
//!     ↓
//! [extractors::strip_preamble]   (delete the dashed note block)
//!     ↓
//! [extractors::extract_metadata] (lines 1-2 → title/author)
//!     ↓
//! [extractors::truncate_at_footer] (cut the colophon)
//!     ↓
//! [converters::strip_annotations] (per-line markup removal)
//!     ↓
//! CleanDocument
//! ```
//!
//! Decoding is kept outside the pipeline so tests and library callers can
//! feed already-decoded text directly.

use crate::converters::strip_annotations;
use crate::document::CleanDocument;
use crate::extractors::{extract_metadata, strip_preamble, truncate_at_footer};

/// Runs the cleaning stages over decoded archive text.
///
/// The pipeline holds no per-document state; one instance can clean any
/// number of documents sequentially.
#[derive(Debug, Clone, Default)]
pub struct CleaningPipeline;

impl CleaningPipeline {
    /// Create a new pipeline.
    pub fn new() -> Self {
        Self
    }

    /// Clean one decoded archive text into a [`CleanDocument`].
    pub fn run(&self, text: &str) -> CleanDocument {
        let lines: Vec<&str> = text.lines().collect();
        log::debug!("input: {} lines", lines.len());

        let lines = strip_preamble(&lines);
        log::debug!("after preamble strip: {} lines", lines.len());

        let (title, author, candidate) = extract_metadata(&lines);
        let body = truncate_at_footer(&candidate);
        log::debug!("body: {} lines", body.len());

        let body = body.iter().map(|line| strip_annotations(line)).collect();
        CleanDocument { title, author, body }
    }
}
