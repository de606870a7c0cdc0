//! # Aozora Oxide
//!
//! Cleaner for Aozora Bunko-style Japanese literary archive files: detects
//! and decodes the legacy source encoding, strips the explanatory preamble,
//! the bibliographic colophon, and all inline annotation markup (ruby
//! glosses, editorial instructions, layout marks), and reassembles the
//! result as plain reading text, optionally split into sequential files
//! sized to a target reading duration.
//!
//! ## Pipeline
//!
//! ```text
//! raw bytes → encoding → preamble → metadata → footer → annotations → CleanDocument
//!                                                                        ↓
//!                                                          stdout / file / chunk files
//! ```
//!
//! The pipeline is single-threaded and strictly sequential; a run either
//! completes every stage or aborts at the first failure with no partial
//! output.
//!
//! ## Quick Start
//!
//! ```
//! use aozora_oxide::encoding::detect_and_decode;
//! use aozora_oxide::pipeline::CleaningPipeline;
//! use aozora_oxide::splitter::split_into_chunks;
//!
//! # fn main() -> aozora_oxide::error::Result<()> {
//! let bytes = "作品名\n著者\n本文である。\n底本：出版社\n".as_bytes();
//! let decoded = detect_and_decode(bytes)?;
//! let doc = CleaningPipeline::new().run(&decoded.text);
//! assert_eq!(doc.body, vec!["本文である。"]);
//!
//! // 300 chars/minute × 20 minutes per chunk
//! let chunks = split_into_chunks(&doc.assemble(), 300 * 20);
//! assert_eq!(chunks.len(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Source decoding
pub mod encoding;

// Structural extraction and markup removal
pub mod converters;
pub mod extractors;

// Document model and orchestration
pub mod config;
pub mod document;
pub mod pipeline;
pub mod splitter;

pub use config::ReaderConfig;
pub use document::CleanDocument;
pub use encoding::{detect_and_decode, DecodedText};
pub use error::{Error, Result};
pub use pipeline::CleaningPipeline;
pub use splitter::{chunk_path, split_into_chunks, Chunk};
