//! Error types for the archive cleaning library.
//!
//! Every failure here is fatal: a run either completes all stages and
//! produces output, or aborts at the first failing stage with one of these.

use std::path::PathBuf;

/// Result type alias for archive cleaning operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while cleaning or splitting an archive text.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input bytes could not be transcoded to Unicode text.
    #[error("failed to decode input as {encoding}: malformed byte sequence")]
    Decode {
        /// Name of the encoding the decoder settled on
        encoding: String,
    },

    /// A named input file does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// No input was provided and standard input is a terminal.
    #[error("no input given and standard input is a terminal; pass --input or pipe text in")]
    NoInput,

    /// Flags were combined in a way that has no defined meaning.
    #[error("{0}")]
    FlagCombination(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
