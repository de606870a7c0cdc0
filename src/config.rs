//! Run configuration.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Default reading speed in characters per minute.
pub const DEFAULT_SPEED: u32 = 300;

/// Configuration for one cleaning run.
///
/// Collected by the command-line layer and validated before the core is
/// invoked; the library stages themselves only ever see the resulting
/// numbers.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Reading speed in characters per minute.
    pub speed: u32,

    /// Minutes of reading per chunk; `Some` requests chunked output.
    pub minutes_per_chunk: Option<u32>,

    /// Destination file; `None` writes the document to stdout.
    pub output: Option<PathBuf>,

    /// Whether `speed` was supplied explicitly rather than defaulted.
    pub speed_overridden: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ReaderConfig {
    /// Create a configuration with defaults: 300 chars/minute, no chunking,
    /// stdout output.
    pub fn new() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            minutes_per_chunk: None,
            output: None,
            speed_overridden: false,
        }
    }

    /// Set the reading speed, marking it as explicitly supplied.
    pub fn with_speed(mut self, speed: u32) -> Self {
        self.speed = speed;
        self.speed_overridden = true;
        self
    }

    /// Request chunked output at `minutes` of reading per chunk.
    pub fn with_minutes_per_chunk(mut self, minutes: u32) -> Self {
        self.minutes_per_chunk = Some(minutes);
        self
    }

    /// Set the destination file.
    pub fn with_output(mut self, output: PathBuf) -> Self {
        self.output = Some(output);
        self
    }

    /// Character budget per chunk, when chunking was requested.
    pub fn budget(&self) -> Option<usize> {
        self.minutes_per_chunk
            .map(|minutes| self.speed as usize * minutes as usize)
    }

    /// Reject flag combinations with no defined meaning: an explicit speed
    /// or any chunk time requires a destination file.
    pub fn validate(&self) -> Result<()> {
        if self.output.is_none() && (self.speed_overridden || self.minutes_per_chunk.is_some()) {
            return Err(Error::FlagCombination(
                "--speed and --time require --output".to_string(),
            ));
        }
        Ok(())
    }
}
