//! Splitting the final document into reading-time chunks.
//!
//! Line breaks are meaningful typographic units in the source material, so a
//! chunk boundary never falls inside a line: the splitter accumulates whole
//! lines until the character budget is reached and overshoots slightly
//! rather than fragmenting a line. Concatenating the chunks in sequence
//! order reproduces the input exactly.

/// One sequentially numbered output unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// 1-based sequence number, in flush order.
    pub seq: usize,
    /// Chunk text; whole lines, each newline-terminated.
    pub text: String,
}

/// Partition `document` into chunks of at least `budget` characters.
///
/// A line costs its codepoint count plus one for the terminating newline.
/// Lines accumulate in order; once the running total reaches `budget` the
/// accumulator flushes as the next chunk and the count resets. A non-empty
/// remainder flushes as one final, possibly under-budget chunk; an empty
/// accumulator never flushes, so no chunk is ever empty.
///
/// # Example
///
/// ```
/// use aozora_oxide::splitter::split_into_chunks;
///
/// let chunks = split_into_chunks("短い\n行が\n続く\n", 4);
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(chunks[0].text, "短い\n行が\n");
/// assert_eq!(chunks[1].text, "続く\n");
/// ```
pub fn split_into_chunks(document: &str, budget: usize) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut acc = String::new();
    let mut count = 0usize;

    for line in document.lines() {
        acc.push_str(line);
        acc.push('\n');
        count += line.chars().count() + 1;
        if count >= budget {
            chunks.push(Chunk {
                seq: chunks.len() + 1,
                text: std::mem::take(&mut acc),
            });
            count = 0;
        }
    }

    if !acc.is_empty() {
        chunks.push(Chunk {
            seq: chunks.len() + 1,
            text: acc,
        });
    }

    chunks
}

/// Derive the file name for chunk `seq` from the output name.
///
/// A trailing `.txt` is stripped before the `_NNN.txt` suffix is appended,
/// so `story.txt` yields `story_001.txt` and a bare `story` does too.
pub fn chunk_path(output: &str, seq: usize) -> String {
    let stem = output.strip_suffix(".txt").unwrap_or(output);
    format!("{stem}_{seq:03}.txt")
}
