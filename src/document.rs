//! Cleaned document model and final assembly.

use std::fmt;

/// A cleaned literary document: filtered title and author plus the body
/// lines with all annotation markup removed.
///
/// Produced once per run by the cleaning pipeline and immutable afterwards.
/// Assembly, character counting, and the reading-time estimate are pure
/// computations; callers decide whether the result goes to a file, stdout,
/// or the chunk splitter.
///
/// # Example
///
/// ```
/// use aozora_oxide::document::CleanDocument;
///
/// let doc = CleanDocument {
///     title: "吾輩は猫である".to_string(),
///     author: "夏目漱石".to_string(),
///     body: vec!["吾輩は猫である。".to_string()],
/// };
/// assert!(doc.assemble().starts_with("吾輩は猫である\n夏目漱石\n\n"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct CleanDocument {
    /// Work title, reduced to Japanese script (may be empty).
    pub title: String,
    /// Author name, reduced to Japanese script (may be empty).
    pub author: String,
    /// Body lines in original order, annotation markup removed.
    pub body: Vec<String>,
}

impl fmt::Debug for CleanDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CleanDocument")
            .field("title", &self.title)
            .field("author", &self.author)
            .field("body_lines", &self.body.len())
            .finish()
    }
}

impl CleanDocument {
    /// Assemble the final document text.
    ///
    /// Title line, author line, one blank line, then every body line in
    /// order, each terminated by exactly one newline.
    pub fn assemble(&self) -> String {
        let body_len: usize = self.body.iter().map(|l| l.len() + 1).sum();
        let mut out = String::with_capacity(self.title.len() + self.author.len() + 3 + body_len);
        out.push_str(&self.title);
        out.push('\n');
        out.push_str(&self.author);
        out.push('\n');
        out.push('\n');
        for line in &self.body {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Codepoint count of the assembled document, newlines included.
    pub fn char_count(&self) -> usize {
        // Equivalent to assemble().chars().count() without the big allocation:
        // each of the 3 + body.len() lines contributes its codepoints plus
        // one newline.
        self.title.chars().count()
            + self.author.chars().count()
            + 3
            + self
                .body
                .iter()
                .map(|l| l.chars().count() + 1)
                .sum::<usize>()
    }

    /// Estimated reading time in minutes at `speed` characters per minute,
    /// rounded up.
    pub fn reading_minutes(&self, speed: u32) -> u32 {
        let total = self.char_count() as u64;
        total.div_ceil(u64::from(speed)) as u32
    }
}
