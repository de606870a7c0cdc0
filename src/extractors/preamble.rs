//! Deletion of the explanatory preamble block.
//!
//! Archive files carry a block of transcription notes between two horizontal
//! rule lines of repeated dashes. The whole block, rules included, is not
//! part of the literary text and is deleted before metadata extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for a horizontal rule line: 50 or more dashes at line start
    static ref RE_RULE: Regex = Regex::new(r"^-{50,}").unwrap();
}

/// Delete the dashed explanation block from `lines`.
///
/// Scans for the first line opening with 50+ consecutive dashes and deletes
/// every line from there through the next such line, both rules inclusive.
/// When no closing rule exists the deletion runs to the end of input: an
/// opening rule always swallows the rest of the file. Input without any rule
/// line is returned unchanged.
pub fn strip_preamble<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    let Some(start) = lines.iter().position(|line| RE_RULE.is_match(line)) else {
        return lines.to_vec();
    };

    let end = lines[start + 1..]
        .iter()
        .position(|line| RE_RULE.is_match(line))
        .map(|offset| start + 1 + offset);

    let mut result = Vec::with_capacity(lines.len());
    result.extend_from_slice(&lines[..start]);
    if let Some(end) = end {
        result.extend_from_slice(&lines[end + 1..]);
    }
    result
}
