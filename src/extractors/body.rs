//! Truncation of the bibliographic footer.
//!
//! Archive files end with colophon lines naming the printed source, the
//! transcriber, and the proofreader. The first such line marks the end of
//! the literary body; it and everything after it are dropped.

/// Line prefixes that open the bibliographic footer, checked top to bottom.
const END_MARKERS: &[&str] = &[
    "底本：",
    "底本の親本：",
    "初出：",
    "入力：",
    "校正：",
    "青空文庫作成ファイル：",
];

/// Cut the body candidate at the first footer line.
///
/// Scans lines top to bottom; the first line starting with any of the footer
/// prefixes, and every line after it, is dropped. The truncation is
/// one-directional: once a marker matches, no later line is reconsidered.
/// Without a match the candidate is returned whole.
pub fn truncate_at_footer<'a, 'b>(lines: &'a [&'b str]) -> &'a [&'b str] {
    match lines
        .iter()
        .position(|line| END_MARKERS.iter().any(|marker| line.starts_with(marker)))
    {
        Some(idx) => &lines[..idx],
        None => lines,
    }
}
