//! Title and author extraction.
//!
//! The first two lines of an archive file are the work's title and author.
//! Both lines routinely carry extra decoration (Latin transliterations,
//! digits, full-width punctuation), so each is filtered down to Japanese
//! script proper.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for every character outside the permitted script ranges:
    /// kanji, hiragana, katakana, the iteration marks 々〆〤, and the
    /// prolonged-sound mark ー
    static ref RE_NOT_JAPANESE: Regex = Regex::new("[^一-龠ぁ-んァ-ヶ々〆〤ー]").unwrap();
}

/// Split off title and author, yielding the remaining lines as body candidate.
///
/// Line 1 becomes the title and line 2 the author, each reduced to the
/// permitted script ranges. A line with no qualifying characters filters to
/// the empty string, which is not an error. Everything from line 3 onward is
/// returned untouched, in order. Inputs shorter than two lines yield empty
/// strings for the missing parts and an empty body candidate.
pub fn extract_metadata<'a>(lines: &[&'a str]) -> (String, String, Vec<&'a str>) {
    let title = lines.first().map(|l| filter_to_japanese(l)).unwrap_or_default();
    let author = lines.get(1).map(|l| filter_to_japanese(l)).unwrap_or_default();
    let body = lines.iter().skip(2).copied().collect();
    (title, author, body)
}

/// Remove every character outside the permitted script ranges.
fn filter_to_japanese(line: &str) -> String {
    RE_NOT_JAPANESE.replace_all(line, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_author_are_filtered() {
        let lines = vec!["作品名タイトル123", "著者名ABC", "本文開始。"];
        let (title, author, body) = extract_metadata(&lines);
        assert_eq!(title, "作品名タイトル");
        assert_eq!(author, "著者名");
        assert_eq!(body, vec!["本文開始。"]);
    }

    #[test]
    fn test_prolonged_sound_and_iteration_marks_survive() {
        let lines = vec!["スターウォーズ々", "〆切〤", "x"];
        let (title, author, _) = extract_metadata(&lines);
        assert_eq!(title, "スターウォーズ々");
        assert_eq!(author, "〆切〤");
    }

    #[test]
    fn test_spaces_and_punctuation_are_dropped() {
        let lines = vec!["吾輩は猫である（上）", "夏目 漱石", ""];
        let (title, author, _) = extract_metadata(&lines);
        assert_eq!(title, "吾輩は猫である上");
        assert_eq!(author, "夏目漱石");
    }

    #[test]
    fn test_fully_foreign_line_filters_to_empty() {
        let lines = vec!["THE GREAT GATSBY", "F. Scott Fitzgerald", "body"];
        let (title, author, body) = extract_metadata(&lines);
        assert_eq!(title, "");
        assert_eq!(author, "");
        assert_eq!(body, vec!["body"]);
    }

    #[test]
    fn test_short_input() {
        let (title, author, body) = extract_metadata(&["題名"]);
        assert_eq!(title, "題名");
        assert_eq!(author, "");
        assert!(body.is_empty());

        let (title, author, body) = extract_metadata(&[]);
        assert_eq!(title, "");
        assert_eq!(author, "");
        assert!(body.is_empty());
    }
}
