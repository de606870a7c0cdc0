//! Removal of inline annotation markup.
//!
//! Cleaning runs as two discrete, ordered passes so each pass's pattern set
//! can be tested in isolation:
//!
//! 1. Ruby and editorial markup: the ruby trigger `｜`, ruby glosses in
//!    `《…》`, editorial instructions in `［＃…］`, and the brace and white
//!    bracket spans `｛…｝` / `〚…〛`.
//! 2. Layout marks: tortoise-shell spans `〔…〕` and the repetition marks
//!    `／＼` and `／"＼`.
//!
//! Corner-bracket quotes `「」` are dialogue, not markup; no pattern here
//! can match them.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for a ruby gloss with its delimiters: 《…》
    static ref RE_RUBY_GLOSS: Regex = Regex::new("《[^》]*》").unwrap();

    /// Regex for an editorial instruction with its delimiters: ［＃…］
    static ref RE_EDITORIAL: Regex = Regex::new("［＃[^］]*］").unwrap();

    /// Regex for a full-width brace span: ｛…｝
    static ref RE_BRACE_SPAN: Regex = Regex::new("｛[^｝]*｝").unwrap();

    /// Regex for a white square bracket span: 〚…〛
    static ref RE_WHITE_BRACKET_SPAN: Regex = Regex::new("〚[^〛]*〛").unwrap();

    /// Regex for a tortoise-shell bracket span: 〔…〕
    static ref RE_TORTOISE_SPAN: Regex = Regex::new("〔[^〕]*〕").unwrap();
}

/// The ruby trigger mark preceding the glossed run.
const RUBY_TRIGGER: &str = "｜";

/// Repetition mark, plain form.
const REPEAT_MARK: &str = "／＼";

/// Repetition mark, voiced form as it appears in the wild.
///
/// The embedded ASCII quote is matched literally; see DESIGN.md for why this
/// asymmetric spelling is kept.
const REPEAT_MARK_VOICED: &str = "／\"＼";

/// Pass 1: delete ruby and editorial markup from one line.
///
/// Removes the ruby trigger `｜`, ruby glosses `《…》` with their delimiters,
/// editorial instructions `［＃…］` with their delimiters, and the span
/// forms `｛…｝` and `〚…〛`. An unpaired opening delimiter matches nothing
/// and passes through as text.
pub fn strip_ruby_markup(line: &str) -> String {
    let line = line.replace(RUBY_TRIGGER, "");
    let line = RE_RUBY_GLOSS.replace_all(&line, "");
    let line = RE_EDITORIAL.replace_all(&line, "");
    let line = RE_BRACE_SPAN.replace_all(&line, "");
    RE_WHITE_BRACKET_SPAN.replace_all(&line, "").into_owned()
}

/// Pass 2: delete layout marks from one line.
///
/// Removes tortoise-shell spans `〔…〕` and both spellings of the
/// repetition mark, `／＼` and `／"＼`. The two spellings do not overlap,
/// so their removal order is immaterial.
pub fn strip_layout_marks(line: &str) -> String {
    let line = RE_TORTOISE_SPAN.replace_all(line, "");
    let line = line.replace(REPEAT_MARK, "");
    line.replace(REPEAT_MARK_VOICED, "")
}

/// Run both passes over one line, in order.
pub fn strip_annotations(line: &str) -> String {
    strip_layout_marks(&strip_ruby_markup(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ruby_trigger_and_gloss_are_deleted() {
        let line = "吾輩は｜猫《ねこ》である";
        assert_eq!(strip_ruby_markup(line), "吾輩は猫である");
    }

    #[test]
    fn test_editorial_instruction_is_deleted() {
        let line = "［＃ここから２字下げ］その後で";
        assert_eq!(strip_ruby_markup(line), "その後で");
    }

    #[test]
    fn test_brace_and_white_bracket_spans_are_deleted() {
        assert_eq!(strip_ruby_markup("前｛中身｝後"), "前後");
        assert_eq!(strip_ruby_markup("前〚中身〛後"), "前後");
    }

    #[test]
    fn test_multiple_glosses_on_one_line() {
        let line = "山《やま》と川《かわ》と海《うみ》";
        assert_eq!(strip_ruby_markup(line), "山と川と海");
    }

    #[test]
    fn test_corner_quotes_survive_pass_one() {
        let line = "「おい、｜猫《ねこ》」と言った";
        let cleaned = strip_ruby_markup(line);
        assert_eq!(cleaned, "「おい、猫」と言った");
        assert_eq!(
            line.matches('「').count(),
            cleaned.matches('「').count()
        );
        assert_eq!(
            line.matches('」').count(),
            cleaned.matches('」').count()
        );
    }

    #[test]
    fn test_unpaired_opener_passes_through() {
        assert_eq!(strip_ruby_markup("途中で《切れた"), "途中で《切れた");
        assert_eq!(strip_ruby_markup("途中で［＃切れた"), "途中で［＃切れた");
    }

    #[test]
    fn test_tortoise_span_is_deleted() {
        assert_eq!(strip_layout_marks("〔編者注〕本文"), "本文");
    }

    #[test]
    fn test_repetition_marks_are_deleted() {
        assert_eq!(strip_layout_marks("いろ／＼の花"), "いろの花");
        assert_eq!(strip_layout_marks("さま／\"＼な声"), "さまな声");
    }

    #[test]
    fn test_both_passes_together() {
        let line = "〔注〕彼は｜東京《とうきょう》で色々／＼［＃改行］暮らした";
        assert_eq!(strip_annotations(line), "彼は東京で色々暮らした");
    }

    #[test]
    fn test_empty_result_is_allowed() {
        assert_eq!(strip_annotations("《よみ》"), "");
        assert_eq!(strip_annotations(""), "");
    }

    #[test]
    fn test_plain_line_is_unchanged() {
        let line = "何の変哲もない一行。";
        assert_eq!(strip_annotations(line), line);
    }
}
