//! Integration tests for the full cleaning pipeline over a real-shaped
//! archive fixture.

use aozora_oxide::{detect_and_decode, CleaningPipeline};

const FIXTURE_PATH: &str = "tests/fixtures/wagahai.txt";

fn clean_fixture() -> aozora_oxide::CleanDocument {
    let bytes = std::fs::read(FIXTURE_PATH).expect("fixture should exist");
    let decoded = detect_and_decode(&bytes).expect("fixture should decode");
    assert_eq!(decoded.encoding, "UTF-8");
    CleaningPipeline::new().run(&decoded.text)
}

#[test]
fn test_title_and_author_come_from_the_first_two_lines() {
    let doc = clean_fixture();
    assert_eq!(doc.title, "吾輩は猫である");
    assert_eq!(doc.author, "夏目漱石");
}

#[test]
fn test_preamble_block_is_gone() {
    let doc = clean_fixture();
    let text = doc.assemble();
    assert!(!text.contains("テキスト中に現れる記号について"));
    assert!(!text.contains("-----"));
}

#[test]
fn test_colophon_is_gone() {
    let doc = clean_fixture();
    let text = doc.assemble();
    assert!(!text.contains("底本"));
    assert!(!text.contains("入力："));
    assert!(!text.contains("校正："));
}

#[test]
fn test_annotation_markup_is_gone_but_dialogue_quotes_survive() {
    let doc = clean_fixture();
    let text = doc.assemble();
    for forbidden in ["《", "》", "［＃", "｜", "／＼", "〔", "〕"] {
        assert!(!text.contains(forbidden), "{forbidden} should be stripped");
    }
    assert!(text.contains("「なんでも構わない」と書生は言った。"));
}

#[test]
fn test_body_lines_are_cleaned_in_place() {
    let doc = clean_fixture();
    // Leading blank line (between author block and heading) is preserved;
    // stripping never drops or reorders lines.
    assert_eq!(doc.body[0], "");
    assert_eq!(doc.body[1], "一");
    assert_eq!(doc.body[3], "　吾輩は猫である。名前はまだ無い。");
    assert_eq!(doc.body[6], "　いろあって、その後も暮らした。");
}

#[test]
fn test_assembled_document_shape() {
    let doc = clean_fixture();
    let text = doc.assemble();
    assert!(text.starts_with("吾輩は猫である\n夏目漱石\n\n"));
    assert!(text.ends_with('\n'));
    assert_eq!(doc.char_count(), text.chars().count());
}

#[test]
fn test_shift_jis_fixture_cleans_identically() {
    // The same fixture transcoded to Shift_JIS must clean to the same document.
    let utf8 = std::fs::read_to_string(FIXTURE_PATH).expect("fixture should exist");
    let (sjis, _, _) = encoding_rs::SHIFT_JIS.encode(&utf8);
    let decoded = detect_and_decode(&sjis).expect("shift_jis fixture should decode");
    assert_eq!(decoded.encoding, "Shift_JIS");
    let doc = CleaningPipeline::new().run(&decoded.text);
    assert_eq!(doc, clean_fixture());
}
