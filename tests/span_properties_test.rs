// Span production properties over a mixed corpus
//
// Ordering, gap reconstruction, classification, and the worked examples.

use pinyin_tones_wasm::models::{is_tone_char, Tone};
use pinyin_tones_wasm::parse::{classify, tone_spans, TokenMatcher};

const CORPUS: &[&str] = &[
    "",
    "mā mǎ mà ma",
    "nǐhǎo",
    "hello world",
    "Wǒ ài nǐ",
    "Zhōngguó rén, lǜsè de shù!",
    "  leading and trailing  ",
    "ǎ😀mà — xièxiē\n\tzàijiàn",
    "snake_case_ǒ 42mā 3.14",
    "fêng ü lüè",
];

#[test]
fn test_example_tones_by_syllable() {
    let text = "mā mǎ mà ma";
    let spans = tone_spans(text);
    let found: Vec<(&str, Tone)> = spans.iter().map(|s| (&text[s.start..s.end], s.tone)).collect();
    assert_eq!(found, vec![("mā", Tone::First), ("mǎ", Tone::Third), ("mà", Tone::Fourth)]);
}

#[test]
fn test_example_joined_syllables_take_first_tone() {
    let spans = tone_spans("nǐhǎo");
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].start, 0);
    assert_eq!(spans[0].end, "nǐhǎo".len());
    assert_eq!(spans[0].tone, Tone::Third);
}

#[test]
fn test_example_no_diacritics() {
    assert!(tone_spans("hello world").is_empty());
}

#[test]
fn test_example_empty_input() {
    assert_eq!(TokenMatcher::new("").count(), 0);
    assert!(tone_spans("").is_empty());
}

#[test]
fn test_spans_sorted_and_disjoint() {
    for text in CORPUS {
        let spans = tone_spans(text);
        for pair in spans.windows(2) {
            assert!(pair[0].end <= pair[1].start, "overlap in {:?}: {:?}", text, pair);
        }
        for span in &spans {
            assert!(span.start < span.end && span.end <= text.len(), "out of bounds in {:?}", text);
        }
    }
}

#[test]
fn test_gaps_and_tokens_rebuild_text() {
    for text in CORPUS {
        let mut rebuilt = String::new();
        let mut cursor = 0;
        for token in TokenMatcher::new(text) {
            rebuilt.push_str(&text[cursor..token.start]);
            rebuilt.push_str(token.text);
            cursor = token.end;
        }
        rebuilt.push_str(&text[cursor..]);
        assert_eq!(&rebuilt, text);
    }
}

#[test]
fn test_toneless_tokens_are_omitted() {
    for text in CORPUS {
        let spans = tone_spans(text);
        for token in TokenMatcher::new(text) {
            let has_diacritic = token.text.chars().any(is_tone_char);
            let emitted = spans.iter().any(|s| s.start == token.start && s.end == token.end);
            assert_eq!(has_diacritic, emitted, "token {:?} in {:?}", token.text, text);
        }
    }
}

#[test]
fn test_first_diacritic_decides() {
    for text in CORPUS {
        for span in tone_spans(text) {
            let word = &text[span.start..span.end];
            let first = word.chars().find(|c| is_tone_char(*c)).and_then(|c| classify(&c.to_string()));
            assert_eq!(Some(span.tone), first, "word {:?}", word);
        }
    }
}

#[test]
fn test_repeated_runs_agree() {
    for text in CORPUS {
        assert_eq!(tone_spans(text), tone_spans(text));
    }
}
