//! Integration tests for Japanese phrase segmentation
//!
//! Expected splits follow from the embedded weight table: particles
//! attach to the preceding word and a new phrase starts at a change of
//! script.

use bunsetsu_core::{Engine, EngineConfig};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_basic_sentence() {
    let engine = Engine::japanese().unwrap();
    let text = "私は東京に行きます。";

    assert_eq!(
        engine.phrases(text).unwrap(),
        vec!["私は", "東京に", "行きます。"]
    );
    // Byte offsets
    assert_eq!(engine.segment(text).unwrap(), vec![6, 15]);
}

#[test]
fn test_katakana_and_fullwidth_latin() {
    let engine = Engine::japanese().unwrap();
    assert_eq!(
        engine.phrases("しかもロゴがＵｎｉｃｏｄｅ！").unwrap(),
        vec!["しかも", "ロゴが", "Ｕｎｉｃｏｄｅ！"]
    );
}

#[test]
fn test_closing_punctuation_never_starts_a_phrase() {
    let engine = Engine::japanese().unwrap();
    let close = ['」', '。', '、', '！', '？', '）'];
    let text = "彼は「東京」に行った。それは、本当に（たぶん）良かった！";

    for phrase in engine.phrases(text).unwrap() {
        let first = phrase.chars().next().unwrap();
        assert!(!close.contains(&first), "phrase starts with {first:?}");
    }
}

#[test]
fn test_digits_stay_together() {
    let engine = Engine::japanese().unwrap();
    let phrases = engine.phrases("東京２０２５年").unwrap();
    assert!(phrases.iter().any(|p| p.starts_with("２０２５")));
}

#[test]
fn test_phrases_reassemble_to_input() {
    let engine = Engine::japanese().unwrap();
    let text = "今日は天気が良いので、公園でサッカーをしました。";
    assert_eq!(engine.phrases(text).unwrap().concat(), text);
}

#[test]
fn test_empty_and_single_character_input() {
    let engine = Engine::japanese().unwrap();
    assert!(engine.segment("").unwrap().is_empty());
    assert!(engine.phrases("").unwrap().is_empty());
    assert_eq!(engine.phrases("あ").unwrap(), vec!["あ"]);
}

#[test]
fn test_early_exit_does_not_change_results() {
    let mut config = EngineConfig::japanese().unwrap();
    let fast = config.build_engine().unwrap();
    config.model.early_exit = false;
    let exact = config.build_engine().unwrap();

    let text = "吾輩は猫である。名前はまだ無い。どこで生れたかとんと見当がつかぬ。";
    assert_eq!(fast.segment(text).unwrap(), exact.segment(text).unwrap());
}

#[test]
fn test_concurrent_segmentation() {
    let engine = Engine::japanese().unwrap();
    let texts = [
        "私は東京に行きます。",
        "しかもロゴがＵｎｉｃｏｄｅ！",
        "今日は天気が良いので、公園でサッカーをしました。",
        "吾輩は猫である。",
    ];
    let expected: Vec<Vec<usize>> = texts.iter().map(|t| engine.segment(t).unwrap()).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let engine = &engine;
                let text = texts[i % texts.len()];
                scope.spawn(move || engine.segment(text).unwrap())
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), expected[i % texts.len()]);
        }
    });
}

#[test]
fn test_custom_config_with_tsv_model() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("model.tsv"),
        "# hiragana to kanji\nBB2062071\t50\n",
    )
    .unwrap();
    let config_path = dir.path().join("custom.toml");
    fs::write(
        &config_path,
        r#"
[metadata]
code = "ja-custom"
name = "Custom"

[model]
path = "model.tsv"

[sets]
close_punctuation = ["。"]
"#,
    )
    .unwrap();

    let engine = EngineConfig::from_file(&config_path)
        .unwrap()
        .build_engine()
        .unwrap();

    // Only the hiragana-to-kanji boundary scores
    assert_eq!(
        engine.phrases("私は東京。").unwrap(),
        vec!["私は", "東京。"]
    );
}
