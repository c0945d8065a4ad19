//! Property tests over random mixed-script text and random toy models

use bunsetsu_core::{
    BreakEngine, CharSet, CodePointSet, ContextWindow, Engine, EngineConfig, FeatureKey,
    IdentityOffsets, ScoringModel, Utf8Text, PATTERNS,
};
use proptest::prelude::*;

const ALPHABET: &[char] = &[
    'a', 'Z', '7', '.', ')', '(', 'あ', 'は', 'に', 'を', 'ア', 'ロ', 'ー', '私', '東', '京',
    '行', '。', '、', '」', '「', '！', 'Ｕ', '９', '𠮷', ' ',
];

const BLOCK_CODES: &[&str] = &["001", "061", "062", "063", "071", "087", "999"];

fn mixed_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(ALPHABET), 0..64)
        .prop_map(|chars| chars.into_iter().collect())
}

fn toy_records() -> impl Strategy<Value = Vec<(String, i32)>> {
    prop::collection::vec(
        (
            0..PATTERNS.len(),
            prop::collection::vec(prop::sample::select(BLOCK_CODES), 3),
            -50i32..50,
        ),
        1..40,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .map(|(pattern, codes, weight)| {
                let pattern = &PATTERNS[pattern];
                let mut key = pattern.name.to_string();
                for code in &codes[..pattern.arity] {
                    key.push_str(code);
                }
                (key, weight)
            })
            .collect()
    })
}

fn japanese_close_set() -> CharSet {
    let config = EngineConfig::japanese().unwrap();
    CharSet::from_entries(&config.sets.close_punctuation).unwrap()
}

proptest! {
    #[test]
    fn breaks_are_increasing_and_inside_the_text(text in mixed_text()) {
        let engine = Engine::japanese().unwrap();
        let breaks = engine.segment(&text).unwrap();

        for pair in breaks.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        for &b in &breaks {
            prop_assert!(b > 0 && b < text.len());
            prop_assert!(text.is_char_boundary(b));
        }
    }

    #[test]
    fn segmentation_is_deterministic(text in mixed_text()) {
        let engine = Engine::japanese().unwrap();
        prop_assert_eq!(engine.segment(&text).unwrap(), engine.segment(&text).unwrap());
    }

    #[test]
    fn no_break_before_closing_punctuation(text in mixed_text()) {
        let engine = Engine::japanese().unwrap();
        let close = japanese_close_set();

        for b in engine.segment(&text).unwrap() {
            let next = text[b..].chars().next().unwrap();
            prop_assert!(!close.contains(next), "break before {:?}", next);
        }
    }

    #[test]
    fn every_window_yields_thirteen_parseable_keys(text in mixed_text()) {
        let classifier = bunsetsu_core::BlockClassifier::new();
        let mut chars = text.chars();
        let (mut window, _) = ContextWindow::initialize(&mut chars, &classifier);

        for _ in 0..text.chars().count() {
            let keys = bunsetsu_core::feature_keys(&window);
            prop_assert_eq!(keys.len(), 13);
            for (key, pattern) in keys.iter().zip(PATTERNS.iter()) {
                let rendered = key.to_string();
                prop_assert_eq!(FeatureKey::parse(&rendered).unwrap(), pattern);
            }
            window.slide(classifier.element(chars.next()));
        }
    }

    #[test]
    fn early_exit_is_transparent(records in toy_records(), text in mixed_text()) {
        let fast = Engine::builder(ScoringModel::from_records(records.clone()).unwrap())
            .early_exit(true)
            .build();
        let exact = Engine::builder(ScoringModel::from_records(records).unwrap())
            .early_exit(false)
            .build();

        prop_assert_eq!(fast.segment(&text).unwrap(), exact.segment(&text).unwrap());
    }

    #[test]
    fn appended_count_matches_growth(
        records in toy_records(),
        word in prop::collection::vec(prop::sample::select(&['a', 'b', 'c', 'x'][..]), 0..32),
    ) {
        // ASCII only, so identity offsets are valid
        let working: String = word.into_iter().collect();
        let engine = Engine::builder(ScoringModel::from_records(records).unwrap()).build();
        let mut breaks = vec![0];

        let count = engine
            .divide_up_range(
                &Utf8Text(&working),
                0,
                working.len(),
                &mut breaks,
                &working,
                &IdentityOffsets { range_start: 0 },
            )
            .unwrap();

        prop_assert_eq!(breaks.len(), count + 1);
        prop_assert_eq!(breaks[0], 0);
    }
}
