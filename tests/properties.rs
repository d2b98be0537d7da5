//! Property-based tests for the reflow pipeline.
//!
//! Generated transcripts mix words, terminal punctuation and irregular
//! whitespace, then check that reflowing:
//! 1. keeps every word in order,
//! 2. is stable when run again on its own output,
//! 3. respects the line width except for over-long words,
//! 4. never puts more than the configured number of units in a paragraph.

use proptest::prelude::*;
use reflow::{compose, normalize_whitespace, paragraphs, reflow, segment, ReflowConfig};

/// A word, sometimes ending in terminal punctuation.
fn word_strategy() -> impl Strategy<Value = String> {
    (
        prop::string::string_regex("[a-zA-Zé0-9',]{1,14}").expect("valid regex"),
        prop::sample::select(vec!["", "", "", ".", "?", "!", "...", "?!"]),
    )
        .prop_map(|(word, punct)| format!("{word}{punct}"))
}

/// A run of whitespace between words.
fn gap_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![" ", " ", "  ", "\n", "\n\n", "\t", " \r\n "])
}

fn transcript_strategy() -> impl Strategy<Value = String> {
    (
        gap_strategy(),
        prop::collection::vec((word_strategy(), gap_strategy()), 0..60),
    )
        .prop_map(|(lead, pieces)| {
            let mut text = lead.to_string();
            for (word, gap) in pieces {
                text.push_str(&word);
                text.push_str(gap);
            }
            text
        })
}

fn config_strategy() -> impl Strategy<Value = ReflowConfig> {
    (1usize..6, 1usize..50).prop_map(|(sentences_per_paragraph, line_width)| ReflowConfig {
        sentences_per_paragraph,
        line_width,
    })
}

proptest! {
    #[test]
    fn words_are_preserved_in_order(raw in transcript_strategy(), config in config_strategy()) {
        let formatted = reflow(&raw, &config).unwrap();
        let input_words: Vec<&str> = raw.split_whitespace().collect();
        let output_words: Vec<&str> = formatted.split_whitespace().collect();
        prop_assert_eq!(input_words, output_words);
    }

    #[test]
    fn units_reproduce_non_whitespace_content(raw in transcript_strategy()) {
        let joined: String = segment(&raw)
            .iter()
            .flat_map(|unit| unit.as_str().chars())
            .filter(|c| !c.is_whitespace())
            .collect();
        let expected: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(joined, expected);
    }

    #[test]
    fn no_unit_is_empty(raw in transcript_strategy()) {
        for unit in segment(&raw) {
            prop_assert!(unit.word_count() > 0);
            prop_assert_eq!(unit.as_str(), unit.as_str().trim());
        }
    }

    #[test]
    fn reflow_is_idempotent(raw in transcript_strategy(), config in config_strategy()) {
        let once = reflow(&raw, &config).unwrap();
        let twice = reflow(&normalize_whitespace(&once), &config).unwrap();
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(reflow(&once, &config).unwrap(), once);
    }

    #[test]
    fn lines_fit_width(raw in transcript_strategy(), config in config_strategy()) {
        let formatted = reflow(&raw, &config).unwrap();
        for line in formatted.lines().filter(|line| !line.is_empty()) {
            let fits = line.chars().count() <= config.line_width;
            let single_long_word = !line.contains(' ');
            prop_assert!(fits || single_long_word, "line too wide: {:?}", line);
        }
    }

    #[test]
    fn paragraphs_respect_group_size(raw in transcript_strategy(), config in config_strategy()) {
        let units = segment(&raw);
        let sizes: Vec<usize> = paragraphs(&units, config.sentences_per_paragraph)
            .unwrap()
            .map(|p| p.units().len())
            .collect();

        if let Some((last, full)) = sizes.split_last() {
            prop_assert!(full.iter().all(|&n| n == config.sentences_per_paragraph));
            prop_assert!(*last >= 1 && *last <= config.sentences_per_paragraph);
        }
        prop_assert_eq!(sizes.iter().sum::<usize>(), units.len());

        let formatted = compose(&units, &config).unwrap();
        let rendered = if formatted.is_empty() { 0 } else { formatted.split("\n\n").count() };
        prop_assert_eq!(rendered, sizes.len());
    }
}
