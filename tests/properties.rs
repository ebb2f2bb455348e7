//! Property-based tests over the conversion and segment-accounting engine.

use proptest::prelude::*;

use gsm_sanitize::{analyze, convert, is_gsm_char, truncate_to_segments};

proptest! {
    #[test]
    fn output_is_gsm_safe_without_preservation(ref s in "(?s).{0,200}") {
        let outcome = convert(s);
        for ch in outcome.converted.chars() {
            prop_assert!(is_gsm_char(ch), "non-GSM char {ch:?} in output");
        }
    }

    #[test]
    fn reconversion_is_noop(ref s in "(?s).{0,200}") {
        let first = convert(s);
        let second = convert(&first.converted);
        prop_assert_eq!(&second.converted, &first.converted);
        prop_assert!(second.replacements.is_empty());
    }

    #[test]
    fn no_panics_on_arbitrary_unicode(ref chars in proptest::collection::vec(any::<char>(), 0..128)) {
        let input: String = chars.iter().collect();
        let outcome = convert(&input);
        let analysis = analyze(&outcome.converted);
        prop_assert!(analysis.segments >= 1);
        prop_assert_eq!(outcome.original_length, input.chars().count());
        prop_assert_eq!(outcome.converted_length, outcome.converted.chars().count());
    }

    #[test]
    fn appending_never_decreases_segments(ref s in "(?s).{0,300}", extra in any::<char>()) {
        let before = analyze(s).segments;
        let mut longer = s.to_string();
        longer.push(extra);
        prop_assert!(analyze(&longer).segments >= before);
    }

    #[test]
    fn records_index_the_input(ref s in "(?s).{0,100}") {
        let outcome = convert(s);
        let input_len = s.chars().count();
        let mut last = None;
        for record in &outcome.replacements {
            let position = record.position.expect("per-character records carry positions");
            prop_assert!(position < input_len);
            // Records arrive in input order.
            prop_assert!(last.is_none_or(|p| p < position));
            last = Some(position);
        }
    }

    #[test]
    fn truncation_respects_character_budget(ref s in "[a-z ]{0,600}", max in 1usize..4) {
        let budget = if max == 1 { 160 } else { 160 + (max - 1) * 153 };
        let truncated = truncate_to_segments(s, max);
        prop_assert!(truncated.chars().count() <= budget);
        if s.chars().count() > budget {
            prop_assert!(truncated.ends_with("..."));
        } else {
            prop_assert_eq!(truncated.as_str(), s.as_str());
        }
    }
}
