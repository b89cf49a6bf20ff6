#[cfg(test)]
mod unit_tests {

    use crate::{Context, MedTerm, Reason, Segment, classify, normalize, segment, terms};
    use std::borrow::Cow;

    #[test]
    fn default_detector_matches_free_functions() {
        let detector = MedTerm::default();
        for word in ["hepatotoxicity", "pregnancy", "cat", "nephropathy", "Ibuprofen"] {
            assert_eq!(detector.classify(word), classify(word), "{word}");
        }
        assert_eq!(*detector.context(), Context::default());
    }

    #[test]
    fn builder_overrides_thresholds() {
        let detector = MedTerm::builder().min_term_len(4).min_pattern_len(4).build();
        assert_eq!(detector.context().min_term_len, 4);
        assert!(detector.classify("dysuria"));
        assert!(!MedTerm::default().classify("dysuria"));
    }

    #[test]
    fn builder_can_disable_pattern_fallback() {
        let detector = MedTerm::builder().min_pattern_len(usize::MAX).build();
        assert!(!detector.classify("nephropathy"));
        // explicit inclusion is unaffected
        assert!(detector.classify("hepatotoxicity"));
    }

    #[test]
    fn explain_reports_key_and_reason() {
        let detector = MedTerm::default();
        let c = detector.explain("Hepatotoxicity");
        assert_eq!(c.key, "hepatotoxicity");
        assert_eq!(c.reason, Reason::Included);
        assert!(c.clickable);

        let c = detector.explain("metamorphosis");
        assert_eq!(c.reason, Reason::Excluded);
        assert!(!c.clickable);
    }

    #[test]
    fn zero_copy_key_when_already_lower() {
        let input = "nephropathy";
        let key = normalize(input);
        assert!(matches!(key, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn facade_terms_are_ascii_runs() {
        let detector = MedTerm::default();
        let words: Vec<_> = detector.terms("**Naïve** T-cells, 2x").map(|t| t.text).collect();
        assert_eq!(words, ["Na", "ve", "T", "cells", "x"]);
        assert_eq!(terms("").count(), 0);
    }

    #[test]
    fn plain_segments_borrow_input() {
        let input = "Take with food.";
        let segs = segment(input);
        assert!(matches!(segs[..], [Segment::Plain { text }] if text.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn term_key_is_owned_only_when_casing_changes() {
        let segs = segment("Nephropathy and nephropathy");
        let keys: Vec<_> = segs
            .iter()
            .filter_map(|s| match s {
                Segment::Term { key, .. } => Some(key),
                Segment::Plain { .. } => None,
            })
            .collect();
        assert_eq!(keys.len(), 2);
        assert!(matches!(keys[0], Cow::Owned(_)));
        assert!(matches!(keys[1], Cow::Borrowed(_)));
    }

    #[test]
    fn scenario_words() {
        assert!(classify("hepatotoxicity"));
        assert!(!classify("pregnancy"));
        assert!(!classify("cat"));
        assert!(classify("nephropathy"));
    }
}
