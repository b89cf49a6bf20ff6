pub mod data;

use once_cell::sync::Lazy;
use regex::RegexSet;
use serde::Serialize;
use std::fmt;

/// Where a [`PatternRule`] anchors its affix inside a normalized word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Affix {
    Prefix,
    Suffix,
    Infix,
}

/// One entry of the fallback pattern table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PatternRule {
    pub affix: Affix,
    pub text: &'static str,
}

impl PatternRule {
    #[inline(always)]
    pub const fn new(affix: Affix, text: &'static str) -> Self {
        Self { affix, text }
    }

    /// The anchored regular expression this rule compiles to.
    pub fn regex_source(&self) -> String {
        match self.affix {
            Affix::Prefix => format!("^{}", self.text),
            Affix::Suffix => format!("{}$", self.text),
            Affix::Infix => self.text.to_owned(),
        }
    }
}

impl fmt::Display for PatternRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.regex_source())
    }
}

// Built once from the constant table; indices line up with PATTERN_RULES.
static PATTERN_SET: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new(data::PATTERN_RULES.iter().map(PatternRule::regex_source))
        .expect("PATTERN_RULES contains an invalid pattern – this is a bug")
});

#[inline]
pub fn is_excluded(key: &str) -> bool {
    data::EXCLUDED.contains(key)
}

#[inline]
pub fn is_included(key: &str) -> bool {
    data::INCLUDED.contains(key)
}

/// First rule of the table (in table order) matching `key`, if any.
pub fn matching_rule(key: &str) -> Option<&'static PatternRule> {
    PATTERN_SET
        .matches(key)
        .iter()
        .next()
        .map(|idx| &data::PATTERN_RULES[idx])
}

pub fn pattern_rules() -> &'static [PatternRule] {
    data::PATTERN_RULES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sets_are_disjoint() {
        for word in data::INCLUDED.iter() {
            assert!(!is_excluded(word), "`{word}` is in both sets");
        }
    }

    #[test]
    fn sets_are_lowercase_ascii() {
        for word in data::EXCLUDED.iter().chain(data::INCLUDED.iter()) {
            assert!(
                word.bytes().all(|b| b.is_ascii_lowercase()),
                "`{word}` is not a normalized key"
            );
        }
    }

    #[test]
    fn pattern_anchors() {
        assert_eq!(
            matching_rule("nephropathy").map(|r| r.text),
            Some("pathy"),
            "both `pathy$` and `^nephro` match; the lower table index wins"
        );
        assert_eq!(matching_rule("arthritis").map(|r| r.text), Some("itis"));
        assert_eq!(matching_rule("neurologist").map(|r| r.affix), Some(Affix::Prefix));
        assert_eq!(matching_rule("nontoxicant").map(|r| r.affix), Some(Affix::Infix));
        // suffix rules are anchored at the end
        assert_eq!(matching_rule("itisfoo"), None);
        // prefix rules are anchored at the start
        assert_eq!(matching_rule("antineuro"), None);
    }

    #[test]
    fn regex_source_rendering() {
        assert_eq!(PatternRule::new(Affix::Prefix, "cyto").to_string(), "^cyto");
        assert_eq!(PatternRule::new(Affix::Suffix, "oma").to_string(), "oma$");
        assert_eq!(PatternRule::new(Affix::Infix, "toxic").to_string(), "toxic");
    }

    #[test]
    fn every_rule_compiles() {
        assert_eq!(PATTERN_SET.len(), pattern_rules().len());
    }
}
