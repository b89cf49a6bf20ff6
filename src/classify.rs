//! Complex medical term classification.
//!
//! Rules are evaluated in order; the first that applies decides:
//!
//! | # | Condition                                           | Result    |
//! |---|-----------------------------------------------------|-----------|
//! | 1 | normalize: lower-case, keep only `a`-`z`            |           |
//! | 2 | key shorter than `min_term_len` (7)                 | plain     |
//! | 3 | key in the exclusion set                            | plain     |
//! | 4 | key in the inclusion set                            | clickable |
//! | 5 | key at least `min_pattern_len` (8) and a rule hits  | clickable |
//! | 6 | otherwise                                           | plain     |
//!
//! Exclusion is checked before inclusion, so a word listed in both sets is
//! plain. The decision depends on the key alone, never on where the word
//! appears.

use crate::{
    context::Context,
    lexicon::{self, PatternRule},
    stage,
};
use serde::Serialize;
use std::borrow::Cow;
use tracing::trace;

/// Why a term was (or was not) made clickable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "rule", rename_all = "snake_case")]
pub enum Reason {
    TooShort,
    Excluded,
    Included,
    Pattern(&'static PatternRule),
    NoMatch,
}

impl Reason {
    #[inline(always)]
    pub fn is_clickable(self) -> bool {
        matches!(self, Reason::Included | Reason::Pattern(_))
    }
}

/// Outcome of classifying one term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification<'a> {
    /// Normalized lookup key.
    pub key: Cow<'a, str>,
    pub clickable: bool,
    pub reason: Reason,
}

/// Classify `term` against `ctx`, keeping the key and the deciding rule.
pub fn explain<'a>(term: &'a str, ctx: &Context) -> Classification<'a> {
    let key = stage::normalize(term);
    let reason = decide(&key, ctx);
    trace!(term, key = %key, ?reason, "classified");
    Classification {
        clickable: reason.is_clickable(),
        key,
        reason,
    }
}

/// `true` if `term` is a complex medical term under the default thresholds.
#[inline]
pub fn classify(term: &str) -> bool {
    is_clickable(term, &Context::default())
}

#[inline]
pub fn is_clickable(term: &str, ctx: &Context) -> bool {
    decide(&stage::normalize(term), ctx).is_clickable()
}

/// Rules 2 to 6, applied to an already normalized key.
#[inline]
pub(crate) fn decide(key: &str, ctx: &Context) -> Reason {
    decide_with(key, ctx, lexicon::is_excluded, lexicon::is_included)
}

fn decide_with(
    key: &str,
    ctx: &Context,
    excluded: impl Fn(&str) -> bool,
    included: impl Fn(&str) -> bool,
) -> Reason {
    if key.len() < ctx.min_term_len {
        return Reason::TooShort;
    }
    if excluded(key) {
        return Reason::Excluded;
    }
    if included(key) {
        return Reason::Included;
    }
    if key.len() >= ctx.min_pattern_len {
        if let Some(rule) = lexicon::matching_rule(key) {
            return Reason::Pattern(rule);
        }
    }
    Reason::NoMatch
}
