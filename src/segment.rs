//! Text segmentation into plain runs and clickable terms.
//!
//! Concatenating the original text of every [`Segment`] returned by
//! [`segment`] gives back the input byte-for-byte. Plain runs are borrowed
//! slices of the input; a clickable term carries its original casing for
//! display and its normalized key for lookup.

use crate::{classify, context::Context, extract, stage};
use serde::Serialize;
use std::borrow::Cow;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment<'a> {
    Plain { text: &'a str },
    Term { text: &'a str, key: Cow<'a, str> },
}

impl<'a> Segment<'a> {
    /// The exact slice of input this segment covers.
    #[inline(always)]
    pub fn text(&self) -> &'a str {
        match self {
            Segment::Plain { text } | Segment::Term { text, .. } => *text,
        }
    }

    /// Lookup key, for clickable terms only.
    #[inline]
    pub fn key(&self) -> Option<&str> {
        match self {
            Segment::Plain { .. } => None,
            Segment::Term { key, .. } => Some(key.as_ref()),
        }
    }

    #[inline(always)]
    pub fn is_term(&self) -> bool {
        matches!(self, Segment::Term { .. })
    }
}

/// Segment `text` with the default thresholds.
#[inline]
pub fn segment(text: &str) -> Vec<Segment<'_>> {
    segment_with(text, &Context::default())
}

/// Segment `text`, classifying each term against `ctx`.
///
/// An input without any clickable term comes back as a single plain
/// segment, including the empty string. Otherwise no plain segment is empty.
pub fn segment_with<'a>(text: &'a str, ctx: &Context) -> Vec<Segment<'a>> {
    let mut out = Vec::new();
    let mut plain_start = 0;

    for term in extract::terms(text) {
        let key = stage::normalize(term.text);
        if !classify::decide(&key, ctx).is_clickable() {
            continue;
        }
        if term.start > plain_start {
            out.push(Segment::Plain {
                text: &text[plain_start..term.start],
            });
        }
        out.push(Segment::Term {
            text: term.text,
            key,
        });
        plain_start = term.end();
    }

    if plain_start < text.len() || out.is_empty() {
        out.push(Segment::Plain {
            text: &text[plain_start..],
        });
    }

    debug!(
        bytes = text.len(),
        segments = out.len(),
        terms = out.iter().filter(|s| s.is_term()).count(),
        "segmented"
    );
    out
}

/// Rebuild the original text from a segment sequence.
pub fn concat(segments: &[Segment<'_>]) -> String {
    let len = segments.iter().map(|s| s.text().len()).sum();
    let mut out = String::with_capacity(len);
    for s in segments {
        out.push_str(s.text());
    }
    out
}
