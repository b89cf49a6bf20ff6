//! Term extraction.
//!
//! A term is a maximal run of ASCII letters (`[a-zA-Z]+`). Everything else
//! (whitespace, digits, punctuation, markdown syntax, non-ASCII text) is a
//! separator. ASCII letters are single bytes that never occur inside a
//! multi-byte UTF-8 sequence, so term boundaries are always valid `str`
//! boundaries.

use serde::Serialize;
use std::iter::FusedIterator;

/// One extracted word, with its original casing and byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Term<'a> {
    pub text: &'a str,
    pub start: usize,
}

impl Term<'_> {
    #[inline(always)]
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Lazy iterator over the terms of a text.
///
/// Holds no state besides its cursor; calling [`terms`] again, or cloning a
/// fresh iterator, yields the identical sequence.
#[derive(Debug, Clone)]
pub struct Terms<'a> {
    text: &'a str,
    pos: usize,
}

/// Iterate over the terms of `text` in order.
#[inline]
pub fn terms(text: &str) -> Terms<'_> {
    Terms { text, pos: 0 }
}

impl<'a> Iterator for Terms<'a> {
    type Item = Term<'a>;

    fn next(&mut self) -> Option<Term<'a>> {
        let bytes = self.text.as_bytes();
        let start = self.pos + bytes[self.pos..].iter().position(u8::is_ascii_alphabetic)?;
        let end = bytes[start..]
            .iter()
            .position(|b| !b.is_ascii_alphabetic())
            .map_or(bytes.len(), |len| start + len);
        self.pos = end;
        Some(Term {
            text: &self.text[start..end],
            start,
        })
    }
}

impl FusedIterator for Terms<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<(&str, usize)> {
        terms(text).map(|t| (t.text, t.start)).collect()
    }

    #[test]
    fn splits_on_non_letters() {
        assert_eq!(
            words("Take 200mg of ibuprofen-based NSAIDs."),
            vec![
                ("Take", 0),
                ("mg", 8),
                ("of", 11),
                ("ibuprofen", 14),
                ("based", 24),
                ("NSAIDs", 30),
            ]
        );
    }

    #[test]
    fn markdown_syntax_is_separator() {
        assert_eq!(
            words("## **Hepatotoxicity**"),
            vec![("Hepatotoxicity", 5)]
        );
    }

    #[test]
    fn non_ascii_breaks_runs() {
        // 'ï' is two bytes; the run resumes after it.
        assert_eq!(words("naïve"), vec![("na", 0), ("ve", 4)]);
        assert_eq!(words("世界"), vec![]);
    }

    #[test]
    fn empty_and_separator_only() {
        assert_eq!(terms("").count(), 0);
        assert_eq!(terms(" \n\t.,;123").count(), 0);
    }

    #[test]
    fn term_at_end_of_input() {
        let t = terms("dose: nephropathy").last().unwrap();
        assert_eq!(t.text, "nephropathy");
        assert_eq!(t.end(), "dose: nephropathy".len());
    }

    #[test]
    fn restartable_and_fused() {
        let text = "a b c";
        let first: Vec<_> = terms(text).collect();
        let second: Vec<_> = terms(text).collect();
        assert_eq!(first, second);

        let mut it = terms(text);
        it.by_ref().for_each(drop);
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }
}
