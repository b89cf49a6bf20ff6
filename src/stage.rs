//! Key normalization stages.
//!
//! A lookup key is produced by running a term through [`LowerCase`] and then
//! [`StripNonAlpha`]. Every stage is allocation-aware: `needs_apply` is a
//! cheap pre-check, and when it returns `false` the input `Cow` is handed
//! back untouched. Terms coming out of the extractor are ASCII letters, so
//! the common case (an already lower-case word) never allocates.

pub mod lower_case;
pub mod strip_non_alpha;

pub use lower_case::LowerCase;
pub use strip_non_alpha::StripNonAlpha;

use std::borrow::Cow;

/// A single normalisation step.
pub trait Stage: Send + Sync {
    /// Human-readable name, used in logs and test failure messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` skips the whole stage.
    fn needs_apply(&self, text: &str) -> bool;

    /// Allocation-aware transformation. Must always be correct, even when
    /// called on text for which `needs_apply` is `false`.
    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;
}

/// The fixed key pipeline, in order.
static KEY_STAGES: [&dyn Stage; 2] = [&LowerCase, &StripNonAlpha];

/// Normalize a term into its lookup key: lower-case, then drop everything
/// outside `a`-`z`.
pub fn normalize(term: &str) -> Cow<'_, str> {
    let mut text = Cow::Borrowed(term);
    for stage in KEY_STAGES {
        if stage.needs_apply(&text) {
            text = stage.apply(text);
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_normalized_is_borrowed() {
        let input = "hepatotoxicity";
        let key = normalize(input);
        assert!(matches!(key, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn mixed_input() {
        assert_eq!(normalize("Hepato-Toxicity!"), "hepatotoxicity");
        assert_eq!(normalize("  NSAID's  "), "nsaids");
        assert_eq!(normalize("123"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn non_ascii_letters_are_dropped() {
        assert_eq!(normalize("naïve"), "nave");
        assert_eq!(normalize("Ödem"), "dem");
    }

    #[test]
    fn lowercase_runs_before_strip() {
        // KELVIN SIGN lower-cases to ASCII 'k' and therefore survives.
        assert_eq!(normalize("\u{212A}etone"), "ketone");
    }
}
