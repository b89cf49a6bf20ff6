// src/context.rs
// Thresholds consulted on every classification. Tiny, Copy, 'static-only.

/// Words whose normalized form is shorter than this are never clickable.
pub const DEFAULT_MIN_TERM_LEN: usize = 7;

/// Pattern-table fallback only applies from this length on.
pub const DEFAULT_MIN_PATTERN_LEN: usize = 8;

/// Runtime context passed to the classifier.
///
/// The word sets and the pattern table are process-wide constants; only the
/// length thresholds live here so a caller can tune them per [`MedTerm`].
///
/// [`MedTerm`]: crate::MedTerm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    pub min_term_len: usize,
    pub min_pattern_len: usize,
}

impl Default for Context {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            min_term_len: DEFAULT_MIN_TERM_LEN,
            min_pattern_len: DEFAULT_MIN_PATTERN_LEN,
        }
    }

    /// Start from the defaults and let the caller adjust any field before use.
    #[inline(always)]
    pub fn with_modified(f: impl FnOnce(&mut Context)) -> Self {
        let mut ctx = Self::new();
        f(&mut ctx);
        ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let ctx = Context::default();
        assert_eq!(ctx.min_term_len, 7);
        assert_eq!(ctx.min_pattern_len, 8);
    }

    #[test]
    fn modified_keeps_untouched_fields() {
        let ctx = Context::with_modified(|c| c.min_term_len = 5);
        assert_eq!(ctx.min_term_len, 5);
        assert_eq!(ctx.min_pattern_len, DEFAULT_MIN_PATTERN_LEN);
    }
}
