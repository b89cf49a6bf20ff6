use crate::{
    classify::{self, Classification},
    context::Context,
    extract::{self, Terms},
    render::{self, Block},
    segment::{self, Segment},
};

/// Reusable term detector.
///
/// Cheap to copy and safe to share between threads: all it holds is a
/// [`Context`]. Build one with [`MedTerm::builder`] to change the length
/// thresholds, or use [`MedTerm::default`] for the standard ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct MedTerm {
    ctx: Context,
}

impl MedTerm {
    pub fn builder() -> MedTermBuilder {
        MedTermBuilder::default()
    }

    #[inline]
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    #[inline]
    pub fn classify(&self, term: &str) -> bool {
        classify::is_clickable(term, &self.ctx)
    }

    #[inline]
    pub fn explain<'a>(&self, term: &'a str) -> Classification<'a> {
        classify::explain(term, &self.ctx)
    }

    #[inline]
    pub fn terms<'a>(&self, text: &'a str) -> Terms<'a> {
        extract::terms(text)
    }

    #[inline]
    pub fn segment<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        segment::segment_with(text, &self.ctx)
    }

    /// Render an analysis into blocks. Segment each span with
    /// [`Span::segments`](crate::render::Span::segments) and this detector's
    /// [`context`](Self::context).
    #[inline]
    pub fn render<'a>(&self, analysis: &'a str) -> Vec<Block<'a>> {
        render::render(analysis)
    }
}

#[derive(Debug, Default)]
pub struct MedTermBuilder {
    ctx: Context,
}

impl MedTermBuilder {
    /// Minimum normalized length for any term to be clickable.
    pub fn min_term_len(mut self, len: usize) -> Self {
        self.ctx.min_term_len = len;
        self
    }

    /// Minimum normalized length for the pattern-table fallback.
    pub fn min_pattern_len(mut self, len: usize) -> Self {
        self.ctx.min_pattern_len = len;
        self
    }

    pub fn build(self) -> MedTerm {
        MedTerm { ctx: self.ctx }
    }
}
