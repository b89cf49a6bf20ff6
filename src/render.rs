//! Line-oriented rendering of an analysis.
//!
//! Each input line becomes one [`Block`]:
//!
//! - a blank (or whitespace-only) line is a [`Block::Spacer`];
//! - `## Title` is a level-3 heading, `# Title` a level-2 heading;
//! - anything else is a paragraph. A leading list marker (`- `, `* `, `+ `,
//!   `1. `) is split off, and so is a task box (`[ ] `, `[x] `) right after it.
//!
//! The remaining inline text is parsed with `pulldown-cmark` only to locate
//! `**strong**` and `*emphasis*` delimiters. Those delimiters are removed and
//! every other byte is kept verbatim, so each [`Span`] borrows a slice of the
//! input. Lines without `*` or `_` skip the parser. Every span is then
//! segmented like any other text.

use crate::{
    context::Context,
    segment::{Segment, segment_with},
};
use memchr::memchr2;
use pulldown_cmark::{Event, Options, Parser, Tag};
use serde::Serialize;
use std::{borrow::Cow, ops::Range};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Style {
    pub strong: bool,
    pub emphasis: bool,
}

impl Style {
    pub const NORMAL: Style = Style {
        strong: false,
        emphasis: false,
    };
}

/// A run of inline text with one style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span<'a> {
    pub style: Style,
    pub text: Cow<'a, str>,
}

impl Span<'_> {
    /// Split this span into plain runs and clickable terms.
    pub fn segments(&self, ctx: &Context) -> Vec<Segment<'_>> {
        segment_with(&self.text, ctx)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block<'a> {
    Spacer,
    Heading {
        level: u8,
        spans: Vec<Span<'a>>,
    },
    Paragraph {
        marker: Option<&'a str>,
        task: Option<bool>,
        spans: Vec<Span<'a>>,
    },
}

impl<'a> Block<'a> {
    pub fn spans(&self) -> &[Span<'a>] {
        match self {
            Block::Spacer => &[],
            Block::Heading { spans, .. } | Block::Paragraph { spans, .. } => spans,
        }
    }

    /// Visible text of the block, without markdown delimiters.
    pub fn text(&self) -> String {
        self.spans().iter().map(|s| s.text.as_ref()).collect()
    }
}

/// Render an analysis, one block per `\n`-separated line.
pub fn render(analysis: &str) -> Vec<Block<'_>> {
    analysis.split('\n').map(render_line).collect()
}

fn render_line(line: &str) -> Block<'_> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.trim().is_empty() {
        return Block::Spacer;
    }
    if let Some(rest) = line.strip_prefix("##") {
        return Block::Heading {
            level: 3,
            spans: inline(rest.trim_start_matches('#').trim()),
        };
    }
    if let Some(rest) = line.strip_prefix('#') {
        return Block::Heading {
            level: 2,
            spans: inline(rest.trim()),
        };
    }

    let (marker, rest) = split_marker(line.trim());
    let (task, rest) = match marker {
        Some(m) if !m.ends_with('.') => split_task(rest),
        _ => (None, rest),
    };
    Block::Paragraph {
        marker,
        task,
        spans: inline(rest),
    }
}

/// Split a list marker off an already trimmed line.
fn split_marker(line: &str) -> (Option<&str>, &str) {
    let bytes = line.as_bytes();
    let marker_len = match bytes.first() {
        Some(b'-' | b'*' | b'+') => 1,
        Some(b) if b.is_ascii_digit() => {
            let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
            if bytes.get(digits) != Some(&b'.') {
                return (None, line);
            }
            digits + 1
        }
        _ => return (None, line),
    };
    match bytes.get(marker_len) {
        Some(b' ' | b'\t') => (
            Some(&line[..marker_len]),
            line[marker_len + 1..].trim_start(),
        ),
        _ => (None, line),
    }
}

fn split_task(text: &str) -> (Option<bool>, &str) {
    let checked = match text.get(..3) {
        Some("[ ]") => false,
        Some("[x]" | "[X]") => true,
        _ => return (None, text),
    };
    let rest = &text[3..];
    if rest.is_empty() || rest.starts_with([' ', '\t']) {
        (Some(checked), rest.trim_start())
    } else {
        (None, text)
    }
}

fn inline(text: &str) -> Vec<Span<'_>> {
    if text.is_empty() {
        return Vec::new();
    }
    if !has_inline_markdown(text) {
        return vec![Span {
            style: Style::NORMAL,
            text: Cow::Borrowed(text),
        }];
    }

    // Only delimiter bytes are dropped; everything else is copied from the
    // source, so block syntax the parser sees (list items, quotes, rules)
    // stays visible.
    let mut marks = delimiters(text);
    marks.sort_unstable_by_key(|m| m.at);

    let mut spans = Vec::new();
    let mut cursor = 0;
    let mut strong = 0u32;
    let mut emphasis = 0u32;
    for mark in marks {
        if mark.at < cursor {
            continue;
        }
        push_slice(&mut spans, text, cursor..mark.at, style(strong, emphasis));
        match (mark.kind, mark.open) {
            (Kind::Strong, true) => strong += 1,
            (Kind::Strong, false) => strong = strong.saturating_sub(1),
            (Kind::Emphasis, true) => emphasis += 1,
            (Kind::Emphasis, false) => emphasis = emphasis.saturating_sub(1),
        }
        cursor = mark.at + mark.kind.width();
    }
    push_slice(&mut spans, text, cursor..text.len(), style(strong, emphasis));
    spans
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Strong,
    Emphasis,
}

impl Kind {
    #[inline(always)]
    fn width(self) -> usize {
        match self {
            Kind::Strong => 2,
            Kind::Emphasis => 1,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Mark {
    at: usize,
    kind: Kind,
    open: bool,
}

/// Byte positions of every strong/emphasis delimiter run in `text`.
fn delimiters(text: &str) -> Vec<Mark> {
    let mut marks = Vec::new();
    for (event, range) in Parser::new_ext(text, Options::empty()).into_offset_iter() {
        let kind = match event {
            Event::Start(Tag::Strong) => Kind::Strong,
            Event::Start(Tag::Emphasis) => Kind::Emphasis,
            _ => continue,
        };
        let width = kind.width();
        if range.end > text.len() || range.end < range.start + 2 * width {
            continue;
        }
        marks.push(Mark {
            at: range.start,
            kind,
            open: true,
        });
        marks.push(Mark {
            at: range.end - width,
            kind,
            open: false,
        });
    }
    marks
}

#[inline(always)]
fn style(strong: u32, emphasis: u32) -> Style {
    Style {
        strong: strong > 0,
        emphasis: emphasis > 0,
    }
}

fn push_slice<'a>(spans: &mut Vec<Span<'a>>, text: &'a str, range: Range<usize>, style: Style) {
    match text.get(range) {
        Some(slice) if !slice.is_empty() => spans.push(Span {
            style,
            text: Cow::Borrowed(slice),
        }),
        _ => {}
    }
}

/// Only `*` and `_` can open strong or emphasis.
#[inline(always)]
fn has_inline_markdown(text: &str) -> bool {
    memchr2(b'*', b'_', text.as_bytes()).is_some()
}
