//! Serializers for segment sequences and rendered blocks.

use crate::{
    context::Context,
    render::{Block, Style},
    segment::Segment,
};
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Json,
    Html,
    Marked,
}

pub fn format_segments(
    segments: &[Segment<'_>],
    format: Format,
) -> Result<String, serde_json::Error> {
    match format {
        Format::Json => to_json(segments),
        Format::Html => Ok(to_html(segments)),
        Format::Marked => Ok(to_marked(segments)),
    }
}

pub fn to_json(segments: &[Segment<'_>]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(segments)
}

/// Plain text HTML-escaped; clickable terms become buttons carrying their key.
pub fn to_html(segments: &[Segment<'_>]) -> String {
    let mut out = String::with_capacity(segments.iter().map(|s| s.text().len()).sum());
    for seg in segments {
        match seg {
            Segment::Plain { text } => {
                html_escape::encode_text_to_string(text, &mut out);
            }
            Segment::Term { text, key } => {
                out.push_str(r#"<button class="medterm" data-term=""#);
                html_escape::encode_double_quoted_attribute_to_string(key, &mut out);
                out.push_str(r#"">"#);
                html_escape::encode_text_to_string(text, &mut out);
                out.push_str("</button>");
            }
        }
    }
    out
}

/// Plain text with clickable terms wrapped in `[[` `]]`.
pub fn to_marked(segments: &[Segment<'_>]) -> String {
    let mut out = String::new();
    for seg in segments {
        match seg {
            Segment::Plain { text } => out.push_str(text),
            Segment::Term { text, .. } => {
                let _ = write!(out, "[[{text}]]");
            }
        }
    }
    out
}

#[derive(Serialize)]
struct SpanView<'s> {
    #[serde(flatten)]
    style: Style,
    segments: Vec<Segment<'s>>,
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum BlockView<'s> {
    Spacer,
    Heading {
        level: u8,
        spans: Vec<SpanView<'s>>,
    },
    Paragraph {
        #[serde(skip_serializing_if = "Option::is_none")]
        marker: Option<&'s str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        task: Option<bool>,
        spans: Vec<SpanView<'s>>,
    },
}

fn span_views<'s>(block: &'s Block<'_>, ctx: &Context) -> Vec<SpanView<'s>> {
    block
        .spans()
        .iter()
        .map(|span| SpanView {
            style: span.style,
            segments: span.segments(ctx),
        })
        .collect()
}

/// Rendered blocks as JSON, with every span already segmented.
pub fn blocks_to_json(blocks: &[Block<'_>], ctx: &Context) -> Result<String, serde_json::Error> {
    let views: Vec<BlockView<'_>> = blocks
        .iter()
        .map(|block| match block {
            Block::Spacer => BlockView::Spacer,
            Block::Heading { level, .. } => BlockView::Heading {
                level: *level,
                spans: span_views(block, ctx),
            },
            Block::Paragraph { marker, task, .. } => BlockView::Paragraph {
                marker: *marker,
                task: *task,
                spans: span_views(block, ctx),
            },
        })
        .collect();
    serde_json::to_string_pretty(&views)
}
