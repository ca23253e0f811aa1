//! Bold span tokenizer.

use super::block::{InlineSequence, InlineSpan};

const BOLD_MARKER: &str = "**";

/// Splits text into plain and bold spans.
///
/// Matches `**content**` pairs left to right, each opening marker closing at
/// the nearest following marker, so content never contains `**` and pairs
/// never nest. Content may be empty (`****` yields an empty bold span). An
/// opening marker without a closing one is kept as literal text, and since
/// any later marker would have closed it, scanning stops there.
///
/// # Arguments
///
/// * `text`: Single line of block text
///
/// # Returns
///
/// Spans in source order; empty when `text` is empty
pub fn tokenize(text: &str) -> InlineSequence {
    let mut spans = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find(BOLD_MARKER) {
        let content_start = open + BOLD_MARKER.len();
        let Some(close) = rest[content_start..].find(BOLD_MARKER) else {
            break;
        };
        let content_end = content_start + close;

        if open > 0 {
            spans.push(InlineSpan::PlainText(rest[..open].to_string()));
        }
        spans.push(InlineSpan::Bold(
            rest[content_start..content_end].to_string(),
        ));

        rest = &rest[content_end + BOLD_MARKER.len()..];
    }

    if !rest.is_empty() {
        spans.push(InlineSpan::PlainText(rest.to_string()));
    }

    spans
}
