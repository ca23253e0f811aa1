//! Rendered article body component

use maud::{Markup, html};

use crate::markdown::{Block, HeadingLevel, InlineSpan};

/// Renders display blocks as article body markup
///
/// Maps each block to its HTML counterpart: headings to `h1`..`h3`, lists to
/// `ul`, rules to `hr`, paragraphs to `p`. Bold spans become `strong`. All
/// text is escaped by maud, so article source cannot inject markup.
///
/// # Arguments
///
/// * `blocks`: Blocks produced by [`crate::markdown::render`]
///
/// # Returns
///
/// Article body wrapped in `div.markdown-body`
pub fn article_body(blocks: &[Block]) -> Markup {
    html! {
        div class="markdown-body" {
            @for block in blocks {
                (block_markup(block))
            }
        }
    }
}

fn block_markup(block: &Block) -> Markup {
    match block {
        Block::Heading { level, text } => match level {
            HeadingLevel::H1 => html! { h1 { (spans(text)) } },
            HeadingLevel::H2 => html! { h2 { (spans(text)) } },
            HeadingLevel::H3 => html! { h3 { (spans(text)) } },
        },
        Block::List { items } => html! {
            ul {
                @for item in items {
                    li { (spans(item)) }
                }
            }
        },
        Block::Rule => html! { hr; },
        Block::Paragraph { text } => html! { p { (spans(text)) } },
    }
}

fn spans(sequence: &[InlineSpan]) -> Markup {
    html! {
        @for span in sequence {
            @match span {
                InlineSpan::PlainText(value) => { (value) }
                InlineSpan::Bold(value) => { strong { (value) } }
            }
        }
    }
}
