//! Markdown subset rendering for news articles.
//!
//! Supports three heading levels, flat unordered lists, horizontal rules,
//! paragraphs and `**bold**` spans. Rendering is a single forward pass over
//! lines producing display blocks; presentation lives in
//! [`crate::components::article`].

mod block;
mod inline;
mod renderer;

pub use block::{Block, HeadingLevel, InlineSequence, InlineSpan, plain_text};
pub use inline::tokenize as tokenize_inline;
pub use renderer::render;
