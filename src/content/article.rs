//! News article record.

use anyhow::{Context, Result};

use super::front_matter::{self, FrontMatter};
use crate::markdown::{Block, render};

/// A news article as stored in the content store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub slug: String,
    pub title: String,
    /// Publication date, `YYYY-MM-DD` when well formed.
    pub date: Option<String>,
    pub author: Option<String>,
    pub summary: Option<String>,
    /// Cover image URL.
    pub image: Option<String>,
    pub draft: bool,
    /// Markdown subset source.
    pub body: String,
}

impl Article {
    /// Creates a published, undated article.
    pub fn new(slug: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            date: None,
            author: None,
            summary: None,
            image: None,
            draft: false,
            body: body.into(),
        }
    }

    /// Builds article from file source with optional front matter.
    ///
    /// Without front matter the slug doubles as title.
    ///
    /// # Errors
    ///
    /// Returns error if front matter is present but invalid.
    pub fn from_source(slug: &str, source: &str) -> Result<Self> {
        let (front_src, body) = front_matter::split(source);

        let Some(front_src) = front_src else {
            return Ok(Self::new(slug, slug, body));
        };

        let front = FrontMatter::parse(front_src)
            .with_context(|| format!("Invalid front matter in article: {}", slug))?;
        let date = front.date()?;

        Ok(Self {
            slug: slug.to_string(),
            title: front.title,
            date,
            author: front.author,
            summary: front.summary,
            image: front.image,
            draft: front.draft,
            body: body.to_string(),
        })
    }

    /// Renders article body into display blocks.
    pub fn blocks(&self) -> Vec<Block> {
        render(&self.body)
    }
}
