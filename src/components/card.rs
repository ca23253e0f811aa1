//! News index card component

use maud::{Markup, html};

use crate::content::Article;
use crate::util::{excerpt, format_date};

/// Renders article teaser card for the news index
///
/// Shows optional cover image, title linked to the article page, date and
/// author line, and the front matter summary. Without a summary, an excerpt
/// of the rendered body is used instead.
///
/// # Arguments
///
/// * `article`: Article to summarize
/// * `href`: Link to the article page, relative to the index
///
/// # Returns
///
/// Card markup as an `article` element
pub fn article_card(article: &Article, href: &str) -> Markup {
    let teaser = article
        .summary
        .clone()
        .or_else(|| excerpt(&article.blocks()));

    html! {
        article class="news-card" {
            @if let Some(image) = &article.image {
                a href=(href) class="news-card-image" {
                    img src=(image) alt=(article.title) loading="lazy";
                }
            }
            div class="news-card-body" {
                h2 class="news-card-title" {
                    a href=(href) { (article.title) }
                }
                (byline(article))
                @if let Some(text) = teaser {
                    p class="news-card-summary" { (text) }
                }
                a href=(href) class="news-card-more" { "Read more" }
            }
        }
    }
}

/// Renders date and author line, empty when neither is set
pub fn byline(article: &Article) -> Markup {
    html! {
        @if article.date.is_some() || article.author.is_some() {
            p class="byline" {
                @if let Some(date) = &article.date {
                    time datetime=(date) { (format_date(date)) }
                }
                @if article.date.is_some() && article.author.is_some() {
                    span class="byline-separator" { " · " }
                }
                @if let Some(author) = &article.author {
                    span class="byline-author" { (author) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_card_uses_summary() {
        // Arrange
        let mut article = Article::new("launch", "Launch", "Body paragraph.");
        article.summary = Some("Short summary".to_string());

        // Act
        let html = article_card(&article, "news/launch.html").into_string();

        // Assert
        assert!(html.contains("href=\"news/launch.html\""));
        assert!(html.contains("Short summary"));
        assert!(!html.contains("Body paragraph"), "Summary should win");
    }

    #[test]
    fn test_article_card_falls_back_to_excerpt() {
        // Arrange
        let article = Article::new("launch", "Launch", "# Heading\n\nBody **paragraph**.");

        // Act
        let html = article_card(&article, "news/launch.html").into_string();

        // Assert
        assert!(html.contains("Body paragraph."), "Got: {}", html);
    }

    #[test]
    fn test_article_card_image() {
        // Arrange
        let mut article = Article::new("a", "A", "");
        article.image = Some("/img/a.png".to_string());

        // Act
        let html = article_card(&article, "news/a.html").into_string();

        // Assert
        assert!(html.contains("src=\"/img/a.png\""));
        assert!(!html.contains("news-card-summary"));
    }

    #[test]
    fn test_byline_date_and_author() {
        // Arrange
        let mut article = Article::new("a", "A", "");
        article.date = Some("2024-03-01".to_string());
        article.author = Some("HR Team".to_string());

        // Act
        let html = byline(&article).into_string();

        // Assert
        assert!(html.contains("datetime=\"2024-03-01\""));
        assert!(html.contains("March 1, 2024"));
        assert!(html.contains("HR Team"));
        assert!(html.contains("byline-separator"));
    }

    #[test]
    fn test_byline_empty() {
        // Arrange
        let article = Article::new("a", "A", "");

        // Act & Assert
        assert_eq!(byline(&article).into_string(), "");
    }
}
