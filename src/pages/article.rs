//! Article detail page generation

use maud::{Markup, html};

use crate::components::article::article_body;
use crate::components::card::byline;
use crate::components::layout::page_wrapper;
use crate::components::nav::breadcrumb;
use crate::content::Article;

/// Generates the detail page for one article
///
/// Renders the markdown body through the block renderer and places it
/// below breadcrumb, title, byline, and optional cover image. The page is
/// written one directory below the index, so links climb one level.
///
/// # Arguments
///
/// * `site_name`: Site name for title suffix and breadcrumb root
/// * `article`: Article to render
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn generate(site_name: &str, article: &Article) -> Markup {
    let index_path = "../index.html";
    let blocks = article.blocks();

    page_wrapper(
        site_name,
        &article.title,
        index_path,
        &["../assets/article.css"],
        html! {
            (breadcrumb(site_name, index_path, &article.title))

            article.news-article {
                header.article-header {
                    h1.article-title { (article.title) }
                    (byline(article))
                }
                @if let Some(image) = &article.image {
                    img.article-cover src=(image) alt=(article.title);
                }
                (article_body(&blocks))
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_renders_body_blocks() {
        // Arrange
        let article = Article::new(
            "launch",
            "Launch",
            "## Details\n- **Where**: Berlin\n- When: May\n\nSee you there.",
        );

        // Act
        let html = generate("Acme News", &article).into_string();

        // Assert
        assert!(html.contains("<title>Launch - Acme News</title>"));
        assert!(html.contains("<h1 class=\"article-title\">Launch</h1>"));
        assert!(html.contains("<h2>Details</h2>"));
        assert!(html.contains("<li><strong>Where</strong>: Berlin</li>"));
        assert!(html.contains("<p>See you there.</p>"));
        assert!(html.contains("../assets/article.css"));
    }

    #[test]
    fn test_generate_cover_image() {
        // Arrange
        let mut article = Article::new("a", "A", "");
        article.image = Some("https://cdn.example.com/a.jpg".to_string());

        // Act
        let html = generate("News", &article).into_string();

        // Assert
        assert!(html.contains("article-cover"));
        assert!(html.contains("https://cdn.example.com/a.jpg"));
    }

    #[test]
    fn test_generate_without_cover_image() {
        // Act
        let html = generate("News", &Article::new("a", "A", "Text")).into_string();

        // Assert
        assert!(!html.contains("article-cover"));
    }
}
