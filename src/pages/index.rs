//! News index page generation

use maud::{Markup, html};

use crate::components::card::article_card;
use crate::components::layout::page_wrapper;
use crate::content::Article;

/// Directory holding article pages, relative to the index.
pub const ARTICLE_DIR: &str = "news";

/// Returns link from the index page to an article page.
pub fn article_href(slug: &str) -> String {
    format!("{}/{}.html", ARTICLE_DIR, slug)
}

/// Generates the news index page
///
/// Lists articles as teaser cards in the order given, which callers keep
/// newest first. Shows an empty state when there is nothing to list.
///
/// # Arguments
///
/// * `site_name`: Site name for page title and header
/// * `articles`: Articles to list, already sorted
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn generate(site_name: &str, articles: &[Article]) -> Markup {
    page_wrapper(
        site_name,
        site_name,
        "index.html",
        &["assets/index.css"],
        html! {
            div.page-header {
                h1.page-title { (site_name) }
                span.badge {
                    (articles.len())
                    @if articles.len() == 1 { " article" } @else { " articles" }
                }
            }

            @if articles.is_empty() {
                div.empty-state {
                    p { "No news yet. Check back soon." }
                }
            } @else {
                div.news-list {
                    @for article in articles {
                        (article_card(article, &article_href(&article.slug)))
                    }
                }
            }
        },
    )
}
