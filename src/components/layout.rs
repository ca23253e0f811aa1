//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

/// Wraps page content with standard HTML structure
///
/// Provides consistent DOCTYPE, html, head, site header, and footer across
/// all page types. The caller provides page specific body content and the
/// stylesheets it needs, already relative to the page location.
///
/// # Arguments
///
/// * `site_name`: Site name shown in header and title suffix
/// * `title`: Page title text (without suffix)
/// * `home_href`: Relative link back to the news index
/// * `stylesheets`: CSS file paths to include
/// * `body`: Page specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(
    site_name: &str,
    title: &str,
    home_href: &str,
    stylesheets: &[&str],
    body: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                @if title == site_name {
                    title { (site_name) }
                } @else {
                    title { (title) " - " (site_name) }
                }
                @for stylesheet in stylesheets {
                    link rel="stylesheet" href=(stylesheet);
                }
            }
            body {
                header class="site-header" {
                    a href=(home_href) class="site-name" { (site_name) }
                }
                main class="container" {
                    (body)
                }
                footer class="site-footer" {
                    p { "Generated by newsdesk" }
                }
            }
        }
    }
}
