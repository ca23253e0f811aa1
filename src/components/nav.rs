//! Navigation breadcrumb component

use maud::{Markup, html};

/// Renders breadcrumb navigation
///
/// Displays the news index as root link followed by the current page title.
/// Used on article pages to link back to the listing.
///
/// # Arguments
///
/// * `index_label`: Label for the root link
/// * `index_href`: Relative path back to index.html
/// * `current`: Title of the page being viewed
///
/// # Returns
///
/// Breadcrumb navigation markup
pub fn breadcrumb(index_label: &str, index_href: &str, current: &str) -> Markup {
    html! {
        nav class="breadcrumb" {
            a href=(index_href) class="breadcrumb-link" { (index_label) }
            span class="breadcrumb-separator" { "/" }
            span class="breadcrumb-current" { (current) }
        }
    }
}
