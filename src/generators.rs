//! Static site generation for the news section.

use anyhow::{Context, Result};
use maud::Markup;
use std::fs;
use std::path::{Path, PathBuf};

use crate::assets::write_css_assets;
use crate::content::{ContentStore, is_valid_slug};
use crate::pages;
use crate::pages::index::ARTICLE_DIR;

/// Options controlling site generation.
#[derive(Debug, Clone)]
pub struct SiteOptions {
    pub output: PathBuf,
    pub site_name: String,
    pub include_drafts: bool,
}

/// Summary of a finished generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteReport {
    pub index_path: PathBuf,
    pub articles: usize,
    pub drafts_skipped: usize,
}

/// Generates the news index, one page per article, and CSS assets.
///
/// Output layout:
///
/// ```text
/// <output>/index.html
/// <output>/news/<slug>.html
/// <output>/assets/index.css
/// <output>/assets/article.css
/// ```
///
/// Draft articles are left out unless `include_drafts` is set.
///
/// # Errors
///
/// Returns error if the store cannot list articles or any output file
/// cannot be written.
///
/// # Examples
///
/// ```no_run
/// use newsdesk::{DirectoryStore, SiteOptions, generate_site};
///
/// let store = DirectoryStore::new("content");
/// let report = generate_site(
///     &store,
///     &SiteOptions {
///         output: "dist".into(),
///         site_name: "News".to_string(),
///         include_drafts: false,
///     },
/// )?;
/// println!("{} articles", report.articles);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn generate_site(store: &dyn ContentStore, options: &SiteOptions) -> Result<SiteReport> {
    let all = store.articles().context("Failed to load articles")?;
    let total = all.len();
    let articles: Vec<_> = all
        .into_iter()
        .filter(|article| options.include_drafts || !article.draft)
        .collect();
    let drafts_skipped = total - articles.len();
    if drafts_skipped > 0 {
        log::info!("Skipping {} draft articles", drafts_skipped);
    }

    // Slugs become file names under the article directory.
    let articles: Vec<_> = articles
        .into_iter()
        .filter(|article| {
            let valid = is_valid_slug(&article.slug);
            if !valid {
                log::warn!("Skipping article with invalid slug: {:?}", article.slug);
            }
            valid
        })
        .collect();

    let article_dir = options.output.join(ARTICLE_DIR);
    fs::create_dir_all(&article_dir).with_context(|| {
        format!(
            "Failed to create article directory: {}",
            article_dir.display()
        )
    })?;

    let assets_dir = options.output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    write_css_assets(&assets_dir).context("Failed to write CSS assets")?;

    for article in &articles {
        let page = pages::article::generate(&options.site_name, article);
        let path = article_dir.join(format!("{}.html", article.slug));
        write_page(&path, page)?;
        log::debug!("Generated: {}", path.display());
    }

    let index_path = options.output.join("index.html");
    write_page(
        &index_path,
        pages::index::generate(&options.site_name, &articles),
    )?;
    log::info!(
        "Generated {} article pages and {}",
        articles.len(),
        index_path.display()
    );

    Ok(SiteReport {
        index_path,
        articles: articles.len(),
        drafts_skipped,
    })
}

fn write_page(path: &Path, page: Markup) -> Result<()> {
    fs::write(path, page.into_string())
        .with_context(|| format!("Failed to write page: {}", path.display()))
}
