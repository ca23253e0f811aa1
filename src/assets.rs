//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/components/layout.css");
const NAV: &str = include_str!("../assets/components/nav.css");

const INDEX_PAGE: &str = include_str!("../assets/page-index.css");
const ARTICLE_PAGE: &str = include_str!("../assets/page-article.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");

/// Stylesheets written by [`write_css_assets`], relative to the assets dir.
pub const CSS_ASSETS: [&str; 2] = ["index.css", "article.css"];

/// Writes all bundled CSS assets to output directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    write_bundled(assets_dir, "index.css", &[BASE, LAYOUT, INDEX_PAGE])?;
    write_bundled(
        assets_dir,
        "article.css",
        &[BASE, LAYOUT, NAV, ARTICLE_PAGE, MARKDOWN],
    )?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}
