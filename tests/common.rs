//! Shared test utilities for integration tests.
//!
//! Provides helpers for creating temporary content directories populated
//! with article files, used across multiple test files.

#![allow(dead_code)]

use anyhow::Result;
use std::path::Path;
use tempfile::TempDir;

/// Creates empty temporary content directory.
///
/// # Errors
///
/// Returns error if directory creation fails
pub fn create_content_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Writes article file with `+++` front matter.
///
/// # Arguments
///
/// * `dir`: Content directory
/// * `slug`: File stem of the article
/// * `front_matter`: TOML table body, without delimiters
/// * `body`: Markdown body
///
/// # Errors
///
/// Returns error if file write fails
pub fn write_article(dir: &Path, slug: &str, front_matter: &str, body: &str) -> Result<()> {
    let source = format!("+++\n{}\n+++\n\n{}", front_matter.trim(), body);
    std::fs::write(dir.join(format!("{}.md", slug)), source)?;
    Ok(())
}

/// Writes raw file content into content directory.
///
/// # Errors
///
/// Returns error if file write fails
pub fn write_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    std::fs::write(dir.join(name), content)?;
    Ok(())
}
