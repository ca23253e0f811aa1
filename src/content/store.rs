//! Article storage backends.

use anyhow::{Context, Result};
use std::cmp::Ordering;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::Article;

const ARTICLE_EXTENSION: &str = "md";

/// Read access to published article records.
///
/// Rendering never touches a store directly; pages receive articles already
/// loaded through this gateway.
pub trait ContentStore {
    /// Returns all articles, newest first.
    ///
    /// # Errors
    ///
    /// Returns error if the backing storage cannot be listed.
    fn articles(&self) -> Result<Vec<Article>>;

    /// Returns single article by slug, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns error if the article exists but cannot be read or parsed.
    fn article(&self, slug: &str) -> Result<Option<Article>>;
}

/// Checks slug is usable as a file name and URL segment.
///
/// Accepts non-empty ASCII alphanumerics, `-` and `_`.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Orders articles newest first, undated last, then by slug.
///
/// ISO `YYYY-MM-DD` dates compare correctly as strings.
pub fn sort_articles(articles: &mut [Article]) {
    articles.sort_by(|a, b| match (&a.date, &b.date) {
        (Some(da), Some(db)) => db.cmp(da).then_with(|| a.slug.cmp(&b.slug)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.slug.cmp(&b.slug),
    });
}

/// Articles stored as `<slug>.md` files in one directory.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_article(&self, slug: &str, path: &Path) -> Result<Article> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read article: {}", path.display()))?;
        Article::from_source(slug, &source)
    }
}

impl ContentStore for DirectoryStore {
    /// Lists every readable article in the directory.
    ///
    /// Files with invalid slugs or unparseable content are logged and
    /// skipped so one bad article does not take the listing down.
    fn articles(&self) -> Result<Vec<Article>> {
        let entries = fs::read_dir(&self.root).with_context(|| {
            format!("Failed to read content directory: {}", self.root.display())
        })?;

        let mut articles = Vec::new();
        for entry in entries {
            let path = entry
                .with_context(|| format!("Failed to list entry in {}", self.root.display()))?
                .path();

            if !path.is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(ARTICLE_EXTENSION)
            {
                continue;
            }

            let Some(slug) = path.file_stem().and_then(|s| s.to_str()) else {
                log::warn!("Skipping article with non UTF8 name: {}", path.display());
                continue;
            };
            if !is_valid_slug(slug) {
                log::warn!("Skipping article with invalid slug: {}", path.display());
                continue;
            }

            match self.read_article(slug, &path) {
                Ok(article) => articles.push(article),
                Err(e) => log::warn!("Skipping article {}: {:#}", path.display(), e),
            }
        }

        sort_articles(&mut articles);
        log::debug!(
            "Loaded {} articles from {}",
            articles.len(),
            self.root.display()
        );
        Ok(articles)
    }

    fn article(&self, slug: &str) -> Result<Option<Article>> {
        if !is_valid_slug(slug) {
            return Ok(None);
        }

        let path = self.root.join(format!("{}.{}", slug, ARTICLE_EXTENSION));
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => self.read_article(slug, &path).map(Some),
            Ok(_) => Ok(None),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to stat article: {}", path.display())),
        }
    }
}

/// Articles held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    articles: Vec<Article>,
}

impl MemoryStore {
    /// Creates store from articles; a later duplicate slug replaces an
    /// earlier one, as with [`MemoryStore::insert`].
    pub fn new(articles: Vec<Article>) -> Self {
        let mut store = Self::default();
        for article in articles {
            store.insert(article);
        }
        store
    }

    /// Adds article, replacing any existing one with the same slug.
    pub fn insert(&mut self, article: Article) {
        self.articles.retain(|a| a.slug != article.slug);
        self.articles.push(article);
    }
}

impl ContentStore for MemoryStore {
    fn articles(&self) -> Result<Vec<Article>> {
        let mut articles = self.articles.clone();
        sort_articles(&mut articles);
        Ok(articles)
    }

    fn article(&self, slug: &str) -> Result<Option<Article>> {
        Ok(self.articles.iter().find(|a| a.slug == slug).cloned())
    }
}
