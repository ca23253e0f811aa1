//! News article records and the stores they are read from.
//!
//! Articles are markdown files with optional `+++` TOML front matter. The
//! [`ContentStore`] trait is the only way pages and generators obtain them.

mod article;
mod front_matter;
mod store;

pub use article::Article;
pub use store::{ContentStore, DirectoryStore, MemoryStore, is_valid_slug, sort_articles};
