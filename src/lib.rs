//! Static news section generator with a markdown subset renderer.

mod assets;
pub mod components;
mod config;
pub mod content;
mod generators;
pub mod markdown;
pub mod pages;
mod util;

pub use assets::{CSS_ASSETS, write_css_assets};
pub use config::Config;
pub use content::{Article, ContentStore, DirectoryStore, MemoryStore};
pub use generators::{SiteOptions, SiteReport, generate_site};
pub use markdown::{Block, HeadingLevel, InlineSequence, InlineSpan, render};
pub use util::{excerpt, format_date};
