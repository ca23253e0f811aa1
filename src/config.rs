//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::generators::SiteOptions;

/// Command line configuration for newsdesk.
#[derive(Debug, Clone, Parser)]
#[command(name = "newsdesk", version, about, long_about = None)]
pub struct Config {
    /// Directory containing article markdown files
    #[arg(default_value = "content")]
    pub content: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Site name shown in page headers and titles
    #[arg(long, default_value = "News")]
    pub name: String,

    /// Include draft articles
    #[arg(long)]
    pub drafts: bool,

    /// Do not open the generated index in a browser
    #[arg(long)]
    pub no_open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if content path is not an existing directory or site
    /// name is blank.
    pub fn validate(&self) -> Result<()> {
        if !self.content.is_dir() {
            bail!(
                "Content directory does not exist: {}",
                self.content.display()
            );
        }

        if self.name.trim().is_empty() {
            bail!("Site name must not be empty");
        }

        Ok(())
    }

    /// Returns site generation options derived from the command line.
    pub fn site_options(&self) -> SiteOptions {
        SiteOptions {
            output: self.output.clone(),
            site_name: self.name.trim().to_string(),
            include_drafts: self.drafts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(content: &str) -> Config {
        Config {
            content: PathBuf::from(content),
            output: PathBuf::from("dist"),
            name: "News".to_string(),
            drafts: false,
            no_open: false,
        }
    }

    #[test]
    fn test_config_defaults() {
        // Arrange & Act
        let config = Config::try_parse_from(["newsdesk"]).expect("Defaults should parse");

        // Assert
        assert_eq!(config.content, PathBuf::from("content"));
        assert_eq!(config.output, PathBuf::from("dist"));
        assert_eq!(config.name, "News");
        assert!(!config.drafts);
        assert!(!config.no_open);
    }

    #[test]
    fn test_config_all_flags() {
        // Arrange & Act
        let config = Config::try_parse_from([
            "newsdesk",
            "articles",
            "-o",
            "public",
            "--name",
            "Acme News",
            "--drafts",
            "--no-open",
        ])
        .expect("Flags should parse");

        // Assert
        assert_eq!(config.content, PathBuf::from("articles"));
        assert_eq!(config.output, PathBuf::from("public"));
        assert_eq!(config.name, "Acme News");
        assert!(config.drafts);
        assert!(config.no_open);
    }

    #[test]
    fn test_validate_existing_dir() {
        // Arrange
        let config = config(".");

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_ok(), "Current directory should be valid");
    }

    #[test]
    fn test_validate_missing_dir() {
        // Arrange
        let config = config("/nonexistent/newsdesk/content");

        // Act
        let result = config.validate();

        // Assert
        let err = result.expect_err("Missing directory should fail");
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_validate_blank_name() {
        // Arrange
        let mut config = config(".");
        config.name = "   ".to_string();

        // Act & Assert
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_site_options_trims_name() {
        // Arrange
        let mut config = config(".");
        config.name = " Acme News ".to_string();
        config.drafts = true;

        // Act
        let options = config.site_options();

        // Assert
        assert_eq!(options.site_name, "Acme News");
        assert!(options.include_drafts);
        assert_eq!(options.output, PathBuf::from("dist"));
    }
}
