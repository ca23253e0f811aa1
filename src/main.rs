use anyhow::{Context, Result};
use newsdesk::{Config, DirectoryStore, generate_site};

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let store = DirectoryStore::new(&config.content);
    let report =
        generate_site(&store, &config.site_options()).context("Failed to generate site")?;

    println!(
        "Generated {} articles into {}",
        report.articles,
        config.output.display()
    );
    if report.drafts_skipped > 0 {
        println!(
            "Skipped {} drafts (use --drafts to include them)",
            report.drafts_skipped
        );
    }

    if !config.no_open {
        if let Err(e) = open::that(&report.index_path) {
            log::warn!(
                "Failed to open {} in browser: {}",
                report.index_path.display(),
                e
            );
        }
    }

    Ok(())
}
