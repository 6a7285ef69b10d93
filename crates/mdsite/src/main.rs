use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use mdsite::{build_site, SiteConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Generate a static HTML site from markdown pages")]
struct Cli {
    /// Config file (defaults to ./mdsite.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory of static assets to mirror
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Directory of markdown pages
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// HTML template with {{ Title }} and {{ Content }} placeholders
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Output directory (replaced on every run)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Log level used when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,

    /// Render _text_ as <i> instead of <b>
    #[arg(long)]
    italic_underscores: bool,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<SiteConfig> {
        let mut config = match &self.config {
            Some(path) => SiteConfig::load_from_path(path)?,
            None => SiteConfig::load_default()?,
        };

        if let Some(dir) = self.static_dir {
            config.static_dir = dir;
        }
        if let Some(dir) = self.content_dir {
            config.content_dir = dir;
        }
        if let Some(template) = self.template {
            config.template = template;
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if self.italic_underscores {
            config.italic_underscores = true;
        }

        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let config = Cli::parse().into_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let stats = build_site(&config).with_context(|| {
        format!(
            "generating site from {} into {}",
            config.content_dir.display(),
            config.output_dir.display()
        )
    })?;

    info!(
        pages = stats.pages_generated,
        assets = stats.assets_copied,
        output = %config.output_dir.display(),
        "done"
    );
    Ok(())
}
