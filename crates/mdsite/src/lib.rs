//! # mdsite
//!
//! Generate a static site from a directory of markdown pages.
//!
//! Static assets are mirrored into the output directory, then every `*.md`
//! file under the content directory is rendered through `mdsite-core` and
//! substituted into an HTML template at `{{ Content }}` and `{{ Title }}`.
//!
//! ## Example
//!
//! ```rust
//! use mdsite::render_page;
//! use mdsite_core::Options;
//!
//! let template = "<title>{{ Title }}</title><body>{{ Content }}</body>";
//! let html = render_page("# Home\n\nWelcome", template, &Options::default()).unwrap();
//! assert_eq!(
//!     html,
//!     "<title>Home</title><body><div><h1>Home</h1><p>Welcome</p></div></body>"
//! );
//! ```

mod config;
mod mirror;
mod page;
mod walk;

use std::io;
use std::path::PathBuf;

pub use config::{ConfigError, SiteConfig, DEFAULT_CONFIG_FILE};
pub use mirror::mirror_dir;
pub use page::{
    generate_page, generate_pages_recursive, render_page, CONTENT_PLACEHOLDER, TITLE_PLACEHOLDER,
};

use tracing::info;

/// Error type for site generation
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },

    #[error("Failed to convert {}: {source}", path.display())]
    Markdown {
        path: PathBuf,
        source: mdsite_core::MdsiteError,
    },
}

pub type Result<T> = std::result::Result<T, GenerateError>;

/// Summary of one generator run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SiteStats {
    pub assets_copied: usize,
    pub pages_generated: usize,
}

/// Mirror static assets, then generate every page
pub fn build_site(config: &SiteConfig) -> Result<SiteStats> {
    let assets_copied = mirror_dir(&config.static_dir, &config.output_dir)?;
    let pages_generated = generate_pages_recursive(
        &config.content_dir,
        &config.template,
        &config.output_dir,
        &config.markdown_options(),
    )?;

    info!(assets_copied, pages_generated, "site generated");
    Ok(SiteStats {
        assets_copied,
        pages_generated,
    })
}
