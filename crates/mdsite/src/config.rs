//! Site configuration.
//!
//! Values come from defaults, an optional `mdsite.toml`, and finally CLI
//! flags, in that order.

use std::path::{Path, PathBuf};

use mdsite_core::{Options, UnderscoreStyle};
use serde::Deserialize;
use thiserror::Error;

/// Config file picked up from the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "mdsite.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {}: {source}", config_path.display())]
    Read {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {}: {source}", config_path.display())]
    Parse {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Assets mirrored verbatim into the output directory
    pub static_dir: PathBuf,
    /// Markdown page sources
    pub content_dir: PathBuf,
    /// HTML shell with `{{ Title }}` and `{{ Content }}` placeholders
    pub template: PathBuf,
    pub output_dir: PathBuf,
    /// Fallback log filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Render `_text_` as `<i>` instead of `<b>`
    pub italic_underscores: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("static"),
            content_dir: PathBuf::from("content"),
            template: PathBuf::from("template.html"),
            output_dir: PathBuf::from("public"),
            log_level: "info".to_string(),
            italic_underscores: false,
        }
    }
}

impl SiteConfig {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Self, ConfigError> {
        let config_path = config_path.as_ref();

        let content =
            std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            config_path: config_path.to_path_buf(),
            source,
        })
    }

    /// Load `mdsite.toml` from the working directory, or defaults if absent
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        if path.exists() {
            Self::load_from_path(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Markdown parsing options for this site
    pub fn markdown_options(&self) -> Options {
        let underscore_style = if self.italic_underscores {
            UnderscoreStyle::Italic
        } else {
            UnderscoreStyle::Bold
        };
        Options { underscore_style }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.content_dir, PathBuf::from("content"));
        assert_eq!(config.template, PathBuf::from("template.html"));
        assert_eq!(config.output_dir, PathBuf::from("public"));
        assert_eq!(config.markdown_options().underscore_style, UnderscoreStyle::Bold);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mdsite.toml");
        fs::write(&path, "output_dir = \"docs\"\nitalic_underscores = true\n").unwrap();

        let config = SiteConfig::load_from_path(&path).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("docs"));
        assert_eq!(config.content_dir, PathBuf::from("content"));
        assert_eq!(config.markdown_options().underscore_style, UnderscoreStyle::Italic);
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mdsite.toml");
        fs::write(&path, "output_dir = [").unwrap();

        assert!(matches!(
            SiteConfig::load_from_path(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            SiteConfig::load_from_path(dir.path().join("missing.toml")),
            Err(ConfigError::Read { .. })
        ));
    }
}
