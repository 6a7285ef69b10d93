//! Page generation from markdown sources and an HTML template.

use std::fs;
use std::path::{Path, PathBuf};

use mdsite_core::{build_with_options, extract_title, Options};
use tracing::{debug, info};

use crate::walk::walk;
use crate::{GenerateError, Result};

/// Template placeholder replaced by the rendered document
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Template placeholder replaced by the document title
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";

/// Render markdown into the template. Every placeholder occurrence is replaced.
pub fn render_page(
    markdown: &str,
    template: &str,
    options: &Options,
) -> mdsite_core::Result<String> {
    let content = build_with_options(markdown, options)?.render()?;
    let title = extract_title(markdown)?;

    Ok(template
        .replace(CONTENT_PLACEHOLDER, &content)
        .replace(TITLE_PLACEHOLDER, &title))
}

/// Generate a single HTML page, creating the destination's parent directories
pub fn generate_page(source: &Path, template_path: &Path, dest: &Path, options: &Options) -> Result<()> {
    info!(
        source = %source.display(),
        template = %template_path.display(),
        dest = %dest.display(),
        "generating page"
    );

    let markdown = read(source)?;
    let template = read(template_path)?;

    let html = render_page(&markdown, &template, options).map_err(|source_err| {
        GenerateError::Markdown {
            path: source.to_path_buf(),
            source: source_err,
        }
    })?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|source| GenerateError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(dest, html).map_err(|source| GenerateError::Write {
        path: dest.to_path_buf(),
        source,
    })
}

/// Generate `<dest_dir>/<relative>.html` for every `*.md` file under
/// `content_dir`. Returns the number of pages written; a missing
/// `content_dir` yields no pages.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    options: &Options,
) -> Result<usize> {
    if !content_dir.exists() {
        debug!(dir = %content_dir.display(), "content directory missing, nothing to generate");
        return Ok(0);
    }

    let sources = collect_markdown_files(content_dir)?;
    debug!(count = sources.len(), dir = %content_dir.display(), "found markdown sources");

    for source in &sources {
        let relative = source.strip_prefix(content_dir).unwrap_or(source);
        let dest = dest_dir.join(relative).with_extension("html");
        generate_page(source, template_path, &dest, options)?;
    }

    Ok(sources.len())
}

/// Collect all markdown files below the content directory
fn collect_markdown_files(content_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in walk(content_dir) {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "md") {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| GenerateError::Read {
        path: path.to_path_buf(),
        source,
    })
}
