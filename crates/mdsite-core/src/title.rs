//! Document title extraction.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{MdsiteError, Result};

static HEADING_LINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*#+\s+(.+)$").unwrap());

/// Text of the first heading line of any level, trimmed
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .lines()
        .find_map(|line| HEADING_LINE_RE.captures(line))
        .map(|caps| caps[1].trim().to_string())
        .ok_or(MdsiteError::NoTitle)
}
