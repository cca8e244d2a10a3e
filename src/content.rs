//! New-content resolution
//!
//! Produces the literal string the merge policy works with: either the
//! `content` input verbatim or the contents of the file it names, then
//! optionally narrowed by the extraction pattern.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::pattern::BodyPattern;
use std::fs;
use tracing::info;

/// Resolve the content string for this run.
pub fn resolve_content(config: &Config) -> Result<String> {
    let mut content = if config.content_is_file_path() {
        fs::read_to_string(&config.content).map_err(|source| Error::ContentFile {
            path: config.content.clone(),
            source,
        })?
    } else {
        config.content.clone()
    };

    if !config.content_regex.is_empty() {
        let pattern = BodyPattern::new(&config.content_regex, &config.content_regex_flags)?;
        if let Some(extracted) = pattern.extract_joined(&content) {
            info!("Using extracted content from regex match.");
            content = extracted;
        }
    }

    Ok(content)
}
