//! HTML templates with `@TOKEN@` placeholders

use anyhow::{Context, Result};
use log::{debug, warn};
use std::path::{Path, PathBuf};

pub const TITLE: &str = "@TITLE@";
pub const SCRIPTS: &str = "@SCRIPTS@";
pub const CONTENT: &str = "@CONTENT@";
pub const DATE: &str = "@DATE@";

pub const TABLE: &str = "@TABLE@";
pub const TABLE2: &str = "@TABLE2@";
pub const TABLE_CHIPSEQ: &str = "@TABLE_CHIPSEQ@";
pub const TABLE_ENCODE: &str = "@TABLE_ENCODE@";
pub const ENCODE_TABLE: &str = "@ENCODE_TABLE@";
pub const ULI_TABLE: &str = "@ULI_TABLE@";
pub const MCGILL_TABLE: &str = "@MCGILL_TABLE@";

/// Every token the generator knows how to fill
pub const KNOWN_TOKENS: &[&str] = &[
    TITLE,
    SCRIPTS,
    CONTENT,
    DATE,
    TABLE,
    TABLE2,
    TABLE_CHIPSEQ,
    TABLE_ENCODE,
    ENCODE_TABLE,
    ULI_TABLE,
    MCGILL_TABLE,
];

/// A loaded template. Replacing a token yields a new template.
#[derive(Debug, Clone)]
pub struct Template {
    source: PathBuf,
    html: String,
}

impl Template {
    /// Read a template from disk
    pub fn load(path: &Path) -> Result<Self> {
        let html = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read template: {}", path.display()))?;
        debug!("Loaded template {} ({} bytes)", path.display(), html.len());
        Ok(Template {
            source: path.to_path_buf(),
            html,
        })
    }

    #[cfg(test)]
    pub fn from_text(source: impl Into<PathBuf>, html: impl Into<String>) -> Self {
        Template {
            source: source.into(),
            html: html.into(),
        }
    }

    /// Replace every occurrence of `token` with `value`
    pub fn replace(self, token: &str, value: &str) -> Self {
        if !self.html.contains(token) {
            warn!("Template {} has no {} placeholder", self.source.display(), token);
            return self;
        }
        Template {
            html: self.html.replace(token, value),
            source: self.source,
        }
    }

    /// Known tokens still present in the text
    pub fn unresolved(&self) -> Vec<&'static str> {
        KNOWN_TOKENS
            .iter()
            .copied()
            .filter(|token| self.html.contains(token))
            .collect()
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    /// Write the text to `path`, overwriting any existing file
    pub fn write(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.html())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        debug!("Wrote {} from {}", path.display(), self.source.display());
        Ok(())
    }
}
