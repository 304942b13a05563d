//! Output folder setup and static resources

use crate::page::LAYOUT_TEMPLATE;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Extensions of files copied verbatim from the site folder
const STATIC_EXTENSIONS: &[&str] = &["html", "css", "png", "svg"];

/// A freshly recreated output folder
#[derive(Debug)]
pub struct OutputDir {
    path: PathBuf,
}

impl OutputDir {
    /// Delete `path` if present and create it empty
    pub fn recreate(path: &Path) -> Result<Self> {
        if path.exists() {
            std::fs::remove_dir_all(path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
        }
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        Ok(OutputDir {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Whether a site folder entry is copied as is
pub fn is_static_asset(file_name: &str) -> bool {
    if file_name == LAYOUT_TEMPLATE {
        return false;
    }
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|ext| STATIC_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// Copy static resources from `site` into `out`, returning the copied names sorted
pub fn copy_static_assets(site: &Path, out: &OutputDir) -> Result<Vec<String>> {
    info!("Copying resources");
    let entries = std::fs::read_dir(site)
        .with_context(|| format!("Failed to read site folder: {}", site.display()))?;

    let mut copied = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to list {}", site.display()))?;
        // Follows symlinks, so linked resources are copied as files
        let metadata = std::fs::metadata(entry.path())
            .with_context(|| format!("Failed to stat {}", entry.path().display()))?;
        if !metadata.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if !is_static_asset(&name) {
            continue;
        }
        let target = out.path().join(&name);
        std::fs::copy(entry.path(), &target).with_context(|| {
            format!("Failed to copy {} to {}", entry.path().display(), target.display())
        })?;
        debug!("Copied {}", name);
        copied.push(name);
    }

    copied.sort();
    Ok(copied)
}
