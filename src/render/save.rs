use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TreescribeError};

use super::walker::root_name;

/// File name used when the rendered root has no base name.
const FALLBACK_STEM: &str = "directory_tree";

/// Output file flavor. Both write the listing verbatim; only the extension differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SaveFormat {
    #[default]
    #[serde(rename = "txt")]
    Text,
    #[serde(rename = "md")]
    Markdown,
}

impl SaveFormat {
    pub fn extension(self) -> &'static str {
        match self {
            SaveFormat::Text => "txt",
            SaveFormat::Markdown => "md",
        }
    }
}

/// Suggested file name for the listing of `root`, e.g. `project_tree.txt`.
pub fn default_file_name(root: &Path, format: SaveFormat) -> String {
    let name = root_name(root);
    if name.is_empty() {
        format!("{}.{}", FALLBACK_STEM, format.extension())
    } else {
        format!("{}_tree.{}", name, format.extension())
    }
}

/// Write a rendered listing to `path`, refusing to create an empty file.
pub fn save_listing(root: &Path, listing: &str, path: &Path) -> Result<PathBuf> {
    if listing.trim().is_empty() {
        return Err(TreescribeError::NothingToSave(root.to_path_buf()));
    }

    fs::write(path, listing).map_err(|e| TreescribeError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(path = %path.display(), bytes = listing.len(), "Saved listing");
    Ok(path.to_path_buf())
}
