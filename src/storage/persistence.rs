//! Document persistence: compact serialization and in-place overwrite

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::Document;

/// Serialize a document to compact JSON and overwrite the file at `path`
/// in full. The previous content is replaced directly; there is no temp
/// file, rename, or backup, so an interrupted write can leave the file
/// truncated.
///
/// Returns the serialized text so the caller can report it.
pub fn store_document(path: &Path, document: &Document) -> Result<String> {
    let serialized =
        serde_json::to_string(document).context("Failed to serialize portfolio document")?;

    fs::write(path, &serialized)
        .with_context(|| format!("Failed to write portfolio file: {}", path.display()))?;

    Ok(serialized)
}
