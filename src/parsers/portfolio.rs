use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::models::{Document, json_type_name};
use crate::utils::validate_file_size;

/// Read and parse a portfolio JSON file.
/// The file must hold a single JSON object; all members are kept verbatim.
/// Fails on IO errors, invalid JSON, or a non-object top-level value.
pub fn load_document(path: &Path) -> Result<Document> {
    // Open first, then validate size on the handle to avoid TOCTOU races
    let mut file = File::open(path)
        .with_context(|| format!("Failed to open portfolio file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .with_context(|| format!("Failed to read portfolio file: {}", path.display()))?;

    let value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse JSON in {}", path.display()))?;

    let kind = json_type_name(&value);
    Document::from_value(value).with_context(|| {
        format!("Expected a JSON object at the top level of {}, found {}", path.display(), kind)
    })
}
