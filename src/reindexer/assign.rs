use anyhow::{Result, bail};
use serde_json::Value;

use crate::models::{Document, PORTFOLIO_KEY, json_type_name};

const ID_KEY: &str = "id";

/// Overwrite the `id` member of every portfolio entry with the entry's
/// zero-based position in the array. Existing `id` values are replaced; an
/// overwritten member keeps its place in the entry, a new one is appended.
///
/// Returns the number of entries stamped.
///
/// # Errors
///
/// Fails if the document has no `portfolio` member, if that member is not
/// an array, or if an entry is not a JSON object (nothing can hold an `id`
/// there). The error for a bad entry names its index.
pub fn assign_sequential_ids(document: &mut Document) -> Result<usize> {
    let entries = match document.fields.get_mut(PORTFOLIO_KEY) {
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            bail!("`{}` must be an array, found {}", PORTFOLIO_KEY, json_type_name(other))
        }
        None => bail!("Document has no `{}` member", PORTFOLIO_KEY),
    };

    for (position, entry) in entries.iter_mut().enumerate() {
        match entry {
            Value::Object(members) => {
                members.insert(ID_KEY.to_string(), Value::from(position));
            }
            other => bail!(
                "Portfolio entry at index {} is {}, not an object; cannot assign an id",
                position,
                json_type_name(other)
            ),
        }
    }

    Ok(entries.len())
}
