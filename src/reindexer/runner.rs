use std::path::Path;

use anyhow::Result;

use crate::parsers::load_document;
use crate::reindexer::assign_sequential_ids;
use crate::storage::store_document;

/// Load a portfolio document, stamp sequential ids onto its entries, and
/// write it back to the same file.
///
/// Returns the serialized JSON that was written, so callers can echo it.
/// The file is only rewritten after the whole document has been reindexed;
/// a load or reindex failure leaves the previous content untouched.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
///
/// use portfolio_reindexer::reindex_file;
///
/// let serialized = reindex_file(Path::new("atit.json"))?;
/// println!("{}", serialized);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn reindex_file(path: &Path) -> Result<String> {
    let mut document = load_document(path)?;
    assign_sequential_ids(&mut document)?;
    store_document(path, &document)
}
