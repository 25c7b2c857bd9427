//! Reindexing of portfolio documents
//!
//! # Error Handling Strategy
//!
//! Reindexing is fail-fast with zero local recovery:
//!
//! - **Shape failures**: a missing `portfolio` member or a non-array value
//!   aborts before any entry is touched.
//!
//! - **Entry failures**: the first entry that is not a JSON object aborts
//!   the run with an error naming its index. Skipping such entries would
//!   leave silent gaps in the id sequence, so there is no lenient mode.
//!
//! - **No partial writes**: [`reindex_file`] only stores the document after
//!   the whole portfolio has been stamped, so a failed run leaves the file
//!   with its previous content.

pub mod assign;
pub mod runner;

pub use assign::assign_sequential_ids;
pub use runner::reindex_file;
