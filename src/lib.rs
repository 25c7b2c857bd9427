//! Portfolio Reindexer - stamp sequential ids onto portfolio entries
//!
//! This library reads a JSON document containing a `portfolio` array,
//! overwrites the `id` member of every entry with the entry's zero-based
//! position, writes the document back to the same file, and returns the
//! serialized text so callers can echo it. It supports:
//!
//! - Loading and parsing portfolio JSON files with size validation
//! - Assigning sequential ids while preserving every other member verbatim
//! - Persisting the updated document back to its original location
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use portfolio_reindexer::reindex_file;
//!
//! let serialized = reindex_file(Path::new("atit.json"))?;
//! println!("{}", serialized);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod models;
pub mod parsers;
pub mod reindexer;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use models::Document;
pub use parsers::load_document;
pub use reindexer::{assign_sequential_ids, reindex_file};
pub use storage::store_document;
