//! Loading and parsing of portfolio JSON files
//!
//! # Error Handling Strategy
//!
//! Loading is all-or-nothing. The document is a single JSON value, so there
//! is no line-level recovery to attempt:
//!
//! - **IO failures**: a missing, unreadable, or oversized file aborts the
//!   run with an error naming the path.
//!
//! - **Parse failures**: content that is not valid JSON aborts the run. The
//!   error carries serde_json's position information plus the path.
//!
//! - **Shape failures**: a top-level value that is not a JSON object aborts
//!   the run; there is nowhere a `portfolio` member could live.
//!
//! - **Error propagation**: uses `anyhow::Result` with context. Since this
//!   is a binary/CLI tool (not a library consumed for its error types),
//!   failure classes are distinguished by message rather than enum variants.

pub mod portfolio;

pub use portfolio::load_document;
