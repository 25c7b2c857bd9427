//! Data model for portfolio documents.
//!
//! The document is kept as an open record rather than a fixed struct:
//! portfolio entries and the document root may carry arbitrary members that
//! must survive a reindex run verbatim, so the only typed surface is the
//! [`Document`] wrapper around the top-level JSON object.

pub mod document;

pub use document::{Document, PORTFOLIO_KEY, json_type_name};
