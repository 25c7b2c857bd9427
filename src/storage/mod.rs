//! Persistence of reindexed portfolio documents

pub mod persistence;

pub use persistence::store_document;
