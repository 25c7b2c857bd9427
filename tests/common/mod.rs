//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for creating portfolio JSON files in a temp directory
pub struct PortfolioFileBuilder {
    temp_dir: TempDir,
    file_name: String,
}

impl PortfolioFileBuilder {
    /// Create a new builder using the default `atit.json` file name
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, file_name: "atit.json".to_string() }
    }

    /// Use a different file name inside the temp directory
    pub fn named(mut self, file_name: &str) -> Self {
        self.file_name = file_name.to_string();
        self
    }

    /// Path to the portfolio file
    pub fn path(&self) -> PathBuf {
        self.temp_dir.path().join(&self.file_name)
    }

    /// Path to the directory holding the portfolio file
    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write raw content to the portfolio file
    pub fn with_content(self, content: &str) -> Self {
        fs::write(self.path(), content).expect("Failed to write portfolio file");
        self
    }

    /// Write a document whose `portfolio` array holds the given entries
    pub fn with_entries(self, entries: &[PortfolioEntryBuilder]) -> Self {
        let items = entries.iter().map(|e| e.to_json()).collect::<Vec<_>>().join(",");
        let content = format!(r#"{{"portfolio":[{}]}}"#, items);
        self.with_content(&content)
    }

    /// Read the current content of the portfolio file
    pub fn read(&self) -> String {
        fs::read_to_string(self.path()).expect("Failed to read portfolio file")
    }
}

impl Default for PortfolioFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for portfolio entries
pub struct PortfolioEntryBuilder {
    name: String,
    id: Option<i64>,
    extra: Vec<(String, String)>,
}

impl PortfolioEntryBuilder {
    /// Create a new entry with the given name
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string(), id: None, extra: Vec::new() }
    }

    /// Give the entry a pre-existing id value
    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Add an extra member with a raw JSON value
    pub fn member(mut self, key: &str, raw_json_value: &str) -> Self {
        self.extra.push((key.to_string(), raw_json_value.to_string()));
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        let mut members = vec![format!(r#""name":"{}""#, self.name)];
        if let Some(id) = self.id {
            members.push(format!(r#""id":{}"#, id));
        }
        for (key, value) in &self.extra {
            members.push(format!(r#""{}":{}"#, key, value));
        }
        format!("{{{}}}", members.join(","))
    }
}

/// Helper to create the canonical three-entry portfolio file
pub fn sample_portfolio() -> PortfolioFileBuilder {
    PortfolioFileBuilder::new().with_entries(&[
        PortfolioEntryBuilder::new("A"),
        PortfolioEntryBuilder::new("B").id(99),
        PortfolioEntryBuilder::new("C"),
    ])
}
