//! JSON document dumps: the upstream extractor's output serialized whole.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use bankstmt_core::Table;
use serde::{Deserialize, Serialize};

use crate::source::StatementSource;

/// One statement document as dumped by the table extractor: every detected
/// grid plus the first page's raw text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentDump {
    pub tables: Vec<Vec<Vec<String>>>,
    #[serde(default)]
    pub first_page_text: String,
}

impl DocumentDump {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
    }
}

/// Reads `.json` document dumps.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDumpSource;

impl StatementSource for JsonDumpSource {
    fn extract_tables(&self, path: &Path) -> Result<Vec<Table>> {
        let dump = DocumentDump::load(path)?;
        Ok(dump.tables.into_iter().map(Table::new).collect())
    }

    fn first_page_text(&self, path: &Path) -> Result<String> {
        Ok(DocumentDump::load(path)?.first_page_text)
    }
}
