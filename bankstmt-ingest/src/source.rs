//! The collaborator interface supplying raw grids for a statement document.

use std::path::Path;

use anyhow::Result;
use bankstmt_core::Table;

/// Supplies the raw table grids (and first-page text) of one statement
/// document. Implementations wrap whatever produced the grids, whether a
/// PDF table extractor upstream or a dump of its output on disk.
pub trait StatementSource {
    /// Ordered raw tables, one per detected table region. Grids may be
    /// ragged and may contain newline-merged cells.
    fn extract_tables(&self, path: &Path) -> Result<Vec<Table>>;

    /// Raw text of the document's first page. Consumed only as a fallback
    /// when no statement date is found in the tables themselves.
    fn first_page_text(&self, path: &Path) -> Result<String>;
}
