//! bankstmt-ingest: statement grid ingestion. The seam to the external
//! table extractor, plus loaders for pre-extracted grid dumps.

pub mod csv_table;
pub mod json_dump;
pub mod source;

pub use csv_table::CsvTableSource;
pub use json_dump::{DocumentDump, JsonDumpSource};
pub use source::StatementSource;
