//! bankstmt-core: grid model, token classifiers, merged-cell splitting and
//! normalizers for statement-table transaction extraction.

pub mod amount;
pub mod classify;
pub mod countries;
pub mod date;
pub mod grid;
pub mod split;
pub mod tokens;
pub mod transaction;

pub use amount::{Amount, parse_amount};
pub use classify::{is_bank_account_table, is_header_row, is_transaction_row};
pub use countries::CountryIndex;
pub use date::{DateText, standardize_date};
pub use grid::Table;
pub use split::{SplitPlan, align_table};
pub use tokens::clean_text;
pub use transaction::{StatementKind, Transaction};
