//! bankstmt-extract: transaction extraction from aligned statement grids,
//! statement-context resolution and balance reconciliation.

pub mod card;
pub mod context;
pub mod continuation;
pub mod ledger;
pub mod pipeline;
pub mod verify;

pub use card::extract_credit_card_transactions;
pub use context::{StatementContext, extract_statement_date, year_from_filename};
pub use continuation::CONTINUATION_LOOKAHEAD_ROWS;
pub use ledger::extract_bank_account_transactions;
pub use pipeline::{ParseOptions, ParseOutcome, parse_document};
pub use verify::{VerificationSummary, verify_transactions};
