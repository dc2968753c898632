//! Document-level pipeline: raw grids in, ordered transactions out.

use std::path::Path;

use anyhow::Result;
use bankstmt_core::{CountryIndex, StatementKind, Table, Transaction, align_table, is_bank_account_table};
use bankstmt_ingest::StatementSource;
use log::debug;
use serde::Serialize;

use crate::card::extract_credit_card_transactions;
use crate::context::{StatementContext, extract_statement_date, year_from_filename};
use crate::ledger::extract_bank_account_transactions;
use crate::verify::{VerificationSummary, verify_transactions};

/// Per-run options threaded explicitly through the pipeline.
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// Compute a verification summary over the extracted transactions.
    pub verify: bool,
    /// Injected current calendar year, used only as a date-parsing fallback.
    pub current_year: i32,
}

impl ParseOptions {
    pub fn new(current_year: i32) -> Self {
        Self {
            verify: false,
            current_year,
        }
    }

    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }
}

/// Everything extracted from one document.
#[derive(Debug, Clone, Serialize)]
pub struct ParseOutcome {
    pub transactions: Vec<Transaction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<StatementKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_data: Option<VerificationSummary>,
}

impl ParseOutcome {
    /// A document whose tables yielded zero transactions. This is an
    /// explicit outcome, not an error.
    pub fn no_transactions_found(&self) -> bool {
        self.transactions.is_empty()
    }
}

/// Parse one statement document through a [`StatementSource`].
pub fn parse_document<S: StatementSource>(
    source: &S,
    path: &Path,
    options: &ParseOptions,
) -> Result<ParseOutcome> {
    let raw_tables = source.extract_tables(path)?;
    debug!("{}: {} raw table(s)", path.display(), raw_tables.len());

    let mut transaction_tables: Vec<Table> = Vec::new();
    let mut statement_date: Option<String> = None;
    let mut statement_year: Option<i32> = None;
    let mut page_text: Option<String> = None;

    for raw in &raw_tables {
        let (aligned, has_transactions) = align_table(raw);
        if statement_date.is_none() {
            let text = page_text.get_or_insert_with(|| {
                source.first_page_text(path).unwrap_or_default()
            });
            let (date, year) = extract_statement_date(&aligned, text, options.current_year);
            statement_date = date;
            statement_year = year;
        }
        if has_transactions {
            transaction_tables.push(aligned);
        }
    }

    if statement_year.is_none() {
        statement_year = year_from_filename(path);
    }
    let ctx = StatementContext {
        statement_date: statement_date.clone(),
        year: statement_year,
        current_year: options.current_year,
    };
    debug!(
        "{}: {} transaction table(s), statement year {:?}",
        path.display(),
        transaction_tables.len(),
        ctx.year
    );

    let countries = CountryIndex::global();
    let kind = (!transaction_tables.is_empty()).then(|| {
        if transaction_tables.iter().any(is_bank_account_table) {
            StatementKind::BankAccount
        } else {
            StatementKind::CreditCard
        }
    });
    let transactions = match kind {
        Some(StatementKind::BankAccount) => {
            extract_bank_account_transactions(&transaction_tables, &ctx, countries)
        }
        Some(StatementKind::CreditCard) => {
            extract_credit_card_transactions(&transaction_tables, &ctx, countries)
        }
        None => Vec::new(),
    };

    let verification_data = options.verify.then(|| verify_transactions(&transactions));

    Ok(ParseOutcome {
        transactions,
        kind,
        statement_date,
        statement_year,
        verification_data,
    })
}
