//! End-to-end extraction over realistic statement grids: alignment,
//! classification, both extractors and reconciliation together.

use bankstmt_core::{
    Amount, CountryIndex, StatementKind, Table, align_table, is_bank_account_table,
};
use bankstmt_extract::{
    StatementContext, VerificationSummary, extract_bank_account_transactions,
    extract_credit_card_transactions, extract_statement_date, verify_transactions,
};

fn ctx(year: i32) -> StatementContext {
    StatementContext {
        statement_date: None,
        year: Some(year),
        current_year: 2026,
    }
}

/// A savings-account statement the way the table extractor hands it over:
/// one logical transaction spread over several physical rows, bonus-interest
/// rows, and B/F–C/F bracket rows.
fn savings_table() -> Table {
    Table::from_rows(&[
        &["SAVINGS ACCOUNT", "", "", "", "", "", "1  JUL 2024 TO 31 JUL 2024", ""],
        &["Account No. 123456789012", "", "", "", "", "", "", ""],
        &["Transaction", "Value", "", "", "", "", "", ""],
        &["Date", "Date", "Description", "Cheque", "Withdrawal", "Deposit", "Balance", ""],
        &["", "", "BALANCE B/F", "", "", "", "57,869.97", ""],
        &["01 JUL", "01 JUL", "FAST PAYMENT", "", "700.00", "", "57,169.97", ""],
        &["", "", "123456789", "", "", "", "", ""],
        &["", "", "to JOHN DOE", "", "", "", "", ""],
        &["", "", "OTHR - Other", "", "", "", "", ""],
        &["07 JUL", "08 JUL", "FAST PAYMENT", "", "3,000.00", "", "54,169.97", ""],
        &["", "", "987654321", "", "", "", "", ""],
        &["", "", "to ALICE JOHNSON", "", "", "", "", ""],
        &["", "", "OTHR - Other", "", "", "", "", ""],
        &["09 JUL", "09 JUL", "BONUS INTEREST", "", "", "205.47", "54,375.44", ""],
        &["", "", "SALARY BONUS", "", "", "", "", ""],
        &["15 JUL", "15 JUL", "POS PURCHASE    NETS", "", "207.40", "", "54,168.04", ""],
        &["", "", "STORE A", "", "", "", "", ""],
        &["", "", "STORE B", "", "", "", "", ""],
        &["", "", "MALL", "", "", "", "", ""],
        &["01 AUG", "31 JUL", "INTEREST CREDIT", "", "", "23.54", "54,191.58", ""],
        &["", "", "BALANCE C/F", "", "", "", "54,191.58", ""],
    ])
}

#[test]
fn test_savings_statement_end_to_end() {
    let raw = savings_table();
    let (aligned, has_transactions) = align_table(&raw);
    assert!(has_transactions);
    assert!(is_bank_account_table(&aligned));

    let (date, year) = extract_statement_date(&aligned, "", 2026);
    assert_eq!(date.as_deref(), Some("1  JUL 2024"));
    assert_eq!(year, Some(2024));

    let txns =
        extract_bank_account_transactions(&[aligned], &ctx(2024), CountryIndex::global());
    assert_eq!(txns.len(), 5);

    // The value-date column wins the Date mapping.
    assert_eq!(txns[0].date.as_ref().unwrap().as_str(), "01 July 2024");
    assert_eq!(
        txns[0].description,
        "FAST PAYMENT 123456789 to JOHN DOE OTHR - Other"
    );
    assert_eq!(txns[0].withdrawal, Some(Amount::Parsed(700.0)));
    assert_eq!(txns[0].deposit, Some(Amount::Unparsed(String::new())));
    assert_eq!(txns[0].balance, Some(Amount::Parsed(57169.97)));

    assert_eq!(txns[1].date.as_ref().unwrap().as_str(), "08 July 2024");
    assert_eq!(txns[1].withdrawal, Some(Amount::Parsed(3000.0)));

    assert_eq!(txns[2].description, "BONUS INTEREST SALARY BONUS");
    assert_eq!(txns[2].deposit, Some(Amount::Parsed(205.47)));

    assert_eq!(
        txns[3].description,
        "POS PURCHASE NETS STORE A STORE B MALL"
    );

    // BALANCE C/F halts absorption for the last transaction.
    assert_eq!(txns[4].date.as_ref().unwrap().as_str(), "31 July 2024");
    assert_eq!(txns[4].description, "INTEREST CREDIT");
    assert_eq!(txns[4].deposit, Some(Amount::Parsed(23.54)));

    let summary = verify_transactions(&txns);
    let VerificationSummary::BankAccount {
        total_deposits,
        total_withdrawals,
        starting_balance,
        ending_balance_from_file,
        ending_balance_from_calculations,
        balance_matches,
    } = summary
    else {
        panic!("expected bank account summary");
    };
    assert_eq!(total_deposits, 229.01);
    assert_eq!(total_withdrawals, 3907.4);
    assert_eq!(starting_balance, Some(57869.97));
    assert_eq!(ending_balance_from_file, Some(54191.58));
    assert_eq!(ending_balance_from_calculations, Some(54191.58));
    assert_eq!(balance_matches, Some(true));
}

/// A credit-card statement page whose date and description columns arrive
/// newline-merged into a single physical column.
fn card_statement_table() -> Table {
    Table::from_rows(&[
        &["Credit Cards", ""],
        &["Statement of Account", ""],
        &["STATEMENT DATE\nCREDIT LIMIT", "23 May 2024\n$100,000.00"],
        &["DATE\nDESCRIPTION", "AMOUNT (S$)"],
        &["DBS LADIES VISA CARD NO.: 1234 5678 9012 3456", ""],
        &["PREVIOUS BALANCE", "10,500.00"],
        &["20 MAY\nAUTO-PYT FROM ACCT#123456789012345", "10,500.00 CR"],
        &["REF NO: 11689999398715999971650", ""],
        &["NEW TRANSACTIONS JOHN DOE", ""],
        &["23 APR\nCUSTOMER.IO EMAIL MARK HTTPSCUSTOMER OR", "150.75"],
        &["U. S. DOLLAR 100.00", ""],
        &["01 MAY\nDIGITALOCEAN.COM       AMSTERDAM     NL", "625.50"],
        &["U. S. DOLLAR 436.01", ""],
        &["SUB-TOTAL:\n776.25", ""],
    ])
}

#[test]
fn test_card_statement_end_to_end() {
    let raw = card_statement_table();
    let (aligned, has_transactions) = align_table(&raw);
    assert!(has_transactions);
    assert!(!is_bank_account_table(&aligned));
    assert_eq!(aligned.width(), 3);

    let (date, year) = extract_statement_date(&aligned, "", 2026);
    assert_eq!(date.as_deref(), Some("23 May 2024"));
    assert_eq!(year, Some(2024));

    let txns =
        extract_credit_card_transactions(&[aligned], &ctx(2024), CountryIndex::global());

    // The auto-payment record is excluded; two purchases remain, each with
    // its foreign-currency continuation line absorbed.
    assert_eq!(txns.len(), 2);
    assert_eq!(txns[0].date.as_ref().unwrap().as_str(), "23 April 2024");
    assert_eq!(txns[0].amount, Some(Amount::Parsed(150.75)));
    assert_eq!(
        txns[0].description,
        "CUSTOMER.IO EMAIL MARK HTTPSCUSTOMER OR U. S. DOLLAR 100.00"
    );
    assert_eq!(txns[1].date.as_ref().unwrap().as_str(), "01 May 2024");
    assert_eq!(txns[1].amount, Some(Amount::Parsed(625.5)));
    assert_eq!(
        txns[1].description,
        "DIGITALOCEAN.COM AMSTERDAM NL U. S. DOLLAR 436.01"
    );

    assert_eq!(
        verify_transactions(&txns),
        VerificationSummary::CreditCard {
            total_credit: 0.0,
            total_debit: 776.25,
            net_spend: 776.25,
        }
    );
}

#[test]
fn test_statement_kind_selection() {
    let (card, _) = align_table(&card_statement_table());
    let (bank, _) = align_table(&savings_table());

    let pick = |tables: &[Table]| {
        if tables.iter().any(is_bank_account_table) {
            StatementKind::BankAccount
        } else {
            StatementKind::CreditCard
        }
    };
    assert_eq!(pick(&[card.clone()]), StatementKind::CreditCard);
    assert_eq!(pick(&[card, bank]), StatementKind::BankAccount);
}
