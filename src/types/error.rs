//! Error types for the payment instruction engine
//!
//! This module defines every failure the engine can raise. Errors are typed,
//! carry the context needed to explain them, and are never retried or
//! aggregated: the first violated rule is the one reported.
//!
//! # Error Categories
//!
//! - **Syntax Errors**: unrecognised format, keyword order, missing `account`
//! - **Field Errors**: amount, currency, account identifiers, dates
//! - **Business Rule Errors**: unknown accounts, currency mismatch, funds
//! - **Input Errors**: request files that cannot be read or decoded
//!
//! Business errors expose a fixed wire code through [`InstructionError::code`].

use crate::types::instruction::{Amount, Currency};
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for instruction processing
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InstructionError {
    /// Text matches neither the debit-first nor the credit-first phrasing
    #[error("Malformed instruction: unable to recognise a debit or credit instruction")]
    MalformedInstruction,

    /// A required anchor keyword is missing or appears out of order
    #[error("Invalid keyword order: expected '{keyword}'")]
    InvalidKeywordOrder {
        /// The anchor keyword that could not be located
        keyword: String,
    },

    /// Amount is not a positive integer
    #[error("Amount must be a positive integer, got '{amount}'")]
    InvalidAmount {
        /// The amount token as written
        amount: String,
    },

    /// Currency is outside the supported set
    #[error("Unsupported currency '{currency}'. Only NGN, USD, GBP, and GHS are supported")]
    UnsupportedCurrency {
        /// The uppercased currency token
        currency: String,
    },

    /// The literal word `account` is missing after a preposition
    #[error("Missing keyword 'account' after '{after}'")]
    MissingKeyword {
        /// The preposition that must be followed by `account`
        after: String,
    },

    /// Account identifier is empty or uses characters outside the allowed set
    #[error("Invalid account ID '{account}'")]
    InvalidAccountId { account: String },

    /// Debit and credit accounts are the same
    #[error("Debit and credit accounts cannot be the same: '{account}'")]
    SameAccountError { account: String },

    /// Account referenced by the instruction is absent from the snapshot
    #[error("Account not found: '{account}'")]
    AccountNotFound { account: String },

    /// Account currency differs from the instruction currency
    #[error(
        "Account '{account}' currency {account_currency} does not match instruction currency {instruction_currency}"
    )]
    CurrencyMismatch {
        account: String,
        account_currency: String,
        instruction_currency: Currency,
    },

    /// Debit account balance is below the instruction amount
    #[error("Insufficient funds in account '{account}': available {available}, requested {requested}")]
    InsufficientFunds {
        account: String,
        available: Decimal,
        requested: Amount,
    },

    /// `execute_by` is not a canonical `YYYY-MM-DD` calendar date
    #[error("Invalid date format '{value}': expected YYYY-MM-DD")]
    InvalidDateFormat { value: String },

    /// Applying the amount would overflow the balance representation
    #[error("Balance overflow on account '{account}'")]
    BalanceOverflow { account: String },

    /// Request or account file not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// I/O error while reading input or writing output
    #[error("I/O error: {message}")]
    IoError { message: String },

    /// Request body could not be decoded
    #[error("Invalid request: {message}")]
    RequestParseError { message: String },

    /// Account snapshot CSV could not be decoded
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    CsvError { line: Option<u64>, message: String },
}

impl InstructionError {
    /// Fixed machine-checkable code for business failures
    ///
    /// Input errors have no code.
    pub fn code(&self) -> Option<&'static str> {
        let code = match self {
            InstructionError::InvalidAmount { .. } => "AM01",
            InstructionError::CurrencyMismatch { .. } => "CU01",
            InstructionError::UnsupportedCurrency { .. } => "CU02",
            InstructionError::InsufficientFunds { .. } => "AC01",
            InstructionError::SameAccountError { .. } => "AC02",
            InstructionError::AccountNotFound { .. } => "AC03",
            InstructionError::InvalidAccountId { .. } => "AC04",
            InstructionError::BalanceOverflow { .. } => "AC05",
            InstructionError::InvalidDateFormat { .. } => "DT01",
            InstructionError::MissingKeyword { .. } => "SY01",
            InstructionError::InvalidKeywordOrder { .. } => "SY02",
            InstructionError::MalformedInstruction => "SY03",
            InstructionError::FileNotFound { .. }
            | InstructionError::IoError { .. }
            | InstructionError::RequestParseError { .. }
            | InstructionError::CsvError { .. } => return None,
        };
        Some(code)
    }
}

impl From<std::io::Error> for InstructionError {
    fn from(error: std::io::Error) -> Self {
        InstructionError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for InstructionError {
    fn from(error: serde_json::Error) -> Self {
        InstructionError::RequestParseError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for InstructionError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        InstructionError::CsvError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl InstructionError {
    pub fn invalid_keyword_order(keyword: &str) -> Self {
        InstructionError::InvalidKeywordOrder {
            keyword: keyword.to_string(),
        }
    }

    pub fn invalid_amount(amount: &str) -> Self {
        InstructionError::InvalidAmount {
            amount: amount.to_string(),
        }
    }

    pub fn unsupported_currency(currency: &str) -> Self {
        InstructionError::UnsupportedCurrency {
            currency: currency.to_string(),
        }
    }

    pub fn missing_keyword(after: &str) -> Self {
        InstructionError::MissingKeyword {
            after: after.to_string(),
        }
    }

    pub fn invalid_account_id(account: &str) -> Self {
        InstructionError::InvalidAccountId {
            account: account.to_string(),
        }
    }

    pub fn same_account(account: &str) -> Self {
        InstructionError::SameAccountError {
            account: account.to_string(),
        }
    }

    pub fn account_not_found(account: &str) -> Self {
        InstructionError::AccountNotFound {
            account: account.to_string(),
        }
    }

    pub fn currency_mismatch(
        account: &str,
        account_currency: &str,
        instruction_currency: Currency,
    ) -> Self {
        InstructionError::CurrencyMismatch {
            account: account.to_string(),
            account_currency: account_currency.to_string(),
            instruction_currency,
        }
    }

    pub fn insufficient_funds(account: &str, available: Decimal, requested: Amount) -> Self {
        InstructionError::InsufficientFunds {
            account: account.to_string(),
            available,
            requested,
        }
    }

    pub fn invalid_date_format(value: &str) -> Self {
        InstructionError::InvalidDateFormat {
            value: value.to_string(),
        }
    }

    pub fn balance_overflow(account: &str) -> Self {
        InstructionError::BalanceOverflow {
            account: account.to_string(),
        }
    }
}
