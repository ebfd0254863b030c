//! Account-related types
//!
//! This module defines the caller-supplied account snapshot and the projected
//! account state returned for the two accounts an instruction touches.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account identifier as written in the instruction and the snapshot
pub type AccountId = String;

/// Caller-supplied account snapshot entry
///
/// The engine reads it but never owns or persists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,

    /// Current balance
    pub balance: Decimal,

    /// Currency code as supplied; compared case-insensitively
    pub currency: String,
}

impl Account {
    pub fn new(id: impl Into<AccountId>, balance: Decimal, currency: impl Into<String>) -> Self {
        Account {
            id: id.into(),
            balance,
            currency: currency.into(),
        }
    }
}

/// Before/after state of an account referenced by an instruction
///
/// Balances go on the wire as exact JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedAccount {
    pub id: AccountId,

    /// Balance after the transaction (equal to `balance_before` when pending)
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub balance: Decimal,

    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub balance_before: Decimal,

    /// Uppercased currency code
    pub currency: String,
}
