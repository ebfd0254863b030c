//! Instruction-related types
//!
//! This module defines the canonical, format-independent representation of a
//! payment instruction extracted from free text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Amount moved by an instruction, in whole currency units
pub type Amount = u64;

/// Surface form the instruction was written in
///
/// Both forms describe the same money movement; the type only records which
/// account the sentence led with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InstructionType {
    /// "Debit 500 NGN from account A for credit to account B"
    Debit,

    /// "Credit 500 NGN to account B for debit from account A"
    Credit,
}

impl fmt::Display for InstructionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstructionType::Debit => f.write_str("DEBIT"),
            InstructionType::Credit => f.write_str("CREDIT"),
        }
    }
}

/// Supported currency codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Ngn,
    Usd,
    Gbp,
    Ghs,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Ngn => "NGN",
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
            Currency::Ghs => "GHS",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = ();

    /// Matches an already-uppercased code exactly
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::vocabulary::SUPPORTED_CURRENCIES
            .into_iter()
            .find(|currency| currency.code() == s)
            .ok_or(())
    }
}

/// Canonical instruction extracted from text
///
/// Created by the structured parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalInstruction {
    pub instruction_type: InstructionType,
    pub amount: Amount,
    pub currency: Currency,
    pub debit_account: String,
    pub credit_account: String,

    /// Raw `execute_by` text as written after `on`
    ///
    /// Kept verbatim; well-formedness is checked by the validator.
    pub execute_by: Option<String>,
}
