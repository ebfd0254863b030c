//! Transaction outcome types
//!
//! This module defines the execution status of a validated instruction and the
//! response record handed back to the caller.

use super::account::{AccountId, ProjectedAccount};
use super::instruction::{Amount, CanonicalInstruction, Currency, InstructionType};
use super::vocabulary::{
    STATUS_CODE_PENDING, STATUS_CODE_SUCCESSFUL, STATUS_REASON_PENDING, STATUS_REASON_SUCCESSFUL,
};
use serde::{Deserialize, Serialize};

/// Execution status of a validated instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Balances were moved now
    Successful,

    /// Execution is deferred to `execute_by`; balances are unchanged
    Pending,
}

impl TransactionStatus {
    pub fn code(&self) -> &'static str {
        match self {
            TransactionStatus::Successful => STATUS_CODE_SUCCESSFUL,
            TransactionStatus::Pending => STATUS_CODE_PENDING,
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            TransactionStatus::Successful => STATUS_REASON_SUCCESSFUL,
            TransactionStatus::Pending => STATUS_REASON_PENDING,
        }
    }

    pub fn executes_now(&self) -> bool {
        matches!(self, TransactionStatus::Successful)
    }
}

/// Response record for a processed instruction
///
/// Field order matches the wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResult {
    #[serde(rename = "type")]
    pub instruction_type: InstructionType,
    pub amount: Amount,
    pub currency: Currency,
    pub debit_account: AccountId,
    pub credit_account: AccountId,
    pub execute_by: Option<String>,
    pub status: TransactionStatus,
    pub status_reason: String,
    pub status_code: String,
    pub accounts: Vec<ProjectedAccount>,
}

impl TransactionResult {
    /// Assemble the response from its validated parts
    pub fn new(
        instruction: CanonicalInstruction,
        status: TransactionStatus,
        accounts: Vec<ProjectedAccount>,
    ) -> Self {
        TransactionResult {
            instruction_type: instruction.instruction_type,
            amount: instruction.amount,
            currency: instruction.currency,
            debit_account: instruction.debit_account,
            credit_account: instruction.credit_account,
            execute_by: instruction.execute_by,
            status,
            status_reason: status.reason().to_string(),
            status_code: status.code().to_string(),
            accounts,
        }
    }
}

/// Response body for a rejected instruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub status_reason: String,
    pub status_code: Option<String>,
}

impl From<&super::error::InstructionError> for ErrorResponse {
    fn from(error: &super::error::InstructionError) -> Self {
        ErrorResponse {
            status: "failed".to_string(),
            status_reason: error.to_string(),
            status_code: error.code().map(str::to_string),
        }
    }
}
