//! Business-rule validation
//!
//! Checks a canonical instruction against the caller's account snapshot.
//! Rules run in a fixed order and stop at the first violation:
//!
//! 1. debit account id well-formed
//! 2. credit account id well-formed
//! 3. debit and credit accounts differ
//! 4. debit account exists
//! 5. credit account exists
//! 6. debit account currency matches
//! 7. credit account currency matches
//! 8. debit account balance covers the amount
//! 9. `execute_by`, if present, is a canonical `YYYY-MM-DD` calendar date

use crate::types::vocabulary::{is_valid_account_id, EXECUTE_BY_FORMAT, EXECUTE_BY_PATTERN};
use crate::types::{Account, CanonicalInstruction, InstructionError};
use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::LazyLock;

static EXECUTE_BY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EXECUTE_BY_PATTERN).expect("execute_by pattern is valid"));

/// Instruction that passed every business rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInstruction {
    pub instruction: CanonicalInstruction,

    /// Parsed `execute_by`
    pub execute_on: Option<NaiveDate>,
}

/// Validate an instruction against the supplied accounts
///
/// # Errors
///
/// Returns the error of the first rule violated, in the order listed in the
/// module documentation.
pub fn validate(
    instruction: CanonicalInstruction,
    accounts: &[Account],
) -> Result<ValidatedInstruction, InstructionError> {
    let debit_id = instruction.debit_account.as_str();
    let credit_id = instruction.credit_account.as_str();

    for id in [debit_id, credit_id] {
        if !is_valid_account_id(id) {
            return Err(InstructionError::invalid_account_id(id));
        }
    }

    if debit_id == credit_id {
        return Err(InstructionError::same_account(debit_id));
    }

    let debit = find_account(accounts, debit_id)?;
    let credit = find_account(accounts, credit_id)?;

    for account in [debit, credit] {
        if account.currency.to_uppercase() != instruction.currency.code() {
            return Err(InstructionError::currency_mismatch(
                &account.id,
                &account.currency,
                instruction.currency,
            ));
        }
    }

    if debit.balance < Decimal::from(instruction.amount) {
        return Err(InstructionError::insufficient_funds(
            &debit.id,
            debit.balance,
            instruction.amount,
        ));
    }

    let execute_on = instruction
        .execute_by
        .as_deref()
        .map(parse_execute_by)
        .transpose()?;

    Ok(ValidatedInstruction {
        instruction,
        execute_on,
    })
}

/// First account in the snapshot with the given id
fn find_account<'a>(accounts: &'a [Account], id: &str) -> Result<&'a Account, InstructionError> {
    accounts
        .iter()
        .find(|account| account.id == id)
        .ok_or_else(|| InstructionError::account_not_found(id))
}

/// Parse `execute_by`
///
/// The text must match the canonical pattern and name a real calendar day;
/// the pattern check is authoritative.
pub fn parse_execute_by(value: &str) -> Result<NaiveDate, InstructionError> {
    if !EXECUTE_BY_RE.is_match(value) {
        return Err(InstructionError::invalid_date_format(value));
    }

    NaiveDate::parse_from_str(value, EXECUTE_BY_FORMAT)
        .map_err(|_| InstructionError::invalid_date_format(value))
}
