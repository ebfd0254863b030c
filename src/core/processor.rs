//! Instruction processing pipeline
//!
//! This module provides the `InstructionProcessor` that runs an instruction
//! through every stage:
//!
//! text → canonical instruction → validated instruction → execution status
//! → projected balances → [`TransactionResult`]
//!
//! Processing is synchronous and stateless; each call depends only on its
//! arguments and the injected clock. The caller's account snapshot is never
//! modified, and no partially-valid result is ever returned.

use crate::core::projector::project_balances;
use crate::core::scheduler::schedule;
use crate::core::traits::{Clock, SystemClock};
use crate::core::validator::validate;
use crate::parser::parse_instruction;
use crate::types::{Account, InstructionError, TransactionResult};

/// Instruction processing engine
///
/// Generic over the [`Clock`] deciding whether dated instructions are due.
#[derive(Debug, Clone)]
pub struct InstructionProcessor<C: Clock = SystemClock> {
    clock: C,
}

impl<C: Clock> InstructionProcessor<C> {
    /// Create a processor using `clock` for "today"
    pub fn with_clock(clock: C) -> Self {
        InstructionProcessor { clock }
    }

    /// Process a single instruction against an account snapshot
    ///
    /// # Arguments
    ///
    /// * `accounts` - Caller-owned snapshot of account balances
    /// * `instruction` - Free-text payment instruction
    ///
    /// # Returns
    ///
    /// * `Ok(TransactionResult)` with status and projected balances
    /// * `Err(InstructionError)` for the first parsing or validation failure
    pub fn process(
        &self,
        accounts: &[Account],
        instruction: &str,
    ) -> Result<TransactionResult, InstructionError> {
        let result = self.run(accounts, instruction);

        match &result {
            Ok(outcome) => tracing::info!(
                status_code = %outcome.status_code,
                debit_account = %outcome.debit_account,
                credit_account = %outcome.credit_account,
                amount = outcome.amount,
                "instruction processed"
            ),
            Err(e) => tracing::warn!(
                code = e.code().unwrap_or_default(),
                error = %e,
                "instruction rejected"
            ),
        }

        result
    }

    fn run(
        &self,
        accounts: &[Account],
        instruction: &str,
    ) -> Result<TransactionResult, InstructionError> {
        let canonical = parse_instruction(instruction)?;
        tracing::debug!(?canonical, "parsed instruction");

        let validated = validate(canonical, accounts)?;

        let status = schedule(validated.execute_on, &self.clock);
        tracing::debug!(?status, execute_on = ?validated.execute_on, "execution decided");

        let projected = project_balances(&validated.instruction, accounts, status.executes_now())?;

        Ok(TransactionResult::new(validated.instruction, status, projected))
    }
}

impl InstructionProcessor<SystemClock> {
    /// Create a processor using the local calendar day
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for InstructionProcessor<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}
