//! Balance projection
//!
//! Computes before/after balances for the two accounts an instruction
//! touches. Accounts keep their snapshot order; accounts not referenced by the
//! instruction are left out. Balances only move when the transaction executes
//! now.

use crate::types::{Account, CanonicalInstruction, InstructionError, ProjectedAccount};
use rust_decimal::Decimal;

/// Project balances of the debit and credit accounts
///
/// # Errors
///
/// Returns `BalanceOverflow` if applying the amount overflows a balance.
pub fn project_balances(
    instruction: &CanonicalInstruction,
    accounts: &[Account],
    executes_now: bool,
) -> Result<Vec<ProjectedAccount>, InstructionError> {
    let amount = Decimal::from(instruction.amount);
    let mut projected: Vec<ProjectedAccount> = Vec::with_capacity(2);

    for account in accounts {
        let is_debit = account.id == instruction.debit_account;
        let is_credit = account.id == instruction.credit_account;

        if !(is_debit || is_credit) || projected.iter().any(|p| p.id == account.id) {
            continue;
        }

        let balance = if !executes_now {
            account.balance
        } else if is_debit {
            account
                .balance
                .checked_sub(amount)
                .ok_or_else(|| InstructionError::balance_overflow(&account.id))?
        } else {
            account
                .balance
                .checked_add(amount)
                .ok_or_else(|| InstructionError::balance_overflow(&account.id))?
        };

        projected.push(ProjectedAccount {
            id: account.id.clone(),
            balance,
            balance_before: account.balance,
            currency: account.currency.to_uppercase(),
        });

        if projected.len() == 2 {
            break;
        }
    }

    Ok(projected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Currency, InstructionType};

    fn instruction() -> CanonicalInstruction {
        CanonicalInstruction {
            instruction_type: InstructionType::Debit,
            amount: 500,
            currency: Currency::Ngn,
            debit_account: "A001".to_string(),
            credit_account: "B002".to_string(),
            execute_by: None,
        }
    }

    fn accounts() -> Vec<Account> {
        vec![
            Account::new("X000", Decimal::new(1, 0), "NGN"),
            Account::new("B002", Decimal::new(200, 0), "ngn"),
            Account::new("A001", Decimal::new(1000, 0), "NGN"),
        ]
    }

    #[test]
    fn test_projects_immediate_transfer() {
        let projected = project_balances(&instruction(), &accounts(), true).unwrap();

        assert_eq!(
            projected,
            vec![
                ProjectedAccount {
                    id: "B002".to_string(),
                    balance: Decimal::new(700, 0),
                    balance_before: Decimal::new(200, 0),
                    currency: "NGN".to_string(),
                },
                ProjectedAccount {
                    id: "A001".to_string(),
                    balance: Decimal::new(500, 0),
                    balance_before: Decimal::new(1000, 0),
                    currency: "NGN".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_pending_leaves_balances_unchanged() {
        let projected = project_balances(&instruction(), &accounts(), false).unwrap();

        assert_eq!(projected.len(), 2);
        for account in projected {
            assert_eq!(account.balance, account.balance_before);
        }
    }

    #[test]
    fn test_duplicate_ids_are_projected_once() {
        let mut accounts = accounts();
        accounts.insert(0, Account::new("A001", Decimal::new(9999, 0), "NGN"));

        let projected = project_balances(&instruction(), &accounts, true).unwrap();

        let ids: Vec<&str> = projected.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["A001", "B002"]);
        assert_eq!(projected[0].balance_before, Decimal::new(9999, 0));
    }

    #[test]
    fn test_keeps_fractional_balances() {
        let accounts = vec![
            Account::new("A001", Decimal::new(100050, 2), "NGN"),
            Account::new("B002", Decimal::new(25, 1), "NGN"),
        ];

        let projected = project_balances(&instruction(), &accounts, true).unwrap();

        assert_eq!(projected[0].balance, Decimal::new(50050, 2));
        assert_eq!(projected[1].balance, Decimal::new(5025, 1));
    }

    #[test]
    fn test_overflow_is_reported() {
        let accounts = vec![
            Account::new("A001", Decimal::MAX, "NGN"),
            Account::new("B002", Decimal::MAX, "NGN"),
        ];

        let result = project_balances(&instruction(), &accounts, true);
        assert_eq!(result, Err(InstructionError::balance_overflow("B002")));
    }
}
