//! Fixed vocabulary shared by the parser, validator and scheduler
//!
//! These values are part of the wire contract and must keep their exact
//! spelling.

use super::instruction::Currency;

/// Currencies an instruction may be denominated in
pub const SUPPORTED_CURRENCIES: [Currency; 4] =
    [Currency::Ngn, Currency::Usd, Currency::Gbp, Currency::Ghs];

/// Non-alphanumeric characters allowed in an account identifier
pub const ACCOUNT_ID_SPECIAL_CHARS: [char; 4] = ['-', '_', '.', '@'];

/// Canonical textual form of `execute_by`
pub const EXECUTE_BY_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}$";

/// `chrono` format matching [`EXECUTE_BY_PATTERN`]
pub const EXECUTE_BY_FORMAT: &str = "%Y-%m-%d";

pub const STATUS_CODE_SUCCESSFUL: &str = "AP00";
pub const STATUS_CODE_PENDING: &str = "AP02";

pub const STATUS_REASON_SUCCESSFUL: &str = "Transaction executed successfully";
pub const STATUS_REASON_PENDING: &str = "Transaction scheduled for future execution";

/// Returns true if `id` is non-empty and made only of allowed characters
pub fn is_valid_account_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || ACCOUNT_ID_SPECIAL_CHARS.contains(&c))
}
