//! Payment Instruction Engine Library
//! # Overview
//!
//! This library turns a free-text payment instruction plus a snapshot of
//! account balances into a validated money movement with projected balances.
//!
//! # Architecture
//!
//! Data flows strictly left to right:
//! text → tokens → canonical instruction → validated instruction →
//! execution status → projected balances → response.
//!
//! - [`types`] - Core data types (Account, CanonicalInstruction, TransactionResult, etc.)
//! - [`parser`] - Tokenizer, format detection and the structured parser
//! - [`core`] - Business logic components:
//!   - [`core::validator`] - Ordered business-rule checks
//!   - [`core::scheduler`] - Immediate vs deferred execution
//!   - [`core::projector`] - Before/after balances
//!   - [`core::processor`] - Pipeline orchestration
//! - [`io`] - JSON request/response and CSV account snapshots
//! - [`cli`] - CLI arguments parsing
//!
//! # Instruction Formats
//!
//! - **Debit-first**: `Debit 500 NGN from account A001 for credit to account B002`
//! - **Credit-first**: `Credit 500 NGN to account B002 for debit from account A001`
//!
//! Either form may end with `on YYYY-MM-DD`. A date after today defers the
//! transaction (`pending`, `AP02`); otherwise it executes now
//! (`successful`, `AP00`).
//!
//! # Example
//!
//! ```
//! use payment_instruction_engine::{Account, InstructionProcessor};
//! use rust_decimal::Decimal;
//!
//! let accounts = vec![
//!     Account::new("A001", Decimal::new(1000, 0), "NGN"),
//!     Account::new("B002", Decimal::new(200, 0), "NGN"),
//! ];
//! let result = InstructionProcessor::new()
//!     .process(&accounts, "Debit 500 NGN from Account A001 for credit to Account B002")
//!     .unwrap();
//!
//! assert_eq!(result.status_code, "AP00");
//! assert_eq!(result.accounts[0].balance, Decimal::new(500, 0));
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod parser;
pub mod types;

pub use crate::core::{Clock, FixedClock, InstructionProcessor, SystemClock};
pub use io::{read_request, write_response, TransactionRequest};
pub use parser::parse_instruction;
pub use types::{
    Account, CanonicalInstruction, Currency, ErrorResponse, InstructionError, InstructionType,
    ProjectedAccount, TransactionResult, TransactionStatus,
};
