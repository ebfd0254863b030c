//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: account snapshot and projected account state
//! - `instruction`: canonical instruction, instruction type and currency
//! - `transaction`: execution status and response records
//! - `vocabulary`: fixed wire vocabulary (currencies, codes, patterns)
//! - `error`: error types for the engine

pub mod account;
pub mod error;
pub mod instruction;
pub mod transaction;
pub mod vocabulary;

pub use account::{Account, AccountId, ProjectedAccount};
pub use error::InstructionError;
pub use instruction::{Amount, CanonicalInstruction, Currency, InstructionType};
pub use transaction::{ErrorResponse, TransactionResult, TransactionStatus};
