//! Core business logic module
//!
//! This module contains the instruction processing components:
//! - `traits` - Clock abstraction for execution-date decisions
//! - `validator` - Business-rule validation with ordered failure precedence
//! - `scheduler` - Immediate vs deferred execution
//! - `projector` - Before/after balances of the accounts involved
//! - `processor` - Orchestration of the full pipeline

pub mod processor;
pub mod projector;
pub mod scheduler;
pub mod traits;
pub mod validator;

pub use processor::InstructionProcessor;
pub use traits::{Clock, FixedClock, SystemClock};
pub use validator::{validate, ValidatedInstruction};
