//! Instruction parsing module
//!
//! Turns free text into a canonical instruction:
//! - `tokenizer` - word splitting and case-insensitive keyword lookup
//! - `format` - debit-first / credit-first format descriptors and detection
//! - `instruction` - the structured parser shared by both formats

pub mod format;
pub mod instruction;
pub mod tokenizer;

pub use format::{detect_format, FormatDescriptor, CREDIT_FORMAT, DEBIT_FORMAT};
pub use instruction::{parse_instruction, parse_tokens};
pub use tokenizer::tokenize;
