//! I/O module
//!
//! Handles request input and response output.
//!
//! # Components
//!
//! - `json_format` - JSON request decoding and response serialization
//! - `csv_format` - CSV account snapshot reading

pub mod csv_format;
pub mod json_format;

pub use csv_format::{read_accounts_csv, read_accounts_csv_file};
pub use json_format::{read_request, read_request_file, write_response, TransactionRequest};
