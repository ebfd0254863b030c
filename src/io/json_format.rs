//! JSON request/response handling
//!
//! This module centralizes the JSON wire format:
//! - `TransactionRequest` for deserialization of `{ accounts, instruction }`
//! - request readers for any `Read` or a file path (`-` for stdin)
//! - response serialization for both successful and rejected instructions
//!
//! Structural validation of the request is left to serde: a request that
//! does not match the schema is rejected as `RequestParseError` before any
//! instruction processing takes place.

use crate::types::{Account, InstructionError};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

/// Incoming request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub accounts: Vec<Account>,
    pub instruction: String,
}

/// Read a request from any reader
pub fn read_request<R: Read>(reader: R) -> Result<TransactionRequest, InstructionError> {
    Ok(serde_json::from_reader(BufReader::new(reader))?)
}

/// Read a request from a file, or from stdin when `path` is `-`
///
/// # Errors
///
/// - `FileNotFound` if the file does not exist
/// - `IoError` if it cannot be opened or read
/// - `RequestParseError` if the body does not decode
pub fn read_request_file(path: &Path) -> Result<TransactionRequest, InstructionError> {
    if path == Path::new("-") {
        return read_request(io::stdin().lock());
    }

    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => InstructionError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => InstructionError::from(e),
    })?;

    read_request(file)
}

/// Serialize a response body followed by a newline
pub fn write_response<T: Serialize>(
    response: &T,
    output: &mut dyn Write,
    pretty: bool,
) -> Result<(), InstructionError> {
    if pretty {
        serde_json::to_writer_pretty(&mut *output, response)?;
    } else {
        serde_json::to_writer(&mut *output, response)?;
    }
    writeln!(output)?;
    output.flush()?;

    Ok(())
}
