//! CSV account snapshot handling
//!
//! Reads an account snapshot with columns `id, balance, currency`, as an
//! alternative to embedding accounts in a JSON request.

use crate::types::{Account, InstructionError};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Read every account from a CSV reader
///
/// Fields are trimmed. The first malformed row aborts the read.
pub fn read_accounts_csv<R: Read>(reader: R) -> Result<Vec<Account>, InstructionError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .buffer_capacity(8 * 1024)
        .from_reader(reader);

    reader
        .deserialize::<Account>()
        .map(|record| record.map_err(InstructionError::from))
        .collect()
}

/// Read every account from a CSV file
pub fn read_accounts_csv_file(path: &Path) -> Result<Vec<Account>, InstructionError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => InstructionError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => InstructionError::from(e),
    })?;

    read_accounts_csv(file)
}
