// CLI module
// Command-line interface, argument parsing and the request/response loop

mod args;

pub use args::{CliArgs, InputSource};

use crate::core::{FixedClock, InstructionProcessor};
use crate::io::{read_accounts_csv_file, read_request_file, write_response};
use crate::types::{ErrorResponse, InstructionError, TransactionResult};
use clap::Parser;
use std::io::Write;

/// Parse command-line arguments using clap
///
/// If parsing fails (e.g. missing input, conflicting options, or --help),
/// clap displays an error message or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Process the input named by `args` and write the JSON response
///
/// A rejected instruction is written as an error body and also returned, so
/// the caller can choose the exit status.
pub fn run(args: &CliArgs, output: &mut dyn Write) -> Result<(), InstructionError> {
    let result = load_and_process(args);

    match &result {
        Ok(response) => write_response(response, output, args.pretty)?,
        Err(e) => write_response(&ErrorResponse::from(e), output, args.pretty)?,
    }

    result.map(|_| ())
}

fn load_and_process(args: &CliArgs) -> Result<TransactionResult, InstructionError> {
    let (accounts, instruction) = match args.input_source() {
        InputSource::Request(path) => {
            let request = read_request_file(&path)?;
            (request.accounts, request.instruction)
        }
        InputSource::Inline {
            accounts,
            instruction,
        } => (read_accounts_csv_file(&accounts)?, instruction),
    };

    match args.today {
        Some(day) => {
            InstructionProcessor::with_clock(FixedClock(day)).process(&accounts, &instruction)
        }
        None => InstructionProcessor::new().process(&accounts, &instruction),
    }
}
