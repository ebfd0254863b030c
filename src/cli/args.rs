use crate::core::validator::parse_execute_by;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Parse a free-text payment instruction and project account balances
#[derive(Parser, Debug)]
#[command(name = "payment-instruction")]
#[command(about = "Parse a payment instruction and project account balances", long_about = None)]
pub struct CliArgs {
    /// JSON request containing `accounts` and `instruction`
    #[arg(
        long = "request",
        value_name = "FILE",
        required_unless_present = "accounts",
        conflicts_with_all = ["accounts", "instruction"],
        help = "Path to a JSON request file, or '-' for stdin"
    )]
    pub request: Option<PathBuf>,

    /// CSV account snapshot, used together with --instruction
    #[arg(
        long = "accounts",
        value_name = "CSV",
        requires = "instruction",
        help = "Path to a CSV file with columns id,balance,currency"
    )]
    pub accounts: Option<PathBuf>,

    /// Instruction text, used together with --accounts
    #[arg(
        long = "instruction",
        value_name = "TEXT",
        requires = "accounts",
        help = "Payment instruction text"
    )]
    pub instruction: Option<String>,

    /// Calendar day to treat as today
    #[arg(
        long = "today",
        value_name = "YYYY-MM-DD",
        value_parser = parse_day,
        help = "Pin today's date for execution decisions (default: local date)"
    )]
    pub today: Option<NaiveDate>,

    /// Pretty-print the JSON response
    #[arg(long = "pretty")]
    pub pretty: bool,
}

/// Where the accounts and instruction come from
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    Request(PathBuf),
    Inline { accounts: PathBuf, instruction: String },
}

impl CliArgs {
    /// Resolve the input source
    ///
    /// clap guarantees exactly one of the two forms is present.
    pub fn input_source(&self) -> InputSource {
        match (&self.request, &self.accounts, &self.instruction) {
            (Some(request), _, _) => InputSource::Request(request.clone()),
            (None, Some(accounts), Some(instruction)) => InputSource::Inline {
                accounts: accounts.clone(),
                instruction: instruction.clone(),
            },
            _ => InputSource::Request(PathBuf::from("-")),
        }
    }
}

fn parse_day(value: &str) -> Result<NaiveDate, String> {
    parse_execute_by(value).map_err(|e| e.to_string())
}
