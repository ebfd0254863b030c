//! Payment Instruction CLI
//!
//! Command-line interface for parsing a payment instruction against an account
//! snapshot.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --request request.json
//! cat request.json | cargo run -- --request -
//! cargo run -- --accounts accounts.csv --instruction "Debit 500 NGN from account A001 for credit to account B002"
//! cargo run -- --request request.json --today 2025-06-15 --pretty
//! ```
//!
//! The response is written to stdout as JSON. Diagnostics go to stderr and are
//! filtered with `RUST_LOG` (default `warn`).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (rejected instruction, unreadable request, etc.)

use payment_instruction_engine::cli;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    let mut output = std::io::stdout();
    if let Err(e) = cli::run(&args, &mut output) {
        tracing::error!(error = %e, "instruction failed");
        process::exit(1);
    }
}
