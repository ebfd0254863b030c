//! Benchmark suite for instruction parsing and processing
//!
//! Uses the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```

use chrono::NaiveDate;
use payment_instruction_engine::{parse_instruction, Account, FixedClock, InstructionProcessor};
use rust_decimal::Decimal;

fn main() {
    divan::main();
}

const DEBIT: &str = "Debit 500 NGN from Account A001 for credit to Account B002 on 2099-01-01";
const CREDIT: &str = "Credit 500 NGN to Account B002 for debit from Account A001";

/// Parse a debit-first instruction with a trailing date
#[divan::bench]
fn parse_debit_format() {
    parse_instruction(divan::black_box(DEBIT)).expect("Parsing failed");
}

/// Parse a credit-first instruction
#[divan::bench]
fn parse_credit_format() {
    parse_instruction(divan::black_box(CREDIT)).expect("Parsing failed");
}

/// Full pipeline against snapshots of increasing size
#[divan::bench(args = [2, 100, 10_000])]
fn process_instruction(bencher: divan::Bencher, snapshot_size: usize) {
    let mut accounts: Vec<Account> = (0..snapshot_size.saturating_sub(2))
        .map(|i| Account::new(format!("X{}", i), Decimal::new(100, 0), "NGN"))
        .collect();
    accounts.push(Account::new("A001", Decimal::new(1000, 0), "NGN"));
    accounts.push(Account::new("B002", Decimal::new(200, 0), "NGN"));

    let processor = InstructionProcessor::with_clock(FixedClock(
        NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date"),
    ));

    bencher.bench_local(|| {
        processor
            .process(divan::black_box(&accounts), divan::black_box(CREDIT))
            .expect("Processing failed")
    });
}
