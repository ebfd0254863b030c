//! Execution scheduling
//!
//! Decides whether a validated instruction executes now or is held until its
//! `execute_by` date. Only calendar days are compared: a date of today or in
//! the past executes immediately, a future date is pending.

use crate::core::traits::Clock;
use crate::types::TransactionStatus;
use chrono::NaiveDate;

/// Execution status for an optional `execute_by` date
pub fn schedule(execute_on: Option<NaiveDate>, clock: &impl Clock) -> TransactionStatus {
    match execute_on {
        Some(date) if date > clock.today() => TransactionStatus::Pending,
        _ => TransactionStatus::Successful,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FixedClock;
    use rstest::rstest;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case::no_date(None, TransactionStatus::Successful)]
    #[case::past(Some(day(2020, 1, 1)), TransactionStatus::Successful)]
    #[case::yesterday(Some(day(2025, 6, 14)), TransactionStatus::Successful)]
    #[case::today(Some(day(2025, 6, 15)), TransactionStatus::Successful)]
    #[case::tomorrow(Some(day(2025, 6, 16)), TransactionStatus::Pending)]
    #[case::far_future(Some(day(2099, 1, 1)), TransactionStatus::Pending)]
    fn test_schedule(#[case] execute_on: Option<NaiveDate>, #[case] expected: TransactionStatus) {
        let clock = FixedClock(day(2025, 6, 15));
        assert_eq!(schedule(execute_on, &clock), expected);
    }
}
