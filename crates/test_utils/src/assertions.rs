//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give more
//! meaningful error messages than standard assertions.

use core_kernel::Usd;
use domain_fleet::MileageLog;

/// Asserts that two amounts are equal within a tolerance in cents
///
/// # Panics
///
/// Panics if the amounts differ by more than `tolerance_cents`.
pub fn assert_usd_approx_eq(actual: Usd, expected: Usd, tolerance_cents: i64) {
    let diff = (actual.cents() - expected.cents()).abs();
    assert!(
        diff <= tolerance_cents,
        "Amounts differ by more than tolerance: actual={}, expected={}, diff={} cents, tolerance={} cents",
        actual,
        expected,
        diff,
        tolerance_cents
    );
}

/// Asserts that an amount is zero
pub fn assert_usd_zero(amount: Usd) {
    assert!(amount.is_zero(), "Expected $0.00, got {amount}");
}

/// Asserts the continuity invariant of a mileage log: every trip's start
/// mileage equals the previous trip's end mileage, and the first trip
/// starts at the log's opening odometer reading
pub fn assert_log_continuous(log: &MileageLog) {
    let mut expected_start = log.start_odometer;
    for trip in &log.trips {
        assert_eq!(
            trip.start_mileage, expected_start,
            "Trip {} starts at {} but the previous reading was {}",
            trip.id, trip.start_mileage, expected_start
        );
        expected_start = trip.end_mileage;
    }
}
