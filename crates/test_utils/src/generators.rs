//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data that
//! maintains domain invariants.

use core_kernel::{MemberId, Usd};
use proptest::prelude::*;

/// Strategy for generating non-negative cent amounts
pub fn cents_strategy() -> impl Strategy<Value = i64> {
    0i64..10_000_000i64
}

/// Strategy for generating non-negative amounts
pub fn usd_strategy() -> impl Strategy<Value = Usd> {
    cents_strategy().prop_map(Usd::from_cents)
}

/// Strategy for generating per-mile rates in a realistic range
/// ($0.01 to $5.00)
pub fn rate_strategy() -> impl Strategy<Value = Usd> {
    (1i64..=500i64).prop_map(Usd::from_cents)
}

/// Strategy for generating a start/end odometer pair with `end >= start`
pub fn mileage_pair_strategy() -> impl Strategy<Value = (i64, i64)> {
    (0i64..100_000i64, 0i64..2_000i64).prop_map(|(start, distance)| (start, start + distance))
}

/// Strategy for generating a rider list of one to eight members
pub fn riders_strategy() -> impl Strategy<Value = Vec<MemberId>> {
    (1usize..=8).prop_map(|count| (0..count).map(|_| MemberId::new()).collect())
}
