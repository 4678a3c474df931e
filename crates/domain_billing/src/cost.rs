//! Trip cost calculation
//!
//! A pure function of the trip, its vehicle, and the long-distance rate
//! configuration. Distance is clamped before the strategy is applied, so an
//! apparently negative distance is costed as the zero-distance edge case
//! rather than a negative charge.

use tracing::debug;

use core_kernel::Usd;
use domain_fleet::{Trip, Vehicle};

use crate::error::BillingError;
use crate::strategy::{BillingStrategy, LongDistanceRates};

/// Computes the total cost of a single trip
///
/// # Errors
///
/// Returns [`BillingError::UnbillableTrip`] when the vehicle has no billing
/// classification.
pub fn trip_cost(
    trip: &Trip,
    vehicle: &Vehicle,
    rates: LongDistanceRates,
) -> Result<Usd, BillingError> {
    let strategy = BillingStrategy::resolve(trip, vehicle, rates)?;
    let cost = strategy.apply(trip.distance());
    debug!(trip = %trip.id, %cost, "computed trip cost");
    Ok(cost)
}
