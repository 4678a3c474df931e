//! Billing strategy resolution
//!
//! Every trip is costed by exactly one rule. The rule set is closed, so it
//! is a tagged variant dispatched by matching rather than an open trait:
//!
//! - a long-distance trip bills by the day, regardless of the vehicle;
//! - a Basic vehicle bills per mile at its base rate;
//! - a Truck vehicle bills per mile at the trip's selected rate, floored
//!   at the vehicle's minimum fee.
//!
//! Long-distance day rates are configuration the caller supplies; they are
//! deliberately not constants of this module.

use serde::{Deserialize, Serialize};

use core_kernel::Usd;
use domain_fleet::{BillingKind, Trip, TripBillingRate, Vehicle};

use crate::error::BillingError;

/// Day rates for long-distance trips, supplied by the embedding application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongDistanceRates {
    /// Flat charge for a one-day trip
    pub single_day: Usd,
    /// Per-day charge for trips spanning more than one day
    pub multi_day: Usd,
}

impl LongDistanceRates {
    pub fn new(single_day: Usd, multi_day: Usd) -> Self {
        Self {
            single_day,
            multi_day,
        }
    }
}

/// The billing rule resolved for one trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillingStrategy {
    /// Per-mile billing at a single rate
    PerMile { rate: Usd },
    /// Per-mile billing at the selected rate, floored at a minimum fee
    Truck { rate: Usd, minimum_fee: Usd },
    /// Flat single-day or per-day billing
    LongDistance {
        days: u32,
        rates: LongDistanceRates,
    },
}

impl BillingStrategy {
    /// Resolves the billing strategy for a trip on its owning vehicle
    ///
    /// A long-distance trip takes precedence over the vehicle's
    /// classification.
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::UnbillableTrip`] when the vehicle carries no
    /// billing classification.
    pub fn resolve(
        trip: &Trip,
        vehicle: &Vehicle,
        rates: LongDistanceRates,
    ) -> Result<Self, BillingError> {
        if trip.long_distance_days > 0 {
            return Ok(BillingStrategy::LongDistance {
                days: trip.long_distance_days,
                rates,
            });
        }

        match vehicle.billing {
            Some(BillingKind::Basic) => Ok(BillingStrategy::PerMile {
                rate: vehicle.base_per_mile,
            }),
            Some(BillingKind::Truck) => {
                let rate = match trip.billing_rate {
                    TripBillingRate::Secondary => vehicle.secondary_per_mile,
                    TripBillingRate::Primary => vehicle.base_per_mile,
                };
                Ok(BillingStrategy::Truck {
                    rate,
                    minimum_fee: vehicle.minimum_fee,
                })
            }
            None => Err(BillingError::unbillable(
                trip.id,
                format!("vehicle \"{}\" has no billing classification", vehicle.name),
            )),
        }
    }

    /// Computes the trip charge for the given distance in miles
    pub fn apply(&self, distance: i64) -> Usd {
        match *self {
            BillingStrategy::LongDistance { days, rates } => {
                if days == 1 {
                    rates.single_day
                } else {
                    rates.multi_day.scale(f64::from(days))
                }
            }
            BillingStrategy::PerMile { rate } => rate.scale(billable_miles(distance) as f64),
            BillingStrategy::Truck { rate, minimum_fee } => {
                let cost = rate.scale(billable_miles(distance) as f64);
                if cost < minimum_fee {
                    minimum_fee
                } else {
                    cost
                }
            }
        }
    }
}

/// Per-mile trips never bill zero miles: a same-odometer trip is charged as
/// one mile, so a data-entry slip cannot produce a free trip.
fn billable_miles(distance: i64) -> i64 {
    distance.max(1)
}
