//! Per-member cost allocation
//!
//! Splits each trip's cost evenly among its riders and rolls the shares up
//! into one billing entry per member for the whole mileage log. Regular and
//! long-distance costs are kept in separate buckets because statements
//! present them separately.
//!
//! The result is derived data: it is recomputed on demand from the log and
//! is never the persisted source of truth.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

use core_kernel::{MemberId, MileageLogId, Usd};
use domain_fleet::{Member, MileageLog, Vehicle};

use crate::cost::trip_cost;
use crate::error::BillingError;
use crate::strategy::LongDistanceRates;

/// One member's share of one mileage log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberBilling {
    /// The member billed
    pub member_id: MemberId,
    /// Share of regular trips
    pub regular_trips_cost: Usd,
    /// Share of long-distance trips
    pub long_distance_trips_cost: Usd,
}

impl MemberBilling {
    /// A zero-activity entry for the given member
    pub fn zero(member_id: MemberId) -> Self {
        Self {
            member_id,
            regular_trips_cost: Usd::ZERO,
            long_distance_trips_cost: Usd::ZERO,
        }
    }

    /// Regular plus long-distance share
    pub fn total(&self) -> Usd {
        self.regular_trips_cost + self.long_distance_trips_cost
    }
}

/// The billing breakdown of one mileage log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MileageLogBilling {
    /// The log billed
    pub mileage_log_id: MileageLogId,
    /// Sum of every trip's cost
    pub total_trip_cost: Usd,
    /// Sum of every member's total; the reconciliation checksum against
    /// `total_trip_cost`
    pub total_member_billings: Usd,
    /// Per-member breakdown, one entry for every supplied member
    pub member_billings: HashMap<MemberId, MemberBilling>,
}

impl MileageLogBilling {
    /// Returns true if the two totals agree within the given tolerance in
    /// cents
    ///
    /// Rounding of per-rider shares can move each trip's allocated sum away
    /// from its cost by up to one cent per rider, so callers typically pass
    /// a tolerance of one cent times the largest rider count. A larger gap
    /// means cost went unallocated (for example, a trip with no riders).
    pub fn reconciles_within(&self, tolerance_cents: i64) -> bool {
        let delta = self.total_trip_cost.cents() - self.total_member_billings.cents();
        delta.abs() <= tolerance_cents
    }
}

/// Bills a mileage log: costs every trip, splits each cost across its
/// riders, and produces one entry per supplied member
///
/// Members with no activity get a zero entry, so a statement never silently
/// omits anyone. A trip with no riders contributes to `total_trip_cost` but
/// is allocated to no one; it is skipped rather than dividing by zero.
///
/// Calling this twice on unchanged inputs yields identical output.
///
/// # Errors
///
/// Returns [`BillingError::UnbillableTrip`] if any trip's vehicle has no
/// billing classification; no partial result is produced.
pub fn bill_mileage_log(
    log: &MileageLog,
    vehicle: &Vehicle,
    members: &[Member],
    rates: LongDistanceRates,
) -> Result<MileageLogBilling, BillingError> {
    let mut regular: HashMap<MemberId, Usd> = HashMap::new();
    let mut long_distance: HashMap<MemberId, Usd> = HashMap::new();
    let mut total_trip_cost = Usd::ZERO;

    for trip in &log.trips {
        let cost = trip_cost(trip, vehicle, rates)?;
        total_trip_cost += cost;

        let rider_count = trip.riders.len();
        if rider_count == 0 {
            warn!(trip = %trip.id, "trip has no riders; its cost is left unallocated");
            continue;
        }

        let share = cost.split(rider_count as f64)?;
        let bucket = if trip.is_long_distance() {
            &mut long_distance
        } else {
            &mut regular
        };
        for rider in &trip.riders {
            *bucket.entry(*rider).or_insert(Usd::ZERO) += share;
        }
    }

    let mut member_billings = HashMap::with_capacity(members.len());
    let mut total_member_billings = Usd::ZERO;

    for member in members {
        let billing = MemberBilling {
            member_id: member.id,
            regular_trips_cost: regular.get(&member.id).copied().unwrap_or(Usd::ZERO),
            long_distance_trips_cost: long_distance.get(&member.id).copied().unwrap_or(Usd::ZERO),
        };
        total_member_billings += billing.total();
        member_billings.insert(member.id, billing);
    }

    Ok(MileageLogBilling {
        mileage_log_id: log.id,
        total_trip_cost,
        total_member_billings,
        member_billings,
    })
}
