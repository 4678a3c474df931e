//! Mileage logs and trips
//!
//! A mileage log is one vehicle's trip record for a calendar month. Trips
//! are kept in chronological order; that order is significant, because each
//! trip's start mileage must equal the previous trip's end mileage.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{BillingPeriod, MemberId, MileageLogId, TripId, VehicleId};

use crate::error::FleetError;

/// Which of a truck's two per-mile rates a trip is billed at
///
/// Present on every trip record (the trip form always posts one) but only
/// meaningful for vehicles with truck billing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripBillingRate {
    #[default]
    Primary,
    Secondary,
}

/// A single use of a vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    /// Unique identifier
    pub id: TripId,
    /// Owning mileage log
    pub mileage_log_id: MileageLogId,
    /// Day the trip was taken
    pub date: NaiveDate,
    /// Odometer reading at the start of the trip
    pub start_mileage: i64,
    /// Odometer reading at the end of the trip
    pub end_mileage: i64,
    /// Number of full days for a long-distance trip; 0 means a regular trip
    pub long_distance_days: u32,
    /// Rate selection for truck-billed vehicles
    pub billing_rate: TripBillingRate,
    /// Members riding on this trip, each owing a share of its cost
    pub riders: Vec<MemberId>,
    /// Where the trip went
    pub destination: Option<String>,
    /// Why the trip was taken
    pub purpose: Option<String>,
}

impl Trip {
    /// Creates a new regular trip
    pub fn new(
        id: TripId,
        mileage_log_id: MileageLogId,
        date: NaiveDate,
        start_mileage: i64,
        end_mileage: i64,
    ) -> Self {
        Self {
            id,
            mileage_log_id,
            date,
            start_mileage,
            end_mileage,
            long_distance_days: 0,
            billing_rate: TripBillingRate::default(),
            riders: Vec::new(),
            destination: None,
            purpose: None,
        }
    }

    /// Marks the trip as long-distance, spanning the given number of days
    pub fn with_long_distance_days(mut self, days: u32) -> Self {
        self.long_distance_days = days;
        self
    }

    /// Selects the rate a truck-billed trip is charged at
    pub fn with_billing_rate(mut self, rate: TripBillingRate) -> Self {
        self.billing_rate = rate;
        self
    }

    /// Adds a rider
    pub fn with_rider(mut self, member_id: MemberId) -> Self {
        self.riders.push(member_id);
        self
    }

    /// Sets destination and purpose
    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    /// Distance driven, clamped to zero
    ///
    /// An apparently negative distance (end below start, which only occurs
    /// on records that predate reconciliation) is treated as zero, never as
    /// a negative cost.
    pub fn distance(&self) -> i64 {
        (self.end_mileage - self.start_mileage).max(0)
    }

    /// Returns true if this is a long-distance trip
    pub fn is_long_distance(&self) -> bool {
        self.long_distance_days > 0
    }

    /// Field-level checks applied before a trip is accepted from the edit
    /// form. The first failing field is reported; the caller redisplays it
    /// next to that field.
    pub fn validate(&self) -> Result<(), FleetError> {
        if self.start_mileage < 0 {
            return Err(FleetError::validation(
                "start_mileage",
                "Start mileage cannot be negative",
            ));
        }
        if self.end_mileage < 0 {
            return Err(FleetError::validation(
                "end_mileage",
                "End mileage cannot be negative",
            ));
        }
        if self.end_mileage < self.start_mileage {
            return Err(FleetError::validation(
                "end_mileage",
                "End mileage cannot be less than start mileage",
            ));
        }
        if self.riders.is_empty() {
            return Err(FleetError::validation(
                "riders",
                "At least one rider is required",
            ));
        }
        Ok(())
    }
}

/// One vehicle's trip record for a calendar month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MileageLog {
    /// Unique identifier
    pub id: MileageLogId,
    /// The vehicle this log belongs to
    pub vehicle_id: VehicleId,
    /// Display name (e.g. "Blue Sedan March 2024")
    pub name: String,
    /// Calendar month this log covers
    pub period: BillingPeriod,
    /// Odometer reading at the start of the month
    pub start_odometer: i64,
    /// Odometer reading at the end of the month
    pub end_odometer: i64,
    /// Trips in chronological order; the order is significant and must be
    /// preserved
    pub trips: Vec<Trip>,
}

impl MileageLog {
    /// Creates a new, empty mileage log
    pub fn new(
        id: MileageLogId,
        vehicle_id: VehicleId,
        name: impl Into<String>,
        period: BillingPeriod,
        start_odometer: i64,
    ) -> Self {
        Self {
            id,
            vehicle_id,
            name: name.into(),
            period,
            start_odometer,
            end_odometer: start_odometer,
            trips: Vec::new(),
        }
    }

    /// Appends a trip, keeping chronological order the caller established
    pub fn with_trip(mut self, trip: Trip) -> Self {
        self.trips.push(trip);
        self
    }

    /// The odometer value the next trip entry should start from: the end
    /// mileage of the last trip, or the log's start odometer if no trips
    /// have been entered yet
    pub fn last_odometer_value(&self) -> i64 {
        match self.trips.last() {
            Some(trip) => trip.end_mileage,
            None => self.start_odometer,
        }
    }

    /// Trips strictly after the given trip, in chronological order
    pub fn trips_after(&self, trip_id: TripId) -> Vec<Trip> {
        match self.trips.iter().position(|t| t.id == trip_id) {
            Some(index) => self.trips[index + 1..].to_vec(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log() -> MileageLog {
        MileageLog::new(
            MileageLogId::new(),
            VehicleId::new(),
            "Sedan 2024-06",
            BillingPeriod::new(2024, 6).unwrap(),
            500,
        )
    }

    fn trip(log_id: MileageLogId, start: i64, end: i64) -> Trip {
        Trip::new(
            TripId::new(),
            log_id,
            NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            start,
            end,
        )
        .with_rider(MemberId::new())
    }

    #[test]
    fn test_distance_clamps_negative() {
        let log = log();
        let mut t = trip(log.id, 500, 510);
        assert_eq!(t.distance(), 10);

        t.end_mileage = 490;
        assert_eq!(t.distance(), 0);
    }

    #[test]
    fn test_last_odometer_value() {
        let mut log = log();
        assert_eq!(log.last_odometer_value(), 500);

        let t = trip(log.id, 500, 600);
        log.trips.push(t);
        assert_eq!(log.last_odometer_value(), 600);
    }

    #[test]
    fn test_trips_after() {
        let mut log = log();
        let a = trip(log.id, 500, 600);
        let b = trip(log.id, 600, 700);
        let c = trip(log.id, 700, 750);
        let a_id = a.id;
        log.trips.extend([a, b.clone(), c.clone()]);

        let later = log.trips_after(a_id);
        assert_eq!(later.len(), 2);
        assert_eq!(later[0].id, b.id);
        assert_eq!(later[1].id, c.id);

        assert!(log.trips_after(TripId::new()).is_empty());
    }

    #[test]
    fn test_validate_mileage_ordering() {
        let log = log();
        let mut t = trip(log.id, 600, 500);
        let err = t.validate().unwrap_err();
        assert!(err.is_field_error());

        t.end_mileage = 650;
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_validate_requires_riders() {
        let log = log();
        let mut t = trip(log.id, 500, 600);
        t.riders.clear();
        assert!(matches!(
            t.validate(),
            Err(FleetError::Validation { field: "riders", .. })
        ));
    }
}
