//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. These builders allow tests to specify only the relevant fields
//! while using defaults for everything else.

use chrono::NaiveDate;
use core_kernel::{BillingPeriod, MemberId, MileageLogId, TripId, VehicleId};
use domain_fleet::{MileageLog, Trip, TripBillingRate};

use crate::fixtures::TemporalFixtures;

/// Builder for constructing test trips
pub struct TestTripBuilder {
    id: TripId,
    mileage_log_id: MileageLogId,
    date: NaiveDate,
    start_mileage: i64,
    end_mileage: i64,
    long_distance_days: u32,
    billing_rate: TripBillingRate,
    riders: Vec<MemberId>,
}

impl Default for TestTripBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTripBuilder {
    /// Creates a new builder with default values: a ten-mile trip with one
    /// rider
    pub fn new() -> Self {
        Self {
            id: TripId::new(),
            mileage_log_id: MileageLogId::new(),
            date: TemporalFixtures::trip_date(),
            start_mileage: 100,
            end_mileage: 110,
            long_distance_days: 0,
            billing_rate: TripBillingRate::Primary,
            riders: vec![MemberId::new()],
        }
    }

    /// Sets the owning mileage log
    pub fn on_log(mut self, id: MileageLogId) -> Self {
        self.mileage_log_id = id;
        self
    }

    /// Sets the trip date
    pub fn on_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Sets start and end odometer readings
    pub fn with_mileage(mut self, start: i64, end: i64) -> Self {
        self.start_mileage = start;
        self.end_mileage = end;
        self
    }

    /// Marks the trip long-distance
    pub fn long_distance(mut self, days: u32) -> Self {
        self.long_distance_days = days;
        self
    }

    /// Bills the trip at the truck's secondary rate
    pub fn at_secondary_rate(mut self) -> Self {
        self.billing_rate = TripBillingRate::Secondary;
        self
    }

    /// Replaces the rider list
    pub fn with_riders(mut self, riders: &[MemberId]) -> Self {
        self.riders = riders.to_vec();
        self
    }

    /// Removes all riders
    pub fn with_no_riders(mut self) -> Self {
        self.riders.clear();
        self
    }

    /// Builds the trip
    pub fn build(self) -> Trip {
        let mut trip = Trip::new(
            self.id,
            self.mileage_log_id,
            self.date,
            self.start_mileage,
            self.end_mileage,
        );
        trip.long_distance_days = self.long_distance_days;
        trip.billing_rate = self.billing_rate;
        trip.riders = self.riders;
        trip
    }
}

/// Builder for constructing test mileage logs
pub struct TestMileageLogBuilder {
    id: MileageLogId,
    vehicle_id: VehicleId,
    name: String,
    period: BillingPeriod,
    start_odometer: i64,
    trips: Vec<Trip>,
}

impl Default for TestMileageLogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestMileageLogBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: MileageLogId::new(),
            vehicle_id: VehicleId::new(),
            name: "Test Log".to_string(),
            period: TemporalFixtures::period(),
            start_odometer: 100,
            trips: Vec::new(),
        }
    }

    /// Sets the owning vehicle
    pub fn for_vehicle(mut self, vehicle_id: VehicleId) -> Self {
        self.vehicle_id = vehicle_id;
        self
    }

    /// Sets the billing period
    pub fn in_period(mut self, period: BillingPeriod) -> Self {
        self.period = period;
        self
    }

    /// Sets the odometer reading the log opens with
    pub fn starting_at(mut self, odometer: i64) -> Self {
        self.start_odometer = odometer;
        self
    }

    /// Appends a trip, rewriting its log reference to this log
    pub fn with_trip(mut self, mut trip: Trip) -> Self {
        trip.mileage_log_id = self.id;
        self.trips.push(trip);
        self
    }

    /// Returns the log ID trips will be attached to
    pub fn log_id(&self) -> MileageLogId {
        self.id
    }

    /// Builds the mileage log
    pub fn build(self) -> MileageLog {
        let mut log = MileageLog::new(
            self.id,
            self.vehicle_id,
            self.name,
            self.period,
            self.start_odometer,
        );
        log.end_odometer = self
            .trips
            .last()
            .map(|t| t.end_mileage)
            .unwrap_or(self.start_odometer);
        log.trips = self.trips;
        log
    }
}
