//! Fleet Domain - vehicles, members, mileage logs, and odometer consistency
//!
//! This crate holds the club's fleet records and the odometer-continuity
//! maintenance that runs when a trip's mileage is edited. Costing lives in
//! `domain_billing`; persistence lives behind [`ports::FleetPort`].
//!
//! # Continuity invariant
//!
//! Within a mileage log, each trip's start mileage equals the previous
//! trip's end mileage. [`odometer::reconcile_odometer`] keeps that true
//! across edits by shifting later trips (rollover) or pulling the next
//! trip's start mileage (carry), and returns the changed trips for the
//! caller to persist atomically.

pub mod error;
pub mod member;
pub mod mileage_log;
pub mod odometer;
pub mod ports;
pub mod vehicle;

pub use error::FleetError;
pub use member::Member;
pub use mileage_log::{MileageLog, Trip, TripBillingRate};
pub use odometer::{reconcile_odometer, validate_end_mileage, CascadeAction, ROLLOVER_MILES};
pub use ports::FleetPort;
pub use vehicle::{BillingKind, FuelType, Vehicle};
