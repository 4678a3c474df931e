//! Core Kernel - Foundational types for the fleet-share system
//!
//! This crate provides the fundamental building blocks used across all
//! domain modules:
//! - Money with deterministic cent arithmetic
//! - Billing period (calendar month) handling
//! - Strongly-typed identifiers
//! - The shared port error contract

pub mod identifiers;
pub mod money;
pub mod ports;
pub mod temporal;

pub use identifiers::{MemberId, MileageLogId, TripId, VehicleId};
pub use money::{MoneyError, Usd};
pub use ports::{DomainPort, PortError};
pub use temporal::{BillingPeriod, TemporalError};
