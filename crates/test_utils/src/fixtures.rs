//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the
//! fleet-share system. These fixtures are designed to be consistent and
//! predictable for unit tests.

use chrono::NaiveDate;
use core_kernel::{BillingPeriod, MemberId, Usd, VehicleId};
use domain_fleet::{FuelType, Member, Vehicle};

/// Fixture for money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// The sedan's per-mile rate: $0.58
    pub fn sedan_rate() -> Usd {
        Usd::from_cents(58)
    }

    /// The truck's primary per-mile rate: $1.00
    pub fn truck_base_rate() -> Usd {
        Usd::from_cents(100)
    }

    /// The truck's secondary per-mile rate: $0.75
    pub fn truck_secondary_rate() -> Usd {
        Usd::from_cents(75)
    }

    /// The truck's minimum fee per trip: $20.00
    pub fn truck_minimum_fee() -> Usd {
        Usd::from_cents(2000)
    }

    /// The flat charge for a one-day long-distance trip: $85.00
    pub fn long_distance_single_day() -> Usd {
        Usd::from_cents(8500)
    }

    /// The per-day charge for multi-day long-distance trips: $50.00
    pub fn long_distance_multi_day() -> Usd {
        Usd::from_cents(5000)
    }
}

/// Fixture for calendar test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The billing period most tests run in
    pub fn period() -> BillingPeriod {
        BillingPeriod::new(2024, 6).unwrap()
    }

    /// A trip date inside [`TemporalFixtures::period`]
    pub fn trip_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }
}

/// Fixture for fleet records
pub struct FleetFixtures;

impl FleetFixtures {
    /// A per-mile billed sedan at the standard rate
    pub fn sedan() -> Vehicle {
        Vehicle::new(VehicleId::new(), "Blue Sedan")
            .with_make_model("Toyota", "Camry")
            .with_fuel_type(FuelType::Hybrid)
            .with_basic_billing(MoneyFixtures::sedan_rate())
    }

    /// A truck-billed vehicle with two rates and a minimum fee
    pub fn box_truck() -> Vehicle {
        Vehicle::new(VehicleId::new(), "Box Truck")
            .with_make_model("Ford", "E-350")
            .with_fuel_type(FuelType::Gasoline)
            .with_truck_billing(
                MoneyFixtures::truck_base_rate(),
                MoneyFixtures::truck_secondary_rate(),
                MoneyFixtures::truck_minimum_fee(),
            )
    }

    /// A vehicle that has not been classified for billing yet
    pub fn unclassified_vehicle() -> Vehicle {
        Vehicle::new(VehicleId::new(), "New Arrival")
    }

    /// Three active members
    pub fn members() -> Vec<Member> {
        vec![
            Member::new(MemberId::new(), "Ana Reyes").with_alias("Ana"),
            Member::new(MemberId::new(), "Ben Okafor"),
            Member::new(MemberId::new(), "Casey Wu").with_email("casey@example.org"),
        ]
    }
}
