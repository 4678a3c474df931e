//! Vehicle registry records
//!
//! A vehicle carries both its registry details and its billing
//! classification. The classification drives how trip costs are computed;
//! a vehicle without one cannot be billed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{Usd, VehicleId};

use crate::error::FleetError;

/// Fuel types a vehicle can use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelType {
    Hybrid,
    Electric,
    Gasoline,
    Diesel,
}

impl FuelType {
    /// All fuel types, in the order the vehicle form lists them
    pub const ALL: [FuelType; 4] = [
        FuelType::Hybrid,
        FuelType::Electric,
        FuelType::Gasoline,
        FuelType::Diesel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Hybrid => "Hybrid",
            FuelType::Electric => "Electric",
            FuelType::Gasoline => "Gasoline",
            FuelType::Diesel => "Diesel",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FuelType {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Hybrid" => Ok(FuelType::Hybrid),
            "Electric" => Ok(FuelType::Electric),
            "Gasoline" => Ok(FuelType::Gasoline),
            "Diesel" => Ok(FuelType::Diesel),
            other => Err(FleetError::UnknownFuelType(other.to_string())),
        }
    }
}

/// Billing classification of a vehicle
///
/// The set is closed: regular vehicles bill per mile at a single rate,
/// trucks bill per mile at a chosen rate with a minimum fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillingKind {
    Basic,
    Truck,
}

impl fmt::Display for BillingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BillingKind::Basic => write!(f, "Basic"),
            BillingKind::Truck => write!(f, "Truck"),
        }
    }
}

impl FromStr for BillingKind {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Basic" => Ok(BillingKind::Basic),
            "Truck" => Ok(BillingKind::Truck),
            other => Err(FleetError::UnknownBillingKind(other.to_string())),
        }
    }
}

/// A club vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique identifier
    pub id: VehicleId,
    /// Display name used in logs and billing statements
    pub name: String,
    /// Manufacturer
    pub make: String,
    /// Model
    pub model: String,
    /// Model year
    pub model_year: Option<i32>,
    /// Fuel type
    pub fuel_type: Option<FuelType>,
    /// Vehicle identification number
    pub vin: Option<String>,
    /// License plate
    pub license_plate: Option<String>,
    /// What the club paid for the vehicle
    pub purchase_price: Option<Usd>,
    /// Billing classification; `None` means the vehicle is not yet set up
    /// for billing and its trips cannot be costed
    pub billing: Option<BillingKind>,
    /// Per-mile rate (the only rate for Basic, the primary rate for Truck)
    pub base_per_mile: Usd,
    /// Secondary per-mile rate (Truck only)
    pub secondary_per_mile: Usd,
    /// Minimum charge per trip (Truck only)
    pub minimum_fee: Usd,
    /// Whether the vehicle is active in the fleet
    pub is_active: bool,
}

impl Vehicle {
    /// Creates a new vehicle with the given name
    pub fn new(id: VehicleId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            make: String::new(),
            model: String::new(),
            model_year: None,
            fuel_type: None,
            vin: None,
            license_plate: None,
            purchase_price: None,
            billing: None,
            base_per_mile: Usd::ZERO,
            secondary_per_mile: Usd::ZERO,
            minimum_fee: Usd::ZERO,
            is_active: true,
        }
    }

    /// Sets make and model
    pub fn with_make_model(mut self, make: impl Into<String>, model: impl Into<String>) -> Self {
        self.make = make.into();
        self.model = model.into();
        self
    }

    /// Sets the fuel type
    pub fn with_fuel_type(mut self, fuel_type: FuelType) -> Self {
        self.fuel_type = Some(fuel_type);
        self
    }

    /// Classifies the vehicle for per-mile billing
    pub fn with_basic_billing(mut self, base_per_mile: Usd) -> Self {
        self.billing = Some(BillingKind::Basic);
        self.base_per_mile = base_per_mile;
        self
    }

    /// Classifies the vehicle for truck billing
    pub fn with_truck_billing(
        mut self,
        base_per_mile: Usd,
        secondary_per_mile: Usd,
        minimum_fee: Usd,
    ) -> Self {
        self.billing = Some(BillingKind::Truck);
        self.base_per_mile = base_per_mile;
        self.secondary_per_mile = secondary_per_mile;
        self.minimum_fee = minimum_fee;
        self
    }

    /// Sets the purchase price
    pub fn with_purchase_price(mut self, price: Usd) -> Self {
        self.purchase_price = Some(price);
        self
    }

    /// Marks the vehicle inactive (retired from the fleet)
    pub fn retired(mut self) -> Self {
        self.is_active = false;
        self
    }
}
