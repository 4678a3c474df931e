//! Billing domain errors

use thiserror::Error;

use core_kernel::{MoneyError, TripId};

/// Errors that can occur in the billing domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BillingError {
    /// No billing rule could be resolved for the trip's vehicle
    #[error("Unbillable trip {trip_id}: {reason}")]
    UnbillableTrip { trip_id: TripId, reason: String },

    /// Arithmetic error from the money layer
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}

impl BillingError {
    /// Creates an UnbillableTrip error
    pub fn unbillable(trip_id: TripId, reason: impl Into<String>) -> Self {
        BillingError::UnbillableTrip {
            trip_id,
            reason: reason.into(),
        }
    }
}
