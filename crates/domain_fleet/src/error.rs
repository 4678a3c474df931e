//! Fleet domain errors

use thiserror::Error;

/// Errors that can occur in the fleet domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FleetError {
    /// A field-level validation error, meant to be redisplayed next to the
    /// offending form field rather than treated as fatal
    #[error("Validation error on {field}: {message}")]
    Validation { field: &'static str, message: String },

    /// A cascading odometer update would break trip continuity. The whole
    /// edit must be aborted; a partial cascade is never applied.
    #[error("Consistency violation: {0}")]
    ConsistencyViolation(String),

    /// Billing classification string not recognized at the adapter boundary
    #[error("Unknown billing kind: {0}")]
    UnknownBillingKind(String),

    /// Fuel type string not recognized at the adapter boundary
    #[error("Unknown fuel type: {0}")]
    UnknownFuelType(String),
}

impl FleetError {
    /// Creates a field-level validation error
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        FleetError::Validation {
            field,
            message: message.into(),
        }
    }

    /// Creates a consistency violation
    pub fn consistency(message: impl Into<String>) -> Self {
        FleetError::ConsistencyViolation(message.into())
    }

    /// Returns true for errors that should be shown per-field to the user
    pub fn is_field_error(&self) -> bool {
        matches!(self, FleetError::Validation { .. })
    }
}
