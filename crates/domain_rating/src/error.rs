//! Rating domain errors
//!
//! This module defines all error types that can occur while rating a quote
//! request. Validation errors carry the exact messages exposed on the wire;
//! lookup faults wrap infrastructure failures from the reference-data store.

use thiserror::Error;

use crate::ports::LookupError;

/// Errors that can occur during premium calculation
///
/// The three validation variants correspond one-to-one to the ordered
/// resolution steps. The postcode variant deliberately collapses its possible
/// causes (unknown postcode, postcode without a region link, region without a
/// rating) into a single error; the distinction only shows up in diagnostic
/// logging.
#[derive(Debug, Error)]
pub enum RatingError {
    /// No mileage bracket covers the requested yearly mileage
    #[error("Invalid yearly mileage: {0}")]
    InvalidMileage(i64),

    /// No rating exists for the requested vehicle type
    #[error("Invalid vehicle type: {0}")]
    InvalidVehicleType(String),

    /// The postcode resolves to no rated region
    #[error("Invalid postcode or region: {0}")]
    InvalidPostcodeOrRegion(String),

    /// The reference-data store failed
    #[error("Rate lookup failed: {0}")]
    Lookup(#[from] LookupError),
}

impl RatingError {
    /// Returns true if this error rejects the request rather than reporting
    /// an infrastructure fault
    pub fn is_validation(&self) -> bool {
        !matches!(self, RatingError::Lookup(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            RatingError::InvalidMileage(999999999).to_string(),
            "Invalid yearly mileage: 999999999"
        );
        assert_eq!(
            RatingError::InvalidVehicleType("UNKNOWN".to_string()).to_string(),
            "Invalid vehicle type: UNKNOWN"
        );
        assert_eq!(
            RatingError::InvalidPostcodeOrRegion("99999".to_string()).to_string(),
            "Invalid postcode or region: 99999"
        );
    }

    #[test]
    fn test_validation_predicate() {
        assert!(RatingError::InvalidMileage(0).is_validation());
        assert!(RatingError::InvalidVehicleType("X".to_string()).is_validation());
        assert!(RatingError::InvalidPostcodeOrRegion("Y".to_string()).is_validation());
        assert!(!RatingError::Lookup(LookupError::query("boom")).is_validation());
    }
}
