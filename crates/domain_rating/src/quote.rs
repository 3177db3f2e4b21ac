//! Quote request and result types
//!
//! A quote request carries the three applicant inputs used for rating. A
//! premium quote carries the computed premium together with the factors that
//! produced it, so callers and logs can show the full breakdown.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A request to price a single vehicle risk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Vehicle type code, matched exactly and case-sensitively
    pub vehicle_type: String,
    /// Expected yearly mileage
    pub yearly_mileage: i64,
    /// Postcode of the applicant's address
    pub postcode: String,
}

impl QuoteRequest {
    /// Creates a new quote request
    pub fn new(
        vehicle_type: impl Into<String>,
        yearly_mileage: i64,
        postcode: impl Into<String>,
    ) -> Self {
        Self {
            vehicle_type: vehicle_type.into(),
            yearly_mileage,
            postcode: postcode.into(),
        }
    }
}

/// A priced quote with the factor breakdown that produced it
///
/// The premium is the product of the base rate and the three rating factors.
/// The individual factors are carried for diagnostics; only the premium is
/// part of the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumQuote {
    /// The calculated premium
    pub premium: Decimal,
    /// Base rate the factors were applied to
    pub base_rate: Decimal,
    /// Factor resolved from the yearly mileage bracket
    pub mileage_factor: Decimal,
    /// Factor resolved from the vehicle type
    pub vehicle_factor: Decimal,
    /// Factor resolved from the postcode's region
    pub region_factor: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_request_construction() {
        let request = QuoteRequest::new("SUV", 15000, "12345");
        assert_eq!(request.vehicle_type, "SUV");
        assert_eq!(request.yearly_mileage, 15000);
        assert_eq!(request.postcode, "12345");
    }

    #[test]
    fn test_quote_request_serde_round_trip() {
        let request = QuoteRequest::new("SEDAN", 8000, "80331");
        let json = serde_json::to_string(&request).unwrap();
        let back: QuoteRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn test_premium_quote_breakdown() {
        let quote = PremiumQuote {
            premium: dec!(198.0000),
            base_rate: dec!(100.0),
            mileage_factor: dec!(1.2),
            vehicle_factor: dec!(1.5),
            region_factor: dec!(1.1),
        };
        assert_eq!(
            quote.premium,
            quote.base_rate * quote.mileage_factor * quote.vehicle_factor * quote.region_factor
        );
    }
}
