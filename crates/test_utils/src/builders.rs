//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use domain_rating::{MileageBracket, QuoteRequest};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::PostcodeFixtures;

/// Builder for constructing quote requests
///
/// Defaults to the canonical request (an SUV driving 15000 a year in
/// postcode 12345), which the standard rating tables price at 198.0.
pub struct QuoteRequestBuilder {
    vehicle_type: String,
    yearly_mileage: i64,
    postcode: String,
}

impl Default for QuoteRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteRequestBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            vehicle_type: "SUV".to_string(),
            yearly_mileage: 15000,
            postcode: PostcodeFixtures::bayern().to_string(),
        }
    }

    /// Sets the vehicle type
    pub fn with_vehicle_type(mut self, vehicle_type: impl Into<String>) -> Self {
        self.vehicle_type = vehicle_type.into();
        self
    }

    /// Sets the yearly mileage
    pub fn with_yearly_mileage(mut self, yearly_mileage: i64) -> Self {
        self.yearly_mileage = yearly_mileage;
        self
    }

    /// Sets the postcode
    pub fn with_postcode(mut self, postcode: impl Into<String>) -> Self {
        self.postcode = postcode.into();
        self
    }

    /// Builds the quote request
    pub fn build(self) -> QuoteRequest {
        QuoteRequest {
            vehicle_type: self.vehicle_type,
            yearly_mileage: self.yearly_mileage,
            postcode: self.postcode,
        }
    }
}

/// Builder for constructing mileage brackets
///
/// Defaults to the 15000-19999 bracket with factor 1.2 from the standard
/// tables.
pub struct MileageBracketBuilder {
    mileage_from: i64,
    mileage_to: i64,
    factor: Decimal,
}

impl Default for MileageBracketBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MileageBracketBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            mileage_from: 15000,
            mileage_to: 19999,
            factor: dec!(1.2),
        }
    }

    /// Sets both bracket bounds
    pub fn with_bounds(mut self, mileage_from: i64, mileage_to: i64) -> Self {
        self.mileage_from = mileage_from;
        self.mileage_to = mileage_to;
        self
    }

    /// Sets the bracket factor
    pub fn with_factor(mut self, factor: Decimal) -> Self {
        self.factor = factor;
        self
    }

    /// Builds the mileage bracket
    pub fn build(self) -> MileageBracket {
        MileageBracket::new(self.mileage_from, self.mileage_to, self.factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::RequestFixtures;

    #[test]
    fn test_builder_defaults_match_the_canonical_request() {
        let request = QuoteRequestBuilder::new().build();
        assert_eq!(request, RequestFixtures::suv_in_bayern());
    }

    #[test]
    fn test_builder_overrides_only_the_given_field() {
        let request = QuoteRequestBuilder::new()
            .with_postcode(PostcodeFixtures::unlinked())
            .build();

        assert_eq!(request.vehicle_type, "SUV");
        assert_eq!(request.yearly_mileage, 15000);
        assert_eq!(request.postcode, "99999");
    }

    #[test]
    fn test_bracket_builder_defaults_contain_canonical_mileage() {
        let bracket = MileageBracketBuilder::new().build();
        assert!(bracket.contains(15000));
        assert_eq!(bracket.factor, dec!(1.2));
    }

    #[test]
    fn test_bracket_builder_with_bounds() {
        let bracket = MileageBracketBuilder::new().with_bounds(0, 4999).build();
        assert!(bracket.contains(0));
        assert!(!bracket.contains(5000));
    }
}
