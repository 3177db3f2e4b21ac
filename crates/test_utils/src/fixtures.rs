//! Pre-built Test Fixtures
//!
//! Provides ready-to-use reference data for the premium rating test suite.
//! These fixtures are designed to be consistent and predictable for unit
//! tests: the standard tables reproduce the canonical rating scenario in
//! which a base rate of 100.0 prices an SUV driving 15000 a year in
//! postcode 12345 at exactly 198.0.

use domain_rating::ports::mock::MockRateLookup;
use domain_rating::QuoteRequest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixture for rating factor test data
pub struct FactorFixtures;

impl FactorFixtures {
    /// Standard base rate applied to every premium
    pub fn base_rate() -> Decimal {
        dec!(100.0)
    }

    /// Vehicle factor for the SUV type
    pub fn suv() -> Decimal {
        dec!(1.5)
    }

    /// Vehicle factor for the SEDAN type (baseline risk)
    pub fn sedan() -> Decimal {
        dec!(1.0)
    }

    /// Mileage factor of the 15000-19999 bracket
    pub fn commuter_mileage() -> Decimal {
        dec!(1.2)
    }

    /// Mileage factor of the 10000-14999 bracket
    pub fn average_mileage() -> Decimal {
        dec!(1.25)
    }

    /// Region factor for Bayern
    pub fn bayern() -> Decimal {
        dec!(1.1)
    }

    /// Region factor for Berlin
    pub fn berlin() -> Decimal {
        dec!(1.3)
    }

    /// Premium of the canonical scenario: 100.0 x 1.2 x 1.5 x 1.1
    pub fn canonical_premium() -> Decimal {
        dec!(198.0)
    }
}

/// Fixture for postcode test data
///
/// Each postcode exercises one resolution outcome: a rated region, a
/// missing region link, an unknown postcode, and a region without a rating.
pub struct PostcodeFixtures;

impl PostcodeFixtures {
    /// Postcode linked to the rated region Bayern
    pub fn bayern() -> &'static str {
        "12345"
    }

    /// Postcode linked to the rated region Berlin
    pub fn berlin() -> &'static str {
        "10115"
    }

    /// Postcode present in the mapping but without a region link
    pub fn unlinked() -> &'static str {
        "99999"
    }

    /// Postcode absent from the mapping entirely
    pub fn unknown() -> &'static str {
        "00000"
    }

    /// Postcode linked to a region that carries no rating
    pub fn unrated_region() -> &'static str {
        "77777"
    }
}

/// Fixture for quote request test data
pub struct RequestFixtures;

impl RequestFixtures {
    /// The canonical request, priced at exactly 198.0 by the standard tables
    pub fn suv_in_bayern() -> QuoteRequest {
        QuoteRequest::new("SUV", 15000, PostcodeFixtures::bayern())
    }

    /// A baseline request: sedan, low mileage, Berlin
    pub fn sedan_in_berlin() -> QuoteRequest {
        QuoteRequest::new("SEDAN", 8000, PostcodeFixtures::berlin())
    }

    /// A request with a vehicle type absent from the rating tables
    pub fn unknown_vehicle() -> QuoteRequest {
        QuoteRequest::new("UNKNOWN", 15000, PostcodeFixtures::bayern())
    }

    /// A request with a mileage no bracket covers
    pub fn uncovered_mileage() -> QuoteRequest {
        QuoteRequest::new("SUV", 999999999, PostcodeFixtures::bayern())
    }

    /// A request whose postcode has no region link
    pub fn unlinked_postcode() -> QuoteRequest {
        QuoteRequest::new("SUV", 15000, PostcodeFixtures::unlinked())
    }
}

/// Fixture for fully loaded rating tables
pub struct RatingTableFixtures;

impl RatingTableFixtures {
    /// Creates a mock lookup loaded with the standard rating tables
    ///
    /// The tables mirror the seed data in `migrations/`, with one case only
    /// the port can express: postcode 77777 maps to a region that has no
    /// rating row.
    pub fn standard() -> MockRateLookup {
        MockRateLookup::new()
            .with_bracket(0, 4999, dec!(0.8))
            .with_bracket(5000, 9999, dec!(1.0))
            .with_bracket(10000, 14999, dec!(1.25))
            .with_bracket(15000, 19999, dec!(1.2))
            .with_bracket(20000, 99999, dec!(1.5))
            .with_vehicle("SUV", dec!(1.5))
            .with_vehicle("SEDAN", dec!(1.0))
            .with_vehicle("VAN", dec!(1.4))
            .with_vehicle("SPORTS_CAR", dec!(1.8))
            .with_vehicle("MOTORCYCLE", dec!(1.3))
            .with_region("Bayern", dec!(1.1))
            .with_region("Berlin", dec!(1.3))
            .with_region("Niedersachsen", dec!(0.95))
            .with_region("Hessen", dec!(1.05))
            .with_postcode("12345", Some("Bayern"))
            .with_postcode("80331", Some("Bayern"))
            .with_postcode("10115", Some("Berlin"))
            .with_postcode("30159", Some("Niedersachsen"))
            .with_postcode("60311", Some("Hessen"))
            .with_postcode("99999", None)
            .with_postcode("77777", Some("Saarland"))
    }

    /// Creates a mock lookup with no reference data at all
    pub fn empty() -> MockRateLookup {
        MockRateLookup::new()
    }

    /// Creates a mock lookup whose store is unreachable
    pub fn failing() -> MockRateLookup {
        MockRateLookup::failing()
    }
}
