//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use domain_rating::{MileageBracket, QuoteRequest};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating positive rating factors (0.001 to 9.999)
pub fn factor_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000i64, 0u32..=3u32).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// Strategy for generating base rates (0.01 to 10000.00)
pub fn base_rate_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|mantissa| Decimal::new(mantissa, 2))
}

/// Strategy for generating plausible yearly mileages
pub fn yearly_mileage_strategy() -> impl Strategy<Value = i64> {
    0i64..300_000i64
}

/// Strategy for generating vehicle types from the standard rating tables
pub fn vehicle_type_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("SUV".to_string()),
        Just("SEDAN".to_string()),
        Just("VAN".to_string()),
        Just("SPORTS_CAR".to_string()),
        Just("MOTORCYCLE".to_string()),
    ]
}

/// Strategy for generating five-digit postcodes
pub fn postcode_strategy() -> impl Strategy<Value = String> {
    "[0-9]{5}"
}

/// Strategy for generating region names from the standard rating tables
pub fn region_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Bayern".to_string()),
        Just("Berlin".to_string()),
        Just("Niedersachsen".to_string()),
        Just("Hessen".to_string()),
    ]
}

/// Strategy for generating quote requests
pub fn quote_request_strategy() -> impl Strategy<Value = QuoteRequest> {
    (
        vehicle_type_strategy(),
        yearly_mileage_strategy(),
        postcode_strategy(),
    )
        .prop_map(|(vehicle_type, yearly_mileage, postcode)| QuoteRequest {
            vehicle_type,
            yearly_mileage,
            postcode,
        })
}

/// Strategy for generating well-formed mileage brackets (from <= to)
pub fn mileage_bracket_strategy() -> impl Strategy<Value = MileageBracket> {
    (0i64..100_000i64, 0i64..50_000i64, factor_strategy())
        .prop_map(|(from, width, factor)| MileageBracket::new(from, from + width, factor))
}
