//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for rating types that give
//! more meaningful error messages than standard assertions.

use domain_rating::PremiumQuote;
use rust_decimal::Decimal;

/// Asserts that a quote's premium is the product of its base rate and factors
///
/// # Panics
///
/// Panics if the premium does not equal
/// `base_rate * mileage_factor * vehicle_factor * region_factor`
pub fn assert_premium_breakdown(quote: &PremiumQuote) {
    let product =
        quote.base_rate * quote.mileage_factor * quote.vehicle_factor * quote.region_factor;
    assert_eq!(
        quote.premium, product,
        "Premium {} does not match its factor breakdown: {} x {} x {} x {} = {}",
        quote.premium,
        quote.base_rate,
        quote.mileage_factor,
        quote.vehicle_factor,
        quote.region_factor,
        product
    );
}

/// Asserts that a decimal value is within a range
pub fn assert_decimal_in_range(value: Decimal, min: Decimal, max: Decimal) {
    assert!(
        value >= min && value <= max,
        "Decimal {} is not in range [{}, {}]",
        value,
        min,
        max
    );
}

/// Asserts that a decimal value is approximately equal to another
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Decimals differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that a result is Ok and returns the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Asserts that a result is Err and returns the error
#[macro_export]
macro_rules! assert_err {
    ($result:expr) => {
        match $result {
            Ok(value) => panic!("Expected Err, got Ok: {:?}", value),
            Err(e) => e,
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => panic!("{}: got Ok({:?})", $msg, value),
            Err(e) => e,
        }
    };
}

/// Asserts that an error matches a specific variant
#[macro_export]
macro_rules! assert_err_variant {
    ($result:expr, $pattern:pat) => {
        match $result {
            Ok(value) => panic!(
                "Expected Err matching {}, got Ok({:?})",
                stringify!($pattern),
                value
            ),
            Err(ref e) => {
                assert!(
                    matches!(e, $pattern),
                    "Error {:?} does not match pattern {}",
                    e,
                    stringify!($pattern)
                );
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn canonical_quote() -> PremiumQuote {
        PremiumQuote {
            premium: dec!(198.0),
            base_rate: dec!(100.0),
            mileage_factor: dec!(1.2),
            vehicle_factor: dec!(1.5),
            region_factor: dec!(1.1),
        }
    }

    #[test]
    fn test_assert_premium_breakdown_passes() {
        assert_premium_breakdown(&canonical_quote());
    }

    #[test]
    #[should_panic(expected = "does not match its factor breakdown")]
    fn test_assert_premium_breakdown_detects_mismatch() {
        let mut quote = canonical_quote();
        quote.premium = dec!(200.0);
        assert_premium_breakdown(&quote);
    }

    #[test]
    fn test_assert_decimal_approx_eq_passes() {
        assert_decimal_approx_eq(dec!(1.2001), dec!(1.2002), dec!(0.01));
    }

    #[test]
    #[should_panic(expected = "differ by more than tolerance")]
    fn test_assert_decimal_approx_eq_fails_outside_tolerance() {
        assert_decimal_approx_eq(dec!(1.2), dec!(1.5), dec!(0.01));
    }

    #[test]
    fn test_assert_decimal_in_range_passes() {
        assert_decimal_in_range(dec!(1.1), dec!(0.5), dec!(2.0));
    }

    #[test]
    #[should_panic(expected = "is not in range")]
    fn test_assert_decimal_in_range_fails_outside() {
        assert_decimal_in_range(dec!(3.0), dec!(0.5), dec!(2.0));
    }
}
