//! Premium calculation service
//!
//! The calculator resolves the three rating factors for a quote request and
//! applies them to the configured base rate:
//!
//! ```text
//! premium = base_rate * mileage_factor * vehicle_factor * region_factor
//! ```
//!
//! Resolution is strictly ordered and short-circuits on the first failure:
//!
//! 1. mileage factor (bracket containment, bounds inclusive)
//! 2. vehicle factor (exact, case-sensitive match)
//! 3. region name for the postcode (absence is not an error yet)
//! 4. region factor (a missing factor here fails the request)
//!
//! When several lookups would fail for the same request, the caller sees
//! only the error of the earliest step.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::error::RatingError;
use crate::ports::RateLookup;
use crate::quote::{PremiumQuote, QuoteRequest};

/// Calculates premiums by resolving rating factors through a [`RateLookup`]
///
/// The calculator is stateless apart from the shared port handle; it can be
/// cloned freely and used from concurrent tasks. The base rate is passed per
/// call so the owning process decides its lifetime (it is read once from
/// configuration at startup).
#[derive(Clone)]
pub struct PremiumCalculator {
    rates: Arc<dyn RateLookup>,
}

impl PremiumCalculator {
    /// Creates a new calculator over the given rate lookup
    pub fn new(rates: Arc<dyn RateLookup>) -> Self {
        Self { rates }
    }

    /// Calculates the premium for a quote request
    ///
    /// # Arguments
    ///
    /// * `request` - The applicant inputs to rate
    /// * `base_rate` - The configured base rate the factors are applied to
    ///
    /// # Returns
    ///
    /// A [`PremiumQuote`] with the premium and the resolved factor breakdown
    ///
    /// # Errors
    ///
    /// * [`RatingError::InvalidMileage`] when no bracket covers the mileage
    /// * [`RatingError::InvalidVehicleType`] when the vehicle type is unrated
    /// * [`RatingError::InvalidPostcodeOrRegion`] when the postcode resolves
    ///   to no rated region, for any of its three causes
    /// * [`RatingError::Lookup`] when the reference-data store fails
    pub async fn calculate(
        &self,
        request: &QuoteRequest,
        base_rate: Decimal,
    ) -> Result<PremiumQuote, RatingError> {
        tracing::info!(
            vehicle_type = %request.vehicle_type,
            yearly_mileage = request.yearly_mileage,
            postcode = %request.postcode,
            "Calculating premium"
        );

        let mileage_factor = self
            .rates
            .find_mileage_factor(request.yearly_mileage)
            .await?
            .ok_or_else(|| {
                tracing::error!(
                    yearly_mileage = request.yearly_mileage,
                    "No mileage bracket covers the requested yearly mileage"
                );
                RatingError::InvalidMileage(request.yearly_mileage)
            })?;

        let vehicle_factor = self
            .rates
            .find_vehicle_factor(&request.vehicle_type)
            .await?
            .ok_or_else(|| {
                tracing::error!(
                    vehicle_type = %request.vehicle_type,
                    "No rating found for vehicle type"
                );
                RatingError::InvalidVehicleType(request.vehicle_type.clone())
            })?;

        // A missing region name is carried forward, not rejected here; the
        // factor lookup below decides the outcome.
        let region = self
            .rates
            .find_region_by_postcode(&request.postcode)
            .await?;

        let region_factor = self
            .rates
            .find_region_factor(region.as_deref())
            .await?
            .ok_or_else(|| {
                tracing::error!(
                    postcode = %request.postcode,
                    region = ?region,
                    "No region factor found for postcode"
                );
                RatingError::InvalidPostcodeOrRegion(request.postcode.clone())
            })?;

        tracing::debug!(
            %base_rate,
            %mileage_factor,
            %vehicle_factor,
            %region_factor,
            "Resolved rating factors"
        );

        let premium = base_rate * mileage_factor * vehicle_factor * region_factor;

        tracing::info!(%premium, "Premium calculated");

        Ok(PremiumQuote {
            premium,
            base_rate,
            mileage_factor,
            vehicle_factor,
            region_factor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::mock::MockRateLookup;
    use crate::ports::{DomainPort, HealthCheckable, HealthCheckResult, LookupError};
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    fn standard_tables() -> MockRateLookup {
        MockRateLookup::new()
            .with_bracket(0, 9999, dec!(1.0))
            .with_bracket(10000, 14999, dec!(1.25))
            .with_bracket(15000, 19999, dec!(1.2))
            .with_vehicle("SUV", dec!(1.5))
            .with_vehicle("SEDAN", dec!(1.0))
            .with_region("Bayern", dec!(1.1))
            .with_region("Schlaraffenland", dec!(0.0))
            .with_postcode("12345", Some("Bayern"))
            .with_postcode("99999", None)
            .with_postcode("77777", Some("Atlantis"))
            .with_postcode("88888", Some("Schlaraffenland"))
    }

    fn standard_calculator() -> PremiumCalculator {
        PremiumCalculator::new(Arc::new(standard_tables()))
    }

    /// Wraps the mock tables and records which lookups ran, in order
    struct RecordingLookup {
        inner: MockRateLookup,
        calls: Arc<Mutex<Vec<&'static str>>>,
    }

    impl RecordingLookup {
        fn new(inner: MockRateLookup) -> (Self, Arc<Mutex<Vec<&'static str>>>) {
            let calls = Arc::new(Mutex::new(Vec::new()));
            let recorder = Self {
                inner,
                calls: Arc::clone(&calls),
            };
            (recorder, calls)
        }

        fn record(&self, call: &'static str) {
            self.calls.lock().unwrap().push(call);
        }
    }

    impl DomainPort for RecordingLookup {}

    #[async_trait]
    impl HealthCheckable for RecordingLookup {
        async fn health_check(&self) -> HealthCheckResult {
            self.inner.health_check().await
        }
    }

    #[async_trait]
    impl RateLookup for RecordingLookup {
        async fn find_mileage_factor(
            &self,
            yearly_mileage: i64,
        ) -> Result<Option<Decimal>, LookupError> {
            self.record("mileage");
            self.inner.find_mileage_factor(yearly_mileage).await
        }

        async fn find_vehicle_factor(
            &self,
            vehicle_type: &str,
        ) -> Result<Option<Decimal>, LookupError> {
            self.record("vehicle");
            self.inner.find_vehicle_factor(vehicle_type).await
        }

        async fn find_region_by_postcode(
            &self,
            postcode: &str,
        ) -> Result<Option<String>, LookupError> {
            self.record("postcode");
            self.inner.find_region_by_postcode(postcode).await
        }

        async fn find_region_factor(
            &self,
            region: Option<&str>,
        ) -> Result<Option<Decimal>, LookupError> {
            self.record("region");
            self.inner.find_region_factor(region).await
        }
    }

    #[tokio::test]
    async fn test_premium_multiplies_base_rate_and_all_factors() {
        let calculator = standard_calculator();
        let request = QuoteRequest::new("SUV", 15000, "12345");

        let quote = calculator.calculate(&request, dec!(100.0)).await.unwrap();

        assert_eq!(quote.premium, dec!(198.0000));
        assert_eq!(quote.mileage_factor, dec!(1.2));
        assert_eq!(quote.vehicle_factor, dec!(1.5));
        assert_eq!(quote.region_factor, dec!(1.1));
    }

    #[tokio::test]
    async fn test_mileage_outside_all_brackets_is_rejected() {
        let calculator = standard_calculator();
        let request = QuoteRequest::new("SUV", 999999999, "12345");

        let error = calculator.calculate(&request, dec!(100.0)).await.unwrap_err();

        assert!(matches!(error, RatingError::InvalidMileage(999999999)));
        assert_eq!(error.to_string(), "Invalid yearly mileage: 999999999");
    }

    #[tokio::test]
    async fn test_unknown_vehicle_type_is_rejected() {
        let calculator = standard_calculator();
        let request = QuoteRequest::new("UNKNOWN", 15000, "12345");

        let error = calculator.calculate(&request, dec!(100.0)).await.unwrap_err();

        assert!(matches!(error, RatingError::InvalidVehicleType(ref t) if t == "UNKNOWN"));
    }

    #[tokio::test]
    async fn test_earliest_failing_step_wins() {
        let calculator = standard_calculator();
        // Both the vehicle type and the postcode are unrated; the vehicle
        // step runs first, so its error must be the one reported.
        let request = QuoteRequest::new("UNKNOWN", 15000, "00000");

        let error = calculator.calculate(&request, dec!(100.0)).await.unwrap_err();

        assert!(matches!(error, RatingError::InvalidVehicleType(_)));
    }

    #[tokio::test]
    async fn test_lookups_run_in_rating_order() {
        let (recorder, calls) = RecordingLookup::new(standard_tables());
        let calculator = PremiumCalculator::new(Arc::new(recorder));
        let request = QuoteRequest::new("SUV", 15000, "12345");

        calculator.calculate(&request, dec!(100.0)).await.unwrap();

        assert_eq!(
            *calls.lock().unwrap(),
            vec!["mileage", "vehicle", "postcode", "region"]
        );
    }

    #[tokio::test]
    async fn test_mileage_failure_stops_before_later_lookups() {
        let (recorder, calls) = RecordingLookup::new(standard_tables());
        let calculator = PremiumCalculator::new(Arc::new(recorder));
        let request = QuoteRequest::new("SUV", 999999999, "12345");

        calculator
            .calculate(&request, dec!(100.0))
            .await
            .unwrap_err();

        assert_eq!(*calls.lock().unwrap(), vec!["mileage"]);
    }

    #[tokio::test]
    async fn test_vehicle_failure_stops_before_later_lookups() {
        let (recorder, calls) = RecordingLookup::new(standard_tables());
        let calculator = PremiumCalculator::new(Arc::new(recorder));
        let request = QuoteRequest::new("UNKNOWN", 15000, "12345");

        calculator
            .calculate(&request, dec!(100.0))
            .await
            .unwrap_err();

        assert_eq!(*calls.lock().unwrap(), vec!["mileage", "vehicle"]);
    }

    #[tokio::test]
    async fn test_unlinked_postcode_is_rejected() {
        let calculator = standard_calculator();
        let request = QuoteRequest::new("SUV", 15000, "99999");

        let error = calculator.calculate(&request, dec!(100.0)).await.unwrap_err();

        assert!(matches!(error, RatingError::InvalidPostcodeOrRegion(ref p) if p == "99999"));
        assert_eq!(error.to_string(), "Invalid postcode or region: 99999");
    }

    #[tokio::test]
    async fn test_unknown_postcode_is_rejected_with_same_error() {
        let calculator = standard_calculator();
        let request = QuoteRequest::new("SUV", 15000, "00000");

        let error = calculator.calculate(&request, dec!(100.0)).await.unwrap_err();

        assert!(matches!(error, RatingError::InvalidPostcodeOrRegion(ref p) if p == "00000"));
    }

    #[tokio::test]
    async fn test_unrated_region_is_rejected_with_same_error() {
        let calculator = standard_calculator();
        // "77777" resolves to region "Atlantis", which carries no rating.
        let request = QuoteRequest::new("SUV", 15000, "77777");

        let error = calculator.calculate(&request, dec!(100.0)).await.unwrap_err();

        assert!(matches!(error, RatingError::InvalidPostcodeOrRegion(ref p) if p == "77777"));
    }

    #[tokio::test]
    async fn test_zero_factor_yields_zero_premium() {
        let calculator = standard_calculator();
        // A zero region factor is a valid rating and must not be confused
        // with a missing one.
        let request = QuoteRequest::new("SUV", 15000, "88888");

        let quote = calculator.calculate(&request, dec!(100.0)).await.unwrap();

        assert_eq!(quote.premium, dec!(0));
    }

    #[tokio::test]
    async fn test_lookup_fault_is_not_a_validation_error() {
        let calculator = PremiumCalculator::new(Arc::new(MockRateLookup::failing()));
        let request = QuoteRequest::new("SUV", 15000, "12345");

        let error = calculator.calculate(&request, dec!(100.0)).await.unwrap_err();

        assert!(matches!(error, RatingError::Lookup(_)));
        assert!(!error.is_validation());
    }

    #[tokio::test]
    async fn test_calculation_is_deterministic() {
        let calculator = standard_calculator();
        let request = QuoteRequest::new("SEDAN", 8000, "12345");

        let first = calculator.calculate(&request, dec!(150.0)).await.unwrap();
        let second = calculator.calculate(&request, dec!(150.0)).await.unwrap();

        assert_eq!(first, second);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for plausible factor values with up to three decimal places
    fn factor() -> impl Strategy<Value = Decimal> {
        (0i64..10_000i64, 0u32..=3u32).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
    }

    proptest! {
        #[test]
        fn premium_product_is_order_independent(
            base in factor(),
            m in factor(),
            v in factor(),
            r in factor()
        ) {
            // The three early lookups are mutually independent; the premium
            // must not depend on the order their factors are applied in.
            let forward = base * m * v * r;
            let swapped = base * v * r * m;
            let reversed = base * r * v * m;
            prop_assert_eq!(forward, swapped);
            prop_assert_eq!(forward, reversed);
        }

        #[test]
        fn premium_is_non_negative_for_non_negative_inputs(
            base in factor(),
            m in factor(),
            v in factor(),
            r in factor()
        ) {
            let premium = base * m * v * r;
            prop_assert!(premium >= Decimal::ZERO);
        }
    }
}
