//! Rating Domain Ports
//!
//! This module defines the port interface the rating domain needs from its
//! reference-data source, enabling swappable implementations (PostgreSQL,
//! mock, or an external rating-table service).
//!
//! # Architecture
//!
//! The `RateLookup` trait defines the four lookups premium calculation is
//! built from. Multiple adapters can implement this trait:
//!
//! - **Internal Adapter**: Uses the PostgreSQL reference tables (infra_db)
//! - **Mock Adapter**: In-memory tables for testing without a database
//!
//! # Lookup semantics
//!
//! Every operation distinguishes two kinds of "no result":
//!
//! - `Ok(None)` means the reference data holds no matching row. This is a
//!   domain outcome; the calculator turns it into a validation error.
//! - `Err(LookupError)` means the store itself failed. This is an
//!   infrastructure fault and is never mapped to a validation error.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_rating::ports::RateLookup;
//! use std::sync::Arc;
//!
//! pub struct PremiumCalculator {
//!     rates: Arc<dyn RateLookup>,
//! }
//!
//! impl PremiumCalculator {
//!     pub async fn vehicle_factor(&self, vehicle_type: &str) -> Result<Option<Decimal>, LookupError> {
//!         self.rates.find_vehicle_factor(vehicle_type).await
//!     }
//! }
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for rate lookup operations
///
/// Covers infrastructure faults only; a missing reference row is expressed
/// as `Ok(None)` by the port operations, never as an error.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Connection to the reference-data store failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A query against the reference-data store failed
    #[error("Query error: {message}")]
    Query { message: String },

    /// The lookup timed out
    #[error("Timeout after {duration_ms}ms: {operation}")]
    Timeout { operation: String, duration_ms: u64 },
}

impl LookupError {
    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        LookupError::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a Connection error with an underlying cause
    pub fn connection_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        LookupError::Connection {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a Query error
    pub fn query(message: impl Into<String>) -> Self {
        LookupError::Query {
            message: message.into(),
        }
    }

    /// Returns true if this error indicates a transient failure that may
    /// succeed on retry
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            LookupError::Connection { .. } | LookupError::Timeout { .. }
        )
    }
}

/// Marker trait for all domain ports
///
/// All port traits extend this marker to ensure they are thread-safe and can
/// be shared across async tasks.
pub trait DomainPort: Send + Sync + 'static {}

/// Health status for an adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterHealth {
    /// Adapter is healthy and operational
    Healthy,
    /// Adapter is unhealthy and not operational
    Unhealthy,
}

/// Health check result for an adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    /// Adapter identifier
    pub adapter_id: String,
    /// Current health status
    pub status: AdapterHealth,
    /// Latency of the health check in milliseconds
    pub latency_ms: u64,
    /// Optional message with additional details
    pub message: Option<String>,
    /// Timestamp of the health check
    pub checked_at: DateTime<Utc>,
}

impl HealthCheckResult {
    /// Creates a healthy result
    pub fn healthy(adapter_id: impl Into<String>, latency_ms: u64) -> Self {
        Self {
            adapter_id: adapter_id.into(),
            status: AdapterHealth::Healthy,
            latency_ms,
            message: None,
            checked_at: Utc::now(),
        }
    }

    /// Creates an unhealthy result with a diagnostic message
    pub fn unhealthy(
        adapter_id: impl Into<String>,
        latency_ms: u64,
        message: impl Into<String>,
    ) -> Self {
        Self {
            adapter_id: adapter_id.into(),
            status: AdapterHealth::Unhealthy,
            latency_ms,
            message: Some(message.into()),
            checked_at: Utc::now(),
        }
    }

    /// Returns true if the adapter reported healthy
    pub fn is_healthy(&self) -> bool {
        self.status == AdapterHealth::Healthy
    }
}

/// Trait for adapters that support health checks
#[async_trait]
pub trait HealthCheckable: Send + Sync {
    /// Performs a health check on the adapter
    async fn health_check(&self) -> HealthCheckResult;
}

/// The port trait for rating reference-data lookups
///
/// This trait defines the four lookups that premium calculation requires
/// from its reference-data source. Implementations can be internal
/// (database) or in-memory (mock).
///
/// All methods return `Result<Option<T>, LookupError>`: `None` for a missing
/// reference row, `Err` for a store fault.
#[async_trait]
pub trait RateLookup: DomainPort + HealthCheckable {
    /// Finds the factor of the mileage bracket containing the yearly mileage
    ///
    /// # Arguments
    ///
    /// * `yearly_mileage` - The mileage to locate; bracket bounds are
    ///   inclusive on both ends
    ///
    /// # Returns
    ///
    /// The bracket's factor, or `None` when no bracket covers the mileage.
    /// Overlapping brackets are assumed absent; the first match wins.
    async fn find_mileage_factor(
        &self,
        yearly_mileage: i64,
    ) -> Result<Option<Decimal>, LookupError>;

    /// Finds the rating factor for a vehicle type
    ///
    /// # Arguments
    ///
    /// * `vehicle_type` - The vehicle type code, matched exactly and
    ///   case-sensitively
    ///
    /// # Returns
    ///
    /// The vehicle's factor, or `None` when the type has no rating.
    async fn find_vehicle_factor(
        &self,
        vehicle_type: &str,
    ) -> Result<Option<Decimal>, LookupError>;

    /// Resolves a postcode to its region name
    ///
    /// # Arguments
    ///
    /// * `postcode` - The postcode to resolve
    ///
    /// # Returns
    ///
    /// The region name, or `None` when the postcode is unknown or has no
    /// region link. The two causes are indistinguishable to the caller.
    async fn find_region_by_postcode(
        &self,
        postcode: &str,
    ) -> Result<Option<String>, LookupError>;

    /// Finds the rating factor for a region
    ///
    /// # Arguments
    ///
    /// * `region` - The region name; `None` is accepted and resolves to
    ///   `None` without consulting the store
    ///
    /// # Returns
    ///
    /// The region's factor, or `None` when the region is absent or unrated.
    async fn find_region_factor(
        &self,
        region: Option<&str>,
    ) -> Result<Option<Decimal>, LookupError>;
}

/// Mock implementation of RateLookup for testing
///
/// This adapter holds the rating tables in memory and is useful for unit
/// testing without a database.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;

    use crate::factors::{MileageBracket, PostcodeMapping, RegionRating, VehicleRating};

    /// In-memory mock implementation of RateLookup
    ///
    /// Tables are loaded up front with the `with_*` builders and are
    /// read-only afterwards, matching how the real reference data behaves
    /// within a process lifetime.
    #[derive(Debug, Default)]
    pub struct MockRateLookup {
        vehicles: HashMap<String, VehicleRating>,
        brackets: Vec<MileageBracket>,
        regions: HashMap<String, RegionRating>,
        postcodes: HashMap<String, PostcodeMapping>,
        fail: bool,
    }

    impl MockRateLookup {
        /// Creates an empty mock with no reference data
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a mock whose lookups all fail with a connection error
        ///
        /// Useful for exercising the infrastructure-fault path without a
        /// database. The health check reports unhealthy.
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        /// Adds a vehicle rating
        pub fn with_vehicle(mut self, vehicle_type: &str, factor: Decimal) -> Self {
            self.vehicles.insert(
                vehicle_type.to_string(),
                VehicleRating::new(vehicle_type, factor),
            );
            self
        }

        /// Adds a mileage bracket
        pub fn with_bracket(mut self, mileage_from: i64, mileage_to: i64, factor: Decimal) -> Self {
            self.brackets
                .push(MileageBracket::new(mileage_from, mileage_to, factor));
            self
        }

        /// Adds a region rating
        pub fn with_region(mut self, region: &str, factor: Decimal) -> Self {
            self.regions
                .insert(region.to_string(), RegionRating::new(region, factor));
            self
        }

        /// Adds a postcode mapping, linked to a region or unlinked
        pub fn with_postcode(mut self, postcode: &str, region: Option<&str>) -> Self {
            let mapping = match region {
                Some(region) => PostcodeMapping::linked(postcode, region),
                None => PostcodeMapping::unlinked(postcode),
            };
            self.postcodes.insert(postcode.to_string(), mapping);
            self
        }

        fn check_fail(&self, operation: &str) -> Result<(), LookupError> {
            if self.fail {
                return Err(LookupError::connection(format!(
                    "simulated connection failure during {operation}"
                )));
            }
            Ok(())
        }
    }

    impl DomainPort for MockRateLookup {}

    #[async_trait]
    impl HealthCheckable for MockRateLookup {
        async fn health_check(&self) -> HealthCheckResult {
            if self.fail {
                HealthCheckResult::unhealthy(
                    "mock-rate-lookup",
                    0,
                    "simulated connection failure",
                )
            } else {
                HealthCheckResult::healthy("mock-rate-lookup", 0)
            }
        }
    }

    #[async_trait]
    impl RateLookup for MockRateLookup {
        async fn find_mileage_factor(
            &self,
            yearly_mileage: i64,
        ) -> Result<Option<Decimal>, LookupError> {
            self.check_fail("find_mileage_factor")?;
            Ok(self
                .brackets
                .iter()
                .find(|bracket| bracket.contains(yearly_mileage))
                .map(|bracket| bracket.factor))
        }

        async fn find_vehicle_factor(
            &self,
            vehicle_type: &str,
        ) -> Result<Option<Decimal>, LookupError> {
            self.check_fail("find_vehicle_factor")?;
            Ok(self.vehicles.get(vehicle_type).map(|rating| rating.factor))
        }

        async fn find_region_by_postcode(
            &self,
            postcode: &str,
        ) -> Result<Option<String>, LookupError> {
            self.check_fail("find_region_by_postcode")?;
            Ok(self
                .postcodes
                .get(postcode)
                .and_then(|mapping| mapping.region.clone()))
        }

        async fn find_region_factor(
            &self,
            region: Option<&str>,
        ) -> Result<Option<Decimal>, LookupError> {
            self.check_fail("find_region_factor")?;
            match region {
                Some(region) => Ok(self.regions.get(region).map(|rating| rating.factor)),
                None => Ok(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockRateLookup;
    use super::*;
    use rust_decimal_macros::dec;

    fn standard_mock() -> MockRateLookup {
        MockRateLookup::new()
            .with_bracket(10000, 14999, dec!(1.25))
            .with_vehicle("SUV", dec!(1.5))
            .with_region("Bayern", dec!(1.1))
            .with_postcode("12345", Some("Bayern"))
            .with_postcode("99999", None)
    }

    #[tokio::test]
    async fn test_mileage_factor_within_bracket() {
        let lookup = standard_mock();
        let factor = lookup.find_mileage_factor(14000).await.unwrap();
        assert_eq!(factor, Some(dec!(1.25)));
    }

    #[tokio::test]
    async fn test_mileage_factor_inclusive_bounds() {
        let lookup = standard_mock();
        assert_eq!(
            lookup.find_mileage_factor(10000).await.unwrap(),
            Some(dec!(1.25))
        );
        assert_eq!(
            lookup.find_mileage_factor(14999).await.unwrap(),
            Some(dec!(1.25))
        );
    }

    #[tokio::test]
    async fn test_mileage_factor_outside_brackets() {
        let lookup = standard_mock();
        assert_eq!(lookup.find_mileage_factor(999999999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_vehicle_factor_is_case_sensitive() {
        let lookup = standard_mock();
        assert_eq!(
            lookup.find_vehicle_factor("SUV").await.unwrap(),
            Some(dec!(1.5))
        );
        assert_eq!(lookup.find_vehicle_factor("suv").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_region_by_postcode() {
        let lookup = standard_mock();
        assert_eq!(
            lookup.find_region_by_postcode("12345").await.unwrap(),
            Some("Bayern".to_string())
        );
    }

    #[tokio::test]
    async fn test_unlinked_and_unknown_postcodes_are_indistinguishable() {
        let lookup = standard_mock();
        let unlinked = lookup.find_region_by_postcode("99999").await.unwrap();
        let unknown = lookup.find_region_by_postcode("00000").await.unwrap();
        assert_eq!(unlinked, None);
        assert_eq!(unknown, None);
    }

    #[tokio::test]
    async fn test_region_factor_for_known_region() {
        let lookup = standard_mock();
        assert_eq!(
            lookup.find_region_factor(Some("Bayern")).await.unwrap(),
            Some(dec!(1.1))
        );
    }

    #[tokio::test]
    async fn test_region_factor_for_missing_region_is_none() {
        let lookup = standard_mock();
        assert_eq!(lookup.find_region_factor(None).await.unwrap(), None);
        assert_eq!(lookup.find_region_factor(Some("Atlantis")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_failing_mock_reports_transient_error() {
        let lookup = MockRateLookup::failing();
        let error = lookup.find_vehicle_factor("SUV").await.unwrap_err();
        assert!(error.is_transient());
    }

    #[tokio::test]
    async fn test_mock_health_check() {
        let healthy = standard_mock().health_check().await;
        assert!(healthy.is_healthy());

        let unhealthy = MockRateLookup::failing().health_check().await;
        assert_eq!(unhealthy.status, AdapterHealth::Unhealthy);
    }

    #[test]
    fn test_lookup_error_transience() {
        assert!(LookupError::connection("refused").is_transient());
        assert!(!LookupError::query("syntax error").is_transient());

        let timeout = LookupError::Timeout {
            operation: "find_vehicle_factor".to_string(),
            duration_ms: 5000,
        };
        assert!(timeout.is_transient());
    }
}
