//! PostgreSQL Rating Adapter
//!
//! This module provides the internal (database) adapter for the rating
//! domain, implementing the `RateLookup` trait over the four reference-data
//! repositories.
//!
//! # Overview
//!
//! The `PostgresRatingAdapter` serves as the bridge between the domain
//! layer's port interface and the database layer. It:
//!
//! - Translates port lookups into repository operations
//! - Extracts the factors the domain needs from the reference rows
//! - Handles error translation between database and lookup errors
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::adapters::PostgresRatingAdapter;
//! use domain_rating::RateLookup;
//! use std::sync::Arc;
//!
//! let adapter = PostgresRatingAdapter::new(pool);
//! let rates: Arc<dyn RateLookup> = Arc::new(adapter);
//! let factor = rates.find_mileage_factor(15000).await?;
//! ```

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::{debug, instrument};

use domain_rating::ports::{
    DomainPort, HealthCheckResult, HealthCheckable, LookupError, RateLookup,
};

use crate::error::DatabaseError;
use crate::repositories::{
    MileageBracketRepository, PostcodeRepository, RegionRatingRepository, VehicleRatingRepository,
};

/// PostgreSQL-backed implementation of the RateLookup trait
///
/// This adapter composes the four reference-table repositories and provides
/// the standard internal (database) implementation of the rating domain
/// port.
///
/// # Health Checking
///
/// The adapter implements `HealthCheckable` to verify database connectivity.
/// Health checks perform a simple query to ensure the connection pool is
/// operational.
///
/// # Error Handling
///
/// Database errors are translated to `LookupError` variants:
/// - Connection faults and pool exhaustion -> `LookupError::Connection`
/// - Everything else -> `LookupError::Query`
#[derive(Debug, Clone)]
pub struct PostgresRatingAdapter {
    vehicles: VehicleRatingRepository,
    brackets: MileageBracketRepository,
    regions: RegionRatingRepository,
    postcodes: PostcodeRepository,
    pool: PgPool,
}

impl PostgresRatingAdapter {
    /// Creates a new PostgreSQL rating adapter
    ///
    /// # Arguments
    ///
    /// * `pool` - The PostgreSQL connection pool
    pub fn new(pool: PgPool) -> Self {
        Self {
            vehicles: VehicleRatingRepository::new(pool.clone()),
            brackets: MileageBracketRepository::new(pool.clone()),
            regions: RegionRatingRepository::new(pool.clone()),
            postcodes: PostcodeRepository::new(pool.clone()),
            pool,
        }
    }
}

/// Translates database errors into port lookup errors
///
/// Raw `SqlError` values are classified first so that connection-level
/// faults keep their transient nature across the port boundary.
fn db_to_lookup_error(error: DatabaseError) -> LookupError {
    let classified = match error {
        DatabaseError::SqlError(ref e) => DatabaseError::from(e),
        other => other,
    };

    match classified {
        DatabaseError::ConnectionFailed(message) => LookupError::connection(message),
        DatabaseError::PoolExhausted => LookupError::connection("connection pool exhausted"),
        DatabaseError::NotFound(message) | DatabaseError::QueryFailed(message) => {
            LookupError::query(message)
        }
        DatabaseError::SqlError(e) => LookupError::query(e.to_string()),
    }
}

// Mark as a domain port
impl DomainPort for PostgresRatingAdapter {}

#[async_trait]
impl HealthCheckable for PostgresRatingAdapter {
    /// Checks database connectivity
    ///
    /// Performs a simple SELECT 1 query to verify the connection pool
    /// is operational and the database is responsive.
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();

        let result = sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await;

        let latency_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(_) => HealthCheckResult::healthy("postgres-rating-adapter", latency_ms),
            Err(e) => HealthCheckResult::unhealthy(
                "postgres-rating-adapter",
                latency_ms,
                format!("Database error: {}", e),
            ),
        }
    }
}

#[async_trait]
impl RateLookup for PostgresRatingAdapter {
    #[instrument(skip(self))]
    async fn find_mileage_factor(
        &self,
        yearly_mileage: i64,
    ) -> Result<Option<Decimal>, LookupError> {
        debug!("Looking up mileage bracket");

        let bracket = self
            .brackets
            .find_by_yearly_mileage(yearly_mileage)
            .await
            .map_err(db_to_lookup_error)?;

        Ok(bracket.map(|b| b.factor))
    }

    #[instrument(skip(self))]
    async fn find_vehicle_factor(
        &self,
        vehicle_type: &str,
    ) -> Result<Option<Decimal>, LookupError> {
        debug!("Looking up vehicle rating");

        let rating = self
            .vehicles
            .find_by_vehicle_type(vehicle_type)
            .await
            .map_err(db_to_lookup_error)?;

        Ok(rating.map(|r| r.factor))
    }

    #[instrument(skip(self))]
    async fn find_region_by_postcode(
        &self,
        postcode: &str,
    ) -> Result<Option<String>, LookupError> {
        debug!("Resolving postcode to region");

        let mapping = self
            .postcodes
            .find_by_postcode(postcode)
            .await
            .map_err(db_to_lookup_error)?;

        // The caller cannot tell the two empty outcomes apart; the log can.
        match mapping {
            Some(mapping) => {
                if mapping.region.is_none() {
                    debug!("Postcode exists but has no region link");
                }
                Ok(mapping.region)
            }
            None => {
                debug!("Postcode not found");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self))]
    async fn find_region_factor(
        &self,
        region: Option<&str>,
    ) -> Result<Option<Decimal>, LookupError> {
        // A missing region name resolves to no factor without touching the
        // database.
        let region = match region {
            Some(region) => region,
            None => {
                debug!("No region name to look up");
                return Ok(None);
            }
        };

        debug!("Looking up region rating");

        let rating = self
            .regions
            .find_by_region(region)
            .await
            .map_err(db_to_lookup_error)?;

        Ok(rating.map(|r| r.factor))
    }
}
