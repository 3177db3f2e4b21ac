//! Vehicle rating repository
//!
//! Database access for the `vehicle_ratings` reference table.

use rust_decimal::Decimal;
use sqlx::PgPool;

use domain_rating::VehicleRating;

use crate::error::DatabaseError;

/// Repository for vehicle rating factors
///
/// Vehicle types are stored and matched exactly; the lookup is
/// case-sensitive by way of the plain equality predicate.
///
/// # Example
///
/// ```rust,ignore
/// use infra_db::repositories::VehicleRatingRepository;
///
/// let repo = VehicleRatingRepository::new(pool);
/// let rating = repo.find_by_vehicle_type("SUV").await?;
/// ```
#[derive(Debug, Clone)]
pub struct VehicleRatingRepository {
    pool: PgPool,
}

impl VehicleRatingRepository {
    /// Creates a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Finds the rating for a vehicle type
    ///
    /// # Arguments
    ///
    /// * `vehicle_type` - The vehicle type code to match exactly
    ///
    /// # Returns
    ///
    /// The rating row, or `None` when the type has no entry
    pub async fn find_by_vehicle_type(
        &self,
        vehicle_type: &str,
    ) -> Result<Option<VehicleRating>, DatabaseError> {
        let row = sqlx::query_as::<_, (String, Decimal)>(
            r#"
            SELECT vehicle_type, factor
            FROM vehicle_ratings
            WHERE vehicle_type = $1
            "#,
        )
        .bind(vehicle_type)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(vehicle_type, factor)| VehicleRating::new(vehicle_type, factor)))
    }
}
