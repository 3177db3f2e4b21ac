//! Region rating repository
//!
//! Database access for the `region_ratings` reference table.

use rust_decimal::Decimal;
use sqlx::PgPool;

use domain_rating::RegionRating;

use crate::error::DatabaseError;

/// Repository for region rating factors
#[derive(Debug, Clone)]
pub struct RegionRatingRepository {
    pool: PgPool,
}

impl RegionRatingRepository {
    /// Creates a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Finds the rating for a region name
    ///
    /// # Arguments
    ///
    /// * `region` - The region name to match exactly
    ///
    /// # Returns
    ///
    /// The rating row, or `None` when the region has no entry
    pub async fn find_by_region(
        &self,
        region: &str,
    ) -> Result<Option<RegionRating>, DatabaseError> {
        let row = sqlx::query_as::<_, (String, Decimal)>(
            r#"
            SELECT region, factor
            FROM region_ratings
            WHERE region = $1
            "#,
        )
        .bind(region)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(region, factor)| RegionRating::new(region, factor)))
    }
}
