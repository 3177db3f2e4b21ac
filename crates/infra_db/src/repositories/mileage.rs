//! Mileage bracket repository
//!
//! Database access for the `mileage_brackets` reference table.

use rust_decimal::Decimal;
use sqlx::PgPool;

use domain_rating::MileageBracket;

use crate::error::DatabaseError;

/// Repository for yearly mileage brackets
///
/// The containment predicate lives in SQL with both bounds inclusive.
/// Overlapping brackets are assumed absent in the reference data; when they
/// do occur the first row wins.
#[derive(Debug, Clone)]
pub struct MileageBracketRepository {
    pool: PgPool,
}

impl MileageBracketRepository {
    /// Creates a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Finds the bracket containing a yearly mileage
    ///
    /// # Arguments
    ///
    /// * `yearly_mileage` - The mileage to locate
    ///
    /// # Returns
    ///
    /// The containing bracket, or `None` when no bracket covers the mileage
    pub async fn find_by_yearly_mileage(
        &self,
        yearly_mileage: i64,
    ) -> Result<Option<MileageBracket>, DatabaseError> {
        let row = sqlx::query_as::<_, (i64, i64, Decimal)>(
            r#"
            SELECT mileage_from, mileage_to, factor
            FROM mileage_brackets
            WHERE mileage_from <= $1
              AND mileage_to >= $1
            "#,
        )
        .bind(yearly_mileage)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(mileage_from, mileage_to, factor)| {
            MileageBracket::new(mileage_from, mileage_to, factor)
        }))
    }
}
