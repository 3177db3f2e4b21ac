//! Postcode mapping repository
//!
//! Database access for the `postcodes` reference table and its optional
//! link into `region_ratings`.

use sqlx::PgPool;

use domain_rating::PostcodeMapping;

use crate::error::DatabaseError;

/// Repository for postcode-to-region mappings
///
/// The region link is resolved with a LEFT JOIN so that a postcode row
/// without a region still comes back, carrying `None` as its region name.
#[derive(Debug, Clone)]
pub struct PostcodeRepository {
    pool: PgPool,
}

impl PostcodeRepository {
    /// Creates a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Finds the mapping for a postcode
    ///
    /// # Arguments
    ///
    /// * `postcode` - The postcode to resolve
    ///
    /// # Returns
    ///
    /// The mapping row with its optional region name, or `None` when the
    /// postcode is unknown
    pub async fn find_by_postcode(
        &self,
        postcode: &str,
    ) -> Result<Option<PostcodeMapping>, DatabaseError> {
        let row = sqlx::query_as::<_, (String, Option<String>)>(
            r#"
            SELECT p.postcode, r.region
            FROM postcodes p
            LEFT JOIN region_ratings r ON r.id = p.region_id
            WHERE p.postcode = $1
            "#,
        )
        .bind(postcode)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(postcode, region)| PostcodeMapping { postcode, region }))
    }
}
