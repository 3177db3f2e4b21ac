//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL access layer for the premium rating
//! service. The rating reference data (vehicle ratings, mileage brackets,
//! region ratings, postcode mappings) lives in four tables; this crate
//! exposes them to the domain through the `RateLookup` port.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: one repository per reference
//! table encapsulates the SQL and row mapping, and the
//! [`adapters::PostgresRatingAdapter`] composes the repositories into the
//! domain port implementation.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, create_pool};
//! use infra_db::adapters::PostgresRatingAdapter;
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/premium_rating")).await?;
//! let rates = PostgresRatingAdapter::new(pool);
//! ```

pub mod adapters;
pub mod error;
pub mod pool;
pub mod repositories;

pub use adapters::PostgresRatingAdapter;
pub use error::DatabaseError;
pub use pool::{create_pool, DatabaseConfig, DatabasePool};
