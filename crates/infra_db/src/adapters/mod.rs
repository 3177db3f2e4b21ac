//! Domain Adapters
//!
//! This module provides adapter implementations for domain ports,
//! connecting domain interfaces to the PostgreSQL database layer.
//!
//! # Architecture
//!
//! The adapter:
//! - Implements the domain's port trait
//! - Translates between domain models and database row types
//! - Uses the repository layer for database operations
//!
//! # Usage
//!
//! ```rust,ignore
//! use infra_db::adapters::PostgresRatingAdapter;
//! use domain_rating::RateLookup;
//!
//! let adapter = PostgresRatingAdapter::new(pool);
//! let factor = adapter.find_vehicle_factor("SUV").await?;
//! ```

pub mod rating;

pub use rating::PostgresRatingAdapter;
