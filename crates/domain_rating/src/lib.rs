//! Premium Rating Domain
//!
//! This crate implements the premium rating logic for the insurance premium
//! service. It is infrastructure-agnostic: all reference-data access goes
//! through the [`ports::RateLookup`] trait, and adapters (PostgreSQL,
//! in-memory mock) live outside the domain.
//!
//! # Rating model
//!
//! A premium is the product of a configured base rate and three rating
//! factors resolved from reference data:
//!
//! ```text
//! premium = base_rate * mileage_factor * vehicle_factor * region_factor
//! ```
//!
//! Factor resolution is strictly ordered (mileage, vehicle, region) and
//! short-circuits on the first failure. See [`calculator::PremiumCalculator`]
//! for the exact semantics.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_rating::{PremiumCalculator, QuoteRequest};
//! use rust_decimal_macros::dec;
//! use std::sync::Arc;
//!
//! let calculator = PremiumCalculator::new(Arc::new(lookup));
//! let request = QuoteRequest::new("SUV", 15000, "12345");
//! let quote = calculator.calculate(&request, dec!(100.0)).await?;
//! println!("premium: {}", quote.premium);
//! ```

pub mod calculator;
pub mod error;
pub mod factors;
pub mod ports;
pub mod quote;

pub use calculator::PremiumCalculator;
pub use error::RatingError;
pub use factors::{MileageBracket, PostcodeMapping, RegionRating, VehicleRating};
pub use ports::{
    AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, LookupError, RateLookup,
};
pub use quote::{PremiumQuote, QuoteRequest};
