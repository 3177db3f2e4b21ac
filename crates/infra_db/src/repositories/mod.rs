//! Repository implementations for rating reference data
//!
//! This module provides concrete repository implementations that handle
//! database access for each reference table. Repositories encapsulate
//! SQL queries and map between database rows and domain types.
//!
//! # Architecture
//!
//! Each repository follows these principles:
//! - One repository per reference table
//! - Runtime-checked queries mapped into domain types
//! - Missing rows are `Ok(None)`, never an error

pub mod mileage;
pub mod postcode;
pub mod region;
pub mod vehicle;

pub use mileage::MileageBracketRepository;
pub use postcode::PostcodeRepository;
pub use region::RegionRatingRepository;
pub use vehicle::VehicleRatingRepository;
