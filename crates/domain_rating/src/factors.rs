//! Rating reference data types
//!
//! These types mirror the four reference tables the rating factors are
//! resolved from: vehicle ratings, mileage brackets, region ratings, and the
//! postcode-to-region mapping. They carry no behavior beyond bracket
//! containment; factor resolution goes through the `RateLookup` port.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Rating factor for a vehicle type
///
/// Vehicle types are matched exactly and case-sensitively; `"SUV"` and
/// `"suv"` are different types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRating {
    /// Vehicle type code
    pub vehicle_type: String,
    /// Multiplicative rating factor
    pub factor: Decimal,
}

impl VehicleRating {
    /// Creates a new vehicle rating
    pub fn new(vehicle_type: impl Into<String>, factor: Decimal) -> Self {
        Self {
            vehicle_type: vehicle_type.into(),
            factor,
        }
    }
}

/// Rating factor for a yearly mileage bracket
///
/// Brackets are inclusive on both ends. Overlapping brackets are assumed
/// absent in the reference data and are not validated here; when they do
/// occur the first match wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MileageBracket {
    /// Lower bound of the bracket (inclusive)
    pub mileage_from: i64,
    /// Upper bound of the bracket (inclusive)
    pub mileage_to: i64,
    /// Multiplicative rating factor
    pub factor: Decimal,
}

impl MileageBracket {
    /// Creates a new mileage bracket
    pub fn new(mileage_from: i64, mileage_to: i64, factor: Decimal) -> Self {
        Self {
            mileage_from,
            mileage_to,
            factor,
        }
    }

    /// Returns true if the yearly mileage falls within this bracket
    ///
    /// Both bounds are inclusive: a mileage equal to `mileage_from` or
    /// `mileage_to` is contained.
    pub fn contains(&self, yearly_mileage: i64) -> bool {
        self.mileage_from <= yearly_mileage && yearly_mileage <= self.mileage_to
    }
}

/// Rating factor for a region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRating {
    /// Region name
    pub region: String,
    /// Multiplicative rating factor
    pub factor: Decimal,
}

impl RegionRating {
    /// Creates a new region rating
    pub fn new(region: impl Into<String>, factor: Decimal) -> Self {
        Self {
            region: region.into(),
            factor,
        }
    }
}

/// Mapping from a postcode to its region
///
/// The region link is optional. A postcode row without a region resolves to
/// no region name, which callers cannot distinguish from an unknown postcode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostcodeMapping {
    /// Postcode
    pub postcode: String,
    /// Name of the linked region, if any
    pub region: Option<String>,
}

impl PostcodeMapping {
    /// Creates a postcode mapping linked to a region
    pub fn linked(postcode: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            postcode: postcode.into(),
            region: Some(region.into()),
        }
    }

    /// Creates a postcode mapping without a region link
    pub fn unlinked(postcode: impl Into<String>) -> Self {
        Self {
            postcode: postcode.into(),
            region: None,
        }
    }
}
