//! Premium DTOs
//!
//! The camelCase field names are part of the wire contract, as is the
//! premium being a JSON number rather than a string.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_rating::{PremiumQuote, QuoteRequest};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumRequest {
    pub vehicle_type: String,
    pub yearly_mileage: i64,
    pub postcode: String,
}

impl From<PremiumRequest> for QuoteRequest {
    fn from(request: PremiumRequest) -> Self {
        QuoteRequest {
            vehicle_type: request.vehicle_type,
            yearly_mileage: request.yearly_mileage,
            postcode: request.postcode,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumResponse {
    #[serde(with = "rust_decimal::serde::float")]
    pub calculated_premium: Decimal,
}

impl From<PremiumQuote> for PremiumResponse {
    fn from(quote: PremiumQuote) -> Self {
        Self {
            calculated_premium: quote.premium,
        }
    }
}
