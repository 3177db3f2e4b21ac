//! Premium calculation handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use domain_rating::{PremiumCalculator, QuoteRequest};

use crate::dto::premium::{PremiumRequest, PremiumResponse};
use crate::{error::ApiError, AppState};

/// Calculates a premium for the submitted risk data
///
/// `POST /api/premium/calculate` with a JSON body carrying `vehicleType`,
/// `yearlyMileage`, and `postcode`. Responds with the calculated premium;
/// a request the reference data cannot rate is rejected with 422 and the
/// domain error message.
pub async fn calculate_premium(
    State(state): State<AppState>,
    Json(request): Json<PremiumRequest>,
) -> Result<Json<PremiumResponse>, ApiError> {
    let request: QuoteRequest = request.into();

    tracing::info!(
        vehicle_type = %request.vehicle_type,
        yearly_mileage = request.yearly_mileage,
        postcode = %request.postcode,
        "Received premium calculation request"
    );

    let calculator = PremiumCalculator::new(Arc::clone(&state.rates));
    let quote = calculator
        .calculate(&request, state.config.base_rate)
        .await?;

    tracing::info!(premium = %quote.premium, "Premium calculation request completed");

    Ok(Json(PremiumResponse::from(quote)))
}
