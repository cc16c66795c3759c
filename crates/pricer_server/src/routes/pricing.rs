//! Forward and European option pricing endpoints
//!
//! The handlers translate wire-shaped requests into validated instrument
//! terms, delegate to the cache-aside pricer, and relay its quote. Domain
//! violations surface as 400 responses with a structured error body.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use pricer_models::instruments::{EuropeanTerms, ForwardTerms, InstrumentError, OptionType};
use pricer_pricing::PricedQuote;

use super::AppState;

/// Wire shape of a forward pricing request
#[derive(Debug, Clone, Deserialize)]
pub struct ForwardRequest {
    /// Spot price
    #[serde(rename = "S0")]
    pub s0: f64,
    /// Delivery price
    #[serde(rename = "K")]
    pub k: f64,
    /// Continuously compounded risk-free rate
    pub r: f64,
    /// Time to maturity in years
    #[serde(rename = "T")]
    pub t: f64,
}

/// Wire shape of a European option pricing request
#[derive(Debug, Clone, Deserialize)]
pub struct EuropeanOptionRequest {
    /// Spot price
    #[serde(rename = "S0")]
    pub s0: f64,
    /// Strike price
    #[serde(rename = "K")]
    pub k: f64,
    /// Continuously compounded risk-free rate
    pub r: f64,
    /// Annualised volatility
    pub sigma: f64,
    /// Time to maturity in years
    #[serde(rename = "T")]
    pub t: f64,
    /// "call" or "put"
    #[serde(rename = "type")]
    pub option_type: String,
}

impl ForwardRequest {
    /// Maps the wire shape into validated terms.
    fn into_terms(self) -> Result<ForwardTerms, InstrumentError> {
        ForwardTerms::new(self.s0, self.k, self.r, self.t)
    }
}

impl EuropeanOptionRequest {
    /// Maps the wire shape into validated terms, translating the `type`
    /// literal into [`OptionType`].
    fn into_terms(self) -> Result<EuropeanTerms, InstrumentError> {
        let option_type: OptionType = self.option_type.parse()?;
        EuropeanTerms::new(self.s0, self.k, self.r, self.sigma, self.t, option_type)
    }
}

/// Error body returned for rejected requests
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Human-readable failure description
    pub error: String,
}

/// API-level error; invalid parameters are the caller's fault.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidParameter(#[from] InstrumentError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::InvalidParameter(err) = self;
        let body = ErrorResponse {
            error: err.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Build the pricing routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/price/forward", post(price_forward_handler))
        .route("/price/european-option", post(price_european_handler))
}

/// POST /price/forward - price a forward contract
async fn price_forward_handler(
    State(state): State<AppState>,
    Json(request): Json<ForwardRequest>,
) -> Result<Json<PricedQuote>, ApiError> {
    let terms = request.into_terms()?;
    let quote = state.pricer.forward(&terms).await;

    info!(
        price = quote.price,
        cached = quote.cached,
        "forward priced"
    );
    Ok(Json(quote))
}

/// POST /price/european-option - price a European option
async fn price_european_handler(
    State(state): State<AppState>,
    Json(request): Json<EuropeanOptionRequest>,
) -> Result<Json<PricedQuote>, ApiError> {
    let terms = request.into_terms()?;
    let quote = state.pricer.european(&terms).await;

    info!(
        price = quote.price,
        cached = quote.cached,
        "european option priced"
    );
    Ok(Json(quote))
}
