use axum::{
    extract::Query,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::db::fees::{compute_amount, TollBooth, VehicleType, TOLL_BOOTHS, VEHICLE_TYPES};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceData {
    pub toll_booths: &'static [TollBooth],
    pub vehicle_types: &'static [VehicleType],
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteParams {
    pub toll_booth: String,
    pub vehicle_type: String,
}

#[derive(Debug, Serialize)]
pub struct Quote {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

// the booth and vehicle tables the UI renders its selects from
async fn reference_data() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ReferenceData {
            toll_booths: &TOLL_BOOTHS,
            vehicle_types: &VEHICLE_TYPES,
        }),
    )
}

async fn quote(Query(params): Query<QuoteParams>) -> impl IntoResponse {
    let amount = compute_amount(&params.toll_booth, &params.vehicle_type);
    (StatusCode::OK, Json(Quote { amount }))
}

pub fn fee_routes() -> Router {
    Router::new()
        .route("/reference", get(reference_data))
        .route("/reference/quote", get(quote))
}
