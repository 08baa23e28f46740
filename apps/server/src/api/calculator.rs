use std::sync::Arc;

use crate::{
    error::{ApiJson, ApiResult},
    main_lib::AppState,
    models::{ComputeResponse, ConstraintsResponse, FieldConstraintInfo, IntervalInfo, ValidateResponse},
};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use compound_core::constants::{
    FIELD_ANNUAL_RATE, FIELD_CONTRIBUTION_AMOUNT, FIELD_DURATION_YEARS, FIELD_PRINCIPAL,
};
use compound_core::{ContributionInterval, InvestmentFields};

#[utoipa::path(
    get,
    path = "/api/v1/calculator/constraints",
    responses((status = 200, body = ConstraintsResponse))
)]
pub async fn get_constraints(State(state): State<Arc<AppState>>) -> Json<ConstraintsResponse> {
    let service = &state.investment_service;
    let c = service.constraints();
    Json(ConstraintsResponse {
        default_annual_rate_percent: service.default_annual_rate().normalize().to_string(),
        intervals: ContributionInterval::ALL
            .into_iter()
            .map(IntervalInfo::from)
            .collect(),
        fields: vec![
            FieldConstraintInfo::new(FIELD_PRINCIPAL, &c.principal),
            FieldConstraintInfo::new(FIELD_CONTRIBUTION_AMOUNT, &c.contribution_amount),
            FieldConstraintInfo::new(FIELD_ANNUAL_RATE, &c.annual_rate_percent),
            FieldConstraintInfo::new(FIELD_DURATION_YEARS, &c.duration_years),
        ],
    })
}

#[utoipa::path(
    post,
    path = "/api/v1/calculator/validate",
    responses((status = 200, body = ValidateResponse))
)]
pub async fn validate_form(
    State(state): State<Arc<AppState>>,
    ApiJson(fields): ApiJson<InvestmentFields>,
) -> ApiResult<Json<ValidateResponse>> {
    let report = state.investment_service.validate(&fields);
    Ok(Json(ValidateResponse::from(report)))
}

#[utoipa::path(
    post,
    path = "/api/v1/calculator/compute",
    responses(
        (status = 200, body = ComputeResponse),
        (status = 400, description = "One or more fields are invalid")
    )
)]
pub async fn compute(
    State(state): State<Arc<AppState>>,
    ApiJson(fields): ApiJson<InvestmentFields>,
) -> ApiResult<Json<ComputeResponse>> {
    let service = &state.investment_service;
    let input = service.parse_input(&fields)?;
    let outcome = service.calculate(&input)?;
    let summary = service.summarize(&input, &outcome);
    tracing::debug!("Computed {} for {} periods", outcome.future_value, outcome.periods);
    Ok(Json(ComputeResponse::new(&outcome, summary)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/calculator/constraints", get(get_constraints))
        .route("/calculator/validate", post(validate_form))
        .route("/calculator/compute", post(compute))
}
