//! `POST /predict` — keyword estimate, no model call.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::assessment::ThreadRandom;
use crate::models::{Assessment, HealthInput};

pub async fn predict(
    State(ctx): State<ApiContext>,
    payload: Result<Json<HealthInput>, JsonRejection>,
) -> Result<Json<Assessment>, ApiError> {
    let Json(input) = payload?;
    input.validate()?;

    let assessment = ctx.estimator.estimate(&input, ThreadRandom);
    tracing::info!(
        diabetes = assessment.diabetes_risk,
        hypertension = assessment.hypertension_risk,
        depression = assessment.depression_risk,
        "Keyword prediction served"
    );

    Ok(Json(assessment))
}
