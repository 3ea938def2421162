//! `POST /analyze` — model assessment with keyword fallback.
//!
//! `?fallback=false` disables the fallback and surfaces upstream failures
//! as `502 UPSTREAM_ERROR`.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::assessment::{HealthAnalyzer, ThreadRandom};
use crate::models::{Assessment, HealthInput, UserHealthData};

#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeQuery {
    pub fallback: Option<bool>,
}

pub async fn analyze(
    State(ctx): State<ApiContext>,
    query: Result<Query<AnalyzeQuery>, QueryRejection>,
    payload: Result<Json<UserHealthData>, JsonRejection>,
) -> Result<Json<Assessment>, ApiError> {
    let Query(query) = query?;
    let Json(data) = payload?;
    data.validate()?;

    let model_client = ctx.model_client().cloned().ok_or(ApiError::ModelUnavailable)?;
    let allow_fallback = query.fallback.unwrap_or(true);
    let model = ctx.config.model.clone();
    let estimator = ctx.estimator;

    let assessment = tokio::task::spawn_blocking(move || {
        let client = match model_client.get() {
            Ok(client) => client,
            Err(e) if allow_fallback && e.is_external() => {
                tracing::warn!(error = %e, "Model client unavailable, using keyword estimate");
                return Ok(estimator.estimate(&HealthInput::from(&data), ThreadRandom));
            }
            Err(e) => return Err(e),
        };

        let analyzer = HealthAnalyzer::new(client, model).with_estimator(estimator);
        if allow_fallback {
            analyzer.analyze_with_fallback(&data, ThreadRandom)
        } else {
            analyzer.analyze_with_model(&data, ThreadRandom)
        }
    })
    .await??;

    tracing::info!(
        source = %assessment.source,
        diabetes = assessment.diabetes_risk,
        hypertension = assessment.hypertension_risk,
        depression = assessment.depression_risk,
        "Assessment served"
    );

    Ok(Json(assessment))
}
