use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;

use crate::engine::{TriageOutcome, TriageResult};

use super::assessment::HeadacheSubmission;
use super::service::HeadacheTriageService;

/// Router exposing the stateless triage endpoint for the headache domain.
pub fn headache_router(service: Arc<HeadacheTriageService>) -> Router {
    Router::new()
        .route(
            "/api/v1/symptom-check/headache",
            post(headache_triage_handler),
        )
        .with_state(service)
}

/// Response envelope: the triage result plus how it was reached.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageResponse {
    pub evaluated_at: DateTime<Utc>,
    /// "red-flag-screener", a cascade rule id, or "fallback".
    pub resolved_by: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub triggered_red_flags: Vec<&'static str>,
    pub result: TriageResult,
}

impl TriageResponse {
    fn from_outcome(outcome: TriageOutcome) -> Self {
        Self {
            evaluated_at: Utc::now(),
            resolved_by: outcome.path.label(),
            triggered_red_flags: outcome.path.triggered_red_flags().to_vec(),
            result: outcome.result,
        }
    }
}

pub(crate) async fn headache_triage_handler(
    State(service): State<Arc<HeadacheTriageService>>,
    axum::Json(submission): axum::Json<HeadacheSubmission>,
) -> Response {
    match service.triage(submission) {
        Ok(outcome) => {
            let response = TriageResponse::from_outcome(outcome);
            (StatusCode::OK, axum::Json(response)).into_response()
        }
        // Validation is the only non-2xx path; "no matching rule" resolved
        // to the fallback long before we got here.
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
