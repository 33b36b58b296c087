use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use serde_json::Value;

use crate::domains::headache::assessment::{
    AssociatedSymptoms, Frequency, HeadacheAssessment, HeadacheSubmission, Onset, PainLocation,
    PainQuality, RiskFactors,
};
use crate::domains::headache::intake::IntakeGuard;
use crate::domains::headache::router::headache_router;
use crate::domains::headache::service::HeadacheTriageService;

/// Neutral baseline: diffuse aching headache in a healthy thirty-year-old.
/// Matches no red flag and no cascade rule, so tests start from the
/// fallback and opt in to the fields that matter.
pub(super) fn submission() -> HeadacheSubmission {
    HeadacheSubmission {
        location: PainLocation::Diffuse,
        quality: PainQuality::Aching,
        severity: 5,
        duration: "6 hours".to_string(),
        onset: Onset::Gradual,
        frequency: Frequency::Episodic,
        symptoms: AssociatedSymptoms::default(),
        aura: false,
        aura_description: None,
        relieving_factors: Vec::new(),
        exacerbating_factors: Vec::new(),
        risk_factors: RiskFactors {
            age: 30,
            ..RiskFactors::default()
        },
    }
}

pub(super) fn migraine_submission() -> HeadacheSubmission {
    let mut submission = submission();
    submission.location = PainLocation::Unilateral;
    submission.quality = PainQuality::Throbbing;
    submission.symptoms.nausea = true;
    submission.symptoms.photophobia = true;
    submission
}

pub(super) fn assessment(submission: HeadacheSubmission) -> HeadacheAssessment {
    IntakeGuard
        .assessment_from_submission(submission)
        .expect("baseline submission validates")
}

pub(super) fn service() -> HeadacheTriageService {
    HeadacheTriageService::new()
}

pub(super) fn router() -> axum::Router {
    headache_router(Arc::new(service()))
}

pub(super) fn triage_request(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/symptom-check/headache")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("request builds")
}

pub(super) async fn read_json_body(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn assert_unprocessable(response: &Response<Body>) {
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
