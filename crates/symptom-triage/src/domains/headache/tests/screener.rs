use super::common::*;
use crate::domains::headache::assessment::{Frequency, Onset};
use crate::domains::headache::service::headache_engine;
use crate::engine::{TriagePath, Urgency};

#[test]
fn thunderclap_onset_is_a_red_flag() {
    let mut submission = submission();
    submission.onset = Onset::Thunderclap;
    submission.severity = 9;

    let outcome = headache_engine().resolve(&assessment(submission));

    assert!(matches!(outcome.path, TriagePath::RedFlags { .. }));
    assert_eq!(outcome.result.urgency, Urgency::Emergent);
    assert!(outcome.result.warning.contains("thunderclap"));
    assert!(outcome
        .result
        .likely_etiology
        .iter()
        .any(|etiology| etiology == "Subarachnoid hemorrhage"));
}

#[test]
fn every_triggered_rationale_lands_in_the_warning() {
    let mut submission = submission();
    submission.symptoms.fever = true;
    submission.symptoms.neck_stiffness = true;
    submission.risk_factors.cancer_history = true;

    let outcome = headache_engine().resolve(&assessment(submission));

    match &outcome.path {
        TriagePath::RedFlags { triggered } => {
            assert_eq!(
                triggered,
                &vec!["fever-with-neck-stiffness", "cancer-history"]
            );
        }
        other => panic!("expected red flags, got {other:?}"),
    }
    assert!(outcome.result.warning.contains("meningitis"));
    assert!(outcome.result.warning.contains("malignancy"));
    assert!(outcome.result.warning.contains("; "));
    assert_eq!(
        outcome.result.likely_etiology[0],
        "Secondary headache, multiple possible etiologies"
    );
}

#[test]
fn fever_without_neck_stiffness_is_not_a_red_flag() {
    let mut submission = submission();
    submission.symptoms.fever = true;

    let outcome = headache_engine().resolve(&assessment(submission));

    assert!(!matches!(outcome.path, TriagePath::RedFlags { .. }));
}

#[test]
fn first_ever_headache_after_fifty_is_a_red_flag() {
    let mut submission = submission();
    submission.risk_factors.age = 57;
    submission.frequency = Frequency::Single;

    let outcome = headache_engine().resolve(&assessment(submission));

    assert!(matches!(outcome.path, TriagePath::RedFlags { .. }));
    assert!(outcome.result.warning.contains("age 57"));
}

#[test]
fn recurring_headaches_after_fifty_pass_the_screener() {
    let mut submission = submission();
    submission.risk_factors.age = 57;
    submission.frequency = Frequency::Episodic;

    let outcome = headache_engine().resolve(&assessment(submission));

    assert!(!matches!(outcome.path, TriagePath::RedFlags { .. }));
}

#[test]
fn cough_provocation_token_is_matched_case_insensitively() {
    let mut submission = submission();
    submission.exacerbating_factors = vec!["  Coughing  ".to_string()];

    let outcome = headache_engine().resolve(&assessment(submission));

    match &outcome.path {
        TriagePath::RedFlags { triggered } => {
            assert!(triggered.contains(&"valsalva-provocation"));
        }
        other => panic!("expected red flags, got {other:?}"),
    }
}

#[test]
fn anticoagulation_alone_is_not_a_red_flag() {
    let mut submission = submission();
    submission.risk_factors.anticoagulation = true;

    let outcome = headache_engine().resolve(&assessment(submission));

    assert!(!matches!(outcome.path, TriagePath::RedFlags { .. }));
}

#[test]
fn anticoagulated_head_trauma_is_a_red_flag() {
    let mut submission = submission();
    submission.risk_factors.anticoagulation = true;
    submission.risk_factors.recent_head_trauma = true;

    let outcome = headache_engine().resolve(&assessment(submission));

    assert!(matches!(outcome.path, TriagePath::RedFlags { .. }));
    assert!(outcome.result.warning.contains("anticoagulated"));
}

#[test]
fn denied_weight_loss_is_not_a_red_flag() {
    let mut submission = submission();
    submission.symptoms.weight_loss = Some(false);

    let outcome = headache_engine().resolve(&assessment(submission));

    assert!(!matches!(outcome.path, TriagePath::RedFlags { .. }));
}
