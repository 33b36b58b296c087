//! SNOOP4 red-flag checklist for headache.
//!
//! Every check is independent and every hit contributes its rationale to
//! the emergent warning; the screener never early-exits, so a caller sees
//! all reasons at once. Any hit preempts the cascade entirely.

use crate::engine::{RedFlagCheck, TriageResult, Urgency};

use super::assessment::{Frequency, HeadacheAssessment, Onset};

pub(super) fn red_flag_checks() -> Vec<RedFlagCheck<HeadacheAssessment>> {
    vec![
        RedFlagCheck {
            id: "thunderclap-onset",
            rationale: |a| {
                (a.onset == Onset::Thunderclap).then(|| {
                    "thunderclap onset reaching maximal intensity within a minute; hemorrhage must be excluded".to_string()
                })
            },
        },
        RedFlagCheck {
            id: "focal-neurologic-deficit",
            rationale: |a| {
                a.symptoms
                    .focal_neuro_deficit
                    .then(|| "focal neurologic deficit accompanies the headache".to_string())
            },
        },
        RedFlagCheck {
            id: "altered-mental-status",
            rationale: |a| {
                a.symptoms
                    .altered_mental_status
                    .then(|| "altered mental status with headache".to_string())
            },
        },
        RedFlagCheck {
            id: "new-seizure",
            rationale: |a| {
                a.symptoms
                    .seizure
                    .then(|| "seizure activity in the setting of headache".to_string())
            },
        },
        RedFlagCheck {
            id: "fever-with-neck-stiffness",
            rationale: |a| {
                (a.symptoms.fever && a.symptoms.neck_stiffness).then(|| {
                    "fever with neck stiffness raises concern for meningitis".to_string()
                })
            },
        },
        RedFlagCheck {
            id: "new-onset-after-50",
            rationale: |a| {
                (a.risk_factors.age >= 50 && a.frequency == Frequency::Single).then(|| {
                    format!(
                        "first headache of this kind at age {}; new-onset headache after 50 needs workup",
                        a.risk_factors.age
                    )
                })
            },
        },
        RedFlagCheck {
            id: "cancer-history",
            rationale: |a| {
                a.risk_factors
                    .cancer_history
                    .then(|| "history of malignancy; metastatic disease must be considered".to_string())
            },
        },
        RedFlagCheck {
            id: "immunosuppression",
            rationale: |a| {
                a.risk_factors
                    .hiv
                    .then(|| "HIV raises risk of opportunistic CNS infection".to_string())
            },
        },
        RedFlagCheck {
            id: "anticoagulated-head-trauma",
            rationale: |a| {
                (a.risk_factors.anticoagulation && a.risk_factors.recent_head_trauma).then(|| {
                    "recent head trauma while anticoagulated; intracranial bleed must be excluded"
                        .to_string()
                })
            },
        },
        RedFlagCheck {
            id: "raised-pressure-signs",
            rationale: |a| {
                (a.symptoms.visual_changes && a.symptoms.vomiting).then(|| {
                    "visual changes with vomiting suggest raised intracranial pressure".to_string()
                })
            },
        },
        // Pattern change on Valsalva keys on factor tokens only; nocturnal
        // waking stays with the cluster rule so that presentation remains
        // reachable.
        RedFlagCheck {
            id: "valsalva-provocation",
            rationale: |a| {
                (a.exacerbating_factors.mentions("cough")
                    || a.exacerbating_factors.mentions("valsalva")
                    || a.exacerbating_factors.mentions("strain"))
                .then(|| "headache provoked by cough or Valsalva suggests a structural cause".to_string())
            },
        },
        RedFlagCheck {
            id: "systemic-weight-loss",
            rationale: |a| {
                (a.symptoms.weight_loss == Some(true))
                    .then(|| "unintentional weight loss suggests systemic disease".to_string())
            },
        },
    ]
}

/// Emergent template returned whenever any red flag fires. The etiology
/// list leads with the generic secondary-headache placeholder and then the
/// concrete diagnoses an emergent workup is designed to catch.
pub(super) fn emergent_result(warning: String) -> TriageResult {
    TriageResult {
        urgency: Urgency::Emergent,
        likely_etiology: vec![
            "Secondary headache, multiple possible etiologies".to_string(),
            "Subarachnoid hemorrhage".to_string(),
            "CNS infection (meningitis, encephalitis)".to_string(),
            "Intracranial mass lesion".to_string(),
        ],
        recommendations: vec![
            "Immediate emergency department evaluation".to_string(),
            "Do not drive; arrange emergency transport".to_string(),
        ],
        tests_to_consider: vec![
            "Non-contrast head CT".to_string(),
            "Lumbar puncture if CT is non-diagnostic".to_string(),
            "Basic metabolic panel and coagulation studies".to_string(),
        ],
        specialty_consult: vec!["Emergency Medicine".to_string(), "Neurology".to_string()],
        warning,
    }
}
