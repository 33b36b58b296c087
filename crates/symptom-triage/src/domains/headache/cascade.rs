//! The headache rule cascade.
//!
//! Declaration order is the only tie-break: the first rule whose predicate
//! holds produces the result and nothing later runs. The arteritis rule
//! sits deliberately ahead of the migraine group because it targets an
//! irreversible-harm condition in an age band that otherwise presents with
//! migraine-like symptoms.

use crate::engine::{TriageResult, TriageRule, Urgency};

use super::assessment::{Frequency, HeadacheAssessment, Onset, PainLocation, PainQuality};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

pub(super) fn cascade() -> Vec<TriageRule<HeadacheAssessment>> {
    vec![
        TriageRule {
            id: "thunderclap-pattern",
            name: "Thunderclap / explosive onset",
            predicate: |a| {
                a.onset == Onset::Thunderclap || (a.onset == Onset::Sudden && a.severity >= 8)
            },
            result: || TriageResult {
                urgency: Urgency::Emergent,
                likely_etiology: strings(&[
                    "Subarachnoid hemorrhage",
                    "Reversible cerebral vasoconstriction syndrome",
                    "Arterial dissection",
                ]),
                recommendations: strings(&[
                    "Immediate emergency department evaluation",
                    "Do not drive; arrange emergency transport",
                ]),
                tests_to_consider: strings(&[
                    "Non-contrast head CT",
                    "Lumbar puncture if CT is negative",
                    "CT angiography of head and neck",
                ]),
                specialty_consult: strings(&["Emergency Medicine", "Neurology"]),
                warning: "Sudden maximal-intensity headache is hemorrhage until proven otherwise; \
                          do not wait for the pain to settle."
                    .to_string(),
            },
        },
        TriageRule {
            id: "giant-cell-arteritis",
            name: "Age-related arteritis pattern",
            predicate: |a| {
                a.risk_factors.age >= 50
                    && (a.symptoms.scalp_tenderness
                        || a.symptoms.jaw_claudication
                        || a.location == PainLocation::Temporal)
            },
            result: || TriageResult {
                urgency: Urgency::Emergent,
                likely_etiology: strings(&["Giant cell arteritis", "Polymyalgia rheumatica"]),
                recommendations: strings(&[
                    "Same-day clinical assessment",
                    "Start high-dose corticosteroids as soon as arteritis is suspected",
                ]),
                tests_to_consider: strings(&[
                    "ESR and CRP",
                    "Temporal artery ultrasound or biopsy",
                ]),
                specialty_consult: strings(&["Rheumatology", "Ophthalmology"]),
                warning: "Suspected giant cell arteritis risks sudden irreversible vision loss; \
                          do not delay steroids while awaiting biopsy."
                    .to_string(),
            },
        },
        TriageRule {
            id: "migraine-with-aura",
            name: "Migraine with aura",
            predicate: |a| a.aura && a.location == PainLocation::Unilateral,
            result: || TriageResult {
                urgency: Urgency::NonUrgent,
                likely_etiology: strings(&["Migraine with aura"]),
                recommendations: strings(&[
                    "Rest in a dark, quiet room",
                    "Take abortive therapy early in the attack",
                    "Keep a headache diary to identify triggers",
                ]),
                tests_to_consider: strings(&[
                    "None routinely; MRI only for atypical or prolonged aura",
                ]),
                specialty_consult: strings(&["Neurology if aura is prolonged or atypical"]),
                warning: "Seek urgent care if an aura lasts over an hour or leaves any lasting \
                          deficit; combined oral contraceptives plus smoking raise stroke risk \
                          in migraine with aura."
                    .to_string(),
            },
        },
        TriageRule {
            id: "migraine-without-aura",
            name: "Migraine without aura",
            predicate: |a| {
                a.location == PainLocation::Unilateral
                    && a.quality == PainQuality::Throbbing
                    && (a.symptoms.nausea || a.symptoms.photophobia || a.symptoms.phonophobia)
            },
            result: || TriageResult {
                urgency: Urgency::NonUrgent,
                likely_etiology: strings(&["Migraine without aura"]),
                recommendations: strings(&[
                    "Rest in a dark, quiet room",
                    "NSAID or triptan early in the attack",
                    "Limit abortive use to fewer than 10 days per month",
                ]),
                tests_to_consider: strings(&["None routinely for a typical recurring pattern"]),
                specialty_consult: strings(&["Neurology if attacks are frequent or disabling"]),
                warning: "Return promptly if the pattern changes, attacks become daily, or any \
                          neurologic symptom appears."
                    .to_string(),
            },
        },
        TriageRule {
            id: "cluster-headache",
            name: "Cluster pattern",
            predicate: |a| {
                a.location == PainLocation::Periorbital
                    && a.quality == PainQuality::Stabbing
                    && a.has_autonomic_signs()
                    && (a.short_duration() || a.onset == Onset::WakingFromSleep)
            },
            result: || TriageResult {
                urgency: Urgency::NonUrgent,
                likely_etiology: strings(&[
                    "Cluster headache",
                    "Other trigeminal autonomic cephalalgia",
                ]),
                recommendations: strings(&[
                    "High-flow oxygen at attack onset",
                    "Subcutaneous or intranasal triptan for acute attacks",
                    "Avoid alcohol for the duration of the cluster bout",
                ]),
                tests_to_consider: strings(&[
                    "MRI brain at first presentation to exclude structural mimics",
                ]),
                specialty_consult: strings(&["Neurology"]),
                warning: "Attacks this severe deserve specialist confirmation; seek urgent care \
                          if attacks change character or a deficit appears."
                    .to_string(),
            },
        },
        TriageRule {
            id: "tension-type",
            name: "Tension-type pattern",
            predicate: |a| {
                a.location == PainLocation::Bilateral
                    && a.quality == PainQuality::Pressure
                    && !a.symptoms.nausea
                    && !a.symptoms.photophobia
                    && a.severity <= 6
            },
            result: || TriageResult {
                urgency: Urgency::NonUrgent,
                likely_etiology: strings(&["Tension-type headache"]),
                recommendations: strings(&[
                    "Simple analgesia used sparingly",
                    "Address sleep, hydration, and posture",
                    "Relaxation or stress-management techniques",
                ]),
                tests_to_consider: strings(&["None for the typical pattern"]),
                specialty_consult: strings(&["Primary care follow-up if episodes escalate"]),
                warning: "If headaches become near-daily or stop responding to simple measures, \
                          re-present for review rather than escalating analgesic use."
                    .to_string(),
            },
        },
        TriageRule {
            id: "sinusitis-pattern",
            name: "Sinusitis pattern",
            predicate: |a| {
                a.symptoms.nasal_congestion
                    && a.quality == PainQuality::Pressure
                    && (a.exacerbating_factors.mentions("bending")
                        || a.exacerbating_factors.mentions("leaning forward")
                        || a.symptoms.fever)
            },
            result: || TriageResult {
                urgency: Urgency::NonUrgent,
                likely_etiology: strings(&["Acute rhinosinusitis"]),
                recommendations: strings(&[
                    "Saline irrigation and intranasal decongestant (short course)",
                    "Analgesia as needed",
                    "Re-present if symptoms persist beyond ten days or worsen after improving",
                ]),
                tests_to_consider: strings(&["None initially; imaging only for complications"]),
                specialty_consult: strings(&["ENT for recurrent or refractory disease"]),
                warning: "Periorbital swelling, vision change, or confusion alongside sinus \
                          symptoms is an emergency."
                    .to_string(),
            },
        },
        TriageRule {
            id: "intracranial-hypotension",
            name: "Postural low-pressure pattern",
            predicate: |a| {
                (a.relieving_factors.mentions("supine") || a.relieving_factors.mentions("lying"))
                    && (a.exacerbating_factors.mentions("upright")
                        || a.exacerbating_factors.mentions("standing")
                        || a.exacerbating_factors.mentions("sitting up"))
            },
            result: || TriageResult {
                urgency: Urgency::Urgent,
                likely_etiology: strings(&[
                    "Spontaneous intracranial hypotension",
                    "CSF leak",
                ]),
                recommendations: strings(&[
                    "Prompt clinical evaluation",
                    "Bed rest, fluids, and caffeine while awaiting assessment",
                ]),
                tests_to_consider: strings(&[
                    "MRI brain with contrast",
                    "MRI spine for leak localization",
                ]),
                specialty_consult: strings(&["Neurology"]),
                warning: "A strictly positional headache, worse upright and relieved flat, \
                          suggests a CSF leak and needs imaging rather than reassurance."
                    .to_string(),
            },
        },
        TriageRule {
            id: "medication-overuse",
            name: "Medication-overuse pattern",
            predicate: |a| {
                a.frequency == Frequency::ChronicDaily
                    && (a.relieving_factors.mentions("analgesic")
                        || a.relieving_factors.mentions("painkiller")
                        || a.relieving_factors.mentions("medication"))
            },
            result: || TriageResult {
                urgency: Urgency::NonUrgent,
                likely_etiology: strings(&["Medication-overuse headache"]),
                recommendations: strings(&[
                    "Structured withdrawal of the overused analgesic",
                    "Preventive therapy while withdrawing",
                    "Headache diary to track rebound pattern",
                ]),
                tests_to_consider: strings(&["None; the history makes the diagnosis"]),
                specialty_consult: strings(&["Primary care; Neurology if withdrawal fails"]),
                warning: "Daily analgesic use perpetuates daily headache; expect a temporary \
                          worsening during withdrawal before improvement."
                    .to_string(),
            },
        },
        TriageRule {
            id: "cervicogenic",
            name: "Cervicogenic pattern",
            predicate: |a| {
                a.location == PainLocation::Occipital && a.exacerbating_factors.mentions("neck")
            },
            result: || TriageResult {
                urgency: Urgency::NonUrgent,
                likely_etiology: strings(&["Cervicogenic headache"]),
                recommendations: strings(&[
                    "Physiotherapy targeting the upper cervical spine",
                    "Posture and workstation review",
                ]),
                tests_to_consider: strings(&[
                    "Cervical spine imaging only for trauma or neurologic signs",
                ]),
                specialty_consult: strings(&["Physiotherapy", "Pain medicine if refractory"]),
                warning: "Occipital pain with fever, stiff neck, or any deficit is a different \
                          problem; seek urgent review if those appear."
                    .to_string(),
            },
        },
        TriageRule {
            id: "post-traumatic",
            name: "Post-traumatic pattern",
            predicate: |a| a.risk_factors.recent_head_trauma,
            result: || TriageResult {
                urgency: Urgency::Urgent,
                likely_etiology: strings(&[
                    "Post-traumatic headache",
                    "Post-concussive syndrome",
                ]),
                recommendations: strings(&[
                    "Clinical evaluation within 24 hours",
                    "Cognitive and physical rest pending review",
                    "Do not take anticoagulants or antiplatelets until cleared",
                ]),
                tests_to_consider: strings(&[
                    "Head CT per clinical head-injury decision rules",
                ]),
                specialty_consult: strings(&["Emergency Medicine if symptoms progress"]),
                warning: "Worsening headache, repeated vomiting, drowsiness, or confusion after \
                          head injury requires immediate emergency care."
                    .to_string(),
            },
        },
        // Pregnancy and postpartum remain declared after the migraine group,
        // matching the documented cascade; a pregnant patient with a classic
        // migraine presentation resolves to the migraine rule first. Flagged
        // for clinical review, not reordered here.
        TriageRule {
            id: "pregnancy-headache",
            name: "Pregnancy pattern",
            predicate: |a| a.risk_factors.pregnancy,
            result: || TriageResult {
                urgency: Urgency::Urgent,
                likely_etiology: strings(&[
                    "Preeclampsia",
                    "Cerebral venous sinus thrombosis",
                    "Primary headache of pregnancy",
                ]),
                recommendations: strings(&[
                    "Same-day obstetric review with blood pressure measurement",
                    "Urinalysis for proteinuria",
                ]),
                tests_to_consider: strings(&[
                    "Blood pressure and urine protein",
                    "MR venography if thrombosis is suspected",
                ]),
                specialty_consult: strings(&["Obstetrics"]),
                warning: "New or changed headache in pregnancy needs same-day blood pressure \
                          assessment; visual symptoms or epigastric pain make this an emergency."
                    .to_string(),
            },
        },
        TriageRule {
            id: "postpartum-headache",
            name: "Postpartum pattern",
            predicate: |a| a.risk_factors.postpartum,
            result: || TriageResult {
                urgency: Urgency::Urgent,
                likely_etiology: strings(&[
                    "Cerebral venous sinus thrombosis",
                    "Postpartum preeclampsia",
                    "Post-dural-puncture headache",
                ]),
                recommendations: strings(&[
                    "Same-day clinical review with blood pressure measurement",
                    "Ask about neuraxial anesthesia during delivery",
                ]),
                tests_to_consider: strings(&[
                    "Blood pressure and urine protein",
                    "MR venography if thrombosis is suspected",
                ]),
                specialty_consult: strings(&["Obstetrics", "Neurology"]),
                warning: "Postpartum headache can be preeclampsia or venous thrombosis well \
                          after delivery; do not attribute it to fatigue without review."
                    .to_string(),
            },
        },
    ]
}

/// Fixed safe default when neither the screener nor any rule matches.
pub(super) fn fallback_result() -> TriageResult {
    TriageResult {
        urgency: Urgency::Urgent,
        likely_etiology: strings(&["Undifferentiated Headache"]),
        recommendations: strings(&[
            "Clinical evaluation within 24-48 hours",
            "Track severity, timing, and any new symptoms until seen",
        ]),
        tests_to_consider: strings(&["Directed by the evaluating clinician"]),
        specialty_consult: strings(&["Primary care"]),
        warning: "This pattern does not match a recognized benign syndrome; arrange prompt \
                  clinical evaluation and return immediately if weakness, confusion, fever, or \
                  a sudden severe headache develops."
            .to_string(),
    }
}
