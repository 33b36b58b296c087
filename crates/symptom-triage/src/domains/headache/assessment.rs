use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Where the pain sits. Closed vocabulary; free text is mapped to one of
/// these by the intake form before it reaches this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PainLocation {
    Unilateral,
    Bilateral,
    Periorbital,
    Temporal,
    Occipital,
    Diffuse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PainQuality {
    Throbbing,
    Stabbing,
    Pressure,
    Explosive,
    Burning,
    Aching,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Onset {
    Gradual,
    Sudden,
    Thunderclap,
    WakingFromSleep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Frequency {
    Single,
    Episodic,
    ChronicDaily,
}

/// Named boolean symptom flags reported alongside the pain itself.
/// Absent flags deserialize to `false`; `weight_loss` is a true tri-state
/// (unknown / denied / reported).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociatedSymptoms {
    #[serde(default)]
    pub nausea: bool,
    #[serde(default)]
    pub vomiting: bool,
    #[serde(default)]
    pub photophobia: bool,
    #[serde(default)]
    pub phonophobia: bool,
    #[serde(default)]
    pub osmophobia: bool,
    #[serde(default)]
    pub visual_changes: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_changes_description: Option<String>,
    #[serde(default)]
    pub neck_stiffness: bool,
    #[serde(default)]
    pub fever: bool,
    #[serde(default)]
    pub focal_neuro_deficit: bool,
    #[serde(default)]
    pub seizure: bool,
    #[serde(default)]
    pub altered_mental_status: bool,
    #[serde(default)]
    pub lacrimation: bool,
    #[serde(default)]
    pub nasal_congestion: bool,
    #[serde(default)]
    pub ptosis: bool,
    #[serde(default)]
    pub miosis: bool,
    #[serde(default)]
    pub eyelid_edema: bool,
    #[serde(default)]
    pub scalp_tenderness: bool,
    #[serde(default)]
    pub jaw_claudication: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_loss: Option<bool>,
}

/// Demographic and history fields the rules read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactors {
    pub age: u8,
    #[serde(default)]
    pub hypertension: bool,
    #[serde(default)]
    pub anticoagulation: bool,
    #[serde(default)]
    pub cancer_history: bool,
    #[serde(default)]
    pub hiv: bool,
    #[serde(default)]
    pub recent_head_trauma: bool,
    #[serde(default)]
    pub pregnancy: bool,
    #[serde(default)]
    pub postpartum: bool,
    #[serde(default)]
    pub family_history_migraine: bool,
    #[serde(default)]
    pub family_history_aneurysm: bool,
    #[serde(default)]
    pub oral_contraceptives: bool,
    #[serde(default)]
    pub smoking: bool,
    #[serde(default)]
    pub cocaine_use: bool,
}

/// Open set of normalized factor tokens (e.g. "supine", "coughing").
///
/// The intake layer canonicalizes raw text; the engine only ever tests
/// membership by substring, so new tokens never require a rule change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorSet(BTreeSet<String>);

impl FactorSet {
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalized = tokens
            .into_iter()
            .map(|token| token.as_ref().trim().to_lowercase())
            .filter(|token| !token.is_empty())
            .collect();
        Self(normalized)
    }

    /// True when any stored token contains `needle` (already lowercase).
    pub fn mentions(&self, needle: &str) -> bool {
        self.0.iter().any(|token| token.contains(needle))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Raw patient-reported intake record, exactly as posted by the intake form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadacheSubmission {
    pub location: PainLocation,
    pub quality: PainQuality,
    /// 1-10 pain scale; range-checked at intake.
    pub severity: u8,
    /// Free-form categorical duration ("6 hours", "30-90 min", "days").
    pub duration: String,
    pub onset: Onset,
    pub frequency: Frequency,
    #[serde(default)]
    pub symptoms: AssociatedSymptoms,
    #[serde(default)]
    pub aura: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aura_description: Option<String>,
    #[serde(default)]
    pub relieving_factors: Vec<String>,
    #[serde(default)]
    pub exacerbating_factors: Vec<String>,
    pub risk_factors: RiskFactors,
}

/// Validated, normalized assessment the engine consumes.
///
/// Only the intake guard constructs this, so every predicate can assume the
/// severity range and token normalization hold. Immutable once built; the
/// engine never writes to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadacheAssessment {
    pub location: PainLocation,
    pub quality: PainQuality,
    pub severity: u8,
    pub duration: String,
    pub onset: Onset,
    pub frequency: Frequency,
    pub symptoms: AssociatedSymptoms,
    pub aura: bool,
    pub aura_description: Option<String>,
    pub relieving_factors: FactorSet,
    pub exacerbating_factors: FactorSet,
    pub risk_factors: RiskFactors,
}

impl HeadacheAssessment {
    /// Any cranial autonomic sign of the cluster/TAC family.
    pub fn has_autonomic_signs(&self) -> bool {
        self.symptoms.lacrimation
            || self.symptoms.nasal_congestion
            || self.symptoms.ptosis
            || self.symptoms.miosis
            || self.symptoms.eyelid_edema
    }

    /// Attack duration reads as short (minutes rather than hours).
    pub fn short_duration(&self) -> bool {
        self.duration.contains("min") || self.duration.contains("short")
    }
}
