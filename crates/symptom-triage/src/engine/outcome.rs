use serde::{Deserialize, Serialize};

/// Urgency tier of a triage result.
///
/// Variants are declared least-severe first so the derived `Ord` gives the
/// clinical total order `Emergent > Urgent > NonUrgent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Urgency {
    NonUrgent,
    Urgent,
    Emergent,
}

impl Urgency {
    pub const fn label(self) -> &'static str {
        match self {
            Urgency::NonUrgent => "non-urgent",
            Urgency::Urgent => "urgent",
            Urgency::Emergent => "emergent",
        }
    }
}

/// Fully populated triage recommendation.
///
/// Every evaluation path constructs a complete record: `likely_etiology` is
/// never empty (presentation order is clinical relevance, not alphabetical)
/// and `warning` always carries at least one safety caveat the caller must
/// display verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageResult {
    pub urgency: Urgency,
    pub likely_etiology: Vec<String>,
    pub recommendations: Vec<String>,
    pub tests_to_consider: Vec<String>,
    pub specialty_consult: Vec<String>,
    pub warning: String,
}

impl TriageResult {
    /// True when every invariant a downstream consumer relies on holds.
    pub fn is_fully_populated(&self) -> bool {
        !self.likely_etiology.is_empty() && !self.warning.trim().is_empty()
    }
}

/// Which path of the engine produced a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriagePath {
    /// One or more red-flag checks fired; ids in checklist order.
    RedFlags { triggered: Vec<&'static str> },
    /// The first matching cascade rule.
    Rule { id: &'static str },
    /// Neither the screener nor the cascade matched.
    Fallback,
}

impl TriagePath {
    /// Stable label for logs and API envelopes.
    pub fn label(&self) -> &'static str {
        match self {
            TriagePath::RedFlags { .. } => "red-flag-screener",
            TriagePath::Rule { id } => id,
            TriagePath::Fallback => "fallback",
        }
    }

    pub fn triggered_red_flags(&self) -> &[&'static str] {
        match self {
            TriagePath::RedFlags { triggered } => triggered,
            _ => &[],
        }
    }
}

/// Result plus the audit trail of how it was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriageOutcome {
    pub path: TriagePath,
    pub result: TriageResult,
}
