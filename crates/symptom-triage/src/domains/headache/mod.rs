//! Headache triage: assessment model, intake validation, SNOOP4 red-flag
//! screener, rule cascade, and the HTTP router.

pub mod assessment;
mod cascade;
pub mod intake;
pub mod router;
mod screener;
pub mod service;

#[cfg(test)]
mod tests;

pub use assessment::{
    AssociatedSymptoms, FactorSet, Frequency, HeadacheAssessment, HeadacheSubmission, Onset,
    PainLocation, PainQuality, RiskFactors,
};
pub use intake::{IntakeGuard, ValidationError};
pub use router::{headache_router, TriageResponse};
pub use service::{headache_engine, HeadacheTriageService};
