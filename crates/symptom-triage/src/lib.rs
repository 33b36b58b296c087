//! Deterministic symptom triage for the patient education platform.
//!
//! The crate is organized around a generic [`engine::DecisionEngine`]: an
//! ordered red-flag checklist, a declaration-ordered rule cascade, and a
//! safe fallback, evaluated as a pure function from a validated assessment
//! to a fully populated [`engine::TriageResult`]. Symptom domains live
//! under [`domains`]; each supplies its own assessment type, rule set, and
//! HTTP router against the shared evaluator.

pub mod config;
pub mod domains;
pub mod engine;
pub mod error;
pub mod telemetry;
