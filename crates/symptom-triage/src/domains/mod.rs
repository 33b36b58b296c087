//! Symptom domains. Each domain pairs an assessment model with a red-flag
//! checklist and rule cascade registered against the shared engine.

pub mod headache;
