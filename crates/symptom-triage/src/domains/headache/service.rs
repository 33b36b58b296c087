use crate::engine::{DecisionEngine, TriageOutcome, TriageResult};

use super::assessment::{HeadacheAssessment, HeadacheSubmission};
use super::cascade;
use super::intake::{IntakeGuard, ValidationError};
use super::screener;

/// Build the headache decision engine: SNOOP4 screener, ordered cascade,
/// fixed fallback.
pub fn headache_engine() -> DecisionEngine<HeadacheAssessment> {
    DecisionEngine::new(
        screener::red_flag_checks(),
        screener::emergent_result,
        cascade::cascade(),
        cascade::fallback_result,
    )
}

/// Facade composing intake validation and the decision engine.
///
/// Holds no per-request state; one instance serves any number of
/// concurrent callers.
pub struct HeadacheTriageService {
    guard: IntakeGuard,
    engine: DecisionEngine<HeadacheAssessment>,
}

impl HeadacheTriageService {
    pub fn new() -> Self {
        Self {
            guard: IntakeGuard,
            engine: headache_engine(),
        }
    }

    /// Validate a raw submission and evaluate it, reporting which path fired.
    pub fn triage(&self, submission: HeadacheSubmission) -> Result<TriageOutcome, ValidationError> {
        let assessment = self.guard.assessment_from_submission(submission)?;
        Ok(self.engine.resolve(&assessment))
    }

    /// Evaluate an already validated assessment.
    pub fn evaluate(&self, assessment: &HeadacheAssessment) -> TriageResult {
        self.engine.evaluate(assessment)
    }

    pub fn engine(&self) -> &DecisionEngine<HeadacheAssessment> {
        &self.engine
    }
}

impl Default for HeadacheTriageService {
    fn default() -> Self {
        Self::new()
    }
}
