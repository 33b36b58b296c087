use super::assessment::{FactorSet, HeadacheAssessment, HeadacheSubmission};

/// Validation errors raised at the boundary, before the engine is invoked.
///
/// Closed-enumeration violations and missing required fields are rejected
/// earlier still, by serde; the guard covers what the type system cannot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("severity must be between 1 and 10, found {0}")]
    SeverityOutOfRange(u8),
    #[error("age {0} is outside the supported range (1-120)")]
    ImplausibleAge(u8),
    #[error("duration must not be empty")]
    EmptyDuration,
}

const MAX_AGE: u8 = 120;

/// Guard producing validated [`HeadacheAssessment`] values.
///
/// Normalization happens here once so every rule predicate downstream can
/// match factor tokens and duration text case-insensitively without its own
/// string handling.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    pub fn assessment_from_submission(
        &self,
        submission: HeadacheSubmission,
    ) -> Result<HeadacheAssessment, ValidationError> {
        if submission.severity < 1 || submission.severity > 10 {
            return Err(ValidationError::SeverityOutOfRange(submission.severity));
        }

        let age = submission.risk_factors.age;
        if age == 0 || age > MAX_AGE {
            return Err(ValidationError::ImplausibleAge(age));
        }

        let duration = submission.duration.trim().to_lowercase();
        if duration.is_empty() {
            return Err(ValidationError::EmptyDuration);
        }

        Ok(HeadacheAssessment {
            location: submission.location,
            quality: submission.quality,
            severity: submission.severity,
            duration,
            onset: submission.onset,
            frequency: submission.frequency,
            symptoms: submission.symptoms,
            aura: submission.aura,
            aura_description: submission.aura_description,
            relieving_factors: FactorSet::from_tokens(&submission.relieving_factors),
            exacerbating_factors: FactorSet::from_tokens(&submission.exacerbating_factors),
            risk_factors: submission.risk_factors,
        })
    }
}
