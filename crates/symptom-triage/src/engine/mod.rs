//! Generic first-match-wins decision engine.
//!
//! A domain registers three things against its assessment type: a red-flag
//! checklist with absolute precedence, a declaration-ordered rule cascade,
//! and a fallback template. Evaluation is a pure synchronous function with
//! no shared state, so one engine value can serve any number of concurrent
//! callers.

mod outcome;

pub use outcome::{TriageOutcome, TriagePath, TriageResult, Urgency};

/// Safety-critical check evaluated unconditionally before the cascade.
///
/// The producer returns `Some(rationale)` when the check fires; rationales
/// from every firing check are joined into the emergent warning so the
/// caller sees all reasons, not just the first.
pub struct RedFlagCheck<A> {
    pub id: &'static str,
    pub rationale: fn(&A) -> Option<String>,
}

/// One named cascade rule: a pure predicate paired with a result template.
pub struct TriageRule<A> {
    pub id: &'static str,
    pub name: &'static str,
    pub predicate: fn(&A) -> bool,
    pub result: fn() -> TriageResult,
}

/// Stateless evaluator over a fixed checklist, cascade, and fallback.
pub struct DecisionEngine<A> {
    red_flags: Vec<RedFlagCheck<A>>,
    emergent: fn(String) -> TriageResult,
    cascade: Vec<TriageRule<A>>,
    fallback: fn() -> TriageResult,
}

impl<A> DecisionEngine<A> {
    pub fn new(
        red_flags: Vec<RedFlagCheck<A>>,
        emergent: fn(String) -> TriageResult,
        cascade: Vec<TriageRule<A>>,
        fallback: fn() -> TriageResult,
    ) -> Self {
        Self {
            red_flags,
            emergent,
            cascade,
            fallback,
        }
    }

    /// Evaluate an assessment to a triage result. Total over well-formed input.
    pub fn evaluate(&self, assessment: &A) -> TriageResult {
        self.resolve(assessment).result
    }

    /// Evaluate and report which path fired, for audits and API envelopes.
    ///
    /// The screener runs to completion before the cascade is consulted, and
    /// cascade rules are tried strictly in declaration order. The rationale
    /// accumulator is local to this call and discarded with it.
    pub fn resolve(&self, assessment: &A) -> TriageOutcome {
        let mut triggered = Vec::new();
        let mut rationales = Vec::new();
        for check in &self.red_flags {
            if let Some(rationale) = (check.rationale)(assessment) {
                triggered.push(check.id);
                rationales.push(rationale);
            }
        }

        if !rationales.is_empty() {
            let result = (self.emergent)(rationales.join("; "));
            return assemble(TriagePath::RedFlags { triggered }, result);
        }

        for rule in &self.cascade {
            if (rule.predicate)(assessment) {
                return assemble(TriagePath::Rule { id: rule.id }, (rule.result)());
            }
        }

        assemble(TriagePath::Fallback, (self.fallback)())
    }

    pub fn rule_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.cascade.iter().map(|rule| rule.id)
    }
}

/// Single seam every produced result passes through.
///
/// Cross-cutting concerns (audit logging today, outbound schema checks
/// tomorrow) attach here without touching rule logic.
fn assemble(path: TriagePath, result: TriageResult) -> TriageOutcome {
    debug_assert!(result.is_fully_populated(), "triage result missing fields");
    tracing::debug!(
        resolved_by = path.label(),
        urgency = result.urgency.label(),
        "triage outcome assembled"
    );
    TriageOutcome { path, result }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Toy {
        score: u8,
        alarming: bool,
    }

    fn emergent(warning: String) -> TriageResult {
        TriageResult {
            urgency: Urgency::Emergent,
            likely_etiology: vec!["alarming toy".to_string()],
            recommendations: vec!["escalate".to_string()],
            tests_to_consider: Vec::new(),
            specialty_consult: Vec::new(),
            warning,
        }
    }

    fn benign() -> TriageResult {
        TriageResult {
            urgency: Urgency::NonUrgent,
            likely_etiology: vec!["benign toy".to_string()],
            recommendations: Vec::new(),
            tests_to_consider: Vec::new(),
            specialty_consult: Vec::new(),
            warning: "still a toy".to_string(),
        }
    }

    fn fallback() -> TriageResult {
        TriageResult {
            urgency: Urgency::Urgent,
            likely_etiology: vec!["unknown toy".to_string()],
            recommendations: Vec::new(),
            tests_to_consider: Vec::new(),
            specialty_consult: Vec::new(),
            warning: "needs a look".to_string(),
        }
    }

    fn engine() -> DecisionEngine<Toy> {
        DecisionEngine::new(
            vec![
                RedFlagCheck {
                    id: "alarming",
                    rationale: |toy| toy.alarming.then(|| "toy is alarming".to_string()),
                },
                RedFlagCheck {
                    id: "max-score",
                    rationale: |toy| (toy.score == 10).then(|| "score maxed out".to_string()),
                },
            ],
            emergent,
            vec![
                TriageRule {
                    id: "high-score",
                    name: "High score",
                    predicate: |toy| toy.score >= 5,
                    result: benign,
                },
                TriageRule {
                    id: "any-score",
                    name: "Any score",
                    predicate: |toy| toy.score >= 1,
                    result: fallback,
                },
            ],
            fallback,
        )
    }

    #[test]
    fn all_red_flag_rationales_are_joined() {
        let outcome = engine().resolve(&Toy {
            score: 10,
            alarming: true,
        });
        assert_eq!(
            outcome.path.triggered_red_flags(),
            ["alarming", "max-score"]
        );
        assert_eq!(outcome.result.warning, "toy is alarming; score maxed out");
        assert_eq!(outcome.result.urgency, Urgency::Emergent);
    }

    #[test]
    fn earlier_rule_wins_when_both_predicates_hold() {
        let outcome = engine().resolve(&Toy {
            score: 7,
            alarming: false,
        });
        assert_eq!(outcome.path, TriagePath::Rule { id: "high-score" });
        assert_eq!(outcome.result.urgency, Urgency::NonUrgent);
    }

    #[test]
    fn fallback_fires_when_nothing_matches() {
        let outcome = engine().resolve(&Toy {
            score: 0,
            alarming: false,
        });
        assert_eq!(outcome.path, TriagePath::Fallback);
        assert_eq!(outcome.result.urgency, Urgency::Urgent);
    }

    #[test]
    fn urgency_orders_by_severity() {
        assert!(Urgency::Emergent > Urgency::Urgent);
        assert!(Urgency::Urgent > Urgency::NonUrgent);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let engine = engine();
        let toy = Toy {
            score: 3,
            alarming: false,
        };
        assert_eq!(engine.evaluate(&toy), engine.evaluate(&toy));
    }
}
