mod policy;
mod rules;

use super::domain::{CandidateRecord, ScoringCriterion, Verdict};
use super::rubric::Rubric;
use policy::classify;
use serde::{Deserialize, Serialize};

/// Stateless evaluator that applies a rubric to candidate records.
#[derive(Debug, Clone)]
pub struct EvaluationEngine {
    rubric: Rubric,
}

impl EvaluationEngine {
    pub fn new(rubric: Rubric) -> Self {
        Self { rubric }
    }

    pub fn rubric(&self) -> &Rubric {
        &self.rubric
    }

    pub fn score(&self, record: &CandidateRecord) -> EvaluationOutcome {
        let (components, total_score) = rules::score_record(record, &self.rubric);
        let verdict = classify(total_score, &self.rubric.thresholds);

        EvaluationOutcome {
            verdict,
            total_score,
            components,
        }
    }

    pub fn verdict(&self, record: &CandidateRecord) -> Verdict {
        evaluate(record, &self.rubric)
    }
}

/// Classify a single record. Pure: neither argument is modified.
pub fn evaluate(record: &CandidateRecord, rubric: &Rubric) -> Verdict {
    let (_, total_score) = rules::score_record(record, rubric);
    classify(total_score, &rubric.thresholds)
}

/// Discrete contribution to an evaluation, kept for audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub criterion: ScoringCriterion,
    pub score: u8,
    pub notes: String,
}

/// Evaluation output with the composite score and the per-criterion trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub verdict: Verdict,
    pub total_score: u8,
    pub components: Vec<ScoreComponent>,
}

impl EvaluationOutcome {
    pub fn component(&self, criterion: ScoringCriterion) -> Option<&ScoreComponent> {
        self.components
            .iter()
            .find(|component| component.criterion == criterion)
    }
}
