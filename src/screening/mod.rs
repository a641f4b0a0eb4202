//! Candidate screening: rubrics, the additive scorer, batch evaluation and verdict statistics.
//!
//! Scoring is pure and deterministic. Records with missing or wrong-typed fields are never
//! rejected; each affected dimension simply contributes zero points.

pub mod batch;
pub mod domain;
pub mod evaluation;
pub mod router;
pub mod rubric;
pub mod service;
pub mod stats;

#[cfg(test)]
mod tests;

pub use batch::{evaluate_all, evaluate_all_with, BatchEvaluation, EvaluatedCandidate, RubricSource};
pub use domain::{CandidateRecord, ScoringCriterion, Verdict};
pub use evaluation::{evaluate, EvaluationEngine, EvaluationOutcome, ScoreComponent};
pub use router::screening_router;
pub use rubric::{
    EducationCategories, EducationTier, ExperienceTier, ExperienceTiers, RoleProfile, Rubric,
    RubricError, ScoreThresholds,
};
pub use service::{EvaluationRequest, RubricView, ScreeningService, StatsRequest};
pub use stats::{
    summarize, summarize_rows, AptitudeStats, MissingColumn, StatsReport, VERDICT_FIELD,
};
