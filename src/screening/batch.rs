use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::domain::{CandidateRecord, Verdict};
use super::evaluation::evaluate;
use super::rubric::{RoleProfile, Rubric};
use super::stats::{summarize, AptitudeStats, VERDICT_FIELD};

/// Input record annotated with its verdict under the `apto` column.
///
/// Serializes as the received row with `apto` added; every other column is written back as it
/// arrived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluatedCandidate {
    #[serde(flatten)]
    pub record: CandidateRecord,
    pub apto: Verdict,
}

/// Score every record with the rubric registered for `role`.
///
/// The rubric is resolved once; unknown roles use the general rubric. Output order matches
/// input order and `records` is left untouched.
pub fn evaluate_all(records: &[CandidateRecord], role: &str) -> Vec<EvaluatedCandidate> {
    let rubric = RoleProfile::resolve(role).rubric();
    evaluate_all_with(records, &rubric)
}

pub fn evaluate_all_with(records: &[CandidateRecord], rubric: &Rubric) -> Vec<EvaluatedCandidate> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let apto = evaluate(record, rubric);
            debug!(index, verdict = apto.label(), "candidate evaluated");

            let mut record = record.clone();
            // A stale verdict column would otherwise serialize next to the new one.
            record.remove(VERDICT_FIELD);
            EvaluatedCandidate { record, apto }
        })
        .collect()
}

/// Where the rubric for a batch came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RubricSource {
    Role {
        requested: String,
        resolved: RoleProfile,
        fallback: bool,
    },
    Custom,
}

/// Annotated batch plus its verdict distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEvaluation {
    pub rubric_source: RubricSource,
    pub candidates: Vec<EvaluatedCandidate>,
    pub stats: AptitudeStats,
}

impl BatchEvaluation {
    pub fn for_role(records: &[CandidateRecord], role: &str) -> Self {
        let resolved = RoleProfile::resolve(role);
        let source = RubricSource::Role {
            requested: role.to_string(),
            resolved,
            fallback: RoleProfile::lookup(role).is_none(),
        };
        Self::build(records, &resolved.rubric(), source)
    }

    /// Caller-supplied rubrics are expected to be validated already.
    pub fn with_rubric(records: &[CandidateRecord], rubric: &Rubric) -> Self {
        Self::build(records, rubric, RubricSource::Custom)
    }

    fn build(records: &[CandidateRecord], rubric: &Rubric, rubric_source: RubricSource) -> Self {
        let candidates = evaluate_all_with(records, rubric);
        let stats = summarize(candidates.iter().map(|candidate| candidate.apto));

        info!(
            total = stats.total,
            apt = stats.apt,
            needs_review = stats.needs_review,
            not_apt = stats.not_apt,
            "batch evaluation complete"
        );

        Self {
            rubric_source,
            candidates,
            stats,
        }
    }
}
