use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::batch::BatchEvaluation;
use super::domain::CandidateRecord;
use super::rubric::{RoleProfile, Rubric, RubricError};
use super::stats::{summarize_rows, AptitudeStats, MissingColumn, VERDICT_FIELD};

/// Facade used by the HTTP router and CLI.
#[derive(Debug, Clone)]
pub struct ScreeningService {
    default_role: String,
}

/// Batch evaluation request. `rubric` overrides `role` when both are present.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EvaluationRequest {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub rubric: Option<Rubric>,
    /// Entries that are not JSON objects are scored as empty records instead of failing the batch.
    #[serde(default)]
    pub candidates: Vec<CandidateRecord>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatsRequest {
    #[serde(default)]
    pub rows: Vec<Value>,
    #[serde(default = "default_column")]
    pub column: String,
}

fn default_column() -> String {
    VERDICT_FIELD.to_string()
}

/// Rubric resolved for a role name, flagging whether the general fallback was used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RubricView {
    pub requested: String,
    pub role: RoleProfile,
    pub fallback: bool,
    pub rubric: Rubric,
}

impl ScreeningService {
    pub fn new(default_role: impl Into<String>) -> Self {
        Self {
            default_role: default_role.into(),
        }
    }

    pub fn default_role(&self) -> &str {
        &self.default_role
    }

    pub fn evaluate(&self, request: EvaluationRequest) -> Result<BatchEvaluation, RubricError> {
        let EvaluationRequest {
            role,
            rubric,
            candidates,
        } = request;

        match rubric {
            Some(rubric) => {
                rubric.validate()?;
                Ok(BatchEvaluation::with_rubric(&candidates, &rubric))
            }
            None => {
                let role = role.as_deref().unwrap_or(&self.default_role);
                Ok(BatchEvaluation::for_role(&candidates, role))
            }
        }
    }

    pub fn rubric(&self, role: Option<&str>) -> RubricView {
        let requested = role.unwrap_or(&self.default_role);
        let resolved = RoleProfile::resolve(requested);

        RubricView {
            requested: requested.to_string(),
            role: resolved,
            fallback: RoleProfile::lookup(requested).is_none(),
            rubric: resolved.rubric(),
        }
    }

    pub fn stats(&self, request: &StatsRequest) -> Result<AptitudeStats, MissingColumn> {
        summarize_rows(&request.rows, &request.column)
    }
}

impl Default for ScreeningService {
    fn default() -> Self {
        Self::new(RoleProfile::General.key())
    }
}
