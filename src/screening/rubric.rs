use serde::{Deserialize, Serialize};
use tracing::debug;

/// Full set of weights, keyword lists and thresholds used to screen a candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rubric {
    pub experience: ExperienceTiers,
    pub education: EducationCategories,
    pub skill_keywords: Vec<String>,
    pub english_levels: Vec<String>,
    pub thresholds: ScoreThresholds,
}

/// Minimum years of experience for each seniority tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExperienceTiers {
    pub senior: f64,
    pub mid: f64,
    pub junior: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceTier {
    Senior,
    Mid,
    Junior,
}

impl ExperienceTier {
    pub const fn points(self) -> u8 {
        match self {
            ExperienceTier::Senior => 3,
            ExperienceTier::Mid => 2,
            ExperienceTier::Junior => 1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ExperienceTier::Senior => "senior",
            ExperienceTier::Mid => "mid",
            ExperienceTier::Junior => "junior",
        }
    }
}

impl ExperienceTiers {
    /// Highest tier the given years qualify for. Tiers never stack.
    pub fn tier_for(&self, years: f64) -> Option<ExperienceTier> {
        if years >= self.senior {
            Some(ExperienceTier::Senior)
        } else if years >= self.mid {
            Some(ExperienceTier::Mid)
        } else if years >= self.junior {
            Some(ExperienceTier::Junior)
        } else {
            None
        }
    }
}

/// Education levels recognised by the rubric, matched by exact string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationCategories {
    pub advanced: Vec<String>,
    pub basic: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationTier {
    Advanced,
    Basic,
}

impl EducationTier {
    pub const fn points(self) -> u8 {
        match self {
            EducationTier::Advanced => 2,
            EducationTier::Basic => 1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            EducationTier::Advanced => "advanced",
            EducationTier::Basic => "basic",
        }
    }
}

impl EducationCategories {
    /// Advanced takes precedence when a level is listed in both categories.
    pub fn tier_for(&self, level: &str) -> Option<EducationTier> {
        if self.advanced.iter().any(|candidate| candidate == level) {
            Some(EducationTier::Advanced)
        } else if self.basic.iter().any(|candidate| candidate == level) {
            Some(EducationTier::Basic)
        } else {
            None
        }
    }
}

/// Score cut-offs. Anything below `review_minimum` is not apt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreThresholds {
    pub apt_minimum: u8,
    pub review_minimum: u8,
}

/// Reasons a rubric is rejected by [`Rubric::validate`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RubricError {
    #[error("review minimum must be greater than zero")]
    NonPositiveReviewMinimum,
    #[error("apt minimum {apt_minimum} must be greater than review minimum {review_minimum}")]
    InvertedThresholds { apt_minimum: u8, review_minimum: u8 },
    #[error(
        "experience tiers must satisfy senior >= mid >= junior (senior {senior}, mid {mid}, junior {junior})"
    )]
    UnorderedExperienceTiers { senior: f64, mid: f64, junior: f64 },
}

impl Rubric {
    /// Base rubric shared by every role.
    pub fn general() -> Self {
        Self {
            experience: ExperienceTiers {
                senior: 5.0,
                mid: 2.0,
                junior: 1.0,
            },
            education: EducationCategories {
                advanced: owned(&["PhD", "Master"]),
                basic: owned(&["Bachelor"]),
            },
            skill_keywords: owned(&[
                "python",
                "java",
                "c++",
                "javascript",
                "sql",
                "aws",
                "azure",
                "machine learning",
                "data analysis",
                "software development",
                "project management",
                "agile",
                "scrum",
                "git",
                "docker",
                "kubernetes",
                "terraform",
                "react",
                "angular",
                "nodejs",
            ]),
            english_levels: owned(&["B2", "C1", "C2", "NATIVE"]),
            thresholds: ScoreThresholds {
                apt_minimum: 7,
                review_minimum: 4,
            },
        }
    }

    /// Software engineering roles: delivery-focused keywords and stricter cut-offs.
    pub fn software_engineer() -> Self {
        let mut base = Self::general();
        base.skill_keywords = owned(&[
            "python",
            "java",
            "javascript",
            "react",
            "angular",
            "nodejs",
            "sql",
            "git",
            "docker",
            "kubernetes",
            "aws",
            "azure",
            "mongodb",
            "postgresql",
            "rest api",
            "microservices",
            "agile",
            "scrum",
            "ci/cd",
            "testing",
        ]);
        base.thresholds = ScoreThresholds {
            apt_minimum: 8,
            review_minimum: 5,
        };
        base
    }

    pub fn data_scientist() -> Self {
        let mut base = Self::general();
        base.skill_keywords = owned(&[
            "python",
            "r",
            "sql",
            "machine learning",
            "deep learning",
            "tensorflow",
            "pytorch",
            "pandas",
            "numpy",
            "scikit-learn",
            "jupyter",
            "statistics",
            "data analysis",
            "data visualization",
            "aws",
            "azure",
            "spark",
            "hadoop",
        ]);
        base.education = EducationCategories {
            advanced: owned(&["PhD", "Master"]),
            basic: owned(&["Bachelor"]),
        };
        base
    }

    /// Rubric registered for `role`, or the general rubric when the role is unknown.
    pub fn for_role(role: &str) -> Self {
        RoleProfile::resolve(role).rubric()
    }

    pub fn validate(&self) -> Result<(), RubricError> {
        let ScoreThresholds {
            apt_minimum,
            review_minimum,
        } = self.thresholds;

        if review_minimum == 0 {
            return Err(RubricError::NonPositiveReviewMinimum);
        }
        if apt_minimum <= review_minimum {
            return Err(RubricError::InvertedThresholds {
                apt_minimum,
                review_minimum,
            });
        }

        let ExperienceTiers { senior, mid, junior } = self.experience;
        if !(senior >= mid && mid >= junior) {
            return Err(RubricError::UnorderedExperienceTiers { senior, mid, junior });
        }

        Ok(())
    }
}

impl Default for Rubric {
    fn default() -> Self {
        Self::general()
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Closed registry of role specializations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleProfile {
    #[default]
    General,
    SoftwareEngineer,
    DataScientist,
}

impl RoleProfile {
    pub const fn ordered() -> [RoleProfile; 3] {
        [
            RoleProfile::General,
            RoleProfile::SoftwareEngineer,
            RoleProfile::DataScientist,
        ]
    }

    /// Registry key accepted by [`RoleProfile::lookup`].
    pub const fn key(self) -> &'static str {
        match self {
            RoleProfile::General => "general",
            RoleProfile::SoftwareEngineer => "software_engineer",
            RoleProfile::DataScientist => "data_scientist",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RoleProfile::General => "General",
            RoleProfile::SoftwareEngineer => "Software engineer",
            RoleProfile::DataScientist => "Data scientist",
        }
    }

    /// Exact registry lookup. Returns `None` for unregistered roles.
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|role| role.key() == name)
    }

    /// Like [`RoleProfile::lookup`] but unknown roles fall back to [`RoleProfile::General`].
    pub fn resolve(name: &str) -> Self {
        match Self::lookup(name) {
            Some(role) => role,
            None => {
                debug!(role = name, "unregistered role, using general rubric");
                RoleProfile::General
            }
        }
    }

    pub fn rubric(self) -> Rubric {
        match self {
            RoleProfile::General => Rubric::general(),
            RoleProfile::SoftwareEngineer => Rubric::software_engineer(),
            RoleProfile::DataScientist => Rubric::data_scientist(),
        }
    }
}
