use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const YEARS_FIELD: &str = "years_total_experience";
pub const EDUCATION_FIELD: &str = "education_level";
pub const SKILLS_FIELD: &str = "skills";
pub const CERTIFICATIONS_FIELD: &str = "certifications";
pub const LANGUAGES_FIELD: &str = "languages";

/// Semi-structured candidate row as it arrives from the upstream table.
///
/// The record owns the row exactly as it was received. Scored fields are read through lenient
/// accessors: a value of the wrong JSON type reads as absent, so a malformed field only ever
/// costs the candidate that dimension's points. Nothing is normalized, which means serializing
/// a record writes back the object it was built from. A row that is not a JSON object becomes
/// an empty record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Map<String, Value>")]
pub struct CandidateRecord {
    fields: Map<String, Value>,
}

impl CandidateRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`CandidateRecord::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn years_total_experience(&self) -> Option<f64> {
        self.get(YEARS_FIELD).and_then(Value::as_f64)
    }

    /// Years of experience, with a missing value counted as zero.
    pub fn years_of_experience(&self) -> f64 {
        self.years_total_experience().unwrap_or(0.0)
    }

    pub fn education_level(&self) -> Option<&str> {
        self.get(EDUCATION_FIELD).and_then(Value::as_str)
    }

    pub fn education(&self) -> &str {
        self.education_level().unwrap_or("")
    }

    /// Skill entries that are strings. `None` when the field is missing or not a list.
    pub fn skills(&self) -> Option<Vec<&str>> {
        self.get(SKILLS_FIELD)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
    }

    /// Certification entries of any type.
    pub fn certifications(&self) -> Option<&[Value]> {
        self.get(CERTIFICATIONS_FIELD)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }

    pub fn has_certifications(&self) -> bool {
        self.certifications()
            .is_some_and(|certifications| !certifications.is_empty())
    }

    pub fn languages(&self) -> Option<&Map<String, Value>> {
        self.get(LANGUAGES_FIELD).and_then(Value::as_object)
    }

    /// Level recorded for `language`. Non-string levels read as absent.
    pub fn language_level(&self, language: &str) -> Option<&str> {
        self.languages()?.get(language)?.as_str()
    }
}

impl From<Map<String, Value>> for CandidateRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl From<Value> for CandidateRecord {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }
}

impl From<CandidateRecord> for Map<String, Value> {
    fn from(record: CandidateRecord) -> Self {
        record.fields
    }
}

/// Tri-state screening classification.
///
/// On the record boundary the verdict is written as an integer: `1` apt, `0` not apt and `-1`
/// manual review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Verdict {
    Apt,
    NotApt,
    NeedsReview,
}

impl Verdict {
    pub const fn code(self) -> i8 {
        match self {
            Verdict::Apt => 1,
            Verdict::NotApt => 0,
            Verdict::NeedsReview => -1,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Verdict::Apt),
            0 => Some(Verdict::NotApt),
            -1 => Some(Verdict::NeedsReview),
            _ => None,
        }
    }

    /// Ordering used when comparing outcomes: not apt < manual review < apt.
    pub const fn rank(self) -> u8 {
        match self {
            Verdict::NotApt => 0,
            Verdict::NeedsReview => 1,
            Verdict::Apt => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Verdict::Apt => "apt",
            Verdict::NotApt => "not_apt",
            Verdict::NeedsReview => "needs_review",
        }
    }
}

impl From<Verdict> for i8 {
    fn from(value: Verdict) -> Self {
        value.code()
    }
}

impl TryFrom<i8> for Verdict {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Verdict::from_code(i64::from(value))
            .ok_or_else(|| format!("unknown verdict code {value}; expected 1, 0 or -1"))
    }
}

/// Dimensions contributing to a candidate's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringCriterion {
    Experience,
    Education,
    TechnicalSkills,
    Certifications,
    LanguageProficiency,
}

impl ScoringCriterion {
    pub const fn ordered() -> [ScoringCriterion; 5] {
        [
            ScoringCriterion::Experience,
            ScoringCriterion::Education,
            ScoringCriterion::TechnicalSkills,
            ScoringCriterion::Certifications,
            ScoringCriterion::LanguageProficiency,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            ScoringCriterion::Experience => "Experience",
            ScoringCriterion::Education => "Education",
            ScoringCriterion::TechnicalSkills => "Technical skills",
            ScoringCriterion::Certifications => "Certifications",
            ScoringCriterion::LanguageProficiency => "Language proficiency",
        }
    }
}
