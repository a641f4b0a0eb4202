use super::super::domain::{CandidateRecord, ScoringCriterion};
use super::super::rubric::Rubric;
use super::ScoreComponent;

const ENGLISH: &str = "English";

pub(crate) fn score_record(record: &CandidateRecord, rubric: &Rubric) -> (Vec<ScoreComponent>, u8) {
    let components = vec![
        experience(record, rubric),
        education(record, rubric),
        technical_skills(record, rubric),
        certifications(record),
        language_proficiency(record, rubric),
    ];
    let total_score = components.iter().map(|component| component.score).sum();

    (components, total_score)
}

fn experience(record: &CandidateRecord, rubric: &Rubric) -> ScoreComponent {
    let years = record.years_of_experience();
    match rubric.experience.tier_for(years) {
        Some(tier) => ScoreComponent {
            criterion: ScoringCriterion::Experience,
            score: tier.points(),
            notes: format!("{years} year(s) of experience meets the {} tier", tier.label()),
        },
        None => ScoreComponent {
            criterion: ScoringCriterion::Experience,
            score: 0,
            notes: format!(
                "{years} year(s) of experience below the junior minimum of {}",
                rubric.experience.junior
            ),
        },
    }
}

fn education(record: &CandidateRecord, rubric: &Rubric) -> ScoreComponent {
    let level = record.education();
    match rubric.education.tier_for(level) {
        Some(tier) => ScoreComponent {
            criterion: ScoringCriterion::Education,
            score: tier.points(),
            notes: format!("{level} counts as {} education", tier.label()),
        },
        None if level.is_empty() => ScoreComponent {
            criterion: ScoringCriterion::Education,
            score: 0,
            notes: "no education level provided".to_string(),
        },
        None => ScoreComponent {
            criterion: ScoringCriterion::Education,
            score: 0,
            notes: format!("{level} is not a recognised education level"),
        },
    }
}

fn technical_skills(record: &CandidateRecord, rubric: &Rubric) -> ScoreComponent {
    let Some(skills) = record.skills() else {
        return ScoreComponent {
            criterion: ScoringCriterion::TechnicalSkills,
            score: 0,
            notes: "skills not provided as a list".to_string(),
        };
    };

    // Keywords match anywhere in the joined text, so "python developer" counts for "python".
    let haystack = skills.join(" ").to_lowercase();
    let matched: Vec<&str> = rubric
        .skill_keywords
        .iter()
        .filter(|keyword| haystack.contains(&keyword.to_lowercase()))
        .map(String::as_str)
        .collect();

    let notes = if matched.is_empty() {
        "no rubric keywords matched".to_string()
    } else {
        format!(
            "{} keyword(s) matched: {}",
            matched.len(),
            matched.join(", ")
        )
    };

    ScoreComponent {
        criterion: ScoringCriterion::TechnicalSkills,
        score: skill_points(matched.len()),
        notes,
    }
}

fn skill_points(matches: usize) -> u8 {
    match matches {
        0 => 0,
        1 => 1,
        2 => 2,
        _ => 3,
    }
}

fn certifications(record: &CandidateRecord) -> ScoreComponent {
    if record.has_certifications() {
        let count = record.certifications().map_or(0, <[_]>::len);
        ScoreComponent {
            criterion: ScoringCriterion::Certifications,
            score: 1,
            notes: format!("{count} certification(s) listed"),
        }
    } else {
        ScoreComponent {
            criterion: ScoringCriterion::Certifications,
            score: 0,
            notes: "no certifications listed".to_string(),
        }
    }
}

fn language_proficiency(record: &CandidateRecord, rubric: &Rubric) -> ScoreComponent {
    if record.languages().is_none() {
        return ScoreComponent {
            criterion: ScoringCriterion::LanguageProficiency,
            score: 0,
            notes: "languages not provided as a mapping".to_string(),
        };
    }

    let level = record
        .language_level(ENGLISH)
        .unwrap_or_default()
        .to_uppercase();

    if rubric.english_levels.iter().any(|accepted| *accepted == level) {
        ScoreComponent {
            criterion: ScoringCriterion::LanguageProficiency,
            score: 1,
            notes: format!("English level {level} accepted"),
        }
    } else if level.is_empty() {
        ScoreComponent {
            criterion: ScoringCriterion::LanguageProficiency,
            score: 0,
            notes: "no English level provided".to_string(),
        }
    } else {
        ScoreComponent {
            criterion: ScoringCriterion::LanguageProficiency,
            score: 0,
            notes: format!("English level {level} below accepted levels"),
        }
    }
}
