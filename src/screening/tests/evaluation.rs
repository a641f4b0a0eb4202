use super::common::*;
use crate::screening::domain::{CandidateRecord, ScoringCriterion, Verdict};
use crate::screening::evaluation::{evaluate, EvaluationEngine};
use crate::screening::rubric::Rubric;

fn general_engine() -> EvaluationEngine {
    EvaluationEngine::new(Rubric::general())
}

#[test]
fn senior_candidate_scores_full_marks() {
    let outcome = general_engine().score(&senior_candidate());

    assert_eq!(outcome.total_score, 10);
    assert_eq!(outcome.verdict, Verdict::Apt);
    assert_eq!(outcome.verdict.code(), 1);
    let scores: Vec<u8> = outcome.components.iter().map(|c| c.score).collect();
    assert_eq!(scores, vec![3, 2, 3, 1, 1]);
}

#[test]
fn graduate_candidate_is_not_apt() {
    let outcome = general_engine().score(&graduate_candidate());

    assert_eq!(outcome.total_score, 2);
    assert_eq!(outcome.verdict, Verdict::NotApt);
    assert_eq!(outcome.verdict.code(), 0);
}

#[test]
fn borderline_candidate_goes_to_manual_review() {
    let outcome = general_engine().score(&borderline_candidate());

    assert_eq!(outcome.total_score, 4);
    assert_eq!(outcome.verdict, Verdict::NeedsReview);
    assert_eq!(outcome.verdict.code(), -1);
}

#[test]
fn classification_boundaries_are_inclusive() {
    let rubric = Rubric::general();

    let exactly_apt = candidate(Some(5.0), "Master", &["python", "sql"], &[], None);
    let exactly_review = borderline_candidate();
    let just_below_review = candidate(Some(3.0), "Bachelor", &[], &[], None);

    assert_eq!(general_engine().score(&exactly_apt).total_score, 7);
    assert_eq!(evaluate(&exactly_apt, &rubric), Verdict::Apt);
    assert_eq!(evaluate(&exactly_review, &rubric), Verdict::NeedsReview);
    assert_eq!(general_engine().score(&just_below_review).total_score, 3);
    assert_eq!(evaluate(&just_below_review, &rubric), Verdict::NotApt);
}

#[test]
fn record_without_fields_scores_zero() {
    let outcome = general_engine().score(&CandidateRecord::default());

    assert_eq!(outcome.total_score, 0);
    assert_eq!(outcome.verdict, Verdict::NotApt);
    let skills = outcome
        .component(ScoringCriterion::TechnicalSkills)
        .expect("skills component");
    assert!(skills.notes.contains("not provided"));
}

#[test]
fn skills_match_case_insensitive_substrings() {
    let engine = general_engine();

    let developer = candidate(None, "", &["Python Developer"], &[], None);
    let outcome = engine.score(&developer);
    let skills = outcome
        .component(ScoringCriterion::TechnicalSkills)
        .expect("skills component");
    assert_eq!(skills.score, 1);
    assert!(skills.notes.contains("python"));

    let combined = candidate(None, "", &["Machine Learning with PYTHON"], &[], None);
    let outcome = engine.score(&combined);
    assert_eq!(
        outcome
            .component(ScoringCriterion::TechnicalSkills)
            .map(|component| component.score),
        Some(2)
    );
}

#[test]
fn skill_points_cap_at_three_matches() {
    let many = candidate(
        None,
        "",
        &["python", "java", "sql", "aws", "azure", "git"],
        &[],
        None,
    );
    let outcome = general_engine().score(&many);

    assert_eq!(
        outcome
            .component(ScoringCriterion::TechnicalSkills)
            .map(|component| component.score),
        Some(3)
    );
}

#[test]
fn experience_tiers_do_not_stack() {
    let engine = general_engine();
    let points = |years: f64| {
        engine
            .score(&candidate(Some(years), "", &[], &[], None))
            .component(ScoringCriterion::Experience)
            .map(|component| component.score)
    };

    assert_eq!(points(0.5), Some(0));
    assert_eq!(points(1.0), Some(1));
    assert_eq!(points(2.0), Some(2));
    assert_eq!(points(4.9), Some(2));
    assert_eq!(points(5.0), Some(3));
    assert_eq!(points(30.0), Some(3));
}

#[test]
fn advanced_education_takes_precedence() {
    let mut rubric = Rubric::general();
    rubric.education.basic.push("Master".to_string());

    let engine = EvaluationEngine::new(rubric);
    let outcome = engine.score(&candidate(None, "Master", &[], &[], None));

    assert_eq!(
        outcome
            .component(ScoringCriterion::Education)
            .map(|component| component.score),
        Some(2)
    );
}

#[test]
fn education_requires_exact_match() {
    let outcome = general_engine().score(&candidate(None, "master", &[], &[], None));

    assert_eq!(
        outcome
            .component(ScoringCriterion::Education)
            .map(|component| component.score),
        Some(0)
    );
}

#[test]
fn only_english_level_is_considered() {
    let engine = general_engine();

    let lowercase = candidate(None, "", &[], &[], Some("c2"));
    assert_eq!(engine.score(&lowercase).total_score, 1);

    let below = candidate(None, "", &[], &[], Some("A2"));
    assert_eq!(engine.score(&below).total_score, 0);

    let spanish_only = candidate(None, "", &[], &[], None)
        .with("languages", serde_json::json!({ "Spanish": "NATIVE" }));
    assert_eq!(engine.score(&spanish_only).total_score, 0);

    let numeric_level = candidate(None, "", &[], &[], None)
        .with("languages", serde_json::json!({ "English": 5 }));
    assert_eq!(engine.score(&numeric_level).total_score, 0);
}

#[test]
fn certifications_count_by_presence() {
    let engine = general_engine();

    let none = candidate(None, "", &[], &[], None);
    let one = candidate(None, "", &[], &["PMP"], None);
    let several = candidate(None, "", &[], &["PMP", "CKA", "CSM"], None);

    assert_eq!(engine.score(&none).total_score, 0);
    assert_eq!(engine.score(&one).total_score, 1);
    assert_eq!(engine.score(&several).total_score, 1);
}

#[test]
fn evaluation_is_deterministic_and_pure() {
    let rubric = Rubric::general();
    let record = with_id(borderline_candidate(), "c-1");
    let record_before = record.clone();
    let rubric_before = rubric.clone();

    let first = evaluate(&record, &rubric);
    let second = evaluate(&record, &rubric);

    assert_eq!(first, second);
    assert_eq!(record, record_before);
    assert_eq!(rubric, rubric_before);

    let engine = EvaluationEngine::new(rubric);
    assert_eq!(engine.score(&record), engine.score(&record));
    assert_eq!(engine.verdict(&record), first);
}

#[test]
fn improving_any_input_never_lowers_the_outcome() {
    let engine = general_engine();
    let bases = [
        CandidateRecord::default(),
        graduate_candidate(),
        borderline_candidate(),
        candidate(Some(2.0), "Bachelor", &["git"], &["Scrum Master"], Some("B1")),
    ];

    type Step = fn(&mut CandidateRecord, usize);
    let ladders: [(usize, Step); 5] = [
        (6, |record, step| {
            let years = [None, Some(0.5), Some(1.0), Some(2.0), Some(5.0), Some(12.0)][step];
            record.insert("years_total_experience", years);
        }),
        (4, |record, step| {
            let level = [None, Some("Diploma"), Some("Bachelor"), Some("PhD")][step];
            record.insert("education_level", level);
        }),
        (5, |record, step| {
            let pool = ["python", "sql", "docker", "react"];
            record.insert("skills", pool[..step].to_vec());
        }),
        (2, |record, step| {
            let certifications: &[&str] = if step == 0 { &[] } else { &["CKA"] };
            record.insert("certifications", certifications.to_vec());
        }),
        (2, |record, step| {
            let level = if step == 0 { "A1" } else { "C2" };
            record.insert("languages", serde_json::json!({ "English": level }));
        }),
    ];

    for base in &bases {
        for (steps, apply) in ladders {
            let mut previous: Option<(u8, u8)> = None;
            for step in 0..steps {
                let mut record = base.clone();
                apply(&mut record, step);
                let outcome = engine.score(&record);
                let current = (outcome.total_score, outcome.verdict.rank());

                if let Some((score, rank)) = previous {
                    assert!(current.0 >= score, "score decreased for {record:?}");
                    assert!(current.1 >= rank, "verdict rank decreased for {record:?}");
                }
                previous = Some(current);
            }
        }
    }
}

#[test]
fn total_never_exceeds_ten() {
    let outcome = general_engine().score(&candidate(
        Some(40.0),
        "PhD",
        &["python java sql aws azure docker kubernetes terraform react angular nodejs git"],
        &["a", "b", "c"],
        Some("native"),
    ));

    assert_eq!(outcome.total_score, 10);
}
