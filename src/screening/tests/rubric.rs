use crate::screening::rubric::{
    EducationTier, ExperienceTier, RoleProfile, Rubric, RubricError, ScoreThresholds,
};

#[test]
fn registered_rubrics_are_valid() {
    for role in RoleProfile::ordered() {
        let rubric = role.rubric();
        rubric.validate().expect("built-in rubric validates");
        assert!(rubric.thresholds.apt_minimum > rubric.thresholds.review_minimum);
        assert!(rubric.thresholds.review_minimum > 0);
    }
}

#[test]
fn general_rubric_carries_default_thresholds() {
    let rubric = Rubric::general();

    assert_eq!(
        rubric.thresholds,
        ScoreThresholds {
            apt_minimum: 7,
            review_minimum: 4,
        }
    );
    assert_eq!(rubric.skill_keywords.len(), 20);
    assert!(rubric.english_levels.iter().any(|level| level == "NATIVE"));
    assert_eq!(Rubric::default(), rubric);
}

#[test]
fn specializations_leave_the_base_untouched() {
    let base_before = Rubric::general();

    let engineer = Rubric::software_engineer();
    let scientist = Rubric::data_scientist();

    assert_eq!(Rubric::general(), base_before);
    assert_eq!(engineer.thresholds.apt_minimum, 8);
    assert_eq!(engineer.thresholds.review_minimum, 5);
    assert!(engineer.skill_keywords.iter().any(|skill| skill == "ci/cd"));
    assert_eq!(engineer.education, base_before.education);
    assert_eq!(engineer.experience, base_before.experience);

    assert_eq!(scientist.thresholds, base_before.thresholds);
    assert!(scientist.skill_keywords.iter().any(|skill| skill == "pytorch"));
    assert!(!scientist.skill_keywords.iter().any(|skill| skill == "c++"));
    assert_eq!(scientist.english_levels, base_before.english_levels);
}

#[test]
fn overriding_a_specialization_does_not_leak() {
    let mut engineer = Rubric::software_engineer();
    engineer.thresholds.apt_minimum = 9;
    engineer.skill_keywords.clear();

    assert_eq!(Rubric::software_engineer().thresholds.apt_minimum, 8);
    assert!(!Rubric::software_engineer().skill_keywords.is_empty());
    assert_eq!(Rubric::general().thresholds.apt_minimum, 7);
}

#[test]
fn lookup_is_exact_and_resolve_falls_back() {
    assert_eq!(
        RoleProfile::lookup("software_engineer"),
        Some(RoleProfile::SoftwareEngineer)
    );
    assert_eq!(
        RoleProfile::lookup("data_scientist"),
        Some(RoleProfile::DataScientist)
    );
    assert_eq!(RoleProfile::lookup("general"), Some(RoleProfile::General));
    assert_eq!(RoleProfile::lookup("Software_Engineer"), None);
    assert_eq!(RoleProfile::lookup("x"), None);

    assert_eq!(RoleProfile::resolve("x"), RoleProfile::General);
    assert_eq!(RoleProfile::resolve(""), RoleProfile::General);
    assert_eq!(Rubric::for_role("x"), Rubric::general());
    assert_eq!(Rubric::for_role("data_scientist"), Rubric::data_scientist());
}

#[test]
fn role_keys_round_trip_through_lookup() {
    for role in RoleProfile::ordered() {
        assert_eq!(RoleProfile::lookup(role.key()), Some(role));
    }
}

#[test]
fn tiers_resolve_highest_match() {
    let rubric = Rubric::general();

    assert_eq!(rubric.experience.tier_for(7.0), Some(ExperienceTier::Senior));
    assert_eq!(rubric.experience.tier_for(2.0), Some(ExperienceTier::Mid));
    assert_eq!(rubric.experience.tier_for(1.5), Some(ExperienceTier::Junior));
    assert_eq!(rubric.experience.tier_for(0.0), None);
    assert_eq!(rubric.experience.tier_for(-3.0), None);

    assert_eq!(rubric.education.tier_for("PhD"), Some(EducationTier::Advanced));
    assert_eq!(rubric.education.tier_for("Bachelor"), Some(EducationTier::Basic));
    assert_eq!(rubric.education.tier_for(""), None);
}

#[test]
fn validate_rejects_inverted_thresholds() {
    let mut rubric = Rubric::general();
    rubric.thresholds = ScoreThresholds {
        apt_minimum: 4,
        review_minimum: 4,
    };

    assert_eq!(
        rubric.validate(),
        Err(RubricError::InvertedThresholds {
            apt_minimum: 4,
            review_minimum: 4,
        })
    );
}

#[test]
fn validate_rejects_zero_review_minimum() {
    let mut rubric = Rubric::general();
    rubric.thresholds.review_minimum = 0;

    assert_eq!(
        rubric.validate(),
        Err(RubricError::NonPositiveReviewMinimum)
    );
}

#[test]
fn validate_rejects_unordered_experience_tiers() {
    let mut rubric = Rubric::general();
    rubric.experience.mid = 6.0;

    let error = rubric.validate().expect_err("mid above senior");
    assert!(matches!(error, RubricError::UnorderedExperienceTiers { .. }));
    assert!(error.to_string().contains("senior >= mid >= junior"));
}
