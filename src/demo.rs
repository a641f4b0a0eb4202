use candidate_aptitude::error::AppError;
use candidate_aptitude::screening::{
    summarize, CandidateRecord, EvaluationEngine, RoleProfile, Verdict,
};
use clap::Args;
use serde_json::json;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Role rubric to apply. Unknown roles use the general rubric.
    #[arg(long)]
    pub(crate) role: Option<String>,
    /// Print the per-criterion breakdown for every candidate.
    #[arg(long)]
    pub(crate) breakdown: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { role, breakdown } = args;
    let role = role.unwrap_or_else(|| RoleProfile::General.key().to_string());
    let resolved = RoleProfile::resolve(&role);
    let engine = EvaluationEngine::new(resolved.rubric());
    let thresholds = engine.rubric().thresholds;

    println!("Candidate screening demo");
    if RoleProfile::lookup(&role).is_some() {
        println!("Rubric: {}", resolved.label());
    } else {
        println!("Rubric: {} (no rubric registered for '{role}')", resolved.label());
    }
    println!(
        "Thresholds: apt >= {}, manual review >= {}",
        thresholds.apt_minimum, thresholds.review_minimum
    );

    let mut verdicts = Vec::new();
    println!("\nCandidates");
    for (name, record) in sample_candidates() {
        let outcome = engine.score(&record);
        verdicts.push(outcome.verdict);
        println!(
            "- {name}: score {} -> {} ({})",
            outcome.total_score,
            verdict_label(outcome.verdict),
            outcome.verdict.code()
        );

        if breakdown {
            for component in &outcome.components {
                println!(
                    "    {}: {} ({})",
                    component.criterion.label(),
                    component.score,
                    component.notes
                );
            }
        }
    }

    let stats = summarize(verdicts);
    println!("\nSummary ({} candidates)", stats.total);
    for verdict in [Verdict::Apt, Verdict::NeedsReview, Verdict::NotApt] {
        println!(
            "- {}: {} ({:.1}%)",
            verdict_label(verdict),
            stats.count(verdict),
            stats.percentage(verdict)
        );
    }

    Ok(())
}

fn verdict_label(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Apt => "Apt",
        Verdict::NotApt => "Not apt",
        Verdict::NeedsReview => "Manual review",
    }
}

fn sample_candidates() -> Vec<(&'static str, CandidateRecord)> {
    vec![
        (
            "Senior cloud engineer",
            CandidateRecord::from(json!({
                "years_total_experience": 6,
                "education_level": "Master",
                "skills": ["python", "aws", "docker"],
                "certifications": ["AWS Certified"],
                "languages": {"English": "C1"}
            })),
        ),
        (
            "Analyst career changer",
            CandidateRecord::from(json!({
                "years_total_experience": 3,
                "education_level": "Bachelor",
                "skills": ["sql"],
                "certifications": [],
                "languages": {}
            })),
        ),
        (
            "Graduate",
            CandidateRecord::from(json!({
                "years_total_experience": 1,
                "education_level": "Bachelor",
                "skills": [],
                "certifications": [],
                "languages": {}
            })),
        ),
        (
            "Research scientist",
            CandidateRecord::from(json!({
                "years_total_experience": 4,
                "education_level": "PhD",
                "skills": ["PyTorch", "Statistics", "Python"],
                "languages": {"English": "native"}
            })),
        ),
        ("Incomplete application", CandidateRecord::default()),
    ]
}
