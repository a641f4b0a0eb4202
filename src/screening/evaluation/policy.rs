use super::super::domain::Verdict;
use super::super::rubric::ScoreThresholds;

pub(crate) fn classify(total_score: u8, thresholds: &ScoreThresholds) -> Verdict {
    if total_score >= thresholds.apt_minimum {
        Verdict::Apt
    } else if total_score >= thresholds.review_minimum {
        Verdict::NeedsReview
    } else {
        Verdict::NotApt
    }
}
