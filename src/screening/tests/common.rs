use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use serde_json::{json, Value};

use crate::screening::domain::CandidateRecord;

pub(super) fn candidate(
    years: Option<f64>,
    education: &str,
    skills: &[&str],
    certifications: &[&str],
    english: Option<&str>,
) -> CandidateRecord {
    let languages = match english {
        Some(level) => json!({ "English": level }),
        None => json!({}),
    };

    CandidateRecord::new()
        .with("years_total_experience", years)
        .with("education_level", education)
        .with("skills", skills.to_vec())
        .with("certifications", certifications.to_vec())
        .with("languages", languages)
}

/// Scores 3 + 2 + 3 + 1 + 1 = 10 on the general rubric.
pub(super) fn senior_candidate() -> CandidateRecord {
    candidate(
        Some(6.0),
        "Master",
        &["python", "aws", "docker"],
        &["AWS Certified"],
        Some("C1"),
    )
}

/// Scores 1 + 1 = 2 on the general rubric.
pub(super) fn graduate_candidate() -> CandidateRecord {
    candidate(Some(1.0), "Bachelor", &[], &[], None)
}

/// Scores 2 + 1 + 1 = 4 on the general rubric.
pub(super) fn borderline_candidate() -> CandidateRecord {
    candidate(Some(3.0), "Bachelor", &["sql"], &[], None)
}

pub(super) fn with_id(record: CandidateRecord, id: &str) -> CandidateRecord {
    record.with("candidate_id", id)
}

pub(super) fn json_post(uri: &str, payload: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload).expect("payload encodes")))
        .expect("request builds")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
