//! Candidate aptitude screening.
//!
//! Candidates are scored against a role-specific [`screening::Rubric`] and classified as apt,
//! not apt, or in need of manual review. The scoring core is pure; configuration, telemetry and
//! the HTTP router wrap it for the service binary.

pub mod config;
pub mod error;
pub mod screening;
pub mod telemetry;
