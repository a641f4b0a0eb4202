use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::domain::Verdict;

/// Default name of the verdict column on annotated records.
pub const VERDICT_FIELD: &str = "apto";

/// Verdict distribution over a collection of evaluated candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AptitudeStats {
    pub total: usize,
    pub apt: usize,
    pub not_apt: usize,
    pub needs_review: usize,
    pub apt_pct: f64,
    pub not_apt_pct: f64,
    pub needs_review_pct: f64,
}

impl AptitudeStats {
    pub fn count(&self, verdict: Verdict) -> usize {
        match verdict {
            Verdict::Apt => self.apt,
            Verdict::NotApt => self.not_apt,
            Verdict::NeedsReview => self.needs_review,
        }
    }

    pub fn percentage(&self, verdict: Verdict) -> f64 {
        match verdict {
            Verdict::Apt => self.apt_pct,
            Verdict::NotApt => self.not_apt_pct,
            Verdict::NeedsReview => self.needs_review_pct,
        }
    }
}

/// Returned when the requested verdict column is not present on any row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("column '{column}' not found")]
pub struct MissingColumn {
    pub column: String,
}

/// Boundary shape of a stats query: the summary itself or `{"error": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatsReport {
    Summary(AptitudeStats),
    Error { error: String },
}

impl From<Result<AptitudeStats, MissingColumn>> for StatsReport {
    fn from(value: Result<AptitudeStats, MissingColumn>) -> Self {
        match value {
            Ok(stats) => StatsReport::Summary(stats),
            Err(missing) => StatsReport::Error {
                error: missing.to_string(),
            },
        }
    }
}

#[derive(Default)]
struct Tally {
    total: usize,
    apt: usize,
    not_apt: usize,
    needs_review: usize,
}

impl Tally {
    fn record(&mut self, verdict: Option<Verdict>) {
        self.total += 1;
        match verdict {
            Some(Verdict::Apt) => self.apt += 1,
            Some(Verdict::NotApt) => self.not_apt += 1,
            Some(Verdict::NeedsReview) => self.needs_review += 1,
            None => {}
        }
    }

    fn finish(self) -> AptitudeStats {
        let pct = |count: usize| {
            if self.total > 0 {
                count as f64 / self.total as f64 * 100.0
            } else {
                0.0
            }
        };

        AptitudeStats {
            total: self.total,
            apt: self.apt,
            not_apt: self.not_apt,
            needs_review: self.needs_review,
            apt_pct: pct(self.apt),
            not_apt_pct: pct(self.not_apt),
            needs_review_pct: pct(self.needs_review),
        }
    }
}

pub fn summarize<I>(verdicts: I) -> AptitudeStats
where
    I: IntoIterator<Item = Verdict>,
{
    let mut tally = Tally::default();
    for verdict in verdicts {
        tally.record(Some(verdict));
    }
    tally.finish()
}

/// Summarize the verdict column of loosely typed rows.
///
/// Rows carrying a value outside `{1, 0, -1}` count toward the total only. The column counts as
/// present when at least one row carries it, so a non-empty collection where no row has
/// `column` is [`MissingColumn`].
///
/// Rows have no table schema, which means an empty collection cannot show whether the column
/// exists. It is summarized as all zeros rather than reported missing, unlike a column-typed
/// table where an absent column is an error even with no rows.
pub fn summarize_rows(rows: &[Value], column: &str) -> Result<AptitudeStats, MissingColumn> {
    let mut tally = Tally::default();
    let mut seen = false;

    for row in rows {
        let cell = row.get(column);
        seen |= cell.is_some();
        tally.record(cell.and_then(verdict_from_cell));
    }

    if !rows.is_empty() && !seen {
        return Err(MissingColumn {
            column: column.to_string(),
        });
    }

    Ok(tally.finish())
}

fn verdict_from_cell(cell: &Value) -> Option<Verdict> {
    let code = cell.as_i64().or_else(|| {
        cell.as_f64()
            .filter(|value| value.fract() == 0.0)
            .map(|value| value as i64)
    })?;
    Verdict::from_code(code)
}
