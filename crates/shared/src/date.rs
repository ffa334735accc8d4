use serde::{Deserialize, Serialize};
use time::{Date, Duration};

/// Closed date interval. `from <= to` holds for every range this crate
/// produces; caller-supplied custom splits are taken as given and never
/// validated.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub from: Date,
    pub to: Date,
}

impl DateRange {
    pub fn new(from: Date, to: Date) -> Self {
        Self { from, to }
    }

    /// The full seven day span of a week starting at `start`.
    pub fn week(start: Date) -> Self {
        Self {
            from: start,
            to: start + Duration::days(6),
        }
    }

    /// Number of calendar days covered, inclusive of both endpoints.
    pub fn days(&self) -> i64 {
        (self.to - self.from).whole_days() + 1
    }
}
