//! Persisted statistics record
//!
//! Serialized as a flat JSON object mapping `"1"`..`"6"` and `"fail"` to
//! counters. Missing keys load as zero; keys this version does not know are
//! carried through untouched so older and newer builds can share a file.

use crate::game::MAX_ATTEMPTS;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

const FAIL_KEY: &str = "fail";

/// Smallest bar width so that empty rows stay visible
pub const MIN_BAR_PERCENT: u8 = 6;

type RawRecord = BTreeMap<String, Value>;

/// Win counts per attempt number plus a failure count
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRecord", into = "RawRecord")]
pub struct StatsRecord {
    wins: [u64; MAX_ATTEMPTS],
    failures: u64,
    extra: RawRecord,
}

/// One bar of the distribution chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistogramRow {
    /// "1".."6", or "X" for failures
    pub label: String,
    pub count: u64,
    /// Proportional width, floored at `MIN_BAR_PERCENT`
    pub width_percent: u8,
    pub is_failure: bool,
}

impl StatsRecord {
    /// Wins that took `attempts` guesses (1-6); 0 for anything else
    #[must_use]
    pub fn wins(&self, attempts: u8) -> u64 {
        Self::slot(attempts).map_or(0, |i| self.wins[i])
    }

    #[must_use]
    pub const fn failures(&self) -> u64 {
        self.failures
    }

    fn slot(attempts: u8) -> Option<usize> {
        let idx = usize::from(attempts).checked_sub(1)?;
        (idx < MAX_ATTEMPTS).then_some(idx)
    }

    /// Increment the counter for `attempts`; returns `false` if out of range
    pub fn add_win(&mut self, attempts: u8) -> bool {
        match Self::slot(attempts) {
            Some(i) => {
                self.wins[i] += 1;
                true
            }
            None => false,
        }
    }

    pub fn add_failure(&mut self) {
        self.failures += 1;
    }

    #[must_use]
    pub fn games_won(&self) -> u64 {
        self.wins.iter().sum()
    }

    #[must_use]
    pub fn games_played(&self) -> u64 {
        self.games_won() + self.failures
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        match self.games_played() {
            0 => 0.0,
            played => self.games_won() as f64 / played as f64 * 100.0,
        }
    }

    /// Sum of all counters, never less than 1
    #[must_use]
    pub fn total(&self) -> u64 {
        self.games_played().max(1)
    }

    /// Bars for attempts 1-6 followed by the failure bar
    #[must_use]
    pub fn histogram(&self) -> Vec<HistogramRow> {
        let total = self.total() as f64;
        let width = |count: u64| {
            let pct = (count as f64 / total * 100.0).round() as u8;
            pct.max(MIN_BAR_PERCENT)
        };

        self.wins
            .iter()
            .enumerate()
            .map(|(i, &count)| HistogramRow {
                label: (i + 1).to_string(),
                count,
                width_percent: width(count),
                is_failure: false,
            })
            .chain(std::iter::once(HistogramRow {
                label: "X".to_string(),
                count: self.failures,
                width_percent: width(self.failures),
                is_failure: true,
            }))
            .collect()
    }

    /// Keys that were loaded but are not counters of this record
    #[must_use]
    pub fn extra_keys(&self) -> impl Iterator<Item = &str> {
        self.extra.keys().map(String::as_str)
    }
}

/// Read a counter, accepting whole floats such as `2.0` written by other clients
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn counter_value(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64)
            .map(|f| f as u64)
    })
}

impl From<RawRecord> for StatsRecord {
    fn from(mut raw: RawRecord) -> Self {
        let mut take = |key: &str| raw.remove(key).as_ref().and_then(counter_value).unwrap_or(0);

        let mut wins = [0; MAX_ATTEMPTS];
        for (i, slot) in wins.iter_mut().enumerate() {
            *slot = take(&(i + 1).to_string());
        }
        let failures = take(FAIL_KEY);

        Self {
            wins,
            failures,
            extra: raw,
        }
    }
}

impl From<StatsRecord> for RawRecord {
    fn from(record: StatsRecord) -> Self {
        let mut raw = record.extra;
        for (i, &count) in record.wins.iter().enumerate() {
            raw.insert((i + 1).to_string(), Value::from(count));
        }
        raw.insert(FAIL_KEY.to_string(), Value::from(record.failures));
        raw
    }
}
