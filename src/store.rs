// src/store.rs
// In-memory shapes of the scrape: one record per match, grouped per day and
// per season, flattened into a single table at the end.

use crate::error::{Result, ScrapeError};

/// One match, every field kept as the raw text read from the page.
/// Field order is the output column order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchRecord {
    pub season_id: String,
    pub day_label: String,
    pub date: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: String,
    pub away_score: String,
    pub home_bonus: String,
    pub away_bonus: String,
}

impl MatchRecord {
    pub const FIELD_COUNT: usize = 9;

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.season_id.clone(),
            self.day_label.clone(),
            self.date.clone(),
            self.home_team.clone(),
            self.away_team.clone(),
            self.home_score.clone(),
            self.away_score.clone(),
            self.home_bonus.clone(),
            self.away_bonus.clone(),
        ]
    }
}

/// Where a day sits: season id plus the day label shown on the calendar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayContext {
    pub season_id: String,
    pub day_label: String,
}

/// All matches of one round, in page order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Day {
    pub season_id: String,
    pub label: String,
    pub rows: Vec<MatchRecord>,
}

/// One calendar entry: label and its page path relative to the site root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayLink {
    pub label: String,
    pub path: String,
}

/// What a season page tells us before any day is fetched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Season {
    /// `None` when the calendar holds no day entry at all.
    pub season_id: Option<String>,
    pub days: Vec<DayLink>,
}

/// All matches of one season, days concatenated in calendar order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeasonResults {
    pub season_id: Option<String>,
    pub records: Vec<MatchRecord>,
}

/// Flat header + rows table handed to the exporter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ResultTable {
    /// Build the table once from the accumulated records.
    /// The header must be as wide as a record.
    pub fn from_records(headers: &[String], records: &[MatchRecord]) -> Result<Self> {
        if headers.len() != MatchRecord::FIELD_COUNT {
            return Err(ScrapeError::Config(format!(
                "{} column names for {} record fields",
                headers.len(),
                MatchRecord::FIELD_COUNT
            )));
        }
        Ok(Self {
            headers: headers.to_vec(),
            rows: records.iter().map(MatchRecord::to_row).collect(),
        })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// The first `n` rows, for a quick look in the logs.
    pub fn head(&self, n: usize) -> &[Vec<String>] {
        &self.rows[..n.min(self.rows.len())]
    }
}
