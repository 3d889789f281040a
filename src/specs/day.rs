// src/specs/day.rs
use scraper::Html;

use super::match_row::{self, MatchSelectors};
use crate::core::html::selector;
use crate::error::{Result, ScrapeError};
use crate::store::{DayContext, MatchRecord};

const RESULTS_TABLE: &str = "div.day-results-table";
const MATCH_ROW: &str = "tr.info-line.after";

/// Parse a day page into its match records, in document order.
///
/// The first `div.day-results-table` is the results container; every
/// `tr.info-line.after` inside it is one match. A row that cannot be read
/// fails the whole day.
pub fn parse_day(html: &str, ctx: &DayContext) -> Result<Vec<MatchRecord>> {
    let doc = Html::parse_document(html);
    let container = doc
        .select(&selector(RESULTS_TABLE)?)
        .next()
        .ok_or_else(|| {
            ScrapeError::Parse(format!(
                "season {} day {}: no {RESULTS_TABLE} on page",
                ctx.season_id, ctx.day_label
            ))
        })?;

    let rows = selector(MATCH_ROW)?;
    let sel = MatchSelectors::new()?;
    container
        .select(&rows)
        .map(|row| match_row::extract(row, ctx, &sel))
        .collect()
}
