// src/specs/season.rs
use scraper::Html;

use crate::core::html::{attr, selector};
use crate::error::{Result, ScrapeError};
use crate::store::{DayLink, Season};

const CALENDAR_BLOCK: &str =
    "section.block.block-lnr-custom.block-lnr-custom-calendar-results-filter";
const FILTER_ENTRY: &str = "span.field-content";

/// Entries whose link contains this are the whole-season view, not a day.
const ALL_DAYS_MARKER: &str = "all";
/// `data-title` is `"<competition> <season> - <day>"`.
const TITLE_SEP: &str = " - ";
/// Day labels read like `1ère journée` / `12ème journée`; the label is what
/// precedes the accented ordinal suffix.
const ORDINAL_MARK: char = 'è';

/// Read the calendar filter block of a season page.
///
/// Every `span.field-content` link that is not an "all days" link becomes a
/// day entry, in page order. The season id comes from the first such entry.
/// A label seen twice keeps its first position and takes the later path.
pub fn parse_calendar(html: &str) -> Result<Season> {
    let doc = Html::parse_document(html);
    let block = doc
        .select(&selector(CALENDAR_BLOCK)?)
        .next()
        .ok_or_else(|| ScrapeError::Parse(format!("no {CALENDAR_BLOCK} on season page")))?;

    let link = selector("a")?;
    let mut season = Season::default();

    for entry in block.select(&selector(FILTER_ENTRY)?) {
        let a = entry
            .select(&link)
            .next()
            .ok_or_else(|| ScrapeError::Parse(s!("calendar entry without a link")))?;
        let href = attr(a, "href")
            .ok_or_else(|| ScrapeError::Parse(s!("calendar link without href")))?;
        if href.contains(ALL_DAYS_MARKER) {
            continue;
        }
        let title = attr(a, "data-title")
            .ok_or_else(|| ScrapeError::Parse(format!("calendar link {href} without data-title")))?;

        let label = day_label(title);
        match season.days.iter_mut().find(|d| d.label == label) {
            Some(existing) => existing.path = s!(href),
            None => season.days.push(DayLink { label, path: s!(href) }),
        }

        if season.season_id.is_none() {
            season.season_id = season_id(title);
        }
    }

    Ok(season)
}

/// `"Top 14 2019-2020 - 1ère journée"` → `"1"`.
pub fn day_label(title: &str) -> String {
    let last = title.rsplit(TITLE_SEP).next().unwrap_or(title);
    let head = last.split(ORDINAL_MARK).next().unwrap_or(last);
    s!(head.trim())
}

/// `"Top 14 2019-2020 - 1ère journée"` → `"2019-2020"`.
pub fn season_id(title: &str) -> Option<String> {
    title
        .split(TITLE_SEP)
        .next()
        .and_then(|first| first.split_whitespace().last())
        .map(String::from)
}
