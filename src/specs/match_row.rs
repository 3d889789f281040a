// src/specs/match_row.rs
use scraper::{ElementRef, Selector};

use crate::core::html::{nth_text, selector, text_of};
use crate::error::{Result, ScrapeError};
use crate::store::{DayContext, MatchRecord};

/// Compiled selectors for the cells of one results row.
pub struct MatchSelectors {
    full: Selector,
    score: Selector,
    bonus_home: Selector,
    bonus_away: Selector,
}

impl MatchSelectors {
    pub fn new() -> Result<Self> {
        Ok(Self {
            full: selector("span.format-full")?,
            score: selector("td.cell-score")?,
            bonus_home: selector("td.cell-bonus-a")?,
            bonus_away: selector("td.cell-bonus-b")?,
        })
    }
}

/// Read one `tr.info-line` row.
///
/// The three `span.format-full` elements are, in order: date, home team,
/// away team. The score cell holds `"<home> - <away>"`. Bonus cells are kept
/// as-is apart from surrounding newlines.
pub fn extract(row: ElementRef<'_>, ctx: &DayContext, sel: &MatchSelectors) -> Result<MatchRecord> {
    let full = |n: usize, what: &str| {
        nth_text(row, &sel.full, n)
            .ok_or_else(|| missing(ctx, &format!("{what} (span.format-full #{})", n + 1)))
    };
    let date = full(0, "date")?;
    let home_team = full(1, "home team")?;
    let away_team = full(2, "away team")?;

    let score = row
        .select(&sel.score)
        .next()
        .map(text_of)
        .ok_or_else(|| missing(ctx, "score cell"))?;
    let (home_score, away_score) = split_score(&score)
        .map_err(|e| ScrapeError::Extraction(format!("{}: {e}", where_(ctx))))?;

    let home_bonus = bonus(row, &sel.bonus_home).ok_or_else(|| missing(ctx, "home bonus cell"))?;
    let away_bonus = bonus(row, &sel.bonus_away).ok_or_else(|| missing(ctx, "away bonus cell"))?;

    Ok(MatchRecord {
        season_id: ctx.season_id.clone(),
        day_label: ctx.day_label.clone(),
        date,
        home_team,
        away_team,
        home_score,
        away_score,
        home_bonus,
        away_bonus,
    })
}

/// `"24 - 17"` → `("24", "17")`. Exactly one `-` is accepted.
pub fn split_score(text: &str) -> std::result::Result<(String, String), String> {
    let parts: Vec<&str> = text.trim().split('-').collect();
    match parts.as_slice() {
        [home, away] => Ok((s!(home.trim()), s!(away.trim()))),
        [_] => Err(format!("score `{}` has no '-'", text.trim())),
        _ => Err(format!("score `{}` has {} parts", text.trim(), parts.len())),
    }
}

fn bonus(row: ElementRef<'_>, sel: &Selector) -> Option<String> {
    row.select(sel).next().map(|td| s!(text_of(td).trim_matches('\n')))
}

fn where_(ctx: &DayContext) -> String {
    format!("season {} day {}", ctx.season_id, ctx.day_label)
}

fn missing(ctx: &DayContext, what: &str) -> ScrapeError {
    ScrapeError::Extraction(format!("{}: missing {what}", where_(ctx)))
}
