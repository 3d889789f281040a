// tests/common/mod.rs
//
// In-memory site: canned season/day pages served by URL, with a request log.
//
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use lnr_scrape::config::ScrapeConfig;
use lnr_scrape::core::net::Fetch;
use lnr_scrape::ScrapeError;

pub const BASE: &str = "https://www.lnr.fr";

#[derive(Default)]
pub struct FakeSite {
    pages: HashMap<String, String>,
    pub requests: RefCell<Vec<String>>,
}

impl FakeSite {
    pub fn page(mut self, path: &str, html: String) -> Self {
        self.pages.insert(format!("{BASE}{path}"), html);
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Fetch for FakeSite {
    fn get(&self, url: &str) -> Result<String, ScrapeError> {
        self.requests.borrow_mut().push(url.to_string());
        self.pages.get(url).cloned().ok_or_else(|| ScrapeError::Network {
            url: url.to_string(),
            reason: "404 Not Found".to_string(),
        })
    }
}

pub fn columns() -> Vec<String> {
    [
        "saison", "journee", "date", "equipe_dom", "equipe_ext",
        "score_dom", "score_ext", "bonus_dom", "bonus_ext",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

pub fn config(season_paths: &[&str]) -> ScrapeConfig {
    ScrapeConfig {
        base_url: BASE.to_string(),
        season_paths: season_paths.iter().map(|s| s.to_string()).collect(),
        column_names: columns(),
    }
}

/// Season page whose calendar holds an "all" link plus one link per day.
pub fn season_page(season: &str, days: &[(&str, &str)]) -> String {
    let mut entries = format!(
        r#"<span class="field-content"><a href="/calendrier?saison={season}&day=all" data-title="Top 14 {season} - Toutes les journées">Toutes</a></span>"#
    );
    for (path, ordinal) in days {
        entries.push_str(&format!(
            r#"<span class="field-content"><a href="{path}" data-title="Top 14 {season} - {ordinal} journée">{ordinal}</a></span>"#
        ));
    }
    format!(
        r#"<html><body>
<section class="block block-lnr-custom block-lnr-custom-calendar-results-filter">{entries}</section>
</body></html>"#
    )
}

/// Day page with one row per (home, away, score).
pub fn day_page(date: &str, matches: &[(&str, &str, &str)]) -> String {
    let rows: String = matches
        .iter()
        .map(|(home, away, score)| {
            format!(
                r#"<tr class="info-line after">
<td><span class="format-full">{date}</span></td>
<td><span class="format-full">{home}</span></td>
<td class="cell-score">{score}</td>
<td class="cell-bonus-a">
</td>
<td class="cell-bonus-b">
BD</td>
<td><span class="format-full">{away}</span></td>
</tr>"#
            )
        })
        .collect();
    format!(
        r#"<html><body><div class="day-results-table"><table>{rows}</table></div></body></html>"#
    )
}
