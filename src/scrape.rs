// src/scrape.rs
// Season → Day → Match traversal. Strictly sequential; the first error aborts
// the run and nothing partial is returned.

use tracing::{debug, info};

use crate::{
    config::{RunOptions, ScrapeConfig},
    core::net::Fetch,
    error::Result,
    progress::Progress,
    specs,
    store::{Day, DayContext, MatchRecord, ResultTable, Season, SeasonResults},
};

/// Scrape every configured season (only the last one in debug) and flatten
/// all matches into one table with the configured header.
pub fn collect_results(
    config: &ScrapeConfig,
    opts: &RunOptions,
    fetcher: &dyn Fetch,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ResultTable> {
    let seasons = config.seasons_for(opts.debug);

    info!("The scraping will be performed over {} seasons", seasons.len());
    if let Some(p) = progress.as_deref_mut() {
        p.seasons_planned(seasons.len());
    }

    let mut records: Vec<MatchRecord> = Vec::new();
    for path in seasons {
        if let Some(p) = progress.as_deref_mut() {
            p.season_started(path);
        }
        let season = fetch_season(config, fetcher, &config.url_for(path))?;
        let id = season.season_id.as_deref().unwrap_or("?");
        let matches = season.records.len();

        info!("Season {id} loaded ({matches} matches)");
        if let Some(p) = progress.as_deref_mut() {
            p.season_done(id, matches);
        }
        records.extend(season.records);
    }

    let table = ResultTable::from_records(&config.column_names, &records)?;
    info!("The results table concatenates {} games", table.row_count());
    if let Some(p) = progress.as_deref_mut() {
        p.finished(table.row_count());
    }
    Ok(table)
}

/// Fetch one season page, discover its days, then fetch every day in
/// calendar order.
pub fn fetch_season(
    config: &ScrapeConfig,
    fetcher: &dyn Fetch,
    url: &str,
) -> Result<SeasonResults> {
    let html = fetcher.get(url)?;
    let Season { season_id, days } = specs::season::parse_calendar(&html)?;
    debug!(url, season = ?season_id, days = days.len(), "calendar read");

    let mut records = Vec::new();
    for link in days {
        let ctx = DayContext {
            season_id: season_id.clone().unwrap_or_default(),
            day_label: link.label,
        };
        let day = fetch_day(fetcher, &config.url_for(&link.path), &ctx)?;
        debug!(season = %day.season_id, day = %day.label, matches = day.rows.len(), "day read");
        records.extend(day.rows);
    }

    Ok(SeasonResults { season_id, records })
}

/// Fetch one day page and read all of its matches.
pub fn fetch_day(fetcher: &dyn Fetch, url: &str, ctx: &DayContext) -> Result<Day> {
    let html = fetcher.get(url)?;
    let rows = specs::day::parse_day(&html, ctx)?;

    Ok(Day {
        season_id: ctx.season_id.clone(),
        label: ctx.day_label.clone(),
        rows,
    })
}
