// src/progress.rs
/// Progress of a scrape run, season by season.
/// Purely observational; the CLI forwards it to the log.
pub trait Progress {
    /// Number of season pages that will be visited.
    fn seasons_planned(&mut self, _total: usize) {}

    /// About to fetch the season page at `path` (relative to the site root).
    fn season_started(&mut self, _path: &str) {}

    /// A season and all of its days are read.
    fn season_done(&mut self, _season_id: &str, _matches: usize) {}

    /// Every season is read; `matches` rows in the final table.
    fn finished(&mut self, _matches: usize) {}
}
