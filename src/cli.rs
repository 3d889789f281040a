// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::{
    config::{
        consts::{DEFAULT_CONFIG_PATH, DEFAULT_FILE, DEFAULT_OUT_DIR, EXPORT_SEP, PREVIEW_ROWS},
        RunOptions, ScrapeConfig,
    },
    core::net::{Fetch, HttpFetcher},
    error::Result,
    file,
    progress::Progress,
    scrape,
    store::ResultTable,
};

/// Scrape rugby league match results into a `|`-separated file.
#[derive(Debug, Parser)]
#[command(name = "lnr_scrape", version, about)]
pub struct Args {
    /// YAML parameters file (keys: fixe, saison_wiki, saison_cols)
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Only scrape the most recent season and do not write the output file
    #[arg(long)]
    pub debug: bool,

    /// Output file name, without extension
    #[arg(long, default_value = DEFAULT_FILE)]
    pub name: String,

    /// Output directory
    #[arg(long, default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            debug: self.debug,
            out_dir: self.out_dir.clone(),
            out_name: self.name.clone(),
        }
    }
}

/// Forwards run progress to the log.
#[derive(Default)]
struct LogProgress {
    total: usize,
    done: usize,
}

impl Progress for LogProgress {
    fn seasons_planned(&mut self, total: usize) {
        self.total = total;
    }
    fn season_started(&mut self, path: &str) {
        info!("[{}/{}] fetching {path}", self.done + 1, self.total);
    }
    fn season_done(&mut self, season_id: &str, matches: usize) {
        self.done += 1;
        info!("[{}/{}] season {season_id} done, {matches} matches", self.done, self.total);
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    crate::log::init(args.verbose);
    run_with(&args)
}

pub fn run_with(args: &Args) -> Result<()> {
    let opts = args.run_options();
    info!("Starting scrape (debug = {})", opts.debug);

    let config = ScrapeConfig::load(&args.config)?;
    let fetcher = HttpFetcher::new()?;
    run_scrape(&config, &opts, &fetcher)?;
    Ok(())
}

/// Scrape, then export unless in debug mode.
/// Returns the written path, or `None` when debug skipped the export.
pub fn run_scrape(
    config: &ScrapeConfig,
    opts: &RunOptions,
    fetcher: &dyn Fetch,
) -> Result<Option<PathBuf>> {
    let mut progress = LogProgress::default();
    let table = scrape::collect_results(config, opts, fetcher, Some(&mut progress))?;

    if opts.debug {
        preview(&table);
        return Ok(None);
    }
    file::export_table(&table, opts).map(Some)
}

fn preview(table: &ResultTable) {
    let rows = table.head(PREVIEW_ROWS);
    let head = crate::csv::rows_to_string(&table.headers, rows, EXPORT_SEP);
    info!("First {} rows:\n{}", rows.len(), head.trim_end());
}
