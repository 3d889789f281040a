// src/config/params.rs
use std::path::{Path, PathBuf};

use ::config::{Config, File, FileFormat};
use serde::Deserialize;
use tracing::debug;

use super::consts::{DEFAULT_FILE, DEFAULT_OUT_DIR};
use crate::error::{Result, ScrapeError};
use crate::store::MatchRecord;

/// Scraping parameters, loaded once from the YAML file and never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ScrapeConfig {
    /// Site root every season and day path is appended to.
    #[serde(rename = "fixe")]
    pub base_url: String,

    /// Relative season page paths, oldest first.
    #[serde(rename = "saison_wiki")]
    pub season_paths: Vec<String>,

    /// Output header, one name per `MatchRecord` field.
    #[serde(rename = "saison_cols")]
    pub column_names: Vec<String>,
}

impl ScrapeConfig {
    /// Read and validate the parameters file.
    ///
    /// Fails with `ScrapeError::Config` when the file is missing, is not YAML,
    /// lacks one of `fixe` / `saison_wiki` / `saison_cols`, or when the column
    /// list does not match the record width. No defaults are filled in.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Yaml).required(true))
            .build()
            .map_err(|e| ScrapeError::Config(format!("{}: {e}", path.display())))?;

        let params: ScrapeConfig = settings
            .try_deserialize()
            .map_err(|e| ScrapeError::Config(format!("{}: {e}", path.display())))?;

        params.validate()?;
        debug!(
            path = %path.display(),
            seasons = params.season_paths.len(),
            "parameters loaded"
        );
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if self.column_names.len() != MatchRecord::FIELD_COUNT {
            return Err(ScrapeError::Config(format!(
                "saison_cols must list {} columns, found {}",
                MatchRecord::FIELD_COUNT,
                self.column_names.len()
            )));
        }
        Ok(())
    }

    /// Absolute URL for a path relative to the site root.
    pub fn url_for(&self, path: &str) -> String {
        join!(&self.base_url, path)
    }

    /// Season paths actually visited: all of them, or only the most recent in debug.
    pub fn seasons_for(&self, debug: bool) -> &[String] {
        if debug {
            let n = self.season_paths.len();
            &self.season_paths[n.saturating_sub(1)..]
        } else {
            &self.season_paths
        }
    }
}

/// Per-run switches that do not come from the parameters file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Only scrape the last configured season and skip the export.
    pub debug: bool,
    pub out_dir: PathBuf,
    /// Output file name without extension.
    pub out_name: String,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            debug: false,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            out_name: s!(DEFAULT_FILE),
        }
    }
}
