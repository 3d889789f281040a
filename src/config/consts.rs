// src/config/consts.rs

// Parameters file
pub const DEFAULT_CONFIG_PATH: &str = "scraping/scraping_parameters.yml";

// Export
pub const DEFAULT_OUT_DIR: &str = "data";
pub const DEFAULT_FILE: &str = "matchs_results";
pub const EXPORT_EXT: &str = "csv";
pub const EXPORT_SEP: char = '|';

// Debug mode
pub const PREVIEW_ROWS: usize = 5;
