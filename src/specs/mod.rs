// src/specs/mod.rs
//! # Page specs
//!
//! One module per kind of page on the federation site. Each spec encodes
//! *where the data lives in the HTML* and *how to read it*, and nothing else.
//!
//! ## What lives here
//! - **Pure HTML parsing** of already-downloaded pages (no network).
//! - **Selector choice** for each page (calendar filter block, results table,
//!   match cells).
//! - **Field shaping** into `store` types (`Season`, `MatchRecord`).
//!
//! ## What does **not** live here
//! - Fetching pages and walking Season → Day → Match (`scrape`).
//! - Export formatting (`file`, `csv`).
//!
//! ## Typical call chain
//! ```text
//! scrape::collect_results → scrape::fetch_season → specs::season::parse_calendar
//!                                ↘ scrape::fetch_day → specs::day::parse_day
//!                                                          ↘ specs::match_row::extract
//! ```
//!
//! ## Conventions
//! - The site markup is matched positionally; a missing element is an error,
//!   never a silently empty field.
//! - Specs are testable offline against inline HTML fixtures.
pub mod day;
pub mod match_row;
pub mod season;
