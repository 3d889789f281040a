// src/config/mod.rs
pub mod consts;
pub mod params;

pub use params::{RunOptions, ScrapeConfig};
