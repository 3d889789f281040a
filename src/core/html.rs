// src/core/html.rs
// Small helpers over `scraper` shared by the page specs.

use scraper::{ElementRef, Selector};

use crate::error::{Result, ScrapeError};

/// Compile a CSS selector. Selectors are literals in the specs, so a failure
/// here means a typo in the code, reported as a parse error rather than a panic.
pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Parse(format!("bad selector `{css}`: {e}")))
}

/// Concatenated text of all descendant text nodes, untouched.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Text of the `n`th (0-based) descendant matching `sel`, if there is one.
pub fn nth_text(el: ElementRef<'_>, sel: &Selector, n: usize) -> Option<String> {
    el.select(sel).nth(n).map(text_of)
}

/// Value of attribute `name` on `el`.
pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}
