#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Text renderers for analysis reports.
//!
//! Every renderer consumes a finished [`Report`]; numbers are taken from the
//! strings the formatter already produced, except for the JSON and baseline
//! dump outputs which serialize the underlying data.

mod csv;
mod dump;
mod table;

use dmon_report::Report;
use thiserror::Error;

pub use csv::render_csv;
pub use dump::render_dump;
pub use table::{render_table, TableOptions};

/// Errors raised while rendering a report.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The baseline dump needs the averages pseudo-level.
    #[error("baseline dump only works with --average")]
    MissingAverages,
    /// The report could not be encoded as JSON.
    #[error("failed to encode report as JSON")]
    Json(#[from] serde_json::Error),
    /// The baseline profile could not be encoded as TOML.
    #[error("failed to encode baseline profile as TOML")]
    Toml(#[from] toml::ser::Error),
}

/// Renders the complete report as pretty-printed JSON.
pub fn render_json(report: &Report) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Renders one line per advisory flag explaining its code.
#[must_use]
pub fn render_legend() -> String {
    dmon_system_comparator::legend()
        .into_iter()
        .map(|(code, description)| format!("{code}: {description}\n"))
        .collect()
}
