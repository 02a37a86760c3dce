//! Output formatters

pub mod json;
pub mod terminal;

use crate::OutputFormat;
use anyhow::Result;
use codemap_core::Report;
use serde::Serialize;

/// Print `report` to stdout in the requested format
pub fn emit<T: Serialize>(
    report: &Report<T>,
    format: OutputFormat,
    terminal: fn(&Report<T>) -> String,
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", json::render(report)?),
        OutputFormat::Terminal => print!("{}", terminal(report)),
    }
    Ok(())
}
