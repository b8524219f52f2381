use tracing::{info, warn};

use crate::db::get_existing_connection;
use crate::error::Result;
use crate::loader::load_records;
use crate::parser::parse_all;
use crate::reader::read_lines;
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Validate only; never open the database.
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadSummary {
    pub validated: usize,
    pub inserted: usize,
    pub total_amount: f64,
}

/// Read, validate and load the configured file.
///
/// Every line is validated before the database is opened, so a missing
/// file or a bad line never touches the connection.
pub fn run_load(settings: &Settings, opts: LoadOptions) -> Result<LoadSummary> {
    info!(file = %settings.input_file.display(), "reading debt file");
    let lines = read_lines(&settings.input_file)?;
    let records = parse_all(&lines)?;
    let total_amount = records.iter().map(|r| r.amount).sum();

    let mut summary = LoadSummary {
        validated: records.len(),
        inserted: 0,
        total_amount,
    };

    if opts.dry_run {
        info!(validated = summary.validated, "dry run, skipping database");
        return Ok(summary);
    }
    if records.is_empty() {
        warn!("no records in input file, nothing to load");
        return Ok(summary);
    }

    let mut conn = get_existing_connection(&settings.database)?;
    summary.inserted = load_records(&mut conn, &records)?;
    Ok(summary)
}
