use colored::Colorize;

use crate::error::Result;
use crate::fmt::amount;
use crate::pipeline::{run_load, LoadOptions};
use crate::settings::Settings;

pub fn run(settings: &Settings, dry_run: bool) -> Result<()> {
    let summary = run_load(settings, LoadOptions { dry_run })?;

    if dry_run {
        println!(
            "{} {} records valid in {} (total {}), nothing inserted",
            "OK:".green().bold(),
            summary.validated,
            settings.input_file.display(),
            amount(summary.total_amount)
        );
        return Ok(());
    }

    println!(
        "{} file loaded successfully: {} records inserted (total {})",
        "OK:".green().bold(),
        summary.inserted,
        amount(summary.total_amount)
    );
    Ok(())
}
