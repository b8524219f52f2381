use colored::Colorize;
use tracing::info;

use crate::db::get_existing_connection;
use crate::error::Result;
use crate::fmt::{amount, due_date};
use crate::parser::parse_record;
use crate::reports::{delete_debt, insert_debt, update_debt};
use crate::settings::Settings;

pub fn add(settings: &Settings, record: &str) -> Result<()> {
    let debt = parse_record(record)?;
    let conn = get_existing_connection(&settings.database)?;
    insert_debt(&conn, &debt)?;
    info!(debt_id = %debt.debt_id, "debt added");
    println!(
        "{} added debt {} for {} ({}, due {})",
        "OK:".green().bold(),
        debt.debt_id,
        debt.client_id,
        amount(debt.amount),
        due_date(debt.due_date)
    );
    Ok(())
}

/// The record's `id_deuda` selects the row to replace.
pub fn update(settings: &Settings, record: &str) -> Result<()> {
    let debt = parse_record(record)?;
    let conn = get_existing_connection(&settings.database)?;
    update_debt(&conn, &debt)?;
    info!(debt_id = %debt.debt_id, "debt updated");
    println!(
        "{} updated debt {} ({}, due {})",
        "OK:".green().bold(),
        debt.debt_id,
        amount(debt.amount),
        due_date(debt.due_date)
    );
    Ok(())
}

pub fn delete(settings: &Settings, debt_id: &str) -> Result<()> {
    let conn = get_existing_connection(&settings.database)?;
    delete_debt(&conn, debt_id)?;
    info!(debt_id, "debt deleted");
    println!("{} deleted debt {}", "OK:".green().bold(), debt_id);
    Ok(())
}
